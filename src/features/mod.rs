pub mod template_prompts;
