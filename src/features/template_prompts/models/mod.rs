pub mod template_prompt;

pub use template_prompt::{TemplatePrompt, TemplatePromptDraft, TemplatePromptFilter};
