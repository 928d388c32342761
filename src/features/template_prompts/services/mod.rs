pub mod prompt_resolver;
pub mod template_prompt_service;

pub use prompt_resolver::PromptResolver;
pub use template_prompt_service::TemplatePromptService;
