pub mod postgres;
pub mod template_prompt_repository;

#[cfg(test)]
pub mod memory;

#[cfg(test)]
pub use memory::InMemoryTemplatePromptRepository;
pub use postgres::PgTemplatePromptRepository;
pub use template_prompt_repository::TemplatePromptRepository;
