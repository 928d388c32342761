pub mod template_prompt_dto;

pub use crate::features::template_prompts::registry::PromptTypeDefinition;
pub use template_prompt_dto::{
    DeleteTemplatePromptsResponseDto, ResolvePromptQuery, ResolvedPromptDto,
    TemplatePromptPageDto, TemplatePromptQueryParams, TemplatePromptResponseDto,
    UpsertTemplatePromptDto,
};
