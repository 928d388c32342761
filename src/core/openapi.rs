use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::template_prompts::dtos as template_prompts_dtos;
use crate::features::template_prompts::handlers::template_prompt_handler;
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        template_prompt_handler::page_template_prompts,
        template_prompt_handler::upsert_template_prompt,
        template_prompt_handler::delete_template_prompts,
        template_prompt_handler::enable_template_prompt,
        template_prompt_handler::get_template_prompt,
        template_prompt_handler::get_template_prompt_by_name,
        template_prompt_handler::list_prompt_types,
        template_prompt_handler::resolve_template_prompt,
    ),
    components(
        schemas(
            Meta,
            template_prompts_dtos::UpsertTemplatePromptDto,
            template_prompts_dtos::TemplatePromptResponseDto,
            template_prompts_dtos::TemplatePromptPageDto,
            template_prompts_dtos::DeleteTemplatePromptsResponseDto,
            template_prompts_dtos::PromptTypeDefinition,
            template_prompts_dtos::ResolvedPromptDto,
            ApiResponse<template_prompts_dtos::TemplatePromptResponseDto>,
            ApiResponse<template_prompts_dtos::TemplatePromptPageDto>,
            ApiResponse<template_prompts_dtos::DeleteTemplatePromptsResponseDto>,
            ApiResponse<Vec<template_prompts_dtos::PromptTypeDefinition>>,
            ApiResponse<template_prompts_dtos::ResolvedPromptDto>,
        )
    ),
    tags(
        (name = "template-prompts", description = "Tenant-scoped custom prompt fragments and their resolution"),
    ),
    info(
        title = "Template Prompt API",
        version = "0.1.0",
        description = "API documentation for the template prompt service",
    )
)]
pub struct ApiDoc;

/// Documents the tenant header as an API key scheme
pub struct TenantHeaderAddon {
    pub header: String,
}

impl Modify for TenantHeaderAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "tenant_header",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(self.header.clone()))),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_template_prompt_paths() {
        let mut openapi = ApiDoc::openapi();
        TenantHeaderAddon {
            header: "x-tenant-id".to_string(),
        }
        .modify(&mut openapi);

        assert!(openapi
            .paths
            .paths
            .contains_key("/system/template-prompt/{id}/enable/{enabled}"));
        assert!(openapi
            .paths
            .paths
            .contains_key("/system/template-prompt/resolve"));
        let components = openapi.components.expect("components");
        assert!(components.security_schemes.contains_key("tenant_header"));
    }
}
