use axum::{extract::Path, extract::Query, extract::State, Json};
use std::sync::Arc;
use validator::Validate;

use crate::core::context::TenantContext;
use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::template_prompts::dtos::{
    DeleteTemplatePromptsResponseDto, PromptTypeDefinition, ResolvePromptQuery,
    ResolvedPromptDto, TemplatePromptPageDto, TemplatePromptQueryParams,
    TemplatePromptResponseDto, UpsertTemplatePromptDto,
};
use crate::features::template_prompts::registry::get_all_prompt_types;
use crate::features::template_prompts::services::{PromptResolver, TemplatePromptService};
use crate::shared::i18n::{MessageKey, Trans};
use crate::shared::types::{ApiResponse, Meta, PageRequest};

/// List the caller's template prompts, one page at a time
#[utoipa::path(
    get,
    path = "/system/template-prompt/page/{current_page}/{page_size}",
    params(
        ("current_page" = i64, Path, description = "Page number (1-indexed)"),
        ("page_size" = i64, Path, description = "Items per page (1-100)"),
        TemplatePromptQueryParams
    ),
    responses(
        (status = 200, description = "Template prompts retrieved successfully", body = ApiResponse<TemplatePromptPageDto>),
        (status = 401, description = "Missing tenant context")
    ),
    tag = "template-prompts"
)]
pub async fn page_template_prompts(
    tenant: TenantContext,
    State(service): State<Arc<TemplatePromptService>>,
    Path((current_page, page_size)): Path<(i64, i64)>,
    Query(params): Query<TemplatePromptQueryParams>,
) -> Result<Json<ApiResponse<TemplatePromptPageDto>>> {
    let page = service
        .list(tenant.oid, &params, PageRequest::new(current_page, page_size))
        .await?;
    let total = page.total_count;
    Ok(Json(ApiResponse::success(
        Some(page),
        None,
        Some(Meta { total }),
    )))
}

/// Create a template prompt, or update it when `id` is set
#[utoipa::path(
    put,
    path = "/system/template-prompt",
    request_body = UpsertTemplatePromptDto,
    responses(
        (status = 200, description = "Template prompt saved successfully", body = ApiResponse<TemplatePromptResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Template prompt belongs to another tenant"),
        (status = 404, description = "Template prompt not found")
    ),
    tag = "template-prompts"
)]
pub async fn upsert_template_prompt(
    tenant: TenantContext,
    trans: Trans,
    State(service): State<Arc<TemplatePromptService>>,
    AppJson(dto): AppJson<UpsertTemplatePromptDto>,
) -> Result<Json<ApiResponse<TemplatePromptResponseDto>>> {
    let prompt = match dto.id {
        Some(id) => service.update(id, tenant.oid, dto, &trans).await?,
        None => service.create(tenant.oid, dto, &trans).await?,
    };
    Ok(Json(ApiResponse::success(Some(prompt), None, None)))
}

/// Delete template prompts by id (ids of other tenants are ignored)
#[utoipa::path(
    delete,
    path = "/system/template-prompt",
    request_body = Vec<i64>,
    responses(
        (status = 200, description = "Template prompts deleted", body = ApiResponse<DeleteTemplatePromptsResponseDto>)
    ),
    tag = "template-prompts"
)]
pub async fn delete_template_prompts(
    tenant: TenantContext,
    State(service): State<Arc<TemplatePromptService>>,
    AppJson(ids): AppJson<Vec<i64>>,
) -> Result<Json<ApiResponse<DeleteTemplatePromptsResponseDto>>> {
    let deleted = service.delete(&ids, tenant.oid).await?;
    Ok(Json(ApiResponse::success(
        Some(DeleteTemplatePromptsResponseDto { deleted }),
        None,
        None,
    )))
}

/// Enable or disable a template prompt
#[utoipa::path(
    get,
    path = "/system/template-prompt/{id}/enable/{enabled}",
    params(
        ("id" = i64, Path, description = "Template prompt ID"),
        ("enabled" = bool, Path, description = "Target state")
    ),
    responses(
        (status = 200, description = "Template prompt updated", body = ApiResponse<TemplatePromptResponseDto>),
        (status = 403, description = "Template prompt belongs to another tenant"),
        (status = 404, description = "Template prompt not found")
    ),
    tag = "template-prompts"
)]
pub async fn enable_template_prompt(
    tenant: TenantContext,
    trans: Trans,
    State(service): State<Arc<TemplatePromptService>>,
    Path((id, enabled)): Path<(i64, bool)>,
) -> Result<Json<ApiResponse<TemplatePromptResponseDto>>> {
    let prompt = service.set_enabled(id, tenant.oid, enabled, &trans).await?;
    Ok(Json(ApiResponse::success(Some(prompt), None, None)))
}

/// Get a template prompt by ID
#[utoipa::path(
    get,
    path = "/system/template-prompt/{id}",
    params(
        ("id" = i64, Path, description = "Template prompt ID")
    ),
    responses(
        (status = 200, description = "Template prompt retrieved successfully", body = ApiResponse<TemplatePromptResponseDto>),
        (status = 404, description = "Template prompt not found")
    ),
    tag = "template-prompts"
)]
pub async fn get_template_prompt(
    tenant: TenantContext,
    trans: Trans,
    State(service): State<Arc<TemplatePromptService>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<TemplatePromptResponseDto>>> {
    let prompt = service
        .get_by_id(id, tenant.oid)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(trans.text(MessageKey::TemplatePromptNotFound).to_string())
        })?;
    Ok(Json(ApiResponse::success(Some(prompt), None, None)))
}

/// Get a template prompt by its exact name
#[utoipa::path(
    get,
    path = "/system/template-prompt/name/{name}",
    params(
        ("name" = String, Path, description = "Template prompt name")
    ),
    responses(
        (status = 200, description = "Template prompt retrieved successfully", body = ApiResponse<TemplatePromptResponseDto>),
        (status = 404, description = "Template prompt not found")
    ),
    tag = "template-prompts"
)]
pub async fn get_template_prompt_by_name(
    tenant: TenantContext,
    trans: Trans,
    State(service): State<Arc<TemplatePromptService>>,
    Path(name): Path<String>,
) -> Result<Json<ApiResponse<TemplatePromptResponseDto>>> {
    let prompt = service
        .get_by_name(&name, tenant.oid)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(trans.text(MessageKey::TemplatePromptNotFound).to_string())
        })?;
    Ok(Json(ApiResponse::success(Some(prompt), None, None)))
}

/// List the recommended prompt types
#[utoipa::path(
    get,
    path = "/system/template-prompt/types",
    responses(
        (status = 200, description = "Prompt types retrieved successfully", body = ApiResponse<Vec<PromptTypeDefinition>>)
    ),
    tag = "template-prompts"
)]
pub async fn list_prompt_types() -> Json<ApiResponse<Vec<PromptTypeDefinition>>> {
    Json(ApiResponse::success(Some(get_all_prompt_types()), None, None))
}

/// Resolve the merged custom prompt for a type and optional data source
#[utoipa::path(
    get,
    path = "/system/template-prompt/resolve",
    params(ResolvePromptQuery),
    responses(
        (status = 200, description = "Custom prompt resolved", body = ApiResponse<ResolvedPromptDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "template-prompts"
)]
pub async fn resolve_template_prompt(
    tenant: TenantContext,
    State(resolver): State<Arc<PromptResolver>>,
    Query(query): Query<ResolvePromptQuery>,
) -> Result<Json<ApiResponse<ResolvedPromptDto>>> {
    query
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let content = resolver
        .resolve(&query.prompt_type, tenant.oid, query.datasource_id)
        .await?;
    Ok(Json(ApiResponse::success(
        Some(ResolvedPromptDto {
            prompt_type: query.prompt_type,
            datasource_id: query.datasource_id,
            content,
        }),
        None,
        None,
    )))
}
