use std::sync::Arc;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::template_prompts::dtos::{
    TemplatePromptPageDto, TemplatePromptQueryParams, TemplatePromptResponseDto,
    UpsertTemplatePromptDto,
};
use crate::features::template_prompts::models::{TemplatePromptDraft, TemplatePromptFilter};
use crate::features::template_prompts::registry::is_registered_prompt_type;
use crate::features::template_prompts::repositories::TemplatePromptRepository;
use crate::shared::i18n::{MessageKey, Trans};
use crate::shared::types::PageRequest;

fn validated_draft(dto: UpsertTemplatePromptDto) -> Result<TemplatePromptDraft> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    if !is_registered_prompt_type(&dto.prompt_type) {
        tracing::debug!(
            "Prompt type '{}' is not in the registry, accepting as custom type",
            dto.prompt_type
        );
    }

    Ok(dto.into_draft())
}

fn not_found(trans: &Trans, id: i64) -> AppError {
    AppError::NotFound(format!(
        "{} (id={})",
        trans.text(MessageKey::TemplatePromptNotFound),
        id
    ))
}

/// Tenant-isolated CRUD over template prompts
pub struct TemplatePromptService {
    repository: Arc<dyn TemplatePromptRepository>,
}

impl std::fmt::Debug for TemplatePromptService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplatePromptService")
            .field("repository", &"<TemplatePromptRepository>")
            .finish()
    }
}

impl TemplatePromptService {
    pub fn new(repository: Arc<dyn TemplatePromptRepository>) -> Self {
        Self { repository }
    }

    /// List the tenant's prompts with filters, newest first
    pub async fn list(
        &self,
        oid: i64,
        params: &TemplatePromptQueryParams,
        page: PageRequest,
    ) -> Result<TemplatePromptPageDto> {
        let filter = TemplatePromptFilter::new(
            params.prompt_type.as_deref(),
            params.name.as_deref(),
            params.datasource_id,
        );

        let (prompts, total_count) = self
            .repository
            .list(oid, &filter, page.limit(), page.offset())
            .await?;

        Ok(TemplatePromptPageDto {
            current_page: page.page,
            page_size: page.page_size,
            total_count,
            total_pages: page.total_pages(total_count),
            data: prompts
                .into_iter()
                .map(TemplatePromptResponseDto::from)
                .collect(),
        })
    }

    /// Create a new prompt owned by `oid`
    pub async fn create(
        &self,
        oid: i64,
        dto: UpsertTemplatePromptDto,
        _trans: &Trans,
    ) -> Result<TemplatePromptResponseDto> {
        let draft = validated_draft(dto)?;
        let prompt = self.repository.insert(oid, &draft).await?;

        tracing::info!(
            tenant_id = oid,
            id = prompt.id,
            prompt_type = %prompt.prompt_type,
            "Template prompt created"
        );

        Ok(TemplatePromptResponseDto::from(prompt))
    }

    /// Overwrite all mutable fields of a prompt owned by `oid`
    pub async fn update(
        &self,
        id: i64,
        oid: i64,
        dto: UpsertTemplatePromptDto,
        trans: &Trans,
    ) -> Result<TemplatePromptResponseDto> {
        self.ensure_owned(id, oid, trans).await?;
        let draft = validated_draft(dto)?;

        let prompt = self
            .repository
            .update(id, oid, &draft)
            .await?
            .ok_or_else(|| not_found(trans, id))?;

        tracing::info!(tenant_id = oid, id, "Template prompt updated");

        Ok(TemplatePromptResponseDto::from(prompt))
    }

    /// Enable or disable a prompt owned by `oid`
    pub async fn set_enabled(
        &self,
        id: i64,
        oid: i64,
        enabled: bool,
        trans: &Trans,
    ) -> Result<TemplatePromptResponseDto> {
        self.ensure_owned(id, oid, trans).await?;

        let prompt = self
            .repository
            .set_enabled(id, oid, enabled)
            .await?
            .ok_or_else(|| not_found(trans, id))?;

        tracing::info!(tenant_id = oid, id, enabled, "Template prompt toggled");

        Ok(TemplatePromptResponseDto::from(prompt))
    }

    /// Best-effort bulk delete. Ids that do not exist or belong to another tenant are skipped.
    pub async fn delete(&self, ids: &[i64], oid: i64) -> Result<u64> {
        let deleted = self.repository.delete_owned(ids, oid).await?;

        tracing::info!(
            tenant_id = oid,
            requested = ids.len(),
            deleted,
            "Template prompts deleted"
        );

        Ok(deleted)
    }

    /// Get a prompt by id. Prompts of other tenants look exactly like missing ones.
    pub async fn get_by_id(&self, id: i64, oid: i64) -> Result<Option<TemplatePromptResponseDto>> {
        let prompt = self.repository.find_owned(id, oid).await?;
        Ok(prompt.map(TemplatePromptResponseDto::from))
    }

    /// Get a prompt by exact name, with the same tenant isolation as [`Self::get_by_id`]
    pub async fn get_by_name(
        &self,
        name: &str,
        oid: i64,
    ) -> Result<Option<TemplatePromptResponseDto>> {
        let prompt = self.repository.find_owned_by_name(name, oid).await?;
        Ok(prompt.map(TemplatePromptResponseDto::from))
    }

    async fn ensure_owned(&self, id: i64, oid: i64, trans: &Trans) -> Result<()> {
        let prompt = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(trans, id))?;

        if prompt.oid != oid {
            tracing::warn!(
                tenant_id = oid,
                id,
                "Rejected modification of a template prompt owned by another tenant"
            );
            return Err(AppError::Forbidden(
                trans.text(MessageKey::TemplatePromptForbidden).to_string(),
            ));
        }

        Ok(())
    }
}
