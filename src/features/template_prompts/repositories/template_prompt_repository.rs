//! Template Prompt Repository Port
//!
//! Persistence contract used by the record service and the prompt resolver.

use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::template_prompts::models::{
    TemplatePrompt, TemplatePromptDraft, TemplatePromptFilter,
};

/// Repository interface for template prompts.
///
/// Each call is one atomic unit of work. Methods named `*_owned` or taking an `oid`
/// only ever see rows of that tenant.
#[async_trait]
pub trait TemplatePromptRepository: Send + Sync {
    /// One page of the tenant's prompts matching `filter`, newest first, plus the total match count
    async fn list(
        &self,
        oid: i64,
        filter: &TemplatePromptFilter,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<TemplatePrompt>, i64)>;

    /// Insert a new prompt; id and both timestamps are assigned by the store
    async fn insert(&self, oid: i64, draft: &TemplatePromptDraft) -> Result<TemplatePrompt>;

    /// Find a prompt by id regardless of tenant. Only for ownership checks.
    async fn find_by_id(&self, id: i64) -> Result<Option<TemplatePrompt>>;

    /// Find a prompt by id within the tenant
    async fn find_owned(&self, id: i64, oid: i64) -> Result<Option<TemplatePrompt>>;

    /// Find the most recently created prompt with exactly this name within the tenant
    async fn find_owned_by_name(&self, name: &str, oid: i64) -> Result<Option<TemplatePrompt>>;

    /// Overwrite all mutable fields and restamp `update_time`. `None` when no such row is owned by `oid`.
    async fn update(
        &self,
        id: i64,
        oid: i64,
        draft: &TemplatePromptDraft,
    ) -> Result<Option<TemplatePrompt>>;

    /// Toggle `enabled` and restamp `update_time`. `None` when no such row is owned by `oid`.
    async fn set_enabled(&self, id: i64, oid: i64, enabled: bool)
        -> Result<Option<TemplatePrompt>>;

    /// Delete the listed ids owned by `oid`, returning how many rows were removed
    async fn delete_owned(&self, ids: &[i64], oid: i64) -> Result<u64>;

    /// All enabled prompts of one type for the tenant, in id order
    async fn list_enabled_by_type(&self, oid: i64, prompt_type: &str)
        -> Result<Vec<TemplatePrompt>>;
}
