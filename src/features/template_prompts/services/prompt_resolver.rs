//! Resolution of the effective custom prompt for a (type, tenant, data source) query.
//!
//! Scope rules:
//! - with a data source: prompts scoped to it come first, then generic prompts
//! - without a data source: generic prompts only, so a scoped customization never
//!   leaks into a context it was not written for

use std::sync::Arc;

use crate::core::error::Result;
use crate::features::template_prompts::models::TemplatePrompt;
use crate::features::template_prompts::repositories::TemplatePromptRepository;
use crate::shared::constants::PROMPT_SEPARATOR;

/// Keep the enabled prompts visible for `datasource_id` and order them by precedence.
///
/// Input order is preserved within the same scope.
pub fn select_in_scope(
    prompts: Vec<TemplatePrompt>,
    datasource_id: Option<i64>,
) -> Vec<TemplatePrompt> {
    let mut selected: Vec<TemplatePrompt> = prompts
        .into_iter()
        .filter(|p| p.enabled)
        .filter(|p| match datasource_id {
            Some(id) => p.is_generic() || p.datasource_id == Some(id),
            None => p.is_generic(),
        })
        .collect();

    if datasource_id.is_some() {
        // Descending on Option<i64> puts every Some before None
        selected.sort_by(|a, b| b.datasource_id.cmp(&a.datasource_id));
    }

    selected
}

/// Join trimmed, non-blank contents with a blank line.
///
/// The result starts with the separator so it can be appended straight onto a base
/// prompt; it is empty when nothing contributes.
pub fn merge_contents(prompts: &[TemplatePrompt]) -> String {
    let parts: Vec<&str> = prompts
        .iter()
        .map(|p| p.content.trim())
        .filter(|c| !c.is_empty())
        .collect();

    if parts.is_empty() {
        return String::new();
    }

    format!("{}{}", PROMPT_SEPARATOR, parts.join(PROMPT_SEPARATOR))
}

/// Read-only resolver over the template prompt store
pub struct PromptResolver {
    repository: Arc<dyn TemplatePromptRepository>,
}

impl std::fmt::Debug for PromptResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PromptResolver")
            .field("repository", &"<TemplatePromptRepository>")
            .finish()
    }
}

impl PromptResolver {
    pub fn new(repository: Arc<dyn TemplatePromptRepository>) -> Self {
        Self { repository }
    }

    /// Merged custom prompt for the query, or an empty string when no prompt applies.
    ///
    /// Only store failures are reported as errors.
    pub async fn resolve(
        &self,
        prompt_type: &str,
        oid: i64,
        datasource_id: Option<i64>,
    ) -> Result<String> {
        let candidates = self
            .repository
            .list_enabled_by_type(oid, prompt_type)
            .await?;
        let selected = select_in_scope(candidates, datasource_id);
        let merged = merge_contents(&selected);

        tracing::debug!(
            tenant_id = oid,
            prompt_type,
            datasource_id,
            matched = selected.len(),
            merged_len = merged.len(),
            "Resolved template prompts"
        );

        Ok(merged)
    }

    /// `base` with the resolved custom prompt appended
    #[allow(dead_code)]
    pub async fn apply(
        &self,
        base: &str,
        prompt_type: &str,
        oid: i64,
        datasource_id: Option<i64>,
    ) -> Result<String> {
        let custom = self.resolve(prompt_type, oid, datasource_id).await?;
        Ok(format!("{}{}", base, custom))
    }
}
