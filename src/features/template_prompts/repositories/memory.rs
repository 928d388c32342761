use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::core::error::Result;
use crate::features::template_prompts::models::{
    TemplatePrompt, TemplatePromptDraft, TemplatePromptFilter,
};
use crate::features::template_prompts::repositories::TemplatePromptRepository;

#[derive(Default)]
struct State {
    rows: Vec<TemplatePrompt>,
    next_id: i64,
}

/// In-memory store with the same observable semantics as the PostgreSQL one
#[derive(Default)]
pub struct InMemoryTemplatePromptRepository {
    state: RwLock<State>,
}

impl InMemoryTemplatePromptRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every stored row regardless of tenant
    pub async fn all(&self) -> Vec<TemplatePrompt> {
        self.state.read().await.rows.clone()
    }
}

// Newest first, id breaks ties between rows created in the same instant
fn newest_first(a: &TemplatePrompt, b: &TemplatePrompt) -> std::cmp::Ordering {
    b.create_time
        .cmp(&a.create_time)
        .then_with(|| b.id.cmp(&a.id))
}

// Mirrors the WHERE clause of the PostgreSQL listing query
fn filter_matches(filter: &TemplatePromptFilter, prompt: &TemplatePrompt) -> bool {
    if let Some(ref prompt_type) = filter.prompt_type {
        if &prompt.prompt_type != prompt_type {
            return false;
        }
    }

    if let Some(ref needle) = filter.name {
        let needle = needle.to_lowercase();
        let matched = prompt
            .name
            .as_deref()
            .is_some_and(|name| name.to_lowercase().contains(&needle));
        if !matched {
            return false;
        }
    }

    match filter.datasource_id {
        Some(id) => prompt.datasource_id.is_none() || prompt.datasource_id == Some(id),
        None => true,
    }
}

#[async_trait]
impl TemplatePromptRepository for InMemoryTemplatePromptRepository {
    async fn list(
        &self,
        oid: i64,
        filter: &TemplatePromptFilter,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<TemplatePrompt>, i64)> {
        let state = self.state.read().await;
        let mut matched: Vec<TemplatePrompt> = state
            .rows
            .iter()
            .filter(|p| p.oid == oid && filter_matches(filter, p))
            .cloned()
            .collect();
        matched.sort_by(newest_first);

        let total = matched.len() as i64;
        let page = matched
            .into_iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .collect();

        Ok((page, total))
    }

    async fn insert(&self, oid: i64, draft: &TemplatePromptDraft) -> Result<TemplatePrompt> {
        let mut state = self.state.write().await;
        state.next_id += 1;
        let now = Utc::now();

        let prompt = TemplatePrompt {
            id: state.next_id,
            oid,
            prompt_type: draft.prompt_type.clone(),
            name: draft.name.clone(),
            content: draft.content.clone(),
            datasource_id: draft.datasource_id,
            enabled: draft.enabled,
            create_time: now,
            update_time: now,
        };
        state.rows.push(prompt.clone());
        Ok(prompt)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<TemplatePrompt>> {
        let state = self.state.read().await;
        Ok(state.rows.iter().find(|p| p.id == id).cloned())
    }

    async fn find_owned(&self, id: i64, oid: i64) -> Result<Option<TemplatePrompt>> {
        let state = self.state.read().await;
        Ok(state
            .rows
            .iter()
            .find(|p| p.id == id && p.oid == oid)
            .cloned())
    }

    async fn find_owned_by_name(&self, name: &str, oid: i64) -> Result<Option<TemplatePrompt>> {
        let state = self.state.read().await;
        Ok(state
            .rows
            .iter()
            .filter(|p| p.oid == oid && p.name.as_deref() == Some(name))
            .min_by(|a, b| newest_first(a, b))
            .cloned())
    }

    async fn update(
        &self,
        id: i64,
        oid: i64,
        draft: &TemplatePromptDraft,
    ) -> Result<Option<TemplatePrompt>> {
        let mut state = self.state.write().await;
        let Some(row) = state.rows.iter_mut().find(|p| p.id == id && p.oid == oid) else {
            return Ok(None);
        };

        row.prompt_type = draft.prompt_type.clone();
        row.name = draft.name.clone();
        row.content = draft.content.clone();
        row.datasource_id = draft.datasource_id;
        row.enabled = draft.enabled;
        row.update_time = Utc::now();
        Ok(Some(row.clone()))
    }

    async fn set_enabled(
        &self,
        id: i64,
        oid: i64,
        enabled: bool,
    ) -> Result<Option<TemplatePrompt>> {
        let mut state = self.state.write().await;
        let Some(row) = state.rows.iter_mut().find(|p| p.id == id && p.oid == oid) else {
            return Ok(None);
        };

        row.enabled = enabled;
        row.update_time = Utc::now();
        Ok(Some(row.clone()))
    }

    async fn delete_owned(&self, ids: &[i64], oid: i64) -> Result<u64> {
        let mut state = self.state.write().await;
        let before = state.rows.len();
        state
            .rows
            .retain(|p| !(p.oid == oid && ids.contains(&p.id)));
        Ok((before - state.rows.len()) as u64)
    }

    async fn list_enabled_by_type(
        &self,
        oid: i64,
        prompt_type: &str,
    ) -> Result<Vec<TemplatePrompt>> {
        let state = self.state.read().await;
        let mut rows: Vec<TemplatePrompt> = state
            .rows
            .iter()
            .filter(|p| p.oid == oid && p.prompt_type == prompt_type && p.enabled)
            .cloned()
            .collect();
        rows.sort_by_key(|p| p.id);
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompt(prompt_type: &str, name: Option<&str>, datasource_id: Option<i64>) -> TemplatePrompt {
        let now = Utc::now();
        TemplatePrompt {
            id: 1,
            oid: 1,
            prompt_type: prompt_type.to_string(),
            name: name.map(str::to_string),
            content: "content".to_string(),
            datasource_id,
            enabled: true,
            create_time: now,
            update_time: now,
        }
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = TemplatePromptFilter::new(Some(""), Some("   "), None);
        assert!(filter_matches(&filter, &prompt("chart", None, Some(3))));
    }

    #[test]
    fn test_name_filter_is_case_insensitive_substring() {
        let filter = TemplatePromptFilter::new(None, Some("  Revenue "), None);
        assert!(filter_matches(&filter, &prompt("sql", Some("Monthly REVENUE rules"), None)));
        assert!(!filter_matches(&filter, &prompt("sql", Some("Churn"), None)));
        assert!(!filter_matches(&filter, &prompt("sql", None, None)));
    }

    #[test]
    fn test_datasource_filter_includes_generic_prompts() {
        let filter = TemplatePromptFilter::new(None, None, Some(5));
        assert!(filter_matches(&filter, &prompt("sql", None, Some(5))));
        assert!(filter_matches(&filter, &prompt("sql", None, None)));
        assert!(!filter_matches(&filter, &prompt("sql", None, Some(6))));
    }

    #[test]
    fn test_type_filter_is_exact() {
        let filter = TemplatePromptFilter::new(Some("sql"), None, None);
        assert!(filter_matches(&filter, &prompt("sql", None, None)));
        assert!(!filter_matches(&filter, &prompt("dynamic_sql", None, None)));
    }
}
