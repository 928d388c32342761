use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::shared::validation::non_blank;

/// A stored template prompt row.
///
/// `datasource_id == None` marks a generic prompt that applies to every data
/// source of the tenant; `Some(id)` scopes it to exactly one data source.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct TemplatePrompt {
    pub id: i64,
    pub oid: i64,
    pub prompt_type: String,
    pub name: Option<String>,
    pub content: String,
    pub datasource_id: Option<i64>,
    pub enabled: bool,
    pub create_time: DateTime<Utc>,
    pub update_time: DateTime<Utc>,
}

impl TemplatePrompt {
    pub fn is_generic(&self) -> bool {
        self.datasource_id.is_none()
    }
}

/// Mutable fields of a template prompt, as written on create and update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplatePromptDraft {
    pub prompt_type: String,
    pub name: Option<String>,
    pub content: String,
    pub datasource_id: Option<i64>,
    pub enabled: bool,
}

/// Listing filters. Blank text filters are normalized away on construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplatePromptFilter {
    pub prompt_type: Option<String>,
    pub name: Option<String>,
    /// Matches prompts scoped to this data source as well as generic ones
    pub datasource_id: Option<i64>,
}

impl TemplatePromptFilter {
    pub fn new(
        prompt_type: Option<&str>,
        name: Option<&str>,
        datasource_id: Option<i64>,
    ) -> Self {
        Self {
            prompt_type: non_blank(prompt_type).map(str::to_string),
            name: non_blank(name).map(str::to_string),
            datasource_id,
        }
    }
}
