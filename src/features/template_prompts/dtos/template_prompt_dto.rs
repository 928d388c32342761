use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::template_prompts::models::{TemplatePrompt, TemplatePromptDraft};
use crate::shared::constants::{PROMPT_NAME_MAX_LENGTH, PROMPT_TYPE_MAX_LENGTH};
use crate::shared::validation::PROMPT_TYPE_REGEX;

// Query params for the paged listing
#[derive(Debug, Clone, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct TemplatePromptQueryParams {
    /// Exact prompt type
    #[serde(rename = "type")]
    pub prompt_type: Option<String>,

    /// Case-insensitive substring of the prompt name
    pub name: Option<String>,

    /// Data source id; generic prompts are listed alongside the matching ones
    pub datasource_id: Option<i64>,
}

// Create/update request. `id` present means update.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpsertTemplatePromptDto {
    pub id: Option<i64>,

    #[serde(rename = "type", default)]
    #[validate(
        length(min = 1, max = PROMPT_TYPE_MAX_LENGTH, message = "type is required"),
        regex(path = *PROMPT_TYPE_REGEX, message = "type must be a lowercase snake_case identifier (e.g. 'sql', 'dynamic_sql')")
    )]
    pub prompt_type: String,

    #[validate(length(max = PROMPT_NAME_MAX_LENGTH))]
    pub name: Option<String>,

    #[serde(default)]
    #[validate(length(min = 1, message = "content is required"))]
    pub content: String,

    pub datasource_id: Option<i64>,

    /// Defaults to `true` when omitted
    pub enabled: Option<bool>,
}

impl UpsertTemplatePromptDto {
    pub fn into_draft(self) -> TemplatePromptDraft {
        TemplatePromptDraft {
            prompt_type: self.prompt_type,
            name: self.name,
            content: self.content,
            datasource_id: self.datasource_id,
            enabled: self.enabled.unwrap_or(true),
        }
    }
}

// Response DTO
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TemplatePromptResponseDto {
    pub id: i64,
    #[serde(rename = "type")]
    pub prompt_type: String,
    pub name: Option<String>,
    pub content: String,
    pub datasource_id: Option<i64>,
    pub enabled: bool,
    pub create_time: DateTime<Utc>,
    pub update_time: DateTime<Utc>,
}

impl From<TemplatePrompt> for TemplatePromptResponseDto {
    fn from(p: TemplatePrompt) -> Self {
        Self {
            id: p.id,
            prompt_type: p.prompt_type,
            name: p.name,
            content: p.content,
            datasource_id: p.datasource_id,
            enabled: p.enabled,
            create_time: p.create_time,
            update_time: p.update_time,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TemplatePromptPageDto {
    pub current_page: i64,
    pub page_size: i64,
    pub total_count: i64,
    pub total_pages: i64,
    pub data: Vec<TemplatePromptResponseDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteTemplatePromptsResponseDto {
    /// Number of prompts actually removed; ids owned by other tenants are skipped
    pub deleted: u64,
}

#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ResolvePromptQuery {
    #[serde(rename = "type")]
    #[validate(length(min = 1, max = PROMPT_TYPE_MAX_LENGTH, message = "type is required"))]
    pub prompt_type: String,

    pub datasource_id: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ResolvedPromptDto {
    #[serde(rename = "type")]
    pub prompt_type: String,
    pub datasource_id: Option<i64>,
    /// Merged custom prompt, prefixed with a blank line; empty when nothing applies
    pub content: String,
}
