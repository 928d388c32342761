use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::template_prompts::models::{
    TemplatePrompt, TemplatePromptDraft, TemplatePromptFilter,
};
use crate::features::template_prompts::repositories::TemplatePromptRepository;
use crate::shared::validation::escape_like_pattern;

const COLUMNS: &str = "id, oid, prompt_type, name, content, datasource_id, enabled, create_time, update_time";

// Shared by the count and page queries: $1 oid, $2 type, $3 name pattern, $4 datasource id
const LIST_CONDITIONS: &str = r#"
    oid = $1
    AND ($2::VARCHAR IS NULL OR prompt_type = $2)
    AND ($3::TEXT IS NULL OR name ILIKE $3)
    AND ($4::BIGINT IS NULL OR datasource_id = $4 OR datasource_id IS NULL)
"#;

fn db_error(context: &'static str) -> impl Fn(sqlx::Error) -> AppError {
    move |e| {
        tracing::error!("Failed to {}: {:?}", context, e);
        AppError::Database(e)
    }
}

/// PostgreSQL-backed template prompt store
pub struct PgTemplatePromptRepository {
    pool: PgPool,
}

impl std::fmt::Debug for PgTemplatePromptRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgTemplatePromptRepository")
            .field("pool", &"<PgPool>")
            .finish()
    }
}

impl PgTemplatePromptRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TemplatePromptRepository for PgTemplatePromptRepository {
    async fn list(
        &self,
        oid: i64,
        filter: &TemplatePromptFilter,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<TemplatePrompt>, i64)> {
        let name_pattern = filter
            .name
            .as_deref()
            .map(|name| format!("%{}%", escape_like_pattern(name)));

        let count_query = format!("SELECT COUNT(*) FROM template_prompts WHERE {}", LIST_CONDITIONS);
        let total: i64 = sqlx::query_scalar(&count_query)
            .bind(oid)
            .bind(filter.prompt_type.as_deref())
            .bind(name_pattern.as_deref())
            .bind(filter.datasource_id)
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("count template prompts"))?;

        let query = format!(
            r#"
            SELECT {}
            FROM template_prompts
            WHERE {}
            ORDER BY create_time DESC, id DESC
            LIMIT $5 OFFSET $6
            "#,
            COLUMNS, LIST_CONDITIONS
        );

        let prompts: Vec<TemplatePrompt> = sqlx::query_as(&query)
            .bind(oid)
            .bind(filter.prompt_type.as_deref())
            .bind(name_pattern.as_deref())
            .bind(filter.datasource_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("list template prompts"))?;

        Ok((prompts, total))
    }

    async fn insert(&self, oid: i64, draft: &TemplatePromptDraft) -> Result<TemplatePrompt> {
        let query = format!(
            r#"
            INSERT INTO template_prompts
                (oid, prompt_type, name, content, datasource_id, enabled, create_time, update_time)
            VALUES ($1, $2, $3, $4, $5, $6, NOW(), NOW())
            RETURNING {}
            "#,
            COLUMNS
        );

        sqlx::query_as(&query)
            .bind(oid)
            .bind(&draft.prompt_type)
            .bind(draft.name.as_deref())
            .bind(&draft.content)
            .bind(draft.datasource_id)
            .bind(draft.enabled)
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("insert template prompt"))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<TemplatePrompt>> {
        let query = format!("SELECT {} FROM template_prompts WHERE id = $1", COLUMNS);

        sqlx::query_as(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("get template prompt"))
    }

    async fn find_owned(&self, id: i64, oid: i64) -> Result<Option<TemplatePrompt>> {
        let query = format!(
            "SELECT {} FROM template_prompts WHERE id = $1 AND oid = $2",
            COLUMNS
        );

        sqlx::query_as(&query)
            .bind(id)
            .bind(oid)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("get template prompt"))
    }

    async fn find_owned_by_name(&self, name: &str, oid: i64) -> Result<Option<TemplatePrompt>> {
        let query = format!(
            r#"
            SELECT {}
            FROM template_prompts
            WHERE name = $1 AND oid = $2
            ORDER BY create_time DESC, id DESC
            LIMIT 1
            "#,
            COLUMNS
        );

        sqlx::query_as(&query)
            .bind(name)
            .bind(oid)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("get template prompt by name"))
    }

    async fn update(
        &self,
        id: i64,
        oid: i64,
        draft: &TemplatePromptDraft,
    ) -> Result<Option<TemplatePrompt>> {
        let query = format!(
            r#"
            UPDATE template_prompts
            SET prompt_type = $1,
                name = $2,
                content = $3,
                datasource_id = $4,
                enabled = $5,
                update_time = NOW()
            WHERE id = $6 AND oid = $7
            RETURNING {}
            "#,
            COLUMNS
        );

        sqlx::query_as(&query)
            .bind(&draft.prompt_type)
            .bind(draft.name.as_deref())
            .bind(&draft.content)
            .bind(draft.datasource_id)
            .bind(draft.enabled)
            .bind(id)
            .bind(oid)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("update template prompt"))
    }

    async fn set_enabled(
        &self,
        id: i64,
        oid: i64,
        enabled: bool,
    ) -> Result<Option<TemplatePrompt>> {
        let query = format!(
            r#"
            UPDATE template_prompts
            SET enabled = $1, update_time = NOW()
            WHERE id = $2 AND oid = $3
            RETURNING {}
            "#,
            COLUMNS
        );

        sqlx::query_as(&query)
            .bind(enabled)
            .bind(id)
            .bind(oid)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("toggle template prompt"))
    }

    async fn delete_owned(&self, ids: &[i64], oid: i64) -> Result<u64> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = sqlx::query("DELETE FROM template_prompts WHERE oid = $1 AND id = ANY($2)")
            .bind(oid)
            .bind(ids)
            .execute(&self.pool)
            .await
            .map_err(db_error("delete template prompts"))?;

        Ok(result.rows_affected())
    }

    async fn list_enabled_by_type(
        &self,
        oid: i64,
        prompt_type: &str,
    ) -> Result<Vec<TemplatePrompt>> {
        let query = format!(
            r#"
            SELECT {}
            FROM template_prompts
            WHERE oid = $1 AND prompt_type = $2 AND enabled = TRUE
            ORDER BY id
            "#,
            COLUMNS
        );

        sqlx::query_as(&query)
            .bind(oid)
            .bind(prompt_type)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("list enabled template prompts"))
    }
}
