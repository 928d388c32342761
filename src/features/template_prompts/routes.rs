use axum::{
    routing::{get, put},
    Router,
};

use crate::features::template_prompts::{handlers, TemplatePromptState};

/// Template prompt management and resolution routes (tenant scoped)
pub fn routes(state: TemplatePromptState) -> Router {
    Router::new()
        .route(
            "/system/template-prompt/page/{current_page}/{page_size}",
            get(handlers::page_template_prompts),
        )
        .route(
            "/system/template-prompt",
            put(handlers::upsert_template_prompt).delete(handlers::delete_template_prompts),
        )
        .route(
            "/system/template-prompt/types",
            get(handlers::list_prompt_types),
        )
        .route(
            "/system/template-prompt/resolve",
            get(handlers::resolve_template_prompt),
        )
        .route(
            "/system/template-prompt/name/{name}",
            get(handlers::get_template_prompt_by_name),
        )
        .route(
            "/system/template-prompt/{id}/enable/{enabled}",
            get(handlers::enable_template_prompt),
        )
        .route(
            "/system/template-prompt/{id}",
            get(handlers::get_template_prompt),
        )
        .with_state(state)
}
