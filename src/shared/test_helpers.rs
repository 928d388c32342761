use axum::http::{HeaderName, HeaderValue};
use axum::Router;
use axum_test::TestServer;
use std::sync::Arc;

use crate::core::context::RequestContextConfig;
use crate::core::middleware::request_context_middleware;
use crate::features::template_prompts::dtos::UpsertTemplatePromptDto;
use crate::features::template_prompts::repositories::InMemoryTemplatePromptRepository;
use crate::features::template_prompts::{routes, TemplatePromptState};
use crate::shared::i18n::Locale;

pub const TEST_TENANT_HEADER: &str = "x-tenant-id";

pub fn upsert_dto(
    prompt_type: &str,
    content: &str,
    datasource_id: Option<i64>,
) -> UpsertTemplatePromptDto {
    UpsertTemplatePromptDto {
        id: None,
        prompt_type: prompt_type.to_string(),
        name: None,
        content: content.to_string(),
        datasource_id,
        enabled: None,
    }
}

pub fn request_context_config() -> Arc<RequestContextConfig> {
    Arc::new(RequestContextConfig {
        tenant_header: HeaderName::from_static(TEST_TENANT_HEADER),
        default_locale: Locale::En,
    })
}

/// Puts `router` behind the same request context middleware used in production
pub fn with_request_context(router: Router) -> Router {
    router.route_layer(axum::middleware::from_fn_with_state(
        request_context_config(),
        request_context_middleware,
    ))
}

pub fn tenant_header(oid: i64) -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static(TEST_TENANT_HEADER),
        HeaderValue::from(oid),
    )
}

/// Template prompt routes over a fresh in-memory store
pub fn test_server() -> (Arc<InMemoryTemplatePromptRepository>, TestServer) {
    let repository = Arc::new(InMemoryTemplatePromptRepository::new());
    let state = TemplatePromptState::new(repository.clone());
    let app = with_request_context(routes::routes(state));
    let server = TestServer::new(app).unwrap();
    (repository, server)
}
