use axum::http::HeaderName;

use crate::shared::i18n::Locale;

/// Tenant the current request acts for. Every store operation is scoped by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TenantContext {
    pub oid: i64,
}

/// Settings used by the request context middleware
#[derive(Debug, Clone)]
pub struct RequestContextConfig {
    pub tenant_header: HeaderName,
    pub default_locale: Locale,
}
