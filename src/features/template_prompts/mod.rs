pub mod dtos;
pub mod handlers;
pub mod models;
pub mod registry;
pub mod repositories;
pub mod routes;
pub mod services;

use axum::extract::FromRef;
use std::sync::Arc;

pub use repositories::{PgTemplatePromptRepository, TemplatePromptRepository};
pub use services::{PromptResolver, TemplatePromptService};

/// Router state shared by the template prompt handlers
#[derive(Clone, FromRef)]
pub struct TemplatePromptState {
    pub service: Arc<TemplatePromptService>,
    pub resolver: Arc<PromptResolver>,
}

impl TemplatePromptState {
    pub fn new(repository: Arc<dyn TemplatePromptRepository>) -> Self {
        Self {
            service: Arc::new(TemplatePromptService::new(Arc::clone(&repository))),
            resolver: Arc::new(PromptResolver::new(repository)),
        }
    }
}
