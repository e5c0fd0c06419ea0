use std::sync::Arc;

use crate::brand::BrandCatalog;
use crate::config::Config;
use crate::llm_client::GenerationClient;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Generation collaborator. Default: the chat-completions `LlmClient`.
    pub llm: Arc<dyn GenerationClient>,
    /// Read-only after startup.
    pub catalog: BrandCatalog,
    pub sessions: SessionStore,
    pub config: Config,
}
