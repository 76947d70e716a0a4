use std::sync::Arc;

use playlog_upstream::completion::CompletionClient;
use playlog_upstream::rawg::RawgClient;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: playlog_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// RAWG game catalog client (search, details, import).
    pub catalog: Arc<RawgClient>,
    /// Text-completion client used to draft solutions.
    pub completion: Arc<CompletionClient>,
}
