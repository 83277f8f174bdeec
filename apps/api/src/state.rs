use std::sync::Arc;

use sqlx::PgPool;

use crate::analysis::scoring::ResumeAnalyzer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Pluggable analyzer. Default: KeywordAnalyzer.
    pub analyzer: Arc<dyn ResumeAnalyzer>,
}
