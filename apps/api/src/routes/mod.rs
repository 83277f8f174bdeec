pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::job_templates::handlers as job_templates;
use crate::state::AppState;

pub fn build_router(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/analyze",
            post(analysis::handle_analyze).layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .route(
            "/job-templates",
            get(job_templates::handle_list_templates).post(job_templates::handle_upsert_template),
        )
        .with_state(state)
}
