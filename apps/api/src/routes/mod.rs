pub mod health;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::analysis::handlers as analysis_handlers;
use crate::applications::handlers as application_handlers;
use crate::jobs::handlers as job_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Job catalog
        .route(
            "/api/v1/jobs",
            get(job_handlers::handle_list_jobs).post(job_handlers::handle_create_job),
        )
        .route("/api/v1/jobs/:id", get(job_handlers::handle_get_job))
        .route(
            "/api/v1/jobs/:id/status",
            patch(job_handlers::handle_update_job_status),
        )
        // Resume analysis
        .route(
            "/api/v1/analysis/resume",
            post(analysis_handlers::handle_analyze_resume),
        )
        // Applications
        .route(
            "/api/v1/applications",
            post(application_handlers::handle_submit_application)
                .get(application_handlers::handle_list_applications),
        )
        .route(
            "/api/v1/applications/:id/status",
            patch(application_handlers::handle_update_application_status),
        )
        .with_state(state)
}
