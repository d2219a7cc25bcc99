//! Axum route handlers for application submission and the admin dashboard.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::analysis::models::AnalysisResult;
use crate::applications::{self, NewApplication};
use crate::errors::AppError;
use crate::models::application::ApplicationRow;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitApplicationRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub message: Option<String>,
    pub resume_text: Option<String>,
    pub applied_job_id: Option<Uuid>,
    pub applied_job_title: String,
    /// Result of POST /api/v1/analysis/resume, passed back by the client.
    pub analysis: Option<AnalysisResult>,
}

/// POST /api/v1/applications
pub async fn handle_submit_application(
    State(state): State<AppState>,
    Json(req): Json<SubmitApplicationRequest>,
) -> Result<Json<ApplicationRow>, AppError> {
    if req.applied_job_title.trim().is_empty() {
        return Err(AppError::Validation(
            "appliedJobTitle must not be empty".to_string(),
        ));
    }

    // Stored verbatim so the admin view sees exactly what the pipeline produced
    let analysis = req
        .analysis
        .as_ref()
        .map(serde_json::to_value)
        .transpose()
        .map_err(|e| AppError::Internal(e.into()))?;

    let row = applications::submit_application(
        &state.db,
        NewApplication {
            first_name: &req.first_name,
            last_name: &req.last_name,
            email: &req.email,
            phone: &req.phone,
            message: req.message.as_deref(),
            resume_text: req.resume_text.as_deref(),
            applied_job_id: req.applied_job_id,
            applied_job_title: &req.applied_job_title,
            analysis: analysis.as_ref(),
        },
    )
    .await?;
    Ok(Json(row))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListApplicationsQuery {
    pub status: Option<String>,
    pub job_id: Option<Uuid>,
}

/// GET /api/v1/applications?status=new&jobId=... (admin)
pub async fn handle_list_applications(
    State(state): State<AppState>,
    Query(query): Query<ListApplicationsQuery>,
) -> Result<Json<Vec<ApplicationRow>>, AppError> {
    let rows = if let Some(job_id) = query.job_id {
        applications::get_applications_by_job(&state.db, job_id).await?
    } else if let Some(status) = query.status.as_deref() {
        applications::get_applications_by_status(&state.db, status).await?
    } else {
        applications::get_all_applications(&state.db).await?
    };
    Ok(Json(rows))
}

#[derive(Debug, Deserialize)]
pub struct UpdateApplicationStatusRequest {
    pub status: String,
    pub notes: Option<String>,
}

/// PATCH /api/v1/applications/:id/status (admin)
pub async fn handle_update_application_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateApplicationStatusRequest>,
) -> Result<Json<ApplicationRow>, AppError> {
    let row = applications::update_application_status(
        &state.db,
        id,
        &req.status,
        req.notes.as_deref(),
    )
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Application {id} not found")))?;
    Ok(Json(row))
}
