//! Axum route handlers for the job catalog.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::jobs::{self, NewJob};
use crate::models::job::JobRow;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ListJobsQuery {
    pub department: Option<String>,
}

/// GET /api/v1/jobs?department=Operations
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    Query(query): Query<ListJobsQuery>,
) -> Result<Json<Vec<JobRow>>, AppError> {
    let jobs = match query.department.as_deref() {
        Some(department) => jobs::get_jobs_by_department(&state.db, department).await?,
        None => jobs::get_active_jobs(&state.db).await?,
    };
    Ok(Json(jobs))
}

/// GET /api/v1/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<JobRow>, AppError> {
    let job = jobs::get_job(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))?;
    Ok(Json(job))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobRequest {
    pub title: String,
    pub location: String,
    pub employment_type: String,
    pub department: String,
    pub status: String,
    pub description: String,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// POST /api/v1/jobs (admin)
pub async fn handle_create_job(
    State(state): State<AppState>,
    Json(req): Json<CreateJobRequest>,
) -> Result<Json<JobRow>, AppError> {
    if req.title.trim().is_empty() {
        return Err(AppError::Validation("title must not be empty".to_string()));
    }

    let job = jobs::create_job(
        &state.db,
        NewJob {
            title: &req.title,
            location: &req.location,
            employment_type: &req.employment_type,
            department: &req.department,
            status: &req.status,
            description: &req.description,
            benefits: &req.benefits,
            keywords: &req.keywords,
        },
    )
    .await?;
    Ok(Json(job))
}

#[derive(Debug, Deserialize)]
pub struct UpdateJobStatusRequest {
    pub status: String,
}

/// PATCH /api/v1/jobs/:id/status (admin)
pub async fn handle_update_job_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateJobStatusRequest>,
) -> Result<Json<JobRow>, AppError> {
    let job = jobs::update_job_status(&state.db, id, &req.status)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))?;
    Ok(Json(job))
}
