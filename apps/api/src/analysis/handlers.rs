//! Axum route handler for resume analysis.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::analysis::models::{AnalysisResult, JobPosting};
use crate::errors::AppError;
use crate::jobs;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResumeRequest {
    /// Resume text already extracted from the uploaded file by the client.
    pub resume_text: String,
}

/// POST /api/v1/analysis/resume
///
/// The only error this can return is a database failure while fetching the
/// catalog; the analysis itself always succeeds (degrading to the fallback).
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeResumeRequest>,
) -> Result<Json<AnalysisResult>, AppError> {
    let rows = jobs::get_active_jobs(&state.db).await?;
    let catalog: Vec<JobPosting> = rows.iter().map(JobPosting::from).collect();

    let result =
        crate::analysis::analyze_resume(&req.resume_text, &catalog, state.model.as_deref()).await;
    Ok(Json(result))
}
