use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// A submitted application. `analysis` holds the full `AnalysisResult`
/// payload verbatim (nested candidateAnalysis included) as JSONB so nothing
/// computed by the pipeline is lost.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRow {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub message: Option<String>,
    /// Extracted resume text, when the applicant uploaded a file.
    pub resume_text: Option<String>,
    pub applied_job_id: Option<Uuid>,
    /// Stored by title too, for easy reference after a job is closed.
    pub applied_job_title: String,
    pub analysis: Option<Value>,
    /// "new" | "reviewing" | "interviewed" | "hired" | "rejected"
    pub status: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
