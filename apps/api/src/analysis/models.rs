//! Wire and domain types for resume analysis.
//!
//! Everything here serializes camelCase so the persisted application record
//! carries the analysis payload verbatim, nested `candidateAnalysis` included.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::job::JobRow;

/// A job posting as seen by the analysis pipeline: just the fields the
/// prompt and the matcher need, decoupled from the storage row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub department: String,
    /// May be empty but is always present.
    pub keywords: Vec<String>,
}

impl From<&JobRow> for JobPosting {
    fn from(row: &JobRow) -> Self {
        JobPosting {
            id: row.id,
            title: row.title.clone(),
            description: row.description.clone(),
            department: row.department.clone(),
            keywords: row.keywords.clone(),
        }
    }
}

/// One score per active job. The normalizer guarantees exactly one of these
/// exists per catalog entry, whatever the model returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMatch {
    pub job_id: Uuid,
    pub job_title: String,
    /// Integer in [0, 100].
    pub score: u32,
    pub matched_keywords: Vec<String>,
    pub reasoning: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedFlagType {
    JobHopping,
    EmploymentGap,
    ShortTenure,
    #[default]
    Inconsistency,
    NoExperience,
    Overqualified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GreenFlagType {
    LongTenure,
    Promotion,
    #[default]
    RelevantExperience,
    Certifications,
    Leadership,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendedAction {
    StrongCandidate,
    WorthInterviewing,
    #[default]
    ReviewCarefully,
    LikelyPass,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmploymentEntry {
    pub company: String,
    pub title: String,
    /// Free text, e.g. "2 years 3 months".
    pub duration: String,
    pub duration_months: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedFlag {
    #[serde(rename = "type")]
    pub flag_type: RedFlagType,
    pub severity: Severity,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GreenFlag {
    #[serde(rename = "type")]
    pub flag_type: GreenFlagType,
    pub description: String,
}

/// Hiring-signal payload. The validator guarantees every field is populated
/// with an in-range value no matter how malformed the model output was.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateAnalysis {
    /// 0-100 overall candidate rating.
    pub overall_score: u32,
    /// 0-100 based on tenure history.
    pub stability_score: u32,
    /// 0-100 based on relevant experience.
    pub experience_score: u32,
    pub employment_history: Vec<EmploymentEntry>,
    pub red_flags: Vec<RedFlag>,
    pub green_flags: Vec<GreenFlag>,
    pub total_years_experience: f64,
    pub average_tenure_months: f64,
    pub longest_tenure_months: f64,
    pub recommended_action: RecommendedAction,
    /// AI-generated summary for the hiring team.
    pub hiring_team_notes: String,
}

/// Top-level result of `analyze_resume`. Identical shape on the model path
/// and the fallback path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub extracted_skills: Vec<String>,
    pub summary: String,
    /// Exactly one entry per active job, sorted by score descending.
    pub job_matches: Vec<JobMatch>,
    /// Subset of {"name", "email", "phone"} that could not be determined.
    pub missing_fields: Vec<String>,
    pub candidate_analysis: CandidateAnalysis,
}

/// Contact fields that could not be determined. "name" is flagged only when
/// both name parts are empty.
pub fn missing_contact_fields(
    first_name: &str,
    last_name: &str,
    email: &str,
    phone: &str,
) -> Vec<String> {
    let mut missing = Vec::new();
    if first_name.is_empty() && last_name.is_empty() {
        missing.push("name".to_string());
    }
    if email.is_empty() {
        missing.push("email".to_string());
    }
    if phone.is_empty() {
        missing.push("phone".to_string());
    }
    missing
}
