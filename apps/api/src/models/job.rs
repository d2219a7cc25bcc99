use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A job posting row. `keywords` feeds the AI matcher; the rest is careers
/// page content.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct JobRow {
    pub id: Uuid,
    pub title: String,
    pub location: String,
    /// "Full-time", "Part-time", etc.
    pub employment_type: String,
    /// "Operations", "Management", "Sales", etc.
    pub department: String,
    /// "accepting" | "open" | "closed"
    pub status: String,
    pub description: String,
    pub benefits: Vec<String>,
    pub keywords: Vec<String>,
    pub is_active: bool,
    /// "urgently_hiring" | "accepting_applications" | "open_position"
    pub badge_type: Option<String>,
    pub display_order: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
