//! Application storage: submitted applications and the admin dashboard
//! queries over them.

pub mod handlers;

use serde_json::Value;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::application::ApplicationRow;

/// Parameters for persisting a new application. `analysis` is the full
/// analysis payload, stored verbatim.
pub struct NewApplication<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub message: Option<&'a str>,
    pub resume_text: Option<&'a str>,
    pub applied_job_id: Option<Uuid>,
    pub applied_job_title: &'a str,
    pub analysis: Option<&'a Value>,
}

/// Inserts a new application with status "new".
pub async fn submit_application(
    pool: &PgPool,
    app: NewApplication<'_>,
) -> Result<ApplicationRow, sqlx::Error> {
    sqlx::query_as(
        r#"
        INSERT INTO applications
            (first_name, last_name, email, phone, message, resume_text,
             applied_job_id, applied_job_title, analysis, status)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, 'new')
        RETURNING *
        "#,
    )
    .bind(app.first_name)
    .bind(app.last_name)
    .bind(app.email)
    .bind(app.phone)
    .bind(app.message)
    .bind(app.resume_text)
    .bind(app.applied_job_id)
    .bind(app.applied_job_title)
    .bind(app.analysis)
    .fetch_one(pool)
    .await
}

/// All applications, newest first (admin dashboard).
pub async fn get_all_applications(pool: &PgPool) -> Result<Vec<ApplicationRow>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM applications ORDER BY created_at DESC")
        .fetch_all(pool)
        .await
}

pub async fn get_applications_by_status(
    pool: &PgPool,
    status: &str,
) -> Result<Vec<ApplicationRow>, sqlx::Error> {
    sqlx::query_as(
        "SELECT * FROM applications WHERE status = $1 ORDER BY created_at DESC",
    )
    .bind(status)
    .fetch_all(pool)
    .await
}

pub async fn get_applications_by_job(
    pool: &PgPool,
    job_id: Uuid,
) -> Result<Vec<ApplicationRow>, sqlx::Error> {
    sqlx::query_as(
        "SELECT * FROM applications WHERE applied_job_id = $1 ORDER BY created_at DESC",
    )
    .bind(job_id)
    .fetch_all(pool)
    .await
}

pub async fn update_application_status(
    pool: &PgPool,
    id: Uuid,
    status: &str,
    notes: Option<&str>,
) -> Result<Option<ApplicationRow>, sqlx::Error> {
    sqlx::query_as(
        r#"
        UPDATE applications
        SET status = $2, notes = COALESCE($3, notes), updated_at = NOW()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(status)
    .bind(notes)
    .fetch_optional(pool)
    .await
}
