//! Job catalog: queries for the careers page and the analysis pipeline.

pub mod handlers;

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::job::JobRow;

/// Returns all active postings in catalog order. The analysis prompt indexes
/// jobs by position in this list, so the ordering must be stable.
pub async fn get_active_jobs(pool: &PgPool) -> Result<Vec<JobRow>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT * FROM jobs
        WHERE is_active = TRUE
        ORDER BY display_order NULLS LAST, created_at
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn get_jobs_by_department(
    pool: &PgPool,
    department: &str,
) -> Result<Vec<JobRow>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT * FROM jobs
        WHERE is_active = TRUE AND department = $1
        ORDER BY display_order NULLS LAST, created_at
        "#,
    )
    .bind(department)
    .fetch_all(pool)
    .await
}

pub async fn get_job(pool: &PgPool, id: Uuid) -> Result<Option<JobRow>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM jobs WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Parameters for creating a posting (admin).
pub struct NewJob<'a> {
    pub title: &'a str,
    pub location: &'a str,
    pub employment_type: &'a str,
    pub department: &'a str,
    pub status: &'a str,
    pub description: &'a str,
    pub benefits: &'a [String],
    pub keywords: &'a [String],
}

pub async fn create_job(pool: &PgPool, job: NewJob<'_>) -> Result<JobRow, sqlx::Error> {
    sqlx::query_as(
        r#"
        INSERT INTO jobs
            (title, location, employment_type, department, status, description,
             benefits, keywords, is_active)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, TRUE)
        RETURNING *
        "#,
    )
    .bind(job.title)
    .bind(job.location)
    .bind(job.employment_type)
    .bind(job.department)
    .bind(job.status)
    .bind(job.description)
    .bind(job.benefits)
    .bind(job.keywords)
    .fetch_one(pool)
    .await
}

pub async fn update_job_status(
    pool: &PgPool,
    id: Uuid,
    status: &str,
) -> Result<Option<JobRow>, sqlx::Error> {
    sqlx::query_as(
        r#"
        UPDATE jobs SET status = $2, updated_at = NOW()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(status)
    .fetch_optional(pool)
    .await
}
