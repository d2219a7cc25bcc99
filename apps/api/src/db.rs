use std::time::Duration;

use anyhow::Result;
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;

/// Small pool: the careers site is low-traffic and the analysis endpoint
/// spends its time waiting on the model, not on Postgres.
const MAX_CONNECTIONS: u32 = 5;
/// Fail fast on a saturated pool rather than queueing applicant requests.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Creates the PostgreSQL connection pool for the careers API.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL (careers-api)...");

    let pool = pool_options().connect(database_url).await?;

    info!(
        "PostgreSQL pool established (max {} connections)",
        MAX_CONNECTIONS
    );
    Ok(pool)
}

fn pool_options() -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .acquire_timeout(ACQUIRE_TIMEOUT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_sized_for_careers_workload() {
        let options = pool_options();
        assert_eq!(options.get_max_connections(), 5);
        assert_eq!(options.get_acquire_timeout(), Duration::from_secs(5));
    }
}
