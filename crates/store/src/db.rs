use std::str::FromStr;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

use crate::error::{Result, StoreError};

/// Connection settings for the Postgres pool.
///
/// `user` and `password` override whatever the URL carries, so credentials
/// can be supplied separately from the endpoint.
#[derive(Debug, Clone)]
pub struct ConnectOptions {
    pub url: String,
    pub user: Option<String>,
    pub password: Option<String>,
}

/// Build the process-wide connection pool. Fails fast if the store is
/// unreachable so startup can abort with a non-zero exit.
pub async fn connect(opts: &ConnectOptions) -> Result<PgPool> {
    let mut pg_opts = PgConnectOptions::from_str(&opts.url).map_err(StoreError::Database)?;
    if let Some(user) = &opts.user {
        pg_opts = pg_opts.username(user);
    }
    if let Some(password) = &opts.password {
        pg_opts = pg_opts.password(password);
    }

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect_with(pg_opts)
        .await?;

    tracing::debug!(url = %opts.url, "connected to database");
    Ok(pool)
}
