//! Database connection pool and the process-lifetime client holder.

pub mod holder;

use std::str::FromStr;
use std::time::Duration;

use log::LevelFilter;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{ConnectOptions, PgPool};

pub use holder::{ClientHolder, DB_CLIENT_SLOT};

/// Level at which every executed statement is logged (`sqlx::query` target).
pub const STATEMENT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

/// Statements slower than this are logged again at WARN.
pub const SLOW_STATEMENT_THRESHOLD: Duration = Duration::from_secs(1);

/// Parse `database_url` and turn on query logging.
pub fn connect_options(database_url: &str) -> Result<PgConnectOptions, sqlx::Error> {
    Ok(PgConnectOptions::from_str(database_url)?
        .log_statements(STATEMENT_LOG_LEVEL)
        .log_slow_statements(LevelFilter::Warn, SLOW_STATEMENT_THRESHOLD))
}

/// Create a PostgreSQL connection pool with query logging enabled.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    let options = connect_options(database_url)?;
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}
