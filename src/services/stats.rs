//! Guild and warning totals for the public statistics endpoint.

use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::stats::{EntityCounts, StatsReport, UsageStats, API_NAME, API_VERSION};

/// Fetch both totals and build the report.
pub async fn get_stats(pool: &PgPool) -> Result<StatsReport, AppError> {
    let counts = fetch_counts(pool).await?;
    tracing::debug!(
        guilds = counts.guilds,
        warnings = counts.warnings,
        "Fetched entity counts"
    );
    Ok(summarize(counts))
}

/// Count guilds and warnings. The two queries are independent and run concurrently;
/// no snapshot is shared between them.
pub async fn fetch_counts(pool: &PgPool) -> Result<EntityCounts, AppError> {
    let (guilds, warnings) = tokio::try_join!(count_guilds(pool), count_warnings(pool))?;
    Ok(EntityCounts { guilds, warnings })
}

async fn count_guilds(pool: &PgPool) -> Result<i64, AppError> {
    let row = sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(*) FROM "Guild""#)
        .fetch_one(pool)
        .await?;
    Ok(row)
}

async fn count_warnings(pool: &PgPool) -> Result<i64, AppError> {
    let row = sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(*) FROM "Warning""#)
        .fetch_one(pool)
        .await?;
    Ok(row)
}

/// Build the response from raw counts.
///
/// The average is a plain float division. Zero guilds yields NaN (no warnings) or
/// positive infinity, which serialize as `null`.
pub fn summarize(counts: EntityCounts) -> StatsReport {
    StatsReport {
        name: API_NAME,
        version: API_VERSION,
        stats: UsageStats {
            guilds: counts.guilds,
            warnings: counts.warnings,
            average_warnings_per_guild: average(counts.warnings, counts.guilds),
        },
    }
}

fn average(warnings: i64, guilds: i64) -> f64 {
    warnings as f64 / guilds as f64
}
