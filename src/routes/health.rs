//! Liveness and readiness probes for the process supervisor.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

/// Readiness detail: the service is up, plus what the database said.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub database: String,
}

pub async fn live() -> &'static str {
    "OK"
}

/// Always 200. A failed `SELECT 1` is reported in `database` rather than as an error
/// status, so the probe itself never touches the stats tables.
pub async fn ready(State(state): State<AppState>) -> Json<HealthStatus> {
    let database = match sqlx::query("SELECT 1").execute(&state.db).await {
        Ok(_) => "connected".to_string(),
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check could not reach the database");
            format!("error: {e}")
        }
    };

    Json(HealthStatus {
        status: "ok",
        database,
    })
}
