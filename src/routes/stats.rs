//! Public statistics endpoint.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::models::stats::StatsReport;
use crate::services::stats;
use crate::AppState;

/// GET /api — service identity plus guild and warning totals.
///
/// Method and body are not inspected. Database failures surface as a 500 error
/// envelope without any stats payload.
pub async fn index(State(state): State<AppState>) -> Result<Json<StatsReport>, AppError> {
    let report = stats::get_stats(&state.db).await?;
    Ok(Json(report))
}
