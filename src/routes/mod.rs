//! Route definitions for the AIMod API.

pub mod health;
pub mod stats;

use axum::{
    http::{HeaderValue, Method},
    routing::{any, get},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::AppState;

/// Build the application router with tracing and CORS layers applied.
pub fn router(state: AppState) -> Router {
    let cors = cors_layer(state.config.frontend_url.as_deref());

    Router::new()
        .route("/api", any(stats::index))
        .route("/api/", any(stats::index))
        .route("/health/live", get(health::live))
        .route("/health/ready", get(health::ready))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

fn cors_layer(frontend_url: Option<&str>) -> CorsLayer {
    let permissive = || {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    match frontend_url {
        Some(origin) => match origin.parse::<HeaderValue>() {
            Ok(origin) => CorsLayer::new()
                .allow_origin(origin)
                .allow_methods([Method::GET, Method::OPTIONS])
                .allow_headers(Any),
            Err(e) => {
                tracing::warn!(origin, error = %e, "Invalid FRONTEND_URL, allowing any origin");
                permissive()
            }
        },
        None => permissive(),
    }
}
