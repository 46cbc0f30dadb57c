//! Liveness, readiness and build info.
//!
//! `/health` answers as long as the process serves requests. `/ready` pings the
//! configured `HotelStore` (a `SELECT 1` on PostgreSQL, a no-op for the in-process
//! store) and answers 503 while that ping fails, so a load balancer holds traffic
//! until the database is reachable.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadyBody {
    status: &'static str,
    /// Backend that was pinged: `postgres` or `memory`.
    backend: &'static str,
    store: &'static str,
}

#[derive(Serialize)]
struct VersionBody {
    name: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

async fn ready(State(state): State<AppState>) -> (StatusCode, Json<ReadyBody>) {
    let backend = state.config.store.as_str();
    match state.store.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(ReadyBody {
                status: "ok",
                backend,
                store: "ok",
            }),
        ),
        Err(e) => {
            tracing::warn!(backend, error = %e, "store ping failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ReadyBody {
                    status: "degraded",
                    backend,
                    store: "unavailable",
                }),
            )
        }
    }
}

async fn version() -> Json<VersionBody> {
    Json(VersionBody {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .with_state(state)
}
