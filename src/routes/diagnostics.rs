use crate::handlers::diagnostics::{env_report, test_insert};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn diagnostics_routes(state: AppState) -> Router {
    Router::new()
        .route("/debug/env", get(env_report))
        .route("/debug/test-insert", post(test_insert))
        .with_state(state)
}
