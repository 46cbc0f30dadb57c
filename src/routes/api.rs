//! Admin JSON API.

use crate::handlers::admin::{list_enhance_stay_options, list_guests};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn admin_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/admin/guests", get(list_guests))
        .route("/api/admin/enhance-stay-options", get(list_enhance_stay_options))
        .with_state(state)
}
