//! Route tables and the assembled application router.

mod api;
mod common;
mod diagnostics;
mod pages;

pub use api::admin_api_routes;
pub use common::common_routes;
pub use diagnostics::diagnostics_routes;
pub use pages::page_routes;

use crate::state::AppState;
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Request bodies are tiny here; anything larger is rejected before reaching a handler.
const BODY_LIMIT_BYTES: usize = 64 * 1024;

/// Full application router. Diagnostics are mounted only when enabled in config.
pub fn build_router(state: AppState) -> Router {
    let mut app = Router::new()
        .merge(common_routes(state.clone()))
        .merge(admin_api_routes(state.clone()))
        .merge(page_routes());
    if state.config.diagnostics {
        tracing::warn!("diagnostics routes enabled under /debug");
        app = app.merge(diagnostics_routes(state));
    }
    app.layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
        .layer(TraceLayer::new_for_http())
}
