//! Redirect-only page routes.

use crate::handlers::pages::{admin_root, guest_portal_root};
use axum::{routing::get, Router};

pub fn page_routes() -> Router {
    Router::new()
        .route("/admin", get(admin_root))
        .route("/c/:token", get(guest_portal_root))
}
