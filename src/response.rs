//! Response envelope helpers.

use axum::{http::StatusCode, Json};
use serde::Serialize;

/// `{"error": "..."}`; the message is always a fixed, non-leaking string.
#[derive(Serialize, Debug)]
pub struct ErrorBody {
    pub error: &'static str,
}

impl ErrorBody {
    pub const fn new(error: &'static str) -> Self {
        ErrorBody { error }
    }
}

/// `{"options": [...]}` for the enhance-stay catalog.
#[derive(Serialize, Debug)]
pub struct OptionsBody<T> {
    pub options: T,
}

pub fn ok_options<T: Serialize>(options: T) -> (StatusCode, Json<OptionsBody<T>>) {
    (StatusCode::OK, Json(OptionsBody { options }))
}
