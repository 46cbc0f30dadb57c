//! Admin panel API: guest list and enhance-stay catalog.

use crate::case::{to_wire_value, WireCase};
use crate::error::AppError;
use crate::response::ok_options;
use crate::state::AppState;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde_json::Value;

pub const FETCH_GUESTS_FAILED: &str = "Failed to fetch guests";
pub const FETCH_OPTIONS_FAILED: &str = "Failed to fetch enhance-stay options";
pub const HOTEL_ID_REQUIRED: &str = "Hotel ID is required";

/// GET /api/admin/guests — every guest, newest first, snake_case keys.
pub async fn list_guests(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let guests = state
        .store
        .list_guests()
        .await
        .map_err(AppError::fetch(FETCH_GUESTS_FAILED))?;
    let body = to_wire_value(&guests, WireCase::Snake).map_err(AppError::encode(FETCH_GUESTS_FAILED))?;
    Ok(Json(body))
}

/// Query key carrying the hotel scope of the options listing.
pub const HOTEL_ID_PARAM: &str = "hotelId";

/// First non-blank `hotelId` value; later duplicates are ignored and the value is returned as sent.
pub fn first_hotel_id(pairs: &[(String, String)]) -> Option<&str> {
    pairs
        .iter()
        .find(|(key, _)| key == HOTEL_ID_PARAM)
        .map(|(_, value)| value.as_str())
        .filter(|value| !value.trim().is_empty())
}

/// GET /api/admin/enhance-stay-options?hotelId= — visible options of one hotel in display order.
pub async fn list_enhance_stay_options(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let Ok(Query(pairs)) = query else {
        return Err(AppError::BadRequest(HOTEL_ID_REQUIRED));
    };
    let hotel_id = first_hotel_id(&pairs).ok_or(AppError::BadRequest(HOTEL_ID_REQUIRED))?;
    let options = state
        .store
        .list_visible_options(hotel_id)
        .await
        .map_err(AppError::fetch(FETCH_OPTIONS_FAILED))?;
    let options = to_wire_value(&options, WireCase::Camel).map_err(AppError::encode(FETCH_OPTIONS_FAILED))?;
    Ok(ok_options(options))
}
