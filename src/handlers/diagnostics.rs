//! Developer diagnostics. Mounted only when `HOTEL_PORTAL_DIAGNOSTICS` is set; not a stable API.

use crate::state::AppState;
use axum::{extract::State, Json};
use chrono::Utc;
use serde_json::{json, Value};

/// Characters of a secret shown before the ellipsis.
const PREVIEW_CHARS: usize = 10;

const TEST_GUEST_TABLE: &str = "guests";

/// First `PREVIEW_CHARS` characters of a value; the ellipsis marks that characters were dropped.
pub fn preview(value: Option<&str>) -> Value {
    let Some(v) = value else {
        return Value::Null;
    };
    match v.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => Value::String(format!("{}...", &v[..cut])),
        None => Value::String(v.to_string()),
    }
}

/// GET /debug/env — truncated view of the configuration this process resolved.
pub async fn env_report(State(state): State<AppState>) -> Json<Value> {
    let cfg = &state.config;
    let report = json!({
        "databaseUrl": preview(Some(cfg.database.url.as_str())),
        "store": cfg.store.as_str(),
        "baasUrl": preview(cfg.baas.url.as_deref()),
        "baasAnonKey": preview(cfg.baas.anon_key.as_deref()),
        "baasServiceRoleKey": preview(cfg.baas.service_role_key.as_deref()),
        "storageRegion": cfg.storage.region.clone(),
        "storageAccessKeyId": preview(cfg.storage.access_key_id.as_deref()),
        "storageEndpoint": cfg.storage.endpoint.clone(),
        "storageConfigured": state.storage.is_some(),
        "baasConfigured": state.baas.is_some(),
    });
    tracing::info!(report = %report, "diagnostics: environment");
    Json(report)
}

/// Synthetic guest row used by the insert check.
pub fn test_guest_row() -> Value {
    json!({
        "first_name": "Test",
        "last_name": "Guest",
        "room_number": "000",
        "phone": "+10000000000",
        "email": format!("test+{}@example.com", Utc::now().timestamp()),
        "status": "Checked In",
    })
}

/// POST /debug/test-insert — insert a synthetic guest through the service-role client and echo the raw outcome.
pub async fn test_insert(State(state): State<AppState>) -> Json<Value> {
    let Some(client) = state.baas.as_ref() else {
        return Json(json!({ "success": false, "error": "BaaS client is not configured" }));
    };
    match client.insert(TEST_GUEST_TABLE, &test_guest_row()).await {
        Ok(data) => {
            tracing::info!("diagnostics: test insert succeeded");
            Json(json!({ "success": true, "data": data }))
        }
        Err(e) => {
            tracing::warn!(error = %e, "diagnostics: test insert failed");
            Json(json!({ "success": false, "error": e.to_string() }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_truncates_long_values() {
        assert_eq!(preview(Some("postgres://user:pw@host/db")), json!("postgres:/..."));
        assert_eq!(preview(None), Value::Null);
    }

    #[test]
    fn preview_marks_only_real_truncation() {
        assert_eq!(preview(Some("short")), json!("short"));
        assert_eq!(preview(Some("0123456789")), json!("0123456789"));
        assert_eq!(preview(Some("0123456789a")), json!("0123456789..."));
        assert_eq!(preview(Some("")), json!(""));
    }

    #[test]
    fn preview_counts_characters_not_bytes() {
        assert_eq!(preview(Some("ééééééééééé")), json!("éééééééééé..."));
    }

    #[test]
    fn test_guest_row_uses_a_known_status() {
        let row = test_guest_row();
        let status = row["status"].as_str().unwrap();
        assert!(status.parse::<crate::models::GuestStatus>().is_ok());
    }
}
