//! Page entry points that only redirect. Neither checks a session: the admin root always sends
//! visitors to the login page, and authentication lives in an external collaborator.

use axum::{extract::Path, response::Redirect};

pub const ADMIN_LOGIN_PATH: &str = "/admin/login";

/// GET /admin
pub async fn admin_root() -> Redirect {
    Redirect::temporary(ADMIN_LOGIN_PATH)
}

/// GET /c/:token
pub async fn guest_portal_root(Path(token): Path<String>) -> Redirect {
    Redirect::temporary(&welcome_path(&token))
}

/// `/c/{token}/welcome`, with the token re-encoded as a single path segment.
pub fn welcome_path(token: &str) -> String {
    format!("/c/{}/welcome", encode_segment(token))
}

fn encode_segment(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    for b in segment.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => out.push(b as char),
            _ => out.push_str(&format!("%{:02X}", b)),
        }
    }
    out
}
