//! Admin write guard.
//!
//! When no write key is configured the admin surface is open (deployments
//! that sit behind their own auth); when one is configured, writes must
//! carry a matching `X-ADMIN-KEY` header.

use axum::http::HeaderMap;

/// Header carrying the admin write key.
pub const ADMIN_KEY_HEADER: &str = "x-admin-key";

/// Whether a request may use the admin write surface.
pub fn authorized(headers: &HeaderMap, configured: Option<&str>) -> bool {
    let Some(expected) = configured.filter(|key| !key.is_empty()) else {
        return true;
    };
    headers
        .get(ADMIN_KEY_HEADER)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|incoming| !incoming.is_empty() && incoming == expected)
}
