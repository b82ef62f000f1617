//! # Admin Authentication
//!
//! Admin privilege is granted per request by presenting the configured
//! password in the `X-Admin-Password` header. There is no session state;
//! every admin-gated handler checks the header again.

use axum::http::HeaderMap;
use sha2::{Digest, Sha256};

use roombook_core::errors::{BookingError, BookingResult};

pub const ADMIN_PASSWORD_HEADER: &str = "x-admin-password";

/// Whether the request carries the correct admin password.
pub fn is_admin(headers: &HeaderMap, expected: &str) -> bool {
    headers
        .get(ADMIN_PASSWORD_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(|given| digest_eq(given, expected))
        .unwrap_or(false)
}

/// Fails with an authorization error unless the request is admin.
pub fn require_admin(headers: &HeaderMap, expected: &str) -> BookingResult<()> {
    if is_admin(headers, expected) {
        Ok(())
    } else {
        Err(BookingError::Unauthorized(
            "admin password required".to_string(),
        ))
    }
}

// Comparing fixed-size digests keeps the comparison independent of the
// supplied password's length.
fn digest_eq(a: &str, b: &str) -> bool {
    Sha256::digest(a.as_bytes()) == Sha256::digest(b.as_bytes())
}
