//! Candidate password extraction.

use axum::http::{header::AUTHORIZATION, HeaderMap};

/// Password presented with a request via `Authorization: Bearer <password>`.
///
/// A missing header yields an empty string, which the gate reads as "nothing
/// entered yet". A header that is present but not in Bearer form is passed
/// through whole so it fails the comparison as an incorrect password.
pub fn bearer_password(headers: &HeaderMap) -> String {
    let header = match headers.get(AUTHORIZATION).and_then(|h| h.to_str().ok()) {
        Some(header) => header,
        None => return String::new(),
    };

    match header.strip_prefix("Bearer ") {
        Some(token) => token.to_string(),
        None => {
            tracing::warn!("Invalid Authorization header format");
            header.to_string()
        }
    }
}
