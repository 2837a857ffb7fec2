//! 401 challenge and reload-signal responses.
//!
//! A synchronous request without usable credentials gets the standard
//! Basic-Auth exchange: status 401, a `WWW-Authenticate` header naming the
//! realm, and a minimal denial page supplied by the presentation layer. A
//! programmatic request gets a structured reload signal instead of HTML.

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use dbadmin_core::{ServerConfig, filter_display_text};
use serde_json::json;

/// Builds the Basic-Auth realm for a server.
///
/// A configured realm wins; otherwise the realm is composed from the
/// application title and the server's verbose name or host. The result is
/// filtered to printable US-ASCII because the challenge header value must
/// not carry control or non-ASCII bytes.
#[must_use]
pub fn realm_message(title: &str, server: &ServerConfig) -> String {
    let realm = if server.auth_http_realm.is_empty() {
        let name = if server.verbose.is_empty() {
            &server.host
        } else {
            &server.verbose
        };
        format!("{title} {name}")
    } else {
        server.auth_http_realm.clone()
    };
    filter_display_text(&realm)
}

/// Builds the 401 challenge response.
///
/// Sets `WWW-Authenticate: Basic realm="..."` and carries `body` as the
/// minimal access-denied notice. Quotes in the realm are escaped so the
/// header stays well-formed.
#[must_use]
pub fn challenge_response(realm: &str, body: String) -> Response {
    let escaped = realm.replace('"', "\\\"");
    let header_value = format!("Basic realm=\"{escaped}\"");

    let mut response = (StatusCode::UNAUTHORIZED, Html(body)).into_response();
    if let Ok(value) = HeaderValue::from_str(&header_value) {
        response
            .headers_mut()
            .insert(header::WWW_AUTHENTICATE, value);
    }
    response
}

/// Builds the reload signal sent to programmatic clients instead of HTML.
///
/// The payload tells the client to drop any cached authentication token and
/// reload; the failure status doubles as the halt marker.
#[must_use]
pub fn reload_response() -> Response {
    let body = json!({
        "success": false,
        "reload_flag": "1",
    });
    (StatusCode::UNAUTHORIZED, Json(body)).into_response()
}
