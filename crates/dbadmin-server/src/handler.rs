//! Request handling for the auth gate.

use std::sync::Arc;

use axum::{
    Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use dbadmin_auth::{
    AuthGate, AuthOutcome, PASSWORD_SOURCES, RequestContext, SourceTable, USERNAME_SOURCES,
    challenge_response, realm_message, reload_response,
};
use dbadmin_core::ServerConfig;
use serde::Deserialize;
use tokio::sync::RwLock;

use crate::pages;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// The auth gate.
    pub gate: AuthGate,
    /// Application title for realms and page headings.
    pub title: String,
    /// Active server configuration; the gate commits credentials into it.
    pub server: Arc<RwLock<ServerConfig>>,
}

/// Query parameters consumed by the gate.
#[derive(Debug, Default, Deserialize)]
pub struct AuthParams {
    /// Username carried forward by the logout round-trip.
    #[serde(default)]
    pub old_usr: String,
}

/// Builds the application router with the gate guarding its routes.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(gate_request))
        .route("/index", get(gate_request))
        .with_state(state)
}

/// Drives the auth gate for one request.
pub async fn gate_request(
    State(state): State<AppState>,
    Query(params): Query<AuthParams>,
    headers: HeaderMap,
) -> Response {
    let mut ctx = RequestContext::new(source_table(&headers))
        .with_old_username(params.old_usr)
        .with_async(is_async_request(&headers));

    // The resolved username feeds the retry link before the context is
    // scrubbed by a successful commit.
    let candidate = state
        .gate
        .check(&ctx)
        .map(|credential| credential.username)
        .unwrap_or_default();

    let outcome = {
        let mut server = state.server.write().await;
        state.gate.authenticate(&mut ctx, &mut server).await
    };

    match outcome {
        AuthOutcome::Validated => {
            Html(pages::welcome(&state.title)).into_response()
        }
        AuthOutcome::NeedCredentials if ctx.is_async => reload_response(),
        AuthOutcome::NeedCredentials | AuthOutcome::Denied { .. } => {
            let server = state.server.read().await;
            let realm = realm_message(&state.title, &server);
            let login_url = state.gate.login_form_url(&candidate);
            challenge_response(&realm, pages::access_denied(&state.title, &login_url))
        }
        AuthOutcome::Fatal(error) => {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(pages::fatal_error(&error.to_string())),
            )
                .into_response()
        }
    }
}

/// Builds the candidate-source table from forwarded request headers.
///
/// Front servers surface Basic-Auth data under differing names depending on
/// the integration; each recognized variable arrives as a header with
/// underscores mapped to hyphens and lands under its conventional key.
fn source_table(headers: &HeaderMap) -> SourceTable {
    let mut sources = SourceTable::new();
    for key in USERNAME_SOURCES.iter().chain(PASSWORD_SOURCES.iter()) {
        let header_name = key.to_ascii_lowercase().replace('_', "-");
        if let Some(value) = headers.get(header_name.as_str()).and_then(|v| v.to_str().ok()) {
            sources.set(*key, value);
        }
    }
    sources
}

/// Whether the request is programmatic rather than a browser navigation.
fn is_async_request(headers: &HeaderMap) -> bool {
    headers
        .get("x-requested-with")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.eq_ignore_ascii_case("XMLHttpRequest"))
}
