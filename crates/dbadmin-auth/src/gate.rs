//! The auth gate state machine.
//!
//! One pass through [`AuthGate::authenticate`] resolves a credential,
//! consults the downstream validator, and reports an [`AuthOutcome`]. The
//! gate never terminates the process itself: terminality is the caller's
//! concern. The HTTP boundary maps terminal outcomes to responses and stops
//! the pipeline; a harness may inspect the returned value and continue. The
//! protocol-level retry loop lives across requests, not in-process - each
//! challenge ends this request, and the next request is a fresh attempt.

use std::sync::Arc;

use dbadmin_core::{Credential, ServerConfig, sanitize_identifier};

use crate::context::RequestContext;
use crate::error::AuthError;
use crate::extract::extract_credential;
use crate::guard::guard_stale_username;
use crate::validator::{CredentialValidator, ValidationOutcome};

/// Result of one pass through the gate.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum AuthOutcome {
    /// No usable credential was resolved; a challenge (or reload signal for
    /// programmatic clients) must go out and this request ends.
    NeedCredentials,
    /// Credential accepted and committed into the active server config.
    Validated,
    /// Credential rejected with the access-denied code; the challenge is
    /// re-issued and this request ends.
    Denied {
        /// Validator error code.
        code: u16,
    },
    /// Unrecoverable downstream failure; the pipeline aborts with this
    /// error surfaced verbatim.
    Fatal(AuthError),
}

/// Credential-resolution and access-gating state machine.
#[derive(Clone)]
pub struct AuthGate {
    validator: Arc<dyn CredentialValidator>,
    login_path: String,
}

impl AuthGate {
    /// Creates a gate over the given validator.
    ///
    /// `login_path` is the path component of the login retry URL.
    pub fn new(validator: Arc<dyn CredentialValidator>, login_path: impl Into<String>) -> Self {
        Self {
            validator,
            login_path: login_path.into(),
        }
    }

    /// Resolves and normalizes the request's credential candidate.
    ///
    /// Runs extraction, identifier sanitization, and the stale guard in
    /// that order. Returns `None` when no usable username survives, which
    /// routes the caller to the challenge.
    #[must_use]
    pub fn check(&self, ctx: &RequestContext) -> Option<Credential> {
        let raw = extract_credential(&ctx.sources);
        let username = sanitize_identifier(&raw.username);
        let username = guard_stale_username(&username, &ctx.old_username);
        if username.is_empty() {
            return None;
        }
        Some(Credential::new(username, raw.password))
    }

    /// Drives one full pass: check, validate, commit or classify.
    pub async fn authenticate(
        &self,
        ctx: &mut RequestContext,
        server: &mut ServerConfig,
    ) -> AuthOutcome {
        let Some(credential) = self.check(ctx) else {
            tracing::debug!("no usable credential resolved, challenging");
            return AuthOutcome::NeedCredentials;
        };

        match self.validator.validate(&credential).await {
            ValidationOutcome::Accepted => {
                self.commit(ctx, server, credential);
                AuthOutcome::Validated
            }
            ValidationOutcome::Rejected { message, code } => self.fail(&message, code),
        }
    }

    /// Commits a validated credential into the active server config.
    ///
    /// The password is then purged from the request's source table so no
    /// inspectable reflection of request state retains it.
    fn commit(&self, ctx: &mut RequestContext, server: &mut ServerConfig, credential: Credential) {
        tracing::info!(username = %credential.username, "credentials validated");
        server.user = credential.username;
        server.password = credential.password;
        ctx.scrub_password();
    }

    /// Classifies a validator rejection into the two-outcome model.
    pub fn fail(&self, message: &str, code: u16) -> AuthOutcome {
        match AuthError::classify(message, code) {
            AuthError::AccessDenied { code } => {
                tracing::info!(code, "credentials rejected, re-issuing challenge");
                AuthOutcome::Denied { code }
            }
            error @ AuthError::Fatal { .. } => {
                tracing::error!(error = %error, "validator failed, aborting");
                AuthOutcome::Fatal(error)
            }
        }
    }

    /// URL for the login retry link.
    ///
    /// Embeds the current username as the next request's `old_usr` marker;
    /// this is how the stale guard receives its input on the following
    /// attempt.
    #[must_use]
    pub fn login_form_url(&self, username: &str) -> String {
        let encoded: String = url::form_urlencoded::byte_serialize(username.as_bytes()).collect();
        format!("{}?old_usr={}", self.login_path, encoded)
    }
}
