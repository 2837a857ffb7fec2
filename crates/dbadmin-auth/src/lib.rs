//! # dbadmin-auth
//!
//! HTTP Basic-Auth gate for the dbadmin server.
//!
//! This crate provides:
//! - Credential resolution across web-server integration conventions
//!   (native Basic-Auth variables, plain and redirected CGI, IIS-style
//!   `AUTH_USER`, encoded `Authorization` headers)
//! - A stale-credential guard for the logout round-trip
//! - The accept/deny/abort gate state machine
//! - 401 `WWW-Authenticate` challenge and reload-signal responses
//!
//! ## Overview
//!
//! A request enters [`AuthGate::authenticate`] with an explicit
//! [`RequestContext`]. The extractor resolves a raw credential pair from the
//! candidate sources, sanitization and the stale guard normalize it, and the
//! downstream [`CredentialValidator`] decides acceptance. The gate returns an
//! [`AuthOutcome`]; the HTTP boundary maps terminal outcomes to responses and
//! decides whether the pipeline halts.
//!
//! ## Modules
//!
//! - [`challenge`] - 401 challenge and reload responses
//! - [`context`] - per-request input bundle
//! - [`error`] - the two-class failure taxonomy
//! - [`extract`] - candidate-source credential resolution
//! - [`gate`] - the state machine
//! - [`guard`] - stale-credential guard
//! - [`validator`] - downstream validator contract

pub mod challenge;
pub mod context;
pub mod error;
pub mod extract;
pub mod gate;
pub mod guard;
pub mod validator;

pub use challenge::{challenge_response, realm_message, reload_response};
pub use context::{RequestContext, SourceTable};
pub use error::AuthError;
pub use extract::{PASSWORD_SOURCES, USERNAME_SOURCES, extract_credential};
pub use gate::{AuthGate, AuthOutcome};
pub use guard::guard_stale_username;
pub use validator::{
    ACCESS_DENIED_CODE, CredentialValidator, StaticValidator, ValidationOutcome,
};
