//! # dbadmin-core
//!
//! Shared types for the dbadmin server.
//!
//! This crate provides:
//! - [`Credential`] - the per-request username/password pair
//! - [`ServerConfig`] - connection settings for an administered server,
//!   including the slots a validated credential is committed into
//! - Sanitization helpers for identifiers and header display text

pub mod sanitize;
pub mod types;

pub use sanitize::{filter_display_text, sanitize_identifier};
pub use types::{Credential, ServerConfig};
