//! Credential and server configuration types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A username/password pair resolved from one request.
///
/// Created fresh per request; either committed into the active
/// [`ServerConfig`] on successful validation or discarded. Never persists
/// across requests.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credential {
    /// Account name, constrained to bytes usable as a downstream identifier.
    pub username: String,
    /// Account password. Secret; excluded from `Debug` output.
    pub password: String,
}

impl Credential {
    /// Creates a credential pair.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// True when no usable username was resolved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.username.is_empty()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Connection settings for one administered database server.
///
/// The `user` and `password` fields are the commit slots the auth gate
/// writes into once a credential passes validation.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host name used for connections and shown in user-facing text.
    pub host: String,
    /// Display name overriding the host in user-facing text, if non-empty.
    pub verbose: String,
    /// Fixed Basic-Auth realm. When empty, the realm is composed from the
    /// application title and the verbose name or host.
    pub auth_http_realm: String,
    /// Account name committed after successful validation.
    pub user: String,
    /// Password committed after successful validation. Not serialized.
    #[serde(skip_serializing)]
    pub password: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            verbose: String::new(),
            auth_http_realm: String::new(),
            user: String::new(),
            password: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credential_is_empty_tracks_username_only() {
        assert!(Credential::default().is_empty());
        assert!(Credential::new("", "secret").is_empty());
        assert!(!Credential::new("alice", "").is_empty());
    }

    #[test]
    fn credential_debug_redacts_password() {
        let credential = Credential::new("alice", "hunter2");
        let rendered = format!("{credential:?}");
        assert!(rendered.contains("alice"));
        assert!(rendered.contains("<redacted>"));
        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    fn server_config_serialization_skips_password() {
        let server = ServerConfig {
            password: "hunter2".to_string(),
            ..ServerConfig::default()
        };
        let rendered = serde_json::to_string(&server).unwrap();
        assert!(!rendered.contains("hunter2"));
    }
}
