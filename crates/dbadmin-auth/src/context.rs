//! Per-request context for the auth gate.
//!
//! The gate reads everything from an explicit [`RequestContext`] built at
//! the HTTP boundary; nothing is resolved from ambient process state, and
//! nothing in the context outlives the request.

use std::collections::HashMap;

use crate::extract::PASSWORD_SOURCES;

/// Key/value lookup over server-provided variables.
///
/// Each key names one web-server integration convention (native variables,
/// CGI, redirected CGI, IIS, FastCGI). The extractor consults keys in a
/// fixed precedence order; absence and emptiness are equivalent.
#[derive(Debug, Clone, Default)]
pub struct SourceTable {
    vars: HashMap<String, String>,
}

impl SourceTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for a source key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    /// Returns the value for `key`, or `""` when absent.
    #[must_use]
    pub fn get(&self, key: &str) -> &str {
        self.vars.get(key).map_or("", String::as_str)
    }

    /// Removes `key`, if present.
    pub fn remove(&mut self, key: &str) {
        self.vars.remove(key);
    }
}

/// Everything the gate needs from one request.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    /// Candidate credential sources.
    pub sources: SourceTable,
    /// The `old_usr` request parameter carried by the logout round-trip,
    /// or `""` when absent.
    pub old_username: String,
    /// Whether the request is programmatic rather than a browser
    /// navigation. Programmatic clients get a structured reload signal
    /// instead of an HTML challenge.
    pub is_async: bool,
}

impl RequestContext {
    /// Creates a context over the given sources.
    #[must_use]
    pub fn new(sources: SourceTable) -> Self {
        Self {
            sources,
            old_username: String::new(),
            is_async: false,
        }
    }

    /// Sets the stale-username marker from the `old_usr` parameter.
    #[must_use]
    pub fn with_old_username(mut self, old_username: impl Into<String>) -> Self {
        self.old_username = old_username.into();
        self
    }

    /// Flags the request as programmatic.
    #[must_use]
    pub fn with_async(mut self, is_async: bool) -> Self {
        self.is_async = is_async;
        self
    }

    /// Drops password material from the source table.
    ///
    /// Called after a successful commit so no inspectable reflection of the
    /// request retains the secret.
    pub fn scrub_password(&mut self) {
        for key in PASSWORD_SOURCES {
            self.sources.remove(key);
        }
    }
}
