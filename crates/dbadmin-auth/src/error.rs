//! Authentication error types.
//!
//! The gate recognizes exactly two failure classes: a recoverable
//! credential rejection, answered by re-issuing the challenge, and a fatal
//! infrastructure error, which aborts the request pipeline with the
//! validator's message surfaced verbatim.

use thiserror::Error;

use crate::validator::ACCESS_DENIED_CODE;

/// Errors surfaced by the auth gate.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// The downstream server refused the credentials. Recoverable: the
    /// challenge goes out again and the next request is a fresh attempt.
    #[error("Access denied (code {code})")]
    AccessDenied {
        /// Validator error code, normally [`ACCESS_DENIED_CODE`].
        code: u16,
    },

    /// The validator failed for a reason other than bad credentials, for
    /// example an unreachable server. Not retried.
    #[error("{message}")]
    Fatal {
        /// Validator error code.
        code: u16,
        /// Error text, surfaced to the client unmodified.
        message: String,
    },
}

impl AuthError {
    /// Classifies a validator rejection.
    ///
    /// A non-empty message with a code other than [`ACCESS_DENIED_CODE`] is
    /// fatal; everything else is a recoverable rejection.
    #[must_use]
    pub fn classify(message: &str, code: u16) -> Self {
        if !message.is_empty() && code != ACCESS_DENIED_CODE {
            Self::Fatal {
                code,
                message: message.to_string(),
            }
        } else {
            Self::AccessDenied { code }
        }
    }

    /// True when re-issuing the challenge is the right response.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::AccessDenied { .. })
    }

    /// True when the request pipeline must abort.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal { .. })
    }
}
