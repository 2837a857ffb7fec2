//! Downstream credential validator contract.
//!
//! The gate treats the validator as a black box: it consumes only the
//! coarse accepted/rejected outcome and, on rejection, the `(message,
//! code)` pair that drives the two-class failure taxonomy.

use async_trait::async_trait;
use dbadmin_core::Credential;

use crate::guard::ct_eq;

/// Error code MySQL-compatible servers report for rejected credentials
/// (`ER_ACCESS_DENIED_ERROR`).
pub const ACCESS_DENIED_CODE: u16 = 1045;

/// Result reported by the downstream validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// Credentials accepted.
    Accepted,
    /// Validation failed. `message` may be empty when the server offered no
    /// diagnostics; `code` carries the server error code.
    Rejected {
        /// Server error text, possibly empty.
        message: String,
        /// Server error code.
        code: u16,
    },
}

impl ValidationOutcome {
    /// A rejection carrying the plain access-denied code and no message.
    #[must_use]
    pub fn access_denied() -> Self {
        Self::Rejected {
            message: String::new(),
            code: ACCESS_DENIED_CODE,
        }
    }
}

/// Downstream credential validator.
///
/// Production deployments validate against the administered server's own
/// account system; [`StaticValidator`] serves wiring and tests.
#[async_trait]
pub trait CredentialValidator: Send + Sync {
    /// Attempts to authenticate `credential` against the downstream server.
    async fn validate(&self, credential: &Credential) -> ValidationOutcome;
}

/// Validator backed by a fixed account list.
#[derive(Debug, Clone, Default)]
pub struct StaticValidator {
    accounts: Vec<(String, String)>,
}

impl StaticValidator {
    /// Creates a validator with no accounts; it rejects everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an accepted account.
    #[must_use]
    pub fn with_account(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.accounts.push((username.into(), password.into()));
        self
    }
}

#[async_trait]
impl CredentialValidator for StaticValidator {
    async fn validate(&self, credential: &Credential) -> ValidationOutcome {
        let accepted = self.accounts.iter().any(|(username, password)| {
            ct_eq(username.as_bytes(), credential.username.as_bytes())
                && ct_eq(password.as_bytes(), credential.password.as_bytes())
        });
        if accepted {
            ValidationOutcome::Accepted
        } else {
            ValidationOutcome::access_denied()
        }
    }
}
