//! # dbadmin-config
//!
//! Configuration loading for the dbadmin server.
//!
//! Configuration lives in a single TOML file. The file path is resolved
//! from the `--config` CLI argument, the `DBADMIN_CONFIG` environment
//! variable, or the default `dbadmin.toml`, in that order. A missing file
//! falls back to defaults; a malformed file is an error.
//!
//! # Example (TOML)
//!
//! ```toml
//! title = "dbadmin"
//! listen = "127.0.0.1:8080"
//!
//! [server]
//! host = "db.internal"
//! verbose = "Production DB"
//! ```

use std::env;
use std::fmt;
use std::path::Path;

use dbadmin_core::ServerConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file exists but could not be read.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path of the offending file.
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for [`AppConfig`].
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        /// Path of the offending file.
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Root configuration for the dbadmin server.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// Application title used in the realm fallback and page headings.
    pub title: String,
    /// Address the HTTP server binds to.
    pub listen: String,
    /// Path component of the login retry URL.
    pub login_path: String,
    /// The administered database server.
    pub server: ServerConfig,
    /// Accounts accepted by the built-in validator.
    pub accounts: Vec<Account>,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "dbadmin".to_string(),
            listen: "127.0.0.1:8080".to_string(),
            login_path: "/index".to_string(),
            server: ServerConfig::default(),
            accounts: Vec::new(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }
}

/// Account accepted by the built-in credential validator.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Account {
    /// Account name.
    pub username: String,
    /// Account password. Not serialized.
    #[serde(skip_serializing)]
    pub password: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default tracing level when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// How the configuration path was determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    /// From the `--config` CLI argument.
    CliArgument,
    /// From the `DBADMIN_CONFIG` environment variable.
    EnvironmentVariable,
    /// Default path (`dbadmin.toml`).
    Default,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CliArgument => write!(f, "CLI argument (--config)"),
            Self::EnvironmentVariable => write!(f, "environment variable (DBADMIN_CONFIG)"),
            Self::Default => write!(f, "default"),
        }
    }
}

/// Resolves the configuration file path.
///
/// Priority order:
/// 1. CLI argument: `--config <path>`
/// 2. Environment variable: `DBADMIN_CONFIG`
/// 3. Default: `dbadmin.toml`
#[must_use]
pub fn resolve_config_path() -> (String, ConfigSource) {
    resolve_from(env::args().skip(1), env::var("DBADMIN_CONFIG").ok())
}

fn resolve_from(
    args: impl Iterator<Item = String>,
    env_path: Option<String>,
) -> (String, ConfigSource) {
    let mut args = args;
    while let Some(arg) = args.next() {
        if arg == "--config"
            && let Some(path) = args.next()
        {
            return (path, ConfigSource::CliArgument);
        }
    }

    if let Some(path) = env_path
        && !path.is_empty()
    {
        return (path, ConfigSource::EnvironmentVariable);
    }

    ("dbadmin.toml".to_string(), ConfigSource::Default)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = AppConfig::load(Path::new("/nonexistent/dbadmin.toml")).unwrap();
        assert_eq!(config.title, "dbadmin");
        assert_eq!(config.login_path, "/index");
        assert_eq!(config.server.host, "localhost");
    }

    #[test]
    fn loads_partial_file_over_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "title = \"ops console\"\n\n[server]\nhost = \"db.internal\"\nverbose = \"Production DB\"\n\n[[accounts]]\nusername = \"alice\"\npassword = \"secret\"\n"
        )
        .unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.title, "ops console");
        assert_eq!(config.server.host, "db.internal");
        assert_eq!(config.server.verbose, "Production DB");
        assert_eq!(config.accounts.len(), 1);
        assert_eq!(config.accounts[0].username, "alice");
        // Untouched sections keep their defaults.
        assert_eq!(config.listen, "127.0.0.1:8080");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "title = [not toml").unwrap();

        let err = AppConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn config_path_resolution_order() {
        let cli = ["--config".to_string(), "/etc/dbadmin.toml".to_string()];
        assert_eq!(
            resolve_from(cli.into_iter(), Some("/env/path.toml".to_string())),
            ("/etc/dbadmin.toml".to_string(), ConfigSource::CliArgument)
        );
        assert_eq!(
            resolve_from(std::iter::empty(), Some("/env/path.toml".to_string())),
            (
                "/env/path.toml".to_string(),
                ConfigSource::EnvironmentVariable
            )
        );
        assert_eq!(
            resolve_from(std::iter::empty(), Some(String::new())),
            ("dbadmin.toml".to_string(), ConfigSource::Default)
        );
        assert_eq!(
            resolve_from(std::iter::empty(), None),
            ("dbadmin.toml".to_string(), ConfigSource::Default)
        );
    }
}
