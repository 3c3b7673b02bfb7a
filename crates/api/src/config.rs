use std::fmt;
use std::path::{Path, PathBuf};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_ENVIRONMENT: &str = "production";
pub const DEFAULT_N8N_URL: &str = "http://n8n:5678";
pub const DEFAULT_UPLOADS_DIR: &str = "uploads";
pub const DEFAULT_LOGS_DIR: &str = "logs";

/// Error raised when an environment variable holds an unusable value.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a valid {expected}, got '{value}'")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Connection settings for the n8n workflow-automation backend.
///
/// Held for future use and echoed by the health endpoint; the API never
/// calls n8n.
#[derive(Clone, PartialEq, Eq)]
pub struct N8nConfig {
    pub url: String,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl N8nConfig {
    pub fn has_credentials(&self) -> bool {
        self.username.is_some() && self.password.is_some()
    }
}

impl fmt::Debug for N8nConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("N8nConfig")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Server configuration loaded from environment variables.
///
/// Populated once at process entry and shared read-only afterwards.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Runtime environment label reported by the status endpoint.
    pub environment: String,
    /// Directory for uploaded files, created at startup.
    pub uploads_dir: PathBuf,
    /// Directory for log files, created at startup.
    pub logs_dir: PathBuf,
    pub n8n: N8nConfig,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var        | Default           |
    /// |----------------|-------------------|
    /// | `HOST`         | `0.0.0.0`         |
    /// | `PORT`         | `5000`            |
    /// | `NODE_ENV`     | `production`      |
    /// | `UPLOADS_DIR`  | `uploads`         |
    /// | `LOGS_DIR`     | `logs`            |
    /// | `N8N_URL`      | `http://n8n:5678` |
    /// | `N8N_USERNAME` | unset             |
    /// | `N8N_PASSWORD` | unset             |
    ///
    /// Empty values are treated as unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match var("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::Invalid {
                var: "PORT",
                expected: "port number",
                value: raw,
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: var("HOST").unwrap_or_else(|| DEFAULT_HOST.into()),
            port,
            environment: var("NODE_ENV").unwrap_or_else(|| DEFAULT_ENVIRONMENT.into()),
            uploads_dir: var("UPLOADS_DIR")
                .unwrap_or_else(|| DEFAULT_UPLOADS_DIR.into())
                .into(),
            logs_dir: var("LOGS_DIR")
                .unwrap_or_else(|| DEFAULT_LOGS_DIR.into())
                .into(),
            n8n: N8nConfig {
                url: var("N8N_URL").unwrap_or_else(|| DEFAULT_N8N_URL.into()),
                username: var("N8N_USERNAME"),
                password: var("N8N_PASSWORD"),
            },
        })
    }

    /// Directories that must exist before the server accepts traffic.
    pub fn required_dirs(&self) -> [&Path; 2] {
        [self.uploads_dir.as_path(), self.logs_dir.as_path()]
    }
}
