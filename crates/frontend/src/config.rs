use std::path::PathBuf;

use crate::pages::HTML_DIR;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

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

/// Frontend server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Directory holding `html/` and the other static assets.
    ///
    /// Defaults to this crate's source directory as recorded at build time,
    /// which only exists on the build machine. Deployed binaries must set
    /// `FRONTEND_ROOT`.
    pub root: PathBuf,
}

impl FrontendConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var         | Default             |
    /// |-----------------|---------------------|
    /// | `HOST`          | `0.0.0.0`           |
    /// | `PORT`          | `3000`              |
    /// | `FRONTEND_ROOT` | crate directory     |
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
            root: var("FRONTEND_ROOT")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR"))),
        })
    }

    /// Whether the root holds the `html/` page directory.
    pub fn has_pages(&self) -> bool {
        self.root.join(HTML_DIR).is_dir()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn defaults_apply_when_unset() {
        let config = FrontendConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert!(config.root.join("html").join("index.html").is_file());
        assert!(config.has_pages());
    }

    #[test]
    fn root_without_html_dir_has_no_pages() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Cargo.toml"), "[package]").unwrap();
        let root = dir.path().to_string_lossy().into_owned();

        let config =
            FrontendConfig::from_lookup(|key| (key == "FRONTEND_ROOT").then(|| root.clone()))
                .unwrap();

        assert!(!config.has_pages());
    }

    #[test]
    fn overrides_are_read() {
        let config = FrontendConfig::from_lookup(|key| match key {
            "PORT" => Some("8081".into()),
            "FRONTEND_ROOT" => Some("/srv/frontend".into()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.port, 8081);
        assert_eq!(config.root, PathBuf::from("/srv/frontend"));
    }

    #[test]
    fn invalid_port_is_rejected() {
        let result = FrontendConfig::from_lookup(|key| (key == "PORT").then(|| "-1".into()));
        assert_matches!(result, Err(ConfigError::Invalid { var: "PORT", .. }));
    }
}
