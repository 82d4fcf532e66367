//! Server configuration parsed from environment variables.

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SITE_ROOT: &str = "client/dist";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {value}")]
    InvalidPort { value: String },
    #[error("site root {path} has no index.html")]
    MissingSiteRoot { path: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Directory holding the compiled client bundle (`index.html`, wasm, js).
    pub site_root: PathBuf,
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `SITE_ROOT`: default `client/dist`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort { value: raw })?,
            None => DEFAULT_PORT,
        };
        let site_root = lookup("SITE_ROOT")
            .filter(|v| !v.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_SITE_ROOT), PathBuf::from);
        Ok(Self { port, site_root })
    }

    pub fn index_html(&self) -> PathBuf {
        self.site_root.join("index.html")
    }

    /// Confirm the bundle has been built into `site_root`.
    pub fn check_site_root(&self) -> Result<(), ConfigError> {
        if self.index_html().is_file() {
            Ok(())
        } else {
            Err(ConfigError::MissingSiteRoot { path: self.site_root.display().to_string() })
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
