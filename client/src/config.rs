//! Build-time client configuration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Environment variable holding the backend base URL at build time.
pub const BACKEND_HOST_VAR: &str = "GARAGE_BACKEND_HOST";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL for every API request. Empty means same-origin.
    pub backend_host: String,
}

impl ClientConfig {
    /// Configuration baked in when the bundle was compiled.
    pub fn from_build_env() -> Self {
        Self::from_backend_host(option_env!("GARAGE_BACKEND_HOST"))
    }

    pub fn from_backend_host(raw: Option<&str>) -> Self {
        let backend_host = raw.map(str::trim).unwrap_or_default().trim_end_matches('/').to_owned();
        Self { backend_host }
    }
}
