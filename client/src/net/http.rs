//! Process-wide defaults applied to every outgoing API request.
//!
//! SYSTEM CONTEXT
//! ==============
//! `HttpDefaults` is a shared handle: the session store writes the
//! `Authorization` value on login/logout and the API client reads it when
//! building each request. Clones point at the same defaults.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::sync::{Arc, PoisonError, RwLock};

/// Scheme prefix the backend's token authentication expects.
pub const AUTH_SCHEME: &str = "Token";

/// Format the `Authorization` header value for `token`.
pub fn authorization_header(token: &str) -> String {
    format!("{AUTH_SCHEME} {token}")
}

/// Shared request defaults: base URL and default `Authorization` header.
#[derive(Debug, Clone, Default)]
pub struct HttpDefaults {
    base_url: Arc<str>,
    authorization: Arc<RwLock<Option<String>>>,
}

impl HttpDefaults {
    /// Create defaults rooted at `base_url`. An empty base means same-origin.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: Arc::from(base_url.trim_end_matches('/')),
            authorization: Arc::new(RwLock::new(None)),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join the base URL with an absolute request path.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }

    /// Current default `Authorization` value, if any.
    pub fn authorization(&self) -> Option<String> {
        self.authorization.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Send `Token <token>` on every subsequent request.
    pub fn set_token(&self, token: &str) {
        self.replace(Some(authorization_header(token)));
    }

    /// Stop sending an `Authorization` header.
    pub fn clear(&self) {
        self.replace(None);
    }

    fn replace(&self, value: Option<String>) {
        *self.authorization.write().unwrap_or_else(PoisonError::into_inner) = value;
    }
}
