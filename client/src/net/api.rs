//! REST API client for the sync backend.
//!
//! Browser builds (`csr`): real HTTP calls via `gloo-net`.
//! Native builds: every call returns `ApiError::Unavailable`, since the API is
//! only reachable from the browser bundle.
//!
//! ERROR HANDLING
//! ==============
//! Callers get typed `ApiError`s instead of panics. `Unauthorized` means the
//! backend rejected the session token; pages respond by signing out so the
//! navigation guard routes the user back to login.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::http::HttpDefaults;
#[cfg(feature = "csr")]
use super::types::{StockDataSourcePatch, TokenRequest, TokenResponse};
use super::types::{Page, StockDataSource, TaskStarted};

pub const TOKEN_ENDPOINT: &str = "/api/token/";
pub const SOURCES_ENDPOINT: &str = "/api/sources/";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("session rejected by the server")]
    Unauthorized,
    #[error("request failed with status {0}")]
    Status(u16),
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

#[cfg_attr(not(feature = "csr"), allow(dead_code))]
fn status_error(status: u16) -> ApiError {
    match status {
        401 => ApiError::Unauthorized,
        other => ApiError::Status(other),
    }
}

fn source_endpoint(id: i64) -> String {
    format!("{SOURCES_ENDPOINT}{id}/")
}

fn source_run_endpoint(id: i64, dry_run: bool) -> String {
    let action = if dry_run { "dryrun" } else { "run" };
    format!("{SOURCES_ENDPOINT}{id}/{action}/")
}

/// HTTP client that applies the shared request defaults to every call.
#[derive(Debug, Clone, Default)]
pub struct ApiClient {
    http: HttpDefaults,
}

impl ApiClient {
    pub fn new(http: HttpDefaults) -> Self {
        Self { http }
    }

    pub fn http(&self) -> &HttpDefaults {
        &self.http
    }

    #[cfg(feature = "csr")]
    fn authorize(&self, builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
        match self.http.authorization() {
            Some(value) => builder.header("Authorization", &value),
            None => builder,
        }
    }

    #[cfg(feature = "csr")]
    async fn read_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
        if !resp.ok() {
            return Err(status_error(resp.status()));
        }
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Exchange credentials for a session token via `POST /api/token/`.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` if the request fails or the credentials are rejected.
    pub async fn obtain_token(&self, email: &str, password: &str) -> Result<String, ApiError> {
        #[cfg(feature = "csr")]
        {
            let body = TokenRequest { email: email.to_owned(), password: password.to_owned() };
            let resp = self
                .authorize(gloo_net::http::Request::post(&self.http.url(TOKEN_ENDPOINT)))
                .json(&body)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            let token: TokenResponse = Self::read_json(resp).await?;
            Ok(token.token)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (email, password);
            Err(ApiError::Unavailable)
        }
    }

    /// List stock data sources via `GET /api/sources/`.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` if the request fails or the session is rejected.
    pub async fn list_sources(&self) -> Result<Page<StockDataSource>, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = self
                .authorize(gloo_net::http::Request::get(&self.http.url(SOURCES_ENDPOINT)))
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            Self::read_json(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    /// Enable or disable a source via `PATCH /api/sources/{id}/`.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` if the request fails or the session is rejected.
    pub async fn set_source_active(&self, id: i64, active: bool) -> Result<StockDataSource, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = self
                .authorize(gloo_net::http::Request::patch(&self.http.url(&source_endpoint(id))))
                .json(&StockDataSourcePatch { active })
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            Self::read_json(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (source_endpoint(id), active);
            Err(ApiError::Unavailable)
        }
    }

    /// Start a product sync for a source, optionally as a dry run.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` if the request fails or the session is rejected.
    pub async fn run_source(&self, id: i64, dry_run: bool) -> Result<TaskStarted, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = self
                .authorize(gloo_net::http::Request::post(&self.http.url(&source_run_endpoint(id, dry_run))))
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            Self::read_json(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = source_run_endpoint(id, dry_run);
            Err(ApiError::Unavailable)
        }
    }
}
