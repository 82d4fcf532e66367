//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages sign in and out through these helpers so every session change goes
//! through the store and notifies the reactive graph exactly once.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::api::ApiError;
use crate::state::session::{SessionError, SessionStore};
use crate::util::storage::LocalStorage;

/// Session store type provided as context in the browser app.
pub type BrowserSession = SessionStore<LocalStorage>;

/// Store `token` as the new session.
///
/// # Errors
///
/// Returns the store's `SessionError`, or `SessionError::Disposed` when the
/// session signal is gone. The session is unchanged on error.
pub fn sign_in(session: RwSignal<BrowserSession>, token: &str) -> Result<(), SessionError> {
    settle_update(session.try_update(|s| s.set_token(token)))
}

/// Flatten a `try_update` result; a missing value means the signal was disposed.
fn settle_update(outcome: Option<Result<(), SessionError>>) -> Result<(), SessionError> {
    outcome.unwrap_or_else(|| {
        log::warn!("session signal disposed before update");
        Err(SessionError::Disposed)
    })
}

/// Drop the current session. The navigation guard reacts to the change.
pub fn sign_out(session: RwSignal<BrowserSession>) {
    if let Some(Err(e)) = session.try_update(SessionStore::remove_token) {
        log::warn!("signed out, but clearing stored token failed: {e}");
    }
}

/// Whether an API failure means the session is no longer valid.
pub fn session_expired(err: &ApiError) -> bool {
    matches!(err, ApiError::Unauthorized)
}

/// Validate login form input, returning trimmed `(email, password)`.
///
/// # Errors
///
/// Returns a user-facing message when a field is missing or malformed.
pub fn validate_credentials(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    let password = password.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok((email.to_owned(), password.to_owned()))
}
