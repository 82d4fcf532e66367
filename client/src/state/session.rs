//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session token lives in three places: durable storage, the in-memory
//! `SessionState` read by the navigation guard and components, and the default
//! `Authorization` header on `HttpDefaults`. `SessionStore` is the only writer
//! and updates all three in one call.
//!
//! ERROR HANDLING
//! ==============
//! `set_token` is all-or-nothing: storage is written first and a failure
//! leaves the session untouched. `remove_token` always logs the user out in
//! memory and on the header, then reports a storage failure if there was one.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::http::HttpDefaults;
use crate::util::storage::{StorageError, TOKEN_KEY, TokenStorage};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("refusing to store an empty token")]
    EmptyToken,
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("session store is no longer available")]
    Disposed,
}

/// Session snapshot. An empty token means no session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub token: String,
}

impl SessionState {
    /// Always derived from `token`, never stored.
    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }
}

/// Owner of the session token and every place it is mirrored to.
#[derive(Debug, Clone)]
pub struct SessionStore<S> {
    state: SessionState,
    storage: S,
    http: HttpDefaults,
}

impl<S: TokenStorage> SessionStore<S> {
    /// Create an empty, unauthenticated store. Call `initialize` before
    /// consulting it for navigation.
    pub fn new(storage: S, http: HttpDefaults) -> Self {
        Self { state: SessionState::default(), storage, http }
    }

    /// Restore the session persisted in storage, if any.
    ///
    /// A stored token is applied to memory and the request header exactly as
    /// `set_token` does, without writing the unchanged value back. An
    /// unreadable storage counts as "no session".
    pub fn initialize(&mut self) {
        let stored = match self.storage.read(TOKEN_KEY) {
            Ok(value) => value.unwrap_or_default(),
            Err(e) => {
                log::warn!("session storage unreadable, starting signed out: {e}");
                String::new()
            }
        };

        if stored.is_empty() {
            self.state.token.clear();
            self.http.clear();
            log::debug!("no stored session");
            return;
        }

        self.apply(&stored);
        log::debug!("stored session restored");
    }

    /// Sign in with `token`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptyToken` for an empty token, or
    /// `SessionError::Storage` when the token could not be persisted. The
    /// session is unchanged in both cases.
    pub fn set_token(&mut self, token: &str) -> Result<(), SessionError> {
        if token.is_empty() {
            return Err(SessionError::EmptyToken);
        }
        self.storage.write(TOKEN_KEY, token)?;
        self.apply(token);
        log::debug!("session token set");
        Ok(())
    }

    fn apply(&mut self, token: &str) {
        self.http.set_token(token);
        self.state.token = token.to_owned();
    }

    /// Sign out.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Storage` when the empty token could not be
    /// persisted. Memory and the request header are cleared regardless.
    pub fn remove_token(&mut self) -> Result<(), SessionError> {
        self.state.token.clear();
        self.http.clear();
        log::debug!("session token removed");
        self.storage.write(TOKEN_KEY, "")?;
        Ok(())
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }

    pub fn token(&self) -> &str {
        &self.state.token
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn http(&self) -> &HttpDefaults {
        &self.http
    }
}
