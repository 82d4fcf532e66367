//! Application bootstrap ordering.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session must be restored from storage before the router evaluates the
//! first navigation, otherwise a signed-in user deep-linking to a protected
//! page would be bounced to login. `bootstrap` runs every step in order and
//! only hands back a context once initialization has finished.

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod bootstrap_test;

use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::net::http::HttpDefaults;
use crate::state::session::SessionStore;
use crate::util::storage::TokenStorage;

/// Everything the UI needs, fully initialized.
#[derive(Debug, Clone)]
pub struct AppContext<S> {
    pub config: ClientConfig,
    pub session: SessionStore<S>,
    pub api: ApiClient,
}

/// Build request defaults, restore the session, and wire the API client.
pub fn bootstrap<S: TokenStorage>(config: ClientConfig, storage: S) -> AppContext<S> {
    let http = HttpDefaults::new(&config.backend_host);
    let mut session = SessionStore::new(storage, http.clone());
    session.initialize();
    log::info!(
        "bootstrap complete (backend: {}, signed in: {})",
        if config.backend_host.is_empty() { "same-origin" } else { config.backend_host.as_str() },
        session.is_authenticated()
    );
    AppContext { config, session, api: ApiClient::new(http) }
}

/// Browser entry point: logging, panic hook, then mount the app.
#[cfg(feature = "csr")]
pub fn mount() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(crate::app::App);
}
