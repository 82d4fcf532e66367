//! # garage-client
//!
//! Leptos + WASM front-end for the garage store sync service.
//!
//! This crate holds the session store (token persisted to local storage and
//! mirrored into the default `Authorization` request header), the static route
//! table with its login guard, the REST client for the sync backend, and the
//! pages rendered through the guard.

pub mod app;
pub mod bootstrap;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    bootstrap::mount();
}
