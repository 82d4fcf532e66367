//! Networking modules for the sync backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` holds the request defaults shared with the session store, `api`
//! issues REST calls using them, and `types` defines the wire schema.

pub mod api;
pub mod http;
pub mod types;
