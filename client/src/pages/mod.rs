//! Top-level route views.
//!
//! Each page is rendered through `components::guarded::Guarded`, never
//! directly by the router.

pub mod dashboard;
pub mod home;
pub mod login;
pub mod not_found;
