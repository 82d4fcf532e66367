//! Navigation guard for protected routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every location the router renders passes through `decide` first. The guard
//! only reads the session; signing in and out happens elsewhere.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::{DASHBOARD, LOGIN, ResolvedRoute, RouteDescriptor, View, route_by_name};
use crate::state::session::SessionState;

/// Query parameter carrying the originally requested path to the login page.
pub const RETURN_TO_PARAM: &str = "to";

/// Where a signed-in user lands when no usable return path was supplied.
pub const DEFAULT_AFTER_LOGIN: &str = "/dashboard";

/// Outcome of guarding one navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationDecision {
    Proceed,
    Redirect { route: &'static RouteDescriptor, query: Vec<(String, String)> },
}

impl NavigationDecision {
    /// Location to navigate to, `None` when the navigation proceeds.
    pub fn href(&self) -> Option<String> {
        match self {
            Self::Proceed => None,
            Self::Redirect { route, query } if query.is_empty() => Some(route.path.to_owned()),
            Self::Redirect { route, query } => {
                let encoded: Vec<String> = query
                    .iter()
                    .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
                    .collect();
                Some(format!("{}?{}", route.path, encoded.join("&")))
            }
        }
    }
}

/// Decide whether `target` may be shown for `session`.
///
/// Protected targets are redirected to the login route with the requested
/// path attached so the login flow can return there.
pub fn decide(target: &ResolvedRoute, session: &SessionState) -> NavigationDecision {
    let protected = target.matched.iter().any(|route| route.require_login);
    if !protected || session.is_authenticated() {
        return NavigationDecision::Proceed;
    }

    let Some(login) = route_by_name(LOGIN) else {
        return NavigationDecision::Proceed;
    };
    log::info!("redirecting unauthenticated navigation to {} away from {}", login.path, target.path);
    NavigationDecision::Redirect {
        route: login,
        query: vec![(RETURN_TO_PARAM.to_owned(), target.path.clone())],
    }
}

/// What the route outlet shows for one location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteOutcome {
    Render(View),
    Redirect(String),
}

/// Resolve the guard decision for `target` into the outlet's output.
///
/// A redirect never carries the target view, so a protected view cannot be
/// built for a signed-out session.
pub fn route_outcome(target: &ResolvedRoute, session: &SessionState) -> RouteOutcome {
    match decide(target, session).href() {
        Some(href) => RouteOutcome::Redirect(href),
        None => RouteOutcome::Render(target.view()),
    }
}

/// Path to continue to after a successful login.
///
/// Only same-origin absolute paths are honoured; anything else falls back to
/// the dashboard. Browsers drop tabs and newlines while parsing a URL, so
/// `/\t/host` would become `//host`; any whitespace or control character
/// rejects the path.
pub fn login_return_path(to: Option<&str>) -> String {
    match to {
        Some(path) if is_local_path(path) => path.to_owned(),
        _ => route_by_name(DASHBOARD).map_or(DEFAULT_AFTER_LOGIN, |route| route.path).to_owned(),
    }
}

fn is_local_path(path: &str) -> bool {
    path.starts_with('/')
        && !path.starts_with("//")
        && !path.contains('\\')
        && !path.chars().any(|c| c.is_control() || c.is_whitespace())
}
