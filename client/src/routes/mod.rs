//! Static route table and path resolution.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ROUTES` is the single description of which views exist and which need a
//! signed-in user. The Leptos router only supplies the current location; the
//! table decides what that location means and the guard decides whether it may
//! be shown.

pub mod guard;


/// Views the application can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    Login,
    Dashboard,
    NotFound,
}

/// One static route table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDescriptor {
    /// Path pattern. `:name` segments match any single segment.
    pub path: &'static str,
    pub name: &'static str,
    pub view: View,
    pub require_login: bool,
}

pub const HOME: &str = "home";
pub const LOGIN: &str = "login";
pub const DASHBOARD: &str = "dashboard";
pub const NOT_FOUND: &str = "notFound";

/// Route table, matched in order. The last entry is the catch-all.
pub static ROUTES: [RouteDescriptor; 4] = [
    RouteDescriptor { path: "/", name: HOME, view: View::Home, require_login: false },
    RouteDescriptor { path: "/login", name: LOGIN, view: View::Login, require_login: false },
    RouteDescriptor { path: "/dashboard", name: DASHBOARD, view: View::Dashboard, require_login: true },
    RouteDescriptor { path: "/:notFound", name: NOT_FOUND, view: View::NotFound, require_login: false },
];

/// A location resolved against `ROUTES`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoute {
    /// Normalized path without query or fragment.
    pub path: String,
    /// Decoded query parameters in order of appearance.
    pub query: Vec<(String, String)>,
    /// Matched entries, outermost first.
    pub matched: Vec<&'static RouteDescriptor>,
}

impl ResolvedRoute {
    /// The innermost matched entry, which determines the rendered view.
    pub fn target(&self) -> &'static RouteDescriptor {
        self.matched.last().copied().unwrap_or_else(catch_all)
    }

    pub fn view(&self) -> View {
        self.target().view
    }

    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }
}

/// Look up a table entry by its name.
pub fn route_by_name(name: &str) -> Option<&'static RouteDescriptor> {
    ROUTES.iter().find(|route| route.name == name)
}

fn catch_all() -> &'static RouteDescriptor {
    &ROUTES[ROUTES.len() - 1]
}

/// Resolve a location such as `/dashboard?x=1` against the route table.
///
/// Anything no earlier entry matches resolves to the catch-all entry.
pub fn resolve(location: &str) -> ResolvedRoute {
    let without_fragment = location.split_once('#').map_or(location, |(head, _)| head);
    let (raw_path, raw_query) = without_fragment.split_once('?').unwrap_or((without_fragment, ""));
    let path = normalize_path(raw_path);

    let matched = ROUTES
        .iter()
        .find(|route| pattern_matches(route.path, &path))
        .unwrap_or_else(catch_all);

    ResolvedRoute { query: parse_query(raw_query), path, matched: vec![matched] }
}

fn normalize_path(raw: &str) -> String {
    let segments: Vec<&str> = raw.split('/').filter(|s| !s.is_empty()).collect();
    format!("/{}", segments.join("/"))
}

fn pattern_matches(pattern: &str, path: &str) -> bool {
    let pattern_segments: Vec<&str> = pattern.split('/').filter(|s| !s.is_empty()).collect();
    let path_segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    if pattern_segments.len() != path_segments.len() {
        return false;
    }
    pattern_segments
        .iter()
        .zip(&path_segments)
        .all(|(pattern, segment)| pattern.starts_with(':') || pattern == segment)
}

fn parse_query(raw: &str) -> Vec<(String, String)> {
    raw.split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(key), decode_component(value))
        })
        .collect()
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced).map_or(spaced.clone(), |decoded| decoded.into_owned())
}
