//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::bootstrap::{AppContext, bootstrap};
use crate::components::guarded::Guarded;
use crate::config::ClientConfig;
use crate::util::storage::LocalStorage;

/// Root application component.
///
/// Restores the session before the router exists, so the first navigation is
/// already guarded against the persisted state. Every route renders through
/// `Guarded`; unknown paths fall back to it as well and resolve to not-found.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let AppContext { session, api, .. } = bootstrap(ClientConfig::from_build_env(), LocalStorage);
    provide_context(RwSignal::new(session));
    provide_context(api);

    view! {
        <Title text="One Guy Garage Store Sync"/>

        <Router>
            <Routes fallback=Guarded>
                <Route path=StaticSegment("") view=Guarded/>
                <Route path=StaticSegment("login") view=Guarded/>
                <Route path=StaticSegment("dashboard") view=Guarded/>
            </Routes>
        </Router>
    }
}
