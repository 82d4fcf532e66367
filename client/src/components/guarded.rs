//! Route outlet that applies the navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every Leptos route renders `Guarded`. It resolves the current location
//! against the static route table, asks the guard for a decision, and either
//! renders the matched view or redirects. A protected view is never built for
//! a signed-out user.

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::pages::{dashboard::DashboardPage, home::HomePage, login::LoginPage, not_found::NotFoundPage};
use crate::routes::guard::{RouteOutcome, route_outcome};
use crate::routes::{View, resolve};
use crate::util::auth::BrowserSession;

#[component]
pub fn Guarded() -> impl IntoView {
    let session = expect_context::<RwSignal<BrowserSession>>();
    let location = use_location();

    let target = Memo::new(move |_| resolve(&location.pathname.get()));
    let outcome = Memo::new(move |_| target.with(|t| session.with(|s| route_outcome(t, s.state()))));

    move || match outcome.get() {
        RouteOutcome::Redirect(href) => view! { <Redirect path=href/> }.into_any(),
        RouteOutcome::Render(page) => render(page),
    }
}

fn render(view: View) -> AnyView {
    match view {
        View::Home => view! { <HomePage/> }.into_any(),
        View::Login => view! { <LoginPage/> }.into_any(),
        View::Dashboard => view! { <DashboardPage/> }.into_any(),
        View::NotFound => view! { <NotFoundPage/> }.into_any(),
    }
}
