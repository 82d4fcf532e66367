//! Catch-all view for unknown paths.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h1>"Page not found"</h1>
            <A href="/">"Back to start"</A>
        </div>
    }
}
