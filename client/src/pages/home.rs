//! Public landing page.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1>"One Guy Garage Store Sync"</h1>
            <p>"Keep Shopify stock in line with supplier feeds."</p>
            <A href="/dashboard">"Open dashboard"</A>
        </div>
    }
}
