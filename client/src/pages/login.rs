//! Login page exchanging email + password for a session token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The navigation guard sends signed-out users here with `?to=<path>`. After a
//! successful login the page stores the token and continues to that path.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::api::ApiClient;
use crate::routes::guard::{RETURN_TO_PARAM, login_return_path};
use crate::util::auth::{BrowserSession, validate_credentials};

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<BrowserSession>>();
    let api = expect_context::<ApiClient>();
    let query = use_query_map();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_credentials(&email.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        let return_to = login_return_path(query.with_untracked(|q| q.get(RETURN_TO_PARAM)).as_deref());
        busy.set(true);
        info.set("Signing in...".to_owned());

        let api = api.clone();
        let navigate = navigate.clone();
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let outcome = match api.obtain_token(&email_value, &password_value).await {
                Ok(token) => crate::util::auth::sign_in(session, &token).map_err(|e| e.to_string()),
                Err(e) => Err(e.to_string()),
            };
            match outcome {
                Ok(()) => navigate(&return_to, NavigateOptions::default()),
                Err(e) => {
                    info.set(format!("Sign in failed: {e}"));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = (session, api, navigate, return_to, email_value, password_value);
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Sign in"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
