//! Dashboard listing stock data sources with toggle and run actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the protected landing route. Every API failure that means the
//! session was rejected signs the user out, which sends them back to login.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::net::api::{ApiClient, ApiError};
use crate::net::types::StockDataSource;
use crate::util::auth::{BrowserSession, session_expired, sign_out};

/// Replace the entry with the same id as `updated`, keeping list order.
pub fn replace_source(sources: &mut [StockDataSource], updated: StockDataSource) {
    if let Some(slot) = sources.iter_mut().find(|s| s.id == updated.id) {
        *slot = updated;
    }
}

/// Status line shown after a sync run was accepted.
pub fn run_started_message(source_name: &str, dry_run: bool, task_id: &str) -> String {
    let kind = if dry_run { "Dry run" } else { "Sync" };
    format!("{kind} started for {source_name} (task {task_id}).")
}

#[cfg_attr(not(feature = "csr"), allow(dead_code))]
fn report_error(session: RwSignal<BrowserSession>, info: RwSignal<String>, err: &ApiError) {
    if session_expired(err) {
        sign_out(session);
        return;
    }
    info.set(err.to_string());
}

fn load_sources(
    api: ApiClient,
    session: RwSignal<BrowserSession>,
    sources: RwSignal<Vec<StockDataSource>>,
    info: RwSignal<String>,
    loading: RwSignal<bool>,
) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match api.list_sources().await {
            Ok(page) => sources.set(page.results),
            Err(e) => report_error(session, info, &e),
        }
        loading.set(false);
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (api, session, sources, info);
        loading.set(false);
    }
}

fn toggle_source(
    api: ApiClient,
    session: RwSignal<BrowserSession>,
    sources: RwSignal<Vec<StockDataSource>>,
    info: RwSignal<String>,
    id: i64,
    active: bool,
) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match api.set_source_active(id, active).await {
            Ok(updated) => sources.update(|list| replace_source(list, updated)),
            Err(e) => report_error(session, info, &e),
        }
    });
    #[cfg(not(feature = "csr"))]
    let _ = (api, session, sources, info, id, active);
}

fn start_run(
    api: ApiClient,
    session: RwSignal<BrowserSession>,
    info: RwSignal<String>,
    source: StockDataSource,
    dry_run: bool,
) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match api.run_source(source.id, dry_run).await {
            Ok(task) => info.set(run_started_message(&source.name, dry_run, &task.task_id)),
            Err(e) => report_error(session, info, &e),
        }
    });
    #[cfg(not(feature = "csr"))]
    let _ = (api, session, info, source, dry_run);
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<BrowserSession>>();
    let api = expect_context::<ApiClient>();

    let sources = RwSignal::new(Vec::<StockDataSource>::new());
    let info = RwSignal::new(String::new());
    let loading = RwSignal::new(true);

    load_sources(api.clone(), session, sources, info, loading);

    let row = move |source: StockDataSource| {
        let (toggle_api, run_api, dry_api) = (api.clone(), api.clone(), api.clone());
        let (id, active) = (source.id, source.active);
        let run_source = source.clone();
        let dry_source = source.clone();
        view! {
            <li class="source-row">
                <label class="source-row__name">
                    <input
                        type="checkbox"
                        prop:checked=active
                        on:change=move |_| toggle_source(toggle_api.clone(), session, sources, info, id, !active)
                    />
                    {source.name}
                </label>
                <button on:click=move |_| start_run(run_api.clone(), session, info, run_source.clone(), false)>
                    "Run"
                </button>
                <button on:click=move |_| start_run(dry_api.clone(), session, info, dry_source.clone(), true)>
                    "Dry run"
                </button>
            </li>
        }
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-header">
                <h1>"Stock sources"</h1>
                <button class="logout-button" on:click=move |_| sign_out(session)>
                    "Log out"
                </button>
            </header>
            <Show when=move || loading.get()>
                <p class="dashboard-message">"Loading sources..."</p>
            </Show>
            <Show when=move || !info.get().is_empty()>
                <p class="dashboard-message">{move || info.get()}</p>
            </Show>
            <ul class="source-list">
                <For each=move || sources.get() key=|source: &StockDataSource| (source.id, source.active) children=row/>
            </ul>
        </div>
    }
}
