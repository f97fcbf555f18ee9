//! Search page: workspaces visible to the caller, filtered by name.

use leptos::prelude::*;

use crate::app::use_services;
use crate::components::nav_bar::NavBar;
use crate::components::page_errors::PageErrors;
use crate::components::workspace_row::WorkspaceRow;
use crate::state::workspaces::WorkspacesState;
use crate::util::auth::use_current_user;

#[component]
pub fn SearchPage() -> impl IntoView {
    let auth = use_current_user();
    let services = use_services();
    let query = RwSignal::new(String::new());
    let results = RwSignal::new(WorkspacesState::default());

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if results.get_untracked().loading {
            return;
        }
        let name = query.get().trim().to_owned();
        results.update(WorkspacesState::begin);

        #[cfg(feature = "csr")]
        {
            let api = services.with_value(|s| s.api.clone());
            leptos::task::spawn_local(async move {
                let filter = (!name.is_empty()).then_some(name.as_str());
                let result = api.workspaces_search(filter, None).await;
                results.update(|s| s.finish(result));
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (name, services);
        }
    };

    view! {
        <NavBar/>
        <div class="search-page">
            <h1>"Search Workspaces"</h1>
            <PageErrors auth=auth own=Signal::derive(move || results.get().error)/>
            <form class="search-form" on:submit=on_search>
                <input
                    class="search-input"
                    type="search"
                    placeholder="workspace name"
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <button class="search-button" type="submit" disabled=move || results.get().loading>
                    "Search"
                </button>
            </form>
            <Show when=move || results.get().is_empty_result()>
                <p class="page-empty">"No matching workspaces."</p>
            </Show>
            <ul class="workspace-list">
                {move || {
                    results
                        .get()
                        .items
                        .into_iter()
                        .map(|ws| view! { <WorkspaceRow workspace=ws/> })
                        .collect::<Vec<_>>()
                }}
            </ul>
        </div>
    }
}
