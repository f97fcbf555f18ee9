//! Browse page: every visible workspace with the bucket prefix its files
//! live under.

use leptos::prelude::*;

use crate::app::use_services;
use crate::components::nav_bar::NavBar;
use crate::components::page_errors::PageErrors;
use crate::components::workspace_row::WorkspaceRow;
use crate::state::workspaces::WorkspacesState;
use crate::util::auth::use_current_user;

#[component]
pub fn BrowsePage() -> impl IntoView {
    let auth = use_current_user();
    let services = use_services();
    let list = RwSignal::new(WorkspacesState::default());
    let requested = RwSignal::new(false);

    Effect::new(move || {
        if auth.get().user.is_none() || requested.get_untracked() {
            return;
        }
        requested.set(true);
        list.update(WorkspacesState::begin);

        #[cfg(feature = "csr")]
        {
            let api = services.with_value(|s| s.api.clone());
            leptos::task::spawn_local(async move {
                let result = api.workspaces_search(None, None).await;
                list.update(|s| s.finish(result));
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = services;
        }
    });

    view! {
        <NavBar/>
        <div class="browse-page">
            <h1>"Browse"</h1>
            <PageErrors auth=auth own=Signal::derive(move || list.get().error)/>
            <Show when=move || list.get().loading>
                <p>"Loading..."</p>
            </Show>
            <ul class="workspace-list workspace-list--locations">
                {move || {
                    list.get()
                        .items
                        .into_iter()
                        .map(|ws| view! { <WorkspaceRow workspace=ws show_location=true/> })
                        .collect::<Vec<_>>()
                }}
            </ul>
        </div>
    }
}
