//! Workspaces page: the signed-in user's own workspaces.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the landing route (`/` redirects here). Once the current user is
//! known it searches `/api/workspace` filtered by `owner_id`.

use leptos::prelude::*;

use crate::app::use_services;
use crate::components::nav_bar::NavBar;
use crate::components::page_errors::PageErrors;
use crate::components::workspace_row::WorkspaceRow;
use crate::state::workspaces::WorkspacesState;
use crate::util::auth::use_current_user;

#[component]
pub fn WorkspacesPage() -> impl IntoView {
    let auth = use_current_user();
    let services = use_services();
    let list = RwSignal::new(WorkspacesState::default());
    let requested = RwSignal::new(false);

    Effect::new(move || {
        let Some(user) = auth.get().user else {
            return;
        };
        if requested.get_untracked() {
            return;
        }
        requested.set(true);
        list.update(WorkspacesState::begin);

        #[cfg(feature = "csr")]
        {
            let api = services.with_value(|s| s.api.clone());
            leptos::task::spawn_local(async move {
                let result = api.workspaces_search(None, Some(&user.id)).await;
                list.update(|s| s.finish(result));
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (user, services);
        }
    });

    view! {
        <NavBar/>
        <div class="workspaces-page">
            <h1>"My Workspaces"</h1>
            <PageErrors auth=auth own=Signal::derive(move || list.get().error)/>
            <Show
                when=move || !auth.get().loading && !list.get().loading
                fallback=move || view! { <p>"Loading..."</p> }
            >
                <Show when=move || list.get().is_empty_result()>
                    <p class="page-empty">"No workspaces yet."</p>
                </Show>
                <ul class="workspace-list">
                    {move || {
                        list.get()
                            .items
                            .into_iter()
                            .map(|ws| view! { <WorkspaceRow workspace=ws/> })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </Show>
        </div>
    }
}
