//! One workspace line: owner/name, visibility, and optionally its storage
//! location.

use leptos::prelude::*;

use crate::net::types::Workspace;
use crate::util::workspace_key::workspace_location;

#[component]
pub fn WorkspaceRow(workspace: Workspace, #[prop(optional)] show_location: bool) -> impl IntoView {
    let location = show_location.then(|| workspace_location(&workspace));
    let title = format!("{}/{}", workspace.owner.username, workspace.name);
    let scope = workspace.root.root_type.as_str();

    view! {
        <li class="workspace-row">
            <span class="workspace-row__created">{workspace.created}</span>
            <span class="workspace-row__name">{title}</span>
            <span class="workspace-row__scope">"(" {scope} ")"</span>
            {location.map(|loc| view! { <code class="workspace-row__location">{loc}</code> })}
        </li>
    }
}
