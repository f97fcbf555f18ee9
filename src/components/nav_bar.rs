//! Top bar with route links and the signed-in identity.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::routes::AppRoute;
use crate::state::auth::AuthState;

const LINKS: [(AppRoute, &str); 4] = [
    (AppRoute::Workspaces, "Workspaces"),
    (AppRoute::Search, "Search"),
    (AppRoute::Browse, "Browse"),
    (AppRoute::Token, "API Keys"),
];

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let pathname = use_location().pathname;

    let identity = move || {
        let state = auth.get();
        if let Some(user) = state.user {
            user.username
        } else if state.loading {
            "…".to_owned()
        } else {
            "signed out".to_owned()
        }
    };

    view! {
        <nav class="nav-bar">
            {LINKS
                .into_iter()
                .map(|(route, label)| {
                    let class = move || {
                        if AppRoute::from_path(&pathname.get()) == Some(route) {
                            "nav-bar__link nav-bar__link--active"
                        } else {
                            "nav-bar__link"
                        }
                    };
                    view! {
                        <a href=route.path() class=class>
                            {label}
                        </a>
                    }
                })
                .collect::<Vec<_>>()}
            <span class="nav-bar__spacer"></span>
            <span class="nav-bar__self">{identity}</span>
            <a href=AppRoute::Login.path() class="nav-bar__link">"Sign in"</a>
        </nav>
    }
}
