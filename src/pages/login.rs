//! Login page: accepts a bearer token (or API key) for the session.
//!
//! Token issuance happens elsewhere; this page only stores what the user
//! pastes. Arriving here forgets the cached user so the next authenticated
//! view fetches it again with the new token.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::use_services;
use crate::components::nav_bar::NavBar;
use crate::routes::AppRoute;

#[component]
pub fn LoginPage() -> impl IntoView {
    let services = use_services();
    let navigate = use_navigate();
    let token = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    services.with_value(|s| s.current_user.reset());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let value = token.get().trim().to_owned();
        if value.is_empty() {
            info.set("Paste a token first.".to_owned());
            return;
        }
        services.with_value(|s| {
            s.session.set_token(Some(value));
            s.current_user.reset();
        });
        log::info!("session token updated");
        navigate(AppRoute::HOME.path(), NavigateOptions::default());
    };

    view! {
        <NavBar/>
        <div class="login-page">
            <div class="login-card">
                <h1>"Workspaces"</h1>
                <p class="login-card__subtitle">"Sign in with a bearer token"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="password"
                        placeholder="token"
                        prop:value=move || token.get()
                        on:input=move |ev| token.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit">
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
