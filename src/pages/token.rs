//! Token page: list API keys and issue new ones.
//!
//! The secret of a new key is displayed once, right after creation.

use leptos::prelude::*;

use crate::app::use_services;
use crate::components::nav_bar::NavBar;
use crate::components::page_errors::PageErrors;
use crate::state::apikeys::ApiKeysState;
use crate::util::auth::use_current_user;

#[component]
pub fn TokenPage() -> impl IntoView {
    let auth = use_current_user();
    let services = use_services();
    let keys = RwSignal::new(ApiKeysState::default());
    let requested = RwSignal::new(false);

    Effect::new(move || {
        if auth.get().user.is_none() || requested.get_untracked() {
            return;
        }
        requested.set(true);
        keys.update(|s| s.loading = true);

        #[cfg(feature = "csr")]
        {
            let api = services.with_value(|s| s.api.clone());
            leptos::task::spawn_local(async move {
                let result = api.apikey_list().await;
                keys.update(|s| s.finish_list(result));
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = services;
        }
    });

    let on_create = move |_| {
        if keys.get_untracked().create_pending {
            return;
        }
        keys.update(|s| s.create_pending = true);

        #[cfg(feature = "csr")]
        {
            let api = services.with_value(|s| s.api.clone());
            leptos::task::spawn_local(async move {
                let result = api.apikey_create().await;
                keys.update(|s| s.finish_create(result));
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = services;
        }
    };

    let on_dismiss = move |_| keys.update(ApiKeysState::dismiss_secret);

    view! {
        <NavBar/>
        <div class="token-page">
            <h1>"API Keys"</h1>
            <PageErrors auth=auth own=Signal::derive(move || keys.get().error)/>
            <button class="btn token-page__create" on:click=on_create disabled=move || keys.get().create_pending>
                "+ New Key"
            </button>
            <Show when=move || keys.get().revealed.is_some()>
                <div class="token-page__secret">
                    <p>"Copy this secret now. It will not be shown again."</p>
                    <code>
                        {move || {
                            keys.get()
                                .revealed
                                .map(|k| format!("{}:{}", k.key_id, k.secret.unwrap_or_default()))
                                .unwrap_or_default()
                        }}
                    </code>
                    <button class="btn" on:click=on_dismiss>
                        "Done"
                    </button>
                </div>
            </Show>
            <Show when=move || keys.get().loading>
                <p>"Loading..."</p>
            </Show>
            <ul class="apikey-list">
                {move || {
                    keys.get()
                        .items
                        .into_iter()
                        .map(|k| {
                            view! {
                                <li class="apikey-row">
                                    <span class="apikey-row__created">{k.created}</span>
                                    <code class="apikey-row__key">{k.key_id}</code>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
        </div>
    }
}
