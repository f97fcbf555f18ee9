//! Error lines shown at the top of every authenticated page.
//!
//! A page has two failure sources: the current-user fetch behind
//! `use_current_user`, and the page's own request. Both are listed, the
//! current-user error first.

#[cfg(test)]
#[path = "page_errors_test.rs"]
mod page_errors_test;

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// Messages to render for `auth` and the page's own error, in order.
pub fn page_errors(auth: &AuthState, own: Option<&str>) -> Vec<String> {
    auth.error.iter().map(String::as_str).chain(own).map(str::to_owned).collect()
}

#[component]
pub fn PageErrors(auth: RwSignal<AuthState>, own: Signal<Option<String>>) -> impl IntoView {
    view! {
        {move || {
            let own = own.get();
            page_errors(&auth.get(), own.as_deref())
                .into_iter()
                .map(|message| view! { <p class="page-error">{message}</p> })
                .collect::<Vec<_>>()
        }}
    }
}
