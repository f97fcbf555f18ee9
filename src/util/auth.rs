//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every authenticated view calls [`use_current_user`]. The first call
//! starts the `/api/users/me` fetch; all calls return the same `AuthState`
//! signal, which the app root keeps in sync with
//! [`CurrentUser`](crate::state::current_user::CurrentUser).

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::app::use_services;
use crate::routes::{AppRoute, Navigator};
use crate::state::auth::AuthState;
use crate::state::current_user::UserLoad;

/// [`Navigator`] backed by the Leptos router.
#[derive(Clone)]
pub struct RouterNavigator<F> {
    navigate: F,
    pathname: Memo<String>,
}

impl<F> RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    pub fn new(navigate: F, pathname: Memo<String>) -> Self {
        Self { navigate, pathname }
    }
}

impl<F> Navigator for RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    fn current_route(&self) -> Option<AppRoute> {
        AppRoute::from_path(&self.pathname.get_untracked())
    }

    fn navigate(&self, route: AppRoute) {
        (self.navigate)(route.path(), NavigateOptions::default());
    }
}

/// Current-user hook for route components.
///
/// Must be called inside the `<Router>`. A 401 redirects to `/login` (unless
/// already there); other failures show up in `AuthState::error`.
pub fn use_current_user() -> RwSignal<AuthState> {
    let auth = expect_context::<RwSignal<AuthState>>();
    let services = use_services().get_value();
    let navigator = RouterNavigator::new(use_navigate(), use_location().pathname);

    if services.current_user.state() != UserLoad::Unloaded {
        return auth;
    }

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        if let Err(e) = services.current_user.access(&services.api, &navigator).await {
            log::debug!("current user unavailable: {e}");
        }
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = navigator;
    }

    auth
}
