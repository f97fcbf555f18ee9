//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::net::transport::BrowserTransport;
use crate::pages::{
    browse::BrowsePage, login::LoginPage, search::SearchPage, token::TokenPage, workspaces::WorkspacesPage,
};
use crate::routes::AppRoute;
use crate::state::auth::AuthState;
use crate::state::current_user::CurrentUser;
use crate::state::session::Session;

/// Process-wide handles shared by every view.
///
/// All three share one [`Session`].
#[derive(Clone, Debug)]
pub struct AppServices {
    pub session: Session,
    pub api: ApiClient,
    pub current_user: CurrentUser,
}

impl AppServices {
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        let session = Session::new();
        let api = ApiClient::new(BrowserTransport, session.clone(), config);
        let current_user = CurrentUser::new(session.clone());
        Self { session, api, current_user }
    }
}

/// Context handle for [`AppServices`]. The services hold `Rc`s, so they live
/// in thread-local storage.
pub type Services = StoredValue<AppServices, LocalStorage>;

/// Shared services handle from context. The handle is `Copy`, so closures
/// capture it and borrow the services only when they run.
pub fn use_services() -> Services {
    expect_context::<Services>()
}

/// Root application component.
///
/// Provides the shared services and the auth signal, then sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env().unwrap_or_default();
    let services = AppServices::new(&config);

    // Mirror every current-user transition into a signal views can track.
    let auth = RwSignal::new(AuthState::default());
    services.current_user.subscribe(move |load| auth.set(AuthState::from(load)));

    provide_context(auth);
    provide_context::<Services>(StoredValue::new_local(services));

    view! {
        <Title text="Workspaces"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=|| view! { <Redirect path=AppRoute::HOME.path()/> }/>
                <Route path=StaticSegment(AppRoute::Browse.segment()) view=BrowsePage/>
                <Route path=StaticSegment(AppRoute::Workspaces.segment()) view=WorkspacesPage/>
                <Route path=StaticSegment(AppRoute::Login.segment()) view=LoginPage/>
                <Route path=StaticSegment(AppRoute::Search.segment()) view=SearchPage/>
                <Route path=StaticSegment(AppRoute::Token.segment()) view=TokenPage/>
            </Routes>
        </Router>
    }
}
