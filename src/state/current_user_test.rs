use super::*;
use crate::config::ClientConfig;
use crate::net::request::{HttpRequest, HttpResponse};
use crate::net::test_helpers::{ME_JSON, ScriptedTransport, me};
use async_trait::async_trait;
use tokio::sync::oneshot;

// =========================================================================
// RecordingNavigator
// =========================================================================

struct RecordingNavigator {
    current: Cell<Option<AppRoute>>,
    pushed: RefCell<Vec<AppRoute>>,
}

impl RecordingNavigator {
    fn at(route: Option<AppRoute>) -> Self {
        Self { current: Cell::new(route), pushed: RefCell::new(Vec::new()) }
    }

    fn pushed(&self) -> Vec<AppRoute> {
        self.pushed.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn current_route(&self) -> Option<AppRoute> {
        self.current.get()
    }

    fn navigate(&self, route: AppRoute) {
        self.pushed.borrow_mut().push(route);
        self.current.set(Some(route));
    }
}

// =========================================================================
// GatedTransport
// =========================================================================

/// Holds the single reply back until the test releases it.
struct GatedTransport {
    gate: RefCell<Option<oneshot::Receiver<HttpResponse>>>,
}

impl GatedTransport {
    fn new(gate: oneshot::Receiver<HttpResponse>) -> Self {
        Self { gate: RefCell::new(Some(gate)) }
    }
}

#[async_trait(?Send)]
impl Transport for GatedTransport {
    async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let gate = self.gate.borrow_mut().take().ok_or_else(|| ApiError::Network("gate already used".to_owned()))?;
        gate.await.map_err(|e| ApiError::Network(e.to_string()))
    }
}

fn fixture(token: Option<&str>) -> (ScriptedTransport, Session, ApiClient<ScriptedTransport>, CurrentUser) {
    let transport = ScriptedTransport::new();
    let session = token.map_or_else(Session::new, Session::with_token);
    let api = ApiClient::new(transport.clone(), session.clone(), &ClientConfig::default());
    let current = CurrentUser::new(session.clone());
    (transport, session, api, current)
}

fn record_transitions(current: &CurrentUser) -> Rc<RefCell<Vec<UserLoad>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    current.subscribe(move |state| sink.borrow_mut().push(state.clone()));
    seen
}

// =========================================================================
// Successful load
// =========================================================================

#[test]
fn starts_unloaded() {
    let (_, _, _, current) = fixture(None);
    assert_eq!(current.state(), UserLoad::Unloaded);
    assert!(current.state().user().is_none());
}

#[tokio::test]
async fn first_access_loads_once_and_notifies_in_order() {
    let (transport, session, api, current) = fixture(Some("tok"));
    transport.reply(200, ME_JSON);
    let seen = record_transitions(&current);
    let nav = RecordingNavigator::at(Some(AppRoute::Workspaces));

    let user = current.access(&api, &nav).await.unwrap().unwrap();

    assert_eq!(*user, me());
    assert_eq!(*seen.borrow(), vec![UserLoad::Loading, UserLoad::Loaded(Rc::new(me()))]);
    assert_eq!(session.user(), Some(me()));
    assert!(nav.pushed().is_empty());
}

#[tokio::test]
async fn repeated_access_returns_same_reference_without_refetch() {
    let (transport, _, api, current) = fixture(Some("tok"));
    transport.reply(200, ME_JSON);
    let nav = RecordingNavigator::at(None);

    let first = current.access(&api, &nav).await.unwrap().unwrap();
    let second = current.access(&api, &nav).await.unwrap().unwrap();

    assert!(Rc::ptr_eq(&first, &second));
    assert!(Rc::ptr_eq(&first, current.state().user().unwrap()));
    assert_eq!(transport.requests().len(), 1);
}

#[tokio::test]
async fn clones_share_the_cached_user() {
    let (transport, _, api, current) = fixture(Some("tok"));
    transport.reply(200, ME_JSON);
    let view_a = current.clone();
    let view_b = current.clone();
    let nav = RecordingNavigator::at(None);

    view_a.access(&api, &nav).await.unwrap();
    let from_b = view_b.access(&api, &nav).await.unwrap();

    assert_eq!(from_b.as_deref(), Some(&me()));
    assert_eq!(transport.requests().len(), 1);
}

// =========================================================================
// 401 handling
// =========================================================================

#[tokio::test]
async fn unauthorized_off_login_navigates_exactly_once() {
    let (transport, session, api, current) = fixture(Some("expired"));
    transport.reply(401, r#"{"detail":"Unauthorized"}"#);
    session.set_user(Some(me()));
    let nav = RecordingNavigator::at(Some(AppRoute::Token));

    let err = current.access(&api, &nav).await.unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(nav.pushed(), vec![AppRoute::Login]);
    assert!(session.user().is_none());
    assert_eq!(current.state(), UserLoad::Failed(err.clone()));

    // Settled: a second access neither fetches nor navigates again.
    let again = current.access(&api, &nav).await.unwrap_err();
    assert_eq!(again, err);
    assert_eq!(nav.pushed().len(), 1);
    assert_eq!(transport.requests().len(), 1);
}

/// Mounts the login view synchronously: navigating to login resets the cache.
struct MountingNavigator {
    current: CurrentUser,
    pushed: RefCell<Vec<AppRoute>>,
}

impl Navigator for MountingNavigator {
    fn current_route(&self) -> Option<AppRoute> {
        self.pushed.borrow().last().copied()
    }

    fn navigate(&self, route: AppRoute) {
        self.pushed.borrow_mut().push(route);
        if route == AppRoute::Login {
            self.current.reset();
        }
    }
}

#[tokio::test]
async fn unauthorized_state_is_cleared_when_login_mounts_during_redirect() {
    let (transport, _, api, current) = fixture(Some("expired"));
    transport.reply(401, "").reply(200, ME_JSON);
    let nav = MountingNavigator { current: current.clone(), pushed: RefCell::new(Vec::new()) };

    current.access(&api, &nav).await.unwrap_err();

    assert_eq!(*nav.pushed.borrow(), vec![AppRoute::Login]);
    assert_eq!(current.state(), UserLoad::Unloaded);

    // The next authenticated view fetches again.
    let user = current.access(&api, &nav).await.unwrap();
    assert_eq!(user.as_deref(), Some(&me()));
    assert_eq!(transport.requests().len(), 2);
}

#[tokio::test]
async fn unauthorized_on_login_does_not_navigate() {
    let (transport, _, api, current) = fixture(None);
    transport.reply(401, "");
    let nav = RecordingNavigator::at(Some(AppRoute::Login));

    let err = current.access(&api, &nav).await.unwrap_err();

    assert_eq!(err.status(), Some(401));
    assert!(nav.pushed().is_empty());
}

// =========================================================================
// Other failures
// =========================================================================

#[tokio::test]
async fn server_error_surfaces_without_navigation() {
    let (transport, _, api, current) = fixture(Some("tok"));
    transport.reply(500, "internal error");
    let seen = record_transitions(&current);
    let nav = RecordingNavigator::at(Some(AppRoute::Workspaces));

    let err = current.access(&api, &nav).await.unwrap_err();

    assert_eq!(err, ApiError::Status { status: 500, body: "internal error".to_owned() });
    assert!(nav.pushed().is_empty());
    assert_eq!(*seen.borrow(), vec![UserLoad::Loading, UserLoad::Failed(err)]);
}

#[tokio::test]
async fn network_failure_without_response_is_not_treated_as_401() {
    let (transport, _, api, current) = fixture(Some("tok"));
    transport.fail("connection refused");
    let nav = RecordingNavigator::at(Some(AppRoute::Browse));

    let err = current.access(&api, &nav).await.unwrap_err();

    assert_eq!(err.status(), None);
    assert!(nav.pushed().is_empty());
    assert!(current.state().error().is_some());
}

// =========================================================================
// reset
// =========================================================================

#[tokio::test]
async fn reset_allows_a_fresh_fetch() {
    let (transport, session, api, current) = fixture(None);
    transport.reply(401, "").reply(200, ME_JSON);
    let nav = RecordingNavigator::at(Some(AppRoute::Login));

    current.access(&api, &nav).await.unwrap_err();
    session.set_token(Some("fresh".to_owned()));
    current.reset();
    assert_eq!(current.state(), UserLoad::Unloaded);

    let user = current.access(&api, &nav).await.unwrap();

    assert_eq!(user.as_deref(), Some(&me()));
    assert_eq!(transport.requests().len(), 2);
}

#[test]
fn reset_when_unloaded_does_not_notify() {
    let (_, session, _, current) = fixture(None);
    session.set_user(Some(me()));
    let seen = record_transitions(&current);

    current.reset();

    assert!(seen.borrow().is_empty());
    assert!(session.user().is_none());
}

#[test]
fn user_load_accessors() {
    let loaded = UserLoad::Loaded(Rc::new(me()));
    assert_eq!(loaded.user().map(|u| u.id.as_str()), Some("u1"));
    assert!(loaded.error().is_none());
    assert!(UserLoad::Loading.user().is_none());
    assert!(UserLoad::Unloaded.error().is_none());
}

// =========================================================================
// In-flight fetch
// =========================================================================

#[tokio::test]
async fn access_while_loading_returns_none_without_second_fetch() {
    let (release, gate) = oneshot::channel();
    let session = Session::with_token("tok");
    let api = ApiClient::new(GatedTransport::new(gate), session.clone(), &ClientConfig::default());
    let current = CurrentUser::new(session);
    let nav = RecordingNavigator::at(None);

    let first = current.access(&api, &nav);
    let second = async {
        while current.state() != UserLoad::Loading {
            tokio::task::yield_now().await;
        }
        let during = current.access(&api, &nav).await;
        release.send(HttpResponse { status: 200, body: ME_JSON.to_owned() }).unwrap();
        during
    };
    let (first, during) = tokio::join!(first, second);

    assert_eq!(during, Ok(None));
    assert_eq!(first.unwrap().as_deref(), Some(&me()));
    assert_eq!(current.state().user().map(|u| &**u), Some(&me()));
}

#[tokio::test]
async fn reset_during_fetch_discards_the_late_result() {
    let (release, gate) = oneshot::channel();
    let session = Session::with_token("tok");
    let api = ApiClient::new(GatedTransport::new(gate), session.clone(), &ClientConfig::default());
    let current = CurrentUser::new(session.clone());
    let nav = RecordingNavigator::at(Some(AppRoute::Workspaces));

    let fetch = current.access(&api, &nav);
    let interrupt = async {
        while current.state() != UserLoad::Loading {
            tokio::task::yield_now().await;
        }
        current.reset();
        release.send(HttpResponse { status: 401, body: String::new() }).unwrap();
    };
    let (outcome, ()) = tokio::join!(fetch, interrupt);

    assert!(outcome.unwrap_err().is_unauthorized());
    assert_eq!(current.state(), UserLoad::Unloaded);
    assert!(nav.pushed().is_empty());
    assert!(session.user().is_none());
}
