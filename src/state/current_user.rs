//! Current-user state machine behind the `use_current_user` hook.
//!
//! ```text
//! Unloaded --access--> Loading --ok--> Loaded(user)
//!                              \--err-> Failed(error)
//! ```
//!
//! One instance is shared by every view. The first [`CurrentUser::access`]
//! fetches `/api/users/me`; later calls return the cached state and never
//! fetch again until [`CurrentUser::reset`].
//!
//! ERROR HANDLING
//! ==============
//! A 401 clears the session user and redirects to the login route, unless
//! that route is already active. Every other failure, including a transport
//! error that produced no response at all, is returned to the caller
//! without navigating.

#[cfg(test)]
#[path = "current_user_test.rs"]
mod current_user_test;

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::transport::Transport;
use crate::net::types::User;
use crate::routes::{AppRoute, Navigator};
use crate::state::session::Session;

/// Load state of the current user.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum UserLoad {
    #[default]
    Unloaded,
    Loading,
    Loaded(Rc<User>),
    Failed(ApiError),
}

impl UserLoad {
    #[must_use]
    pub fn user(&self) -> Option<&Rc<User>> {
        match self {
            Self::Loaded(user) => Some(user),
            _ => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&ApiError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }
}

type Listener = Box<dyn Fn(&UserLoad)>;

struct Inner {
    state: RefCell<UserLoad>,
    listeners: RefCell<Vec<Listener>>,
    /// Bumped by `reset` so a fetch started before it cannot land afterwards.
    generation: Cell<u64>,
}

/// Shared handle to the current-user cache.
#[derive(Clone)]
pub struct CurrentUser {
    inner: Rc<Inner>,
    session: Session,
}

impl fmt::Debug for CurrentUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CurrentUser")
            .field("state", &*self.inner.state.borrow())
            .field("listeners", &self.inner.listeners.borrow().len())
            .finish_non_exhaustive()
    }
}

impl CurrentUser {
    #[must_use]
    pub fn new(session: Session) -> Self {
        let inner = Inner {
            state: RefCell::new(UserLoad::Unloaded),
            listeners: RefCell::new(Vec::new()),
            generation: Cell::new(0),
        };
        Self { inner: Rc::new(inner), session }
    }

    #[must_use]
    pub fn state(&self) -> UserLoad {
        self.inner.state.borrow().clone()
    }

    /// Register `listener` to run after every transition, in registration
    /// order. Listeners must not call `subscribe` themselves.
    pub fn subscribe(&self, listener: impl Fn(&UserLoad) + 'static) {
        self.inner.listeners.borrow_mut().push(Box::new(listener));
    }

    /// Forget the cached user and return to `Unloaded`.
    ///
    /// An in-flight fetch is discarded when it completes.
    pub fn reset(&self) {
        self.inner.generation.set(self.inner.generation.get() + 1);
        self.session.set_user(None);
        if *self.inner.state.borrow() != UserLoad::Unloaded {
            self.transition(UserLoad::Unloaded);
        }
    }

    /// Return the current user, fetching it on first access.
    ///
    /// `Ok(None)` means a fetch is already in flight.
    ///
    /// # Errors
    ///
    /// Returns the fetch error, or the cached one once `Failed`.
    pub async fn access<T, N>(&self, api: &ApiClient<T>, navigator: &N) -> Result<Option<Rc<User>>, ApiError>
    where
        T: Transport,
        N: Navigator + ?Sized,
    {
        match self.state() {
            UserLoad::Unloaded => {}
            UserLoad::Loading => return Ok(None),
            UserLoad::Loaded(user) => return Ok(Some(user)),
            UserLoad::Failed(err) => return Err(err),
        }

        let generation = self.inner.generation.get();
        self.transition(UserLoad::Loading);
        let outcome = api.users_me().await;

        if generation != self.inner.generation.get() {
            log::debug!("discarding current-user fetch started before reset");
            return outcome.map(|user| Some(Rc::new(user)));
        }

        match outcome {
            Ok(user) => {
                self.session.set_user(Some(user.clone()));
                let user = Rc::new(user);
                self.transition(UserLoad::Loaded(Rc::clone(&user)));
                Ok(Some(user))
            }
            Err(err) => {
                // Settle before navigating: the login view resets on mount.
                if err.is_unauthorized() {
                    self.session.set_user(None);
                } else {
                    log::error!("current user fetch failed: {err}");
                }
                self.transition(UserLoad::Failed(err.clone()));
                if err.is_unauthorized() {
                    redirect_to_login(navigator);
                }
                Err(err)
            }
        }
    }

    fn transition(&self, next: UserLoad) {
        log::debug!("current user: {:?} -> {:?}", self.inner.state.borrow(), next);
        *self.inner.state.borrow_mut() = next.clone();
        for listener in self.inner.listeners.borrow().iter() {
            listener(&next);
        }
    }
}

fn redirect_to_login<N: Navigator + ?Sized>(navigator: &N) {
    if navigator.current_route() == Some(AppRoute::Login) {
        return;
    }
    log::info!("session rejected; redirecting to {}", AppRoute::Login.path());
    navigator.navigate(AppRoute::Login);
}
