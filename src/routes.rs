//! Client-side route table and the navigation seam.
//!
//! The table is static: each [`AppRoute`] has a stable name and a path. `/`
//! is not a route of its own; the router redirects it to
//! [`AppRoute::HOME`].

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Browse,
    Workspaces,
    Login,
    Search,
    Token,
}

impl AppRoute {
    pub const ALL: [Self; 5] = [Self::Browse, Self::Workspaces, Self::Login, Self::Search, Self::Token];

    /// Redirect target of `/`.
    pub const HOME: Self = Self::Workspaces;

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Browse => "browse",
            Self::Workspaces => "workspaces",
            Self::Login => "login",
            Self::Search => "search",
            Self::Token => "token",
        }
    }

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Browse => "/browse",
            Self::Workspaces => "/workspaces",
            Self::Login => "/login",
            Self::Search => "/search",
            Self::Token => "/token",
        }
    }

    /// Single path segment as the router matches it.
    #[must_use]
    pub fn segment(self) -> &'static str {
        self.name()
    }

    /// Resolve a location pathname. Trailing slashes are ignored; `/` and
    /// unknown paths resolve to `None`.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        Self::ALL.into_iter().find(|route| route.path() == trimmed)
    }
}

/// Navigation side effects, as seen by state that needs to redirect.
pub trait Navigator {
    /// Route currently displayed, if the location matches one.
    fn current_route(&self) -> Option<AppRoute>;

    /// Push `route` onto the history.
    fn navigate(&self, route: AppRoute);
}
