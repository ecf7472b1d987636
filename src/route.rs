use std::{fmt, str::FromStr};

use log::debug;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Landing,
    Login,
    Register,
    Community,
}

impl Route {
    pub const fn path(&self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::Login => "/login",
            Route::Register => "/register",
            Route::Community => "/community",
        }
    }

    /// Where the login page goes after signing in: the `next` target when it
    /// names a known page, `/community` otherwise.
    pub fn login_callback(next: Option<&str>) -> Route {
        next.and_then(|path| path.parse().ok())
            .unwrap_or(Route::Community)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown page `{0}`")]
pub struct UnknownRoute(pub String);

impl FromStr for Route {
    type Err = UnknownRoute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let path = s.split(&['?', '#'][..]).next().unwrap_or_default();
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        [Route::Landing, Route::Login, Route::Register, Route::Community]
            .into_iter()
            .find(|route| route.path() == path)
            .ok_or_else(|| UnknownRoute(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// New history entry
    Push(Route),
    /// Replaces the current entry, so "back" skips the page left behind
    Replace(Route),
}

impl Navigation {
    pub const fn route(&self) -> Route {
        match *self {
            Navigation::Push(route) | Navigation::Replace(route) => route,
        }
    }
}

/// Client-side navigation requested by a page.
pub trait Navigator {
    fn navigate(&mut self, navigation: Navigation);

    fn push(&mut self, route: Route) {
        self.navigate(Navigation::Push(route));
    }

    fn replace(&mut self, route: Route) {
        self.navigate(Navigation::Replace(route));
    }
}

/// Records navigations in order; the last one is where the client is headed.
#[derive(Debug, Clone, Default)]
pub struct History(Vec<Navigation>);

impl History {
    pub fn entries(&self) -> &[Navigation] {
        &self.0
    }

    pub fn last(&self) -> Option<Navigation> {
        self.0.last().copied()
    }
}

impl Navigator for History {
    fn navigate(&mut self, navigation: Navigation) {
        debug!("navigate {:?}", navigation);
        self.0.push(navigation);
    }
}
