//! Guard for protected pages.
//!
//! The gate starts out [`GateState::Checking`]. Mounting it reads the
//! session once: no token sends the client to `/login` with a history
//! replace, a token makes the gate `Ready`. The gate never re-reads the
//! session after that, so a sign-out elsewhere only takes effect on the
//! next mount.

use log::{error, info};

use crate::{
    route::{Navigator, Route},
    session::{Session, SessionStore, SessionToken},
};

/// Shown while the token check has not run yet.
pub const LOADING: &str = "Loading...";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GateState {
    #[default]
    Checking,
    Redirecting,
    Ready(SessionToken),
}

#[derive(Debug, Default)]
pub struct AuthGate {
    state: GateState,
}

impl AuthGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &GateState {
        &self.state
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, GateState::Ready(_))
    }

    /// Runs the token check once; later calls keep the first outcome.
    ///
    /// A session that cannot be read is treated like a missing token.
    pub fn mount<S, N>(&mut self, session: &Session<S>, navigator: &mut N) -> &GateState
    where
        S: SessionStore,
        N: Navigator,
    {
        if self.state != GateState::Checking {
            return &self.state;
        }

        let token = session.token().unwrap_or_else(|e| {
            error!("Failed to read session: {}", e);
            None
        });
        self.state = match token {
            Some(token) => GateState::Ready(token),
            None => {
                info!("Not signed in, redirecting to {}", Route::Login);
                navigator.replace(Route::Login);
                GateState::Redirecting
            }
        };
        &self.state
    }

    /// Renders `content` only behind a ready gate; a pending check shows the
    /// loading indicator and a redirect shows nothing.
    pub fn render<F>(&self, content: F) -> String
    where
        F: FnOnce(&SessionToken) -> String,
    {
        match &self.state {
            GateState::Checking => LOADING.to_string(),
            GateState::Redirecting => String::new(),
            GateState::Ready(token) => content(token),
        }
    }
}
