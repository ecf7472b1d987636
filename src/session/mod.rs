//! Client-local session state.
//!
//! A [`SessionStore`] is a tiny key/value store standing in for browser
//! local storage; the only key the client uses is [`TOKEN_KEY`]. The
//! [`Session`] object wraps a store and is handed explicitly to the pages
//! that need it.
//!
//! Reads are not synchronised with other processes: a token removed by
//! another client after a page was mounted does not affect that page.

pub mod file;
pub mod memory;

use log::{debug, info};

use crate::{
    api::quibble::AccessToken,
    error::{ClientError, StoreError},
};

pub use file::FileStore;
pub use memory::MemoryStore;

/// Storage key holding the access token.
pub const TOKEN_KEY: &str = "access_token";

pub trait SessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// Opaque proof that a token was present when it was read.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str("SessionToken(..)")
    }
}

#[derive(Debug)]
pub struct Session<S: SessionStore> {
    store: S,
}

impl<S: SessionStore> Session<S> {
    pub fn open(store: S) -> Self {
        Self { store }
    }

    /// Current token; an empty stored value counts as no token.
    pub fn token(&self) -> Result<Option<SessionToken>, ClientError> {
        let token = self.store.get(TOKEN_KEY).map_err(ClientError::Session)?;
        Ok(token.filter(|t| !t.is_empty()).map(SessionToken))
    }

    pub fn is_signed_in(&self) -> Result<bool, ClientError> {
        Ok(self.token()?.is_some())
    }

    /// Stores the token of a successful login, replacing any previous one.
    pub fn sign_in(&mut self, token: &AccessToken) -> Result<(), ClientError> {
        self.store
            .set(TOKEN_KEY, &token.access_token)
            .map_err(ClientError::Session)?;
        debug!("Stored {} token", token.token_type);
        Ok(())
    }

    pub fn sign_out(&mut self) -> Result<(), ClientError> {
        self.store.remove(TOKEN_KEY).map_err(ClientError::Session)?;
        info!("Signed out");
        Ok(())
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
