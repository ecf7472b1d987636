use std::{io, path::PathBuf};

use thiserror::Error;

use crate::form::FormErrors;

/// Message shown for every rejected login, whatever the backend said.
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";
/// Shown when the backend rejects a registration without a usable `detail`.
pub const REGISTRATION_FAILED: &str = "Registration failed";

#[derive(Debug, Error)]
pub enum ClientError {
    /// Client-side form validation failed, nothing was sent
    #[error("{0}")]
    Validation(#[from] FormErrors),
    /// Backend rejected the registration
    #[error("{0}")]
    Registration(String),
    #[error("{}", INVALID_CREDENTIALS)]
    InvalidCredentials,
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid api url `{url}`: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    /// A submission from the same form is still outstanding
    #[error("a request is already in progress")]
    SubmissionInFlight,
    #[error("session store: {0}")]
    Session(#[source] StoreError),
    #[error("posts: {0}")]
    Posts(#[source] StoreError),
}

/// Failure reading or writing one of the local JSON files.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }
}
