use std::fmt;

use log::{debug, log_enabled, trace, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    config::Config,
    error::{ClientError, REGISTRATION_FAILED},
};

use super::ApiClient;

/// Body of `POST /register`.
#[derive(Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub date_of_birth: String,
    pub password: String,
}

/// Body of `POST /login`.
#[derive(Clone, Serialize, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl From<&Registration> for Credentials {
    fn from(registration: &Registration) -> Self {
        Self {
            username: registration.username.clone(),
            password: registration.password.clone(),
        }
    }
}

// Passwords stay out of logs and panics.
impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Registration")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("date_of_birth", &self.date_of_birth)
            .finish_non_exhaustive()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct AccessToken {
    pub access_token: String,
    pub token_type: String,
}

/// Backend text for a rejected registration: the `detail` field of a JSON
/// object body. Non-string details (e.g. a list of field errors) are passed
/// on as compact JSON; anything else yields `None`.
fn error_detail(body: &str) -> Option<String> {
    let Ok(Value::Object(mut fields)) = serde_json::from_str::<Value>(body) else {
        return None;
    };
    match fields.remove("detail")? {
        Value::Null => None,
        Value::String(detail) => Some(detail),
        other => Some(other.to_string()),
    }
}

#[derive(Debug, Clone)]
pub struct QuibbleClient {
    inner: ApiClient,
}

impl QuibbleClient {
    pub fn new(config: &Config) -> Result<Self, ClientError> {
        Ok(Self::from_inner(ApiClient::new(config)?))
    }

    pub fn from_inner(inner: ApiClient) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &ApiClient {
        &self.inner
    }

    /// Creates an account. A rejection carries the backend's own `detail`,
    /// or a generic message when the body has none.
    pub async fn register(&self, registration: &Registration) -> Result<(), ClientError> {
        let response = self.inner.post_json("register", registration).await?;
        let status = response.status();
        if status.is_success() {
            debug!("Registered {}", registration.username);
            return Ok(());
        }

        let detail = match response.text().await {
            Ok(body) => {
                trace!("{}", body);
                error_detail(&body)
            }
            Err(e) => {
                warn!("Unreadable registration response: {}", e);
                None
            }
        };
        let message = detail.unwrap_or_else(|| REGISTRATION_FAILED.to_string());
        warn!("Registration rejected ({}): {}", status, message);
        Err(ClientError::Registration(message))
    }

    /// Exchanges credentials for an access token. Every rejection maps to the
    /// same generic error so the response never tells which part was wrong.
    pub async fn login(&self, credentials: &Credentials) -> Result<AccessToken, ClientError> {
        let response = self.inner.post_json("login", credentials).await?;
        let status = response.status();
        if !status.is_success() {
            if log_enabled!(log::Level::Trace) {
                trace!("{}", response.text().await.unwrap_or_default());
            }
            warn!("Login rejected ({})", status);
            return Err(ClientError::InvalidCredentials);
        }

        let token: AccessToken = response.json().await?;
        debug!("Logged in as {} ({})", credentials.username, token.token_type);
        Ok(token)
    }
}
