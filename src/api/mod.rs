pub mod quibble;

use log::debug;
use reqwest::{Client, Response, Url};
use serde::Serialize;
use std::{sync::Arc, time::Duration};
use tokio::sync::{Semaphore, SemaphorePermit};

use crate::{config::Config, error::ClientError};

/// Default backend address for local development.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// HTTP plumbing shared by the backend calls.
///
/// Requests are sent exactly once; there is no retry layer. Form
/// submissions take the single submit permit for as long as they are
/// outstanding, the same way a disabled submit button would.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base: Url,
    submit: Arc<Semaphore>,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self, ClientError> {
        Self::with_base_url(config.api_url(), config.timeout())
    }

    pub fn with_base_url(base: &str, timeout: Option<Duration>) -> Result<Self, ClientError> {
        let base = Url::parse(base).map_err(|e| ClientError::InvalidBaseUrl {
            url: base.to_string(),
            reason: e.to_string(),
        })?;
        if base.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl {
                url: base.to_string(),
                reason: "not a base url".to_string(),
            });
        }

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base,
            submit: Arc::new(Semaphore::new(1)),
        })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Takes the submit permit, or fails if another submission still holds it.
    pub fn begin_submit(&self) -> Result<SemaphorePermit<'_>, ClientError> {
        self.submit
            .try_acquire()
            .map_err(|_| ClientError::SubmissionInFlight)
    }

    /// `{base}/{path}`, keeping any path prefix of the base address.
    fn endpoint(&self, path: &str) -> Url {
        let mut url = self.base.clone();
        let joined = format!("{}/{}", url.path().trim_end_matches('/'), path);
        url.set_path(&joined);
        url
    }

    async fn post_json<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<Response, ClientError> {
        let url = self.endpoint(path);
        debug!("POST {}", url);
        let response = self.client.post(url).json(body).send().await?;
        debug!("{} {}", response.status(), response.url());
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_appends_to_base() {
        let client = ApiClient::with_base_url("http://localhost:8000", None).unwrap();
        assert_eq!(
            client.endpoint("login").as_str(),
            "http://localhost:8000/login"
        );

        let client = ApiClient::with_base_url("https://example.com/api/", None).unwrap();
        assert_eq!(
            client.endpoint("register").as_str(),
            "https://example.com/api/register"
        );
    }

    #[test]
    fn rejects_unusable_base() {
        assert!(matches!(
            ApiClient::with_base_url("not a url", None),
            Err(ClientError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            ApiClient::with_base_url("mailto:someone@example.com", None),
            Err(ClientError::InvalidBaseUrl { .. })
        ));
    }

    #[tokio::test]
    async fn second_submit_is_rejected_while_first_is_outstanding() {
        let client = ApiClient::with_base_url(DEFAULT_API_URL, None).unwrap();
        let permit = client.begin_submit().unwrap();
        assert!(matches!(
            client.begin_submit(),
            Err(ClientError::SubmissionInFlight)
        ));
        drop(permit);
        assert!(client.begin_submit().is_ok());
    }
}
