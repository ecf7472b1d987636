use log::info;

use crate::{
    api::quibble::QuibbleClient,
    error::ClientError,
    form::{Field, FormErrors, LoginForm},
    route::{Navigator, Route},
    session::{Session, SessionStore},
};

use super::{card, input};

#[derive(Debug)]
pub struct LoginPage {
    form: LoginForm,
    next: Route,
    errors: FormErrors,
}

impl LoginPage {
    pub const TITLE: &'static str = "Welcome back";

    pub fn new(form: LoginForm, next: Route) -> Self {
        Self {
            form,
            next,
            errors: FormErrors::default(),
        }
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    /// Validates the form, signs in, stores the token and heads to the
    /// callback page. Invalid input never reaches the backend.
    pub async fn submit<S, N>(
        &mut self,
        client: &QuibbleClient,
        session: &mut Session<S>,
        navigator: &mut N,
    ) -> Result<(), ClientError>
    where
        S: SessionStore,
        N: Navigator,
    {
        self.errors = FormErrors::default();
        let credentials = self.form.validate().map_err(|errors| {
            self.errors = errors.clone();
            ClientError::Validation(errors)
        })?;

        let _submitting = client.inner().begin_submit()?;
        let token = client.login(&credentials).await?;
        session.sign_in(&token)?;
        info!("Signed in as {}", credentials.username);

        navigator.push(self.next);
        Ok(())
    }

    pub fn render(&self) -> String {
        let mut body = vec![];
        input(&mut body, Field::Username, &self.form.username, false, &self.errors);
        input(&mut body, Field::Password, &self.form.password, true, &self.errors);
        body.push(String::new());
        body.push(format!("New here? Create an account ({})", Route::Register));
        card(Self::TITLE, body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        api::ApiClient,
        config::Config,
        route::{History, Navigation},
        session::{MemoryStore, TOKEN_KEY},
    };
    use clap::Parser;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::{
        matchers::{method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn client(uri: &str) -> QuibbleClient {
        QuibbleClient::from_inner(ApiClient::with_base_url(uri, None).unwrap())
    }

    #[tokio::test]
    async fn success_stores_token_and_follows_callback() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "tok",
                "token_type": "bearer",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let mut session = Session::open(MemoryStore::default());
        let mut history = History::default();
        let mut page = LoginPage::new(LoginForm::new("alice", "hunter22"), Route::Landing);
        page.submit(&client(&server.uri()), &mut session, &mut history)
            .await
            .unwrap();

        assert_eq!(
            session.store().get(TOKEN_KEY).unwrap().as_deref(),
            Some("tok")
        );
        assert_eq!(history.entries(), &[Navigation::Push(Route::Landing)]);
    }

    #[tokio::test]
    async fn rejection_keeps_session_empty() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/login"))
            .respond_with(ResponseTemplate::new(401).set_body_string("user alice unknown"))
            .mount(&server)
            .await;

        let mut session = Session::open(MemoryStore::default());
        let mut history = History::default();
        let mut page = LoginPage::new(LoginForm::new("alice", "wrongpass"), Route::Community);
        let err = page
            .submit(&client(&server.uri()), &mut session, &mut history)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Invalid credentials");
        assert!(!session.is_signed_in().unwrap());
        assert!(history.entries().is_empty());
    }

    #[tokio::test]
    async fn invalid_form_sends_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let mut session = Session::open(MemoryStore::default());
        let mut history = History::default();
        let mut page = LoginPage::new(LoginForm::new("alice", ""), Route::Community);
        let err = page
            .submit(&client(&server.uri()), &mut session, &mut history)
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::Validation(_)));
        assert_eq!(page.errors().get(Field::Password), Some("Password is required"));
        assert!(page.render().contains("! Password is required"));
    }

    async fn assert_transport_failure(client: QuibbleClient) {
        let mut session = Session::open(MemoryStore::default());
        let mut history = History::default();
        let mut page = LoginPage::new(LoginForm::new("alice", "hunter22"), Route::Community);
        let err = page
            .submit(&client, &mut session, &mut history)
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::Transport(_)), "{:?}", err);
        assert!(!session.is_signed_in().unwrap());
        assert!(history.entries().is_empty());
    }

    #[tokio::test]
    async fn undecodable_token_is_a_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/login"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
            .expect(1)
            .mount(&server)
            .await;

        assert_transport_failure(client(&server.uri())).await;
    }

    #[tokio::test]
    async fn slow_backend_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/login"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"access_token": "tok", "token_type": "bearer"}))
                    .set_delay(Duration::from_secs(5)),
            )
            .mount(&server)
            .await;

        let uri = server.uri();
        let config =
            Config::try_parse_from(["quibble", "--api-url", uri.as_str(), "--timeout", "1"]).unwrap();
        assert_eq!(config.timeout(), Some(Duration::from_secs(1)));
        assert_transport_failure(QuibbleClient::new(&config).unwrap()).await;
    }

    #[tokio::test]
    async fn unreachable_backend_is_a_transport_error() {
        let addr = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap()
        };

        assert_transport_failure(client(&format!("http://{}", addr))).await;
    }

    #[test]
    fn render_masks_password() {
        let page = LoginPage::new(LoginForm::new("alice", "secret"), Route::Community);
        let view = page.render();
        assert!(view.contains("Welcome back"));
        assert!(view.contains("Username: alice"));
        assert!(!view.contains("secret"));
    }
}
