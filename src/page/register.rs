use log::info;

use crate::{
    api::quibble::{Credentials, QuibbleClient},
    error::ClientError,
    form::{Field, FormErrors, RegisterForm},
    route::{Navigator, Route},
    session::{Session, SessionStore},
};

use super::{card, input};

#[derive(Debug)]
pub struct RegisterPage {
    form: RegisterForm,
    errors: FormErrors,
}

impl RegisterPage {
    pub const TITLE: &'static str = "Create account";

    pub fn new(form: RegisterForm) -> Self {
        Self {
            form,
            errors: FormErrors::default(),
        }
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    /// Registers, then signs in with the same credentials and opens the
    /// feed. Login is only attempted once registration has succeeded, and a
    /// failed login is returned like any other failure.
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
        let registration = self.form.validate().map_err(|errors| {
            self.errors = errors.clone();
            ClientError::Validation(errors)
        })?;

        let _submitting = client.inner().begin_submit()?;
        client.register(&registration).await?;
        info!("Registered {}", registration.username);

        let token = client.login(&Credentials::from(&registration)).await?;
        session.sign_in(&token)?;
        info!("Signed in as {}", registration.username);

        navigator.push(Route::Community);
        Ok(())
    }

    pub fn render(&self) -> String {
        let mut body = vec![];
        input(&mut body, Field::Username, &self.form.username, false, &self.errors);
        input(&mut body, Field::Email, &self.form.email, false, &self.errors);
        input(
            &mut body,
            Field::DateOfBirth,
            &self.form.date_of_birth,
            false,
            &self.errors,
        );
        input(&mut body, Field::Password, &self.form.password, true, &self.errors);
        body.push(String::new());
        body.push(format!("Have an account? Sign in ({})", Route::Login));
        card(Self::TITLE, body)
    }
}
