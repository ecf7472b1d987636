//! Typed form state for the login and registration pages.
//!
//! Every field, its rules and its error slot are spelled out in the form
//! struct; validation runs before any request is built and yields either
//! the request payload or the per-field errors.

pub mod rule;

use std::fmt;

use thiserror::Error;

use crate::api::quibble::{Credentials, Registration};
use rule::{first_violation, Rule};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Username,
    Email,
    DateOfBirth,
    Password,
}

impl Field {
    pub const fn label(&self) -> &'static str {
        match self {
            Field::Username => "Username",
            Field::Email => "Email",
            Field::DateOfBirth => "Date of birth",
            Field::Password => "Password",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

/// Errors of one validation pass, at most one per field, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{}", summary(.0))]
pub struct FormErrors(Vec<FieldError>);

/// `Label: message` per field, separated by `; `.
fn summary(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|error| format!("{}: {}", error.field, error.message))
        .collect::<Vec<_>>()
        .join("; ")
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    fn check(&mut self, field: Field, rules: &[Rule], value: &str) {
        if let Some(message) = first_violation(rules, value) {
            self.0.push(FieldError { field, message });
        }
    }

    fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, FormErrors> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub const USERNAME: &'static [Rule] = &[Rule::Required("Username is required")];
    pub const PASSWORD: &'static [Rule] = &[Rule::Required("Password is required")];

    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> Result<Credentials, FormErrors> {
        let mut errors = FormErrors::default();
        errors.check(Field::Username, Self::USERNAME, &self.username);
        errors.check(Field::Password, Self::PASSWORD, &self.password);
        errors.into_result(|| Credentials {
            username: self.username.clone(),
            password: self.password.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub date_of_birth: String,
    pub password: String,
}

impl RegisterForm {
    pub const USERNAME: &'static [Rule] = &[Rule::Required("Username is required")];
    pub const EMAIL: &'static [Rule] = &[
        Rule::Required("Email is required"),
        Rule::Email("Enter a valid email"),
    ];
    pub const DATE_OF_BIRTH: &'static [Rule] = &[
        Rule::Required("Birth-date is required"),
        Rule::Date("Enter a valid date"),
    ];
    pub const PASSWORD: &'static [Rule] = &[
        Rule::Required("Password is required"),
        Rule::MinLength(6, "Min 6 chars"),
    ];

    pub fn validate(&self) -> Result<Registration, FormErrors> {
        let mut errors = FormErrors::default();
        errors.check(Field::Username, Self::USERNAME, &self.username);
        errors.check(Field::Email, Self::EMAIL, &self.email);
        errors.check(Field::DateOfBirth, Self::DATE_OF_BIRTH, &self.date_of_birth);
        errors.check(Field::Password, Self::PASSWORD, &self.password);
        errors.into_result(|| Registration {
            username: self.username.clone(),
            email: self.email.clone(),
            date_of_birth: self.date_of_birth.clone(),
            password: self.password.clone(),
        })
    }
}
