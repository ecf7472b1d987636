//! Text renditions of the client's pages.
//!
//! Each page owns its state (form values, errors, gate, filter) and
//! renders to a plain string. Pages that talk to the backend do so in
//! `submit`, which also records where the client navigates next.

pub mod community;
pub mod landing;
pub mod login;
pub mod register;

pub use community::CommunityPage;
pub use landing::LandingPage;
pub use login::LoginPage;
pub use register::RegisterPage;

use crate::form::{Field, FormErrors};

/// Card around a form, titled like the page.
fn card(title: &str, body: Vec<String>) -> String {
    let width = body
        .iter()
        .map(|line| line.chars().count())
        .chain(Some(title.chars().count()))
        .max()
        .unwrap_or_default();

    let mut lines = vec![format!("+-{}-+", "-".repeat(width))];
    lines.push(format!("| {:^width$} |", title));
    lines.push(format!("+-{}-+", "-".repeat(width)));
    for line in body {
        lines.push(format!("| {:<width$} |", line));
    }
    lines.push(format!("+-{}-+", "-".repeat(width)));
    lines.join("\n")
}

/// One labelled input, with its error underneath when it has one.
fn input(lines: &mut Vec<String>, field: Field, value: &str, secret: bool, errors: &FormErrors) {
    let value = if secret {
        "*".repeat(value.chars().count())
    } else {
        value.to_string()
    };
    lines.push(format!("{}: {}", field.label(), value));
    if let Some(message) = errors.get(field) {
        lines.push(format!("  ! {}", message));
    }
}
