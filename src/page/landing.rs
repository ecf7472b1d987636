use crate::route::Route;

/// Public landing page; needs no session.
#[derive(Debug, Default)]
pub struct LandingPage;

impl LandingPage {
    pub fn render(&self) -> String {
        [
            "Quibble AI".to_string(),
            "  Profile (/profile)    CREATE (/create)".to_string(),
            String::new(),
            "CREATE. ENGAGE. GROW.".to_string(),
            "  Experience the ease of automated content creation and keep your social media fresh."
                .to_string(),
            format!("  [ CREATE POSTS ] -> {}", Route::Community),
            String::new(),
            format!(
                "Sign in at {} or create an account at {}",
                Route::Login,
                Route::Register
            ),
        ]
        .join("\n")
    }
}
