use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::{
    form::{LoginForm, RegisterForm},
    post::Filter,
    route::Route,
};

/// Page to visit.
#[derive(Debug, Clone, Subcommand, Default)]
pub enum Command {
    /// Show the landing page
    #[default]
    Landing,
    /// Sign in and store the access token
    Login(LoginArgs),
    /// Create an account, then sign in with it
    Register(RegisterArgs),
    /// Forget the stored access token
    Logout,
    /// Show the community feed (requires a session)
    Community(CommunityArgs),
}

impl Command {
    pub const fn route(&self) -> Route {
        match self {
            Self::Landing | Self::Logout => Route::Landing,
            Self::Login(_) => Route::Login,
            Self::Register(_) => Route::Register,
            Self::Community(_) => Route::Community,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct LoginArgs {
    #[arg(short, long, env = "QUIBBLE_USERNAME", default_value = "")]
    username: String,
    #[arg(short, long, env = "QUIBBLE_PASSWORD", default_value = "", hide_env_values = true)]
    password: String,
    /// Page to open after signing in [default: /community]
    #[arg(long)]
    next: Option<String>,
}

impl LoginArgs {
    pub fn form(&self) -> LoginForm {
        LoginForm::new(&self.username, &self.password)
    }
    pub fn next(&self) -> Route {
        Route::login_callback(self.next.as_deref())
    }
}

#[derive(Debug, Clone, Args)]
pub struct RegisterArgs {
    #[arg(short, long, default_value = "")]
    username: String,
    #[arg(short, long, default_value = "")]
    email: String,
    /// Date of birth, YYYY-MM-DD
    #[arg(short, long = "date-of-birth", default_value = "")]
    date_of_birth: String,
    #[arg(short, long, env = "QUIBBLE_PASSWORD", default_value = "", hide_env_values = true)]
    password: String,
}

impl RegisterArgs {
    pub fn form(&self) -> RegisterForm {
        RegisterForm {
            username: self.username.clone(),
            email: self.email.clone(),
            date_of_birth: self.date_of_birth.clone(),
            password: self.password.clone(),
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct CommunityArgs {
    /// Category to show
    #[arg(short, long, value_enum, default_value_t)]
    filter: Filter,
    /// JSON file with the feed's posts
    #[arg(long, env = "QUIBBLE_POSTS")]
    posts: Option<PathBuf>,
}

impl CommunityArgs {
    pub const fn filter(&self) -> Filter {
        self.filter
    }
    pub fn posts(&self) -> Option<&PathBuf> {
        self.posts.as_ref()
    }
}
