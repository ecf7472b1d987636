pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod form;
pub mod gate;
pub mod page;
pub mod post;
pub mod route;
pub mod session;

pub use app::{App, Outcome};
pub use error::ClientError;
