pub mod command;

use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use dotenv::dotenv;
use std::{path::PathBuf, time::Duration};

use crate::{api::DEFAULT_API_URL, session::FileStore};
use command::Command;

#[derive(Debug, Clone, Parser)]
#[command(name = "quibble", version, about = "Quibble community client")]
pub struct Config {
    /// Backend address
    #[arg(long, env = "API_URL", default_value = DEFAULT_API_URL, global = true)]
    api_url: String,
    /// Where the access token is kept [default: platform data dir]
    #[arg(long, env = "QUIBBLE_SESSION_FILE", global = true)]
    session_file: Option<PathBuf>,
    /// Request timeout in seconds [default: none]
    #[arg(long, global = true)]
    timeout: Option<u64>,
    #[command(subcommand)]
    command: Option<Command>,
    #[command(flatten)]
    pub verbose: Verbosity<InfoLevel>,
}

impl Config {
    /// Parse the configuration from the environment and command line arguments
    pub fn parse() -> Self {
        dotenv().ok();
        <Self as Parser>::parse()
    }
    /// Create a logger with the configured verbosity level
    pub fn init_logger(&self) {
        env_logger::Builder::new()
            .filter_level(self.verbose.log_level_filter())
            .format_target(false)
            .init();
    }
    pub fn api_url(&self) -> &str {
        &self.api_url
    }
    pub fn session_file(&self) -> PathBuf {
        self.session_file
            .clone()
            .unwrap_or_else(FileStore::default_path)
    }
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or_default()
    }
}
