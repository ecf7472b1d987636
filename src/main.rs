use std::{error::Error, process::ExitCode};

use log::{error, info};
use quibble_client::{
    api::quibble::QuibbleClient,
    config::Config,
    session::{FileStore, Session},
    App, ClientError,
};

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn Error>> {
    let config = Config::parse();
    config.init_logger();
    info!("# Quibble #");
    info!("");

    let client = QuibbleClient::new(&config)?;
    info!("Backend {}", client.inner().base());
    let session = Session::open(FileStore::new(config.session_file()));
    let mut app = App::new(client, session);

    let outcome = app.run(config.command()).await;
    for line in outcome.view.lines() {
        info!("{}", line);
    }

    match outcome.error {
        None => Ok(ExitCode::SUCCESS),
        Some(ClientError::Validation(errors)) => {
            for field in errors.iter() {
                error!("{}: {}", field.field, field.message);
            }
            Ok(ExitCode::FAILURE)
        }
        Some(e) => {
            error!("{}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}
