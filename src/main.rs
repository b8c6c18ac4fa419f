mod cli;
mod logging;

use std::process;

use clap::Parser;
use tracing::info;

use leave_ledger::api::{AppState, create_router};
use leave_ledger::config::ConfigLoader;

use crate::cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = ConfigLoader::load(&cli.config)?;
    info!(
        institution = %config.institution().name,
        utc_offset_minutes = config.institution().utc_offset_minutes,
        config_dir = %cli.config.display(),
        "Configuration loaded"
    );

    let router = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(cli.bind).await?;
    info!(address = %cli.bind, "Listening");

    axum::serve(listener, router).await?;
    Ok(())
}
