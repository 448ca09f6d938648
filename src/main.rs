use chet::app::{handle_fatal_error, init_logging, AppConfig};
use chet::cli::{execute_command, Cli};
use chet::config::Settings;
use clap::Parser;
use tracing::debug;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let verbose = cli.verbose;

    let settings = match Settings::load(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => handle_fatal_error(e.into(), verbose),
    };
    let config = AppConfig::new(verbose, settings);
    init_logging(&config);
    debug!("Loaded settings: {:?}", config.settings);

    if let Err(e) = execute_command(cli.command, &config.settings).await {
        handle_fatal_error(e, verbose);
    }
}
