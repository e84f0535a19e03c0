use std::process::ExitCode;

use elsa::{app::App, config::Config, constants::LOOP_TIME, logging};
use tracing::{error, info};

/// The main entry point of the application.
///
/// Sets up logging and configuration, initializes SDL and the game, then runs the
/// fixed-rate loop until the game asks to exit.
pub fn main() -> ExitCode {
    logging::setup_logging();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };
    info!(?config, "Configuration loaded");

    let mut app = match App::new(&config) {
        Ok(app) => app,
        Err(e) => {
            error!(error = %e, "Could not create app");
            return ExitCode::FAILURE;
        }
    };

    info!(loop_time = ?LOOP_TIME, "Starting game loop");
    while app.run() {}

    info!("Exiting");
    ExitCode::SUCCESS
}
