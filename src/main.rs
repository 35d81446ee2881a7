mod calendar;
mod config;
mod display;
mod error;
mod form;
mod grocery;
mod housing;
mod logging;
mod models;
mod roster;
mod store;
mod web;

use config::Config;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_logging();

    let config = Config::load().map_err(|e| {
        error!(error = %e, "invalid configuration");
        e
    })?;

    info!("Starting {} on port {}...", config.system_name, config.port);
    info!("Admin login: {}", config.admin_email);

    web::start_server(config).await?;
    info!("server stopped");
    Ok(())
}
