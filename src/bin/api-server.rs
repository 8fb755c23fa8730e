//! XAU/USD signal API server
//!
//! Serves signal inference, bar ingestion, price lookup, the training stub
//! and the TradingView alert feed.

use dotenvy::dotenv;
use tracing::{error, info};
use xausignal::config::{get_environment, ServiceConfig, Settings};
use xausignal::core::http::start_server;
use xausignal::logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    logging::init_logging();

    let settings = Settings::from_env();
    let config = ServiceConfig::from_env();

    info!("Starting XAU/USD signal API server");
    info!(environment = %get_environment(), instrument = %settings.instrument, "Environment");
    info!(port = config.port, "HTTP Server: http://0.0.0.0:{}", config.port);

    if let Err(e) = start_server(settings, config).await {
        error!(error = %e, "HTTP server error");
        return Err(e);
    }

    Ok(())
}
