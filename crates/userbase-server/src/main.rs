//! # Userbase Server
//!
//! Main entry point: loads configuration, installs logging, wires the
//! store, service and router, then serves until shutdown.

use tracing::{error, info};
use userbase_config::ConfigLoader;
use userbase_core::UserbaseResult;
use userbase_server::{
    startup::{init_logging, print_banner},
    AppBuilder,
};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Application error: {}", e);
        eprintln!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> UserbaseResult<()> {
    let config_loader = ConfigLoader::from_default_location()?;
    let config = config_loader.get().await;

    init_logging(&config.observability);
    print_banner();

    info!("Starting {} v{}", config.app.name, env!("CARGO_PKG_VERSION"));
    info!("Environment: {}", config.app.environment);

    let app = AppBuilder::new().with_config(config).build().await?;
    app.run().await
}
