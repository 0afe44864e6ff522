//! Hospital admission and billing binary.

use std::io;

use hospital_service::{menu, HospitalService, LedgerConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing on stderr
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = LedgerConfig::default();

    tracing::info!("Loading hospital data from: {}", config.data_file.display());
    let mut service = HospitalService::open(config);

    menu::run(&mut service, io::stdin().lock(), io::stdout().lock())?;

    tracing::info!("Shutting down");
    Ok(())
}
