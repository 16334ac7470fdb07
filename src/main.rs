use std::io::Write;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use steam_tables::catalog::{TableCatalog, TableKind};
use steam_tables::config::Config;

/// Smoke-test harness: loads the catalog and prints all four tables.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing with environment filter support
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,steam_tables=debug")),
        )
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env();
    info!("Loading steam tables with config: {:?}", config);

    let catalog = TableCatalog::load_with_config(&config)?;
    info!("All property tables loaded");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for kind in TableKind::ALL {
        writeln!(out, "{} table:", kind)?;
        catalog.get(kind).write_tsv(&mut out)?;
        writeln!(out)?;
    }

    Ok(())
}
