use clap::Parser;
use tracing_subscriber::EnvFilter;

use steam_tables::catalog::{TableCatalog, TableKind};
use steam_tables::config::Config;

#[derive(Parser)]
#[command(name = "dump-table")]
#[command(about = "Print one bundled steam property table", long_about = None)]
struct Cli {
    /// Table to print: 'cl', 'sat-t', 'sat-p' or 'sh'
    #[arg(long)]
    table: String,

    /// Output format: 'tsv' or 'json'
    #[arg(long, default_value = "tsv")]
    format: String,

    /// Fail on malformed numeric cells instead of coercing them to zero
    #[arg(long)]
    strict: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let kind = match cli.table.as_str() {
        "cl" | "compressed-liquid" => TableKind::CompressedLiquid,
        "sat-t" | "saturated-by-temperature" => TableKind::SaturatedByTemperature,
        "sat-p" | "saturated-by-pressure" => TableKind::SaturatedByPressure,
        "sh" | "superheated" => TableKind::Superheated,
        other => return Err(format!("unknown table: {other}").into()),
    };

    let strict = cli.strict || Config::from_env().strict_import;
    let catalog = TableCatalog::from_source(&steam_tables::resources::EmbeddedWorkbooks, strict)?;
    let table = catalog.get(kind);

    match cli.format.as_str() {
        "tsv" => table.write_tsv(std::io::stdout().lock())?,
        "json" => {
            serde_json::to_writer_pretty(std::io::stdout().lock(), table)?;
            println!();
        }
        other => return Err(format!("unknown format: {other}").into()),
    }

    Ok(())
}
