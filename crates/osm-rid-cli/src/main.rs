//! osm-rid — Command-line interface for osm-rid-core
//!
//! Looks up OpenStreetMap relation ids of cities from the terminal and keeps
//! the relation id snapshot up to date from per-country CSV files.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ osm-rid stats
//!
//! - List countries, or the states of one country
//!   $ osm-rid countries
//!   $ osm-rid states "united states"
//!
//! - Find a city (case-insensitive; prefixes give suggestions)
//!   $ osm-rid find "Los Angeles" --state California
//!   $ osm-rid find "Los An"
//!   $ osm-rid find Beijing --country China
//!
//! - Import or replace a country from CSV and save the snapshot
//!   $ osm-rid import us_cities_7824.csv
//!
//! Data source
//! -----------
//!
//! By default the CLI reads `g_osm_relation_id.json` from the `osm-rid-core`
//! data directory. Use `--snapshot <path>` (or `OSM_RID_SNAPSHOT`) to point at
//! another file; `*.json.gz` snapshots are read and written compressed.
//! Set `RUST_LOG=info` to see load/merge/persist events on stderr.
use clap::Parser;
use osm_rid_cli::args::CliArgs;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = CliArgs::parse();
    let stdout = std::io::stdout();
    osm_rid_cli::run(args, &mut stdout.lock())
}
