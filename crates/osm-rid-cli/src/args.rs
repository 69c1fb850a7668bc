use clap::{Parser, Subcommand};
use osm_rid_core::DEFAULT_COUNTRY;
use std::path::PathBuf;

/// CLI arguments for osm-rid
#[derive(Debug, Parser)]
#[command(
    name = "osm-rid",
    version,
    about = "Find OpenStreetMap relation ids of cities by name"
)]
pub struct CliArgs {
    /// Path to the relation id snapshot (default: g_osm_relation_id.json in the osm-rid-core data dir)
    #[arg(long = "snapshot", env = "OSM_RID_SNAPSHOT", global = true)]
    pub snapshot: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the table contents
    Stats,

    /// List all countries
    Countries,

    /// List all states of a country
    States {
        /// Country name (case-insensitive)
        country: String,
    },

    /// Find the relation id of a city, or suggestions when there is no exact match
    Find {
        /// City name (case-insensitive)
        name: String,

        /// Country name
        #[arg(short = 'c', long = "country", default_value = DEFAULT_COUNTRY)]
        country: String,

        /// State name; when omitted all states of the country are searched
        #[arg(short = 's', long = "state")]
        state: Option<String>,
    },

    /// Import a country CSV (country_name,state_name,city_name,city_id) and save the snapshot
    #[cfg(feature = "csv")]
    Import {
        /// Path to the CSV file
        csv: PathBuf,

        /// Build and report the country without merging or saving
        #[arg(long = "dry-run")]
        dry_run: bool,

        /// Start from an empty table if the snapshot cannot be loaded
        #[arg(long = "init")]
        init: bool,
    },
}
