use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// CLI arguments for tzlookup-cli
#[derive(Debug, Parser)]
#[command(
    name = "tzlookup",
    version,
    about = "Query and validate tzlookup.xml country/time-zone data"
)]
pub struct CliArgs {
    /// Path to the tzlookup.xml data file
    #[arg(short = 'i', long = "input", global = true, default_value = "tzlookup.xml")]
    pub input: PathBuf,

    /// Emit machine-readable JSON instead of plain text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run whole-document validation and report the first problem found
    Validate,

    /// Print the IANA rules version the data file was built against
    Version,

    /// Show the default zone and zone list for a country code
    Country {
        /// ISO 3166 alpha-2 country code (case-insensitive)
        code: String,
    },

    /// Find the country's zone matching an observed UTC offset and DST state
    Lookup {
        /// ISO 3166 alpha-2 country code (case-insensitive)
        code: String,

        /// Observed total offset from UTC, in seconds (e.g. -18000)
        #[arg(long, allow_hyphen_values = true)]
        offset: i32,

        /// Whether daylight saving time was observed to be active
        #[arg(long)]
        dst: bool,

        /// Instant to evaluate, RFC 3339 (default: now)
        #[arg(long)]
        at: Option<String>,

        /// Zone id preferred when several zones match
        #[arg(long)]
        bias: Option<String>,
    },
}
