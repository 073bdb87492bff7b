//! tzlookup — Command-line interface for tzlookup-core
//!
//! This binary provides a simple way to inspect and check a `tzlookup.xml`
//! data file from your terminal: whole-document validation, the IANA
//! version stamp, per-country zone lists, and the offset/DST matching
//! lookup used when only network-observed time information is available.
//!
//! Usage examples
//! --------------
//!
//! - Validate a candidate data file before installing it
//!   $ tzlookup --input tzlookup.xml validate
//!
//! - Show the IANA rules version the file was built against
//!   $ tzlookup --input tzlookup.xml version
//!
//! - Show the zones configured for a country (case-insensitive)
//!   $ tzlookup --input tzlookup.xml country us
//!   $ tzlookup --input tzlookup.xml --json country GB
//!
//! - Resolve an observed offset to a concrete zone
//!   $ tzlookup --input tzlookup.xml lookup us --offset -18000 \
//!       --at 2020-01-15T12:00:00Z
//!   $ tzlookup --input tzlookup.xml lookup us --offset -18000 \
//!       --at 2020-01-15T12:00:00Z --bias America/Detroit

mod args;

use crate::args::{CliArgs, Commands};
use anyhow::{bail, Context};
use chrono::{DateTime, Utc};
use clap::Parser;
use serde::Serialize;
use tzlookup_core::{TimeZoneFinder, TzdbOracle, ZoneOracle};

#[derive(Serialize)]
struct CountryReport {
    country: String,
    default: Option<String>,
    zone_ids: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = CliArgs::parse();

    let finder = TimeZoneFinder::from_path(&args.input)
        .with_context(|| format!("cannot open {}", args.input.display()))?;

    match args.command {
        Commands::Validate => {
            finder
                .validate()
                .with_context(|| format!("{} failed validation", args.input.display()))?;
            println!("OK");
        }

        Commands::Version => match finder.schema_version() {
            Some(version) => println!("{version}"),
            None => bail!("no version information available"),
        },

        Commands::Country { code } => {
            let Some(zone_ids) = finder.time_zone_ids(&code) else {
                bail!("no country found for: {code}");
            };
            let default = finder.default_time_zone_id(&code);

            if args.json {
                let report = CountryReport {
                    country: tzlookup_core::normalize_country_code(&code),
                    default,
                    zone_ids,
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("Country: {}", tzlookup_core::normalize_country_code(&code));
                match default {
                    Some(id) => println!("Default: {id}"),
                    None => println!("Default: (none recognized)"),
                }
                println!("Zones: {}", zone_ids.len());
                for id in &zone_ids {
                    println!("- {id}");
                }
            }
        }

        Commands::Lookup {
            code,
            offset,
            dst,
            at,
            bias,
        } => {
            let when: DateTime<Utc> = match at {
                Some(instant) => instant
                    .parse()
                    .context("invalid --at instant, expected RFC 3339")?,
                None => Utc::now(),
            };
            let oracle = TzdbOracle;
            let bias = match bias.as_deref() {
                Some(id) => Some(
                    oracle
                        .resolve(id)
                        .with_context(|| format!("unknown bias zone id: {id}"))?,
                ),
                None => None,
            };

            match finder.time_zone_by_offset(&code, offset, dst, when, bias.as_ref()) {
                Some(zone) => println!("{}", oracle.zone_id(&zone)),
                None => bail!("no zone in '{code}' matches offset {offset}s (dst={dst})"),
            }
        }
    }

    Ok(())
}
