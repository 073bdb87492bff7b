// crates/tzlookup-core/src/lib.rs

//! # tzlookup-core
//!
//! Resolves, for a country code, the set of time-zone identifiers used in
//! that country, a "default" identifier, and a well-defined tie-breaking
//! search by UTC offset and DST state at a given instant — the mapping
//! needed when platform code observes `(country, offset, dst, timestamp)`
//! from network signaling and must name a concrete zone.
//!
//! The backing data is a `tzlookup.xml` document which is walked by a
//! streaming parser on every cache miss; nothing is held in memory beyond
//! the last country resolved.
//!
//! ```no_run
//! use tzlookup_core::TimeZoneFinder;
//!
//! # fn main() -> tzlookup_core::Result<()> {
//! let finder = TimeZoneFinder::from_path("/etc/tzlookup.xml")?;
//! if let Some(id) = finder.default_time_zone_id("de") {
//!     println!("Germany's default zone: {id}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod finder;
pub mod model;
pub mod oracle;
// The streaming parser layer; internal by design, exercised through the
// finder facade.
mod parser;
#[cfg(test)]
pub(crate) mod testutil;

// Re-exports
pub use crate::error::{Result, TzLookupError};
pub use crate::finder::TimeZoneFinder;
pub use crate::model::{normalize_country_code, CountryTimeZones};
#[cfg(feature = "tzdb")]
pub use crate::oracle::TzdbOracle;
pub use crate::oracle::{ZoneOffset, ZoneOracle};
