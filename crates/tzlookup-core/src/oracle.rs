// crates/tzlookup-core/src/oracle.rs

//! # Zone Oracle
//!
//! The authoritative answers about time zones — which identifiers exist,
//! and what offset/DST state a zone has at an instant — come from outside
//! the parser. This trait is that boundary. The default implementation,
//! [`TzdbOracle`], is backed by the IANA table embedded in `chrono-tz`;
//! swap in your own to pin lookups to a different zone database.

use chrono::{DateTime, Utc};

/// UTC offset information for one zone at one instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ZoneOffset {
    /// Total offset from UTC in seconds, daylight savings included.
    pub utc_offset_seconds: i32,
    /// Whether daylight saving time is in effect at the instant.
    pub is_dst: bool,
}

/// External authority on zone identifiers and their offsets.
pub trait ZoneOracle {
    /// A resolved zone object.
    type Zone: Clone + Send + Sync;

    /// Resolves a zone identifier, or `None` if it is not recognized.
    fn resolve(&self, zone_id: &str) -> Option<Self::Zone>;

    /// Whether the identifier names a known zone. The answer may legitimately
    /// differ from [`resolve`](Self::resolve) over time: the data file and
    /// the runtime zone database are updated independently.
    fn is_known(&self, zone_id: &str) -> bool {
        self.resolve(zone_id).is_some()
    }

    /// The canonical identifier of a resolved zone.
    fn zone_id<'a>(&self, zone: &'a Self::Zone) -> &'a str;

    /// The zone's UTC offset and DST state at `when`.
    fn offset_at(&self, zone: &Self::Zone, when: DateTime<Utc>) -> ZoneOffset;
}

#[cfg(feature = "tzdb")]
mod tzdb {
    use super::{ZoneOffset, ZoneOracle};
    use chrono::{DateTime, TimeZone as _, Utc};
    use chrono_tz::{OffsetComponents, Tz, TZ_VARIANTS};
    use once_cell::sync::Lazy;
    use std::collections::HashSet;

    static KNOWN_ZONE_IDS: Lazy<HashSet<&'static str>> =
        Lazy::new(|| TZ_VARIANTS.iter().map(|tz| tz.name()).collect());

    /// Zone oracle backed by the IANA table embedded in `chrono-tz`.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct TzdbOracle;

    impl ZoneOracle for TzdbOracle {
        type Zone = Tz;

        fn resolve(&self, zone_id: &str) -> Option<Tz> {
            zone_id.parse().ok()
        }

        fn is_known(&self, zone_id: &str) -> bool {
            KNOWN_ZONE_IDS.contains(zone_id)
        }

        fn zone_id<'a>(&self, zone: &'a Tz) -> &'a str {
            zone.name()
        }

        fn offset_at(&self, zone: &Tz, when: DateTime<Utc>) -> ZoneOffset {
            let offset = zone.offset_from_utc_datetime(&when.naive_utc());
            let dst = offset.dst_offset();
            ZoneOffset {
                utc_offset_seconds: (offset.base_utc_offset() + dst).num_seconds() as i32,
                is_dst: !dst.is_zero(),
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
            Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).single().unwrap()
        }

        #[test]
        fn recognizes_real_zone_ids() {
            let oracle = TzdbOracle;
            assert!(oracle.is_known("Europe/London"));
            assert!(oracle.is_known("America/New_York"));
            assert!(!oracle.is_known("Mars/Olympus_Mons"));
            assert!(oracle.resolve("Europe/London").is_some());
            assert!(oracle.resolve("Mars/Olympus_Mons").is_none());
        }

        #[test]
        fn reports_winter_offset_without_dst() {
            let oracle = TzdbOracle;
            let zone = oracle.resolve("America/New_York").unwrap();
            let offset = oracle.offset_at(&zone, at(2020, 1, 15));
            assert_eq!(offset.utc_offset_seconds, -5 * 3600);
            assert!(!offset.is_dst);
        }

        #[test]
        fn reports_summer_offset_with_dst() {
            let oracle = TzdbOracle;
            let zone = oracle.resolve("America/New_York").unwrap();
            let offset = oracle.offset_at(&zone, at(2020, 7, 15));
            assert_eq!(offset.utc_offset_seconds, -4 * 3600);
            assert!(offset.is_dst);
        }

        #[test]
        fn zone_id_round_trips() {
            let oracle = TzdbOracle;
            let zone = oracle.resolve("Europe/London").unwrap();
            assert_eq!(oracle.zone_id(&zone), "Europe/London");
        }
    }
}

#[cfg(feature = "tzdb")]
pub use tzdb::TzdbOracle;
