// crates/tzlookup-core/src/model.rs

//! # Country Zone Records
//!
//! The validated `(country, default, zone ids)` tuple extracted from the
//! data file, the lazily materialized resolved zones, and the offset/DST
//! matching algorithm that runs on top of them.

use chrono::{DateTime, Utc};
use log::warn;
use once_cell::sync::OnceCell;

use crate::oracle::ZoneOracle;

/// Lowercase ASCII is the canonical comparison form for country codes, both
/// in the data file and for caller-supplied codes.
pub fn normalize_country_code(country_code: &str) -> String {
    country_code.to_ascii_lowercase()
}

/// Validated time-zone information for one country.
///
/// Immutable after construction; a newer parse supersedes the record
/// wholesale, it is never mutated in place. The zone id list preserves
/// document order, which doubles as the priority order for offset matching.
/// Both the list and the default can legitimately be empty/absent when the
/// data file references only zones the oracle does not recognize.
#[derive(Debug)]
pub struct CountryTimeZones<Z> {
    country_code: String,
    default_zone_id: Option<String>,
    zone_ids: Vec<String>,
    // Memoized resolved zones for zone_ids.
    zones: OnceCell<Vec<Z>>,
}

impl<Z: Clone> CountryTimeZones<Z> {
    /// Builds a record from raw extracted data, dropping zone ids the oracle
    /// does not recognize. Unrecognized ids are a warning, not an error: the
    /// data file and the runtime zone database are updated independently, so
    /// the record degrades gracefully instead of being discarded.
    pub(crate) fn build_validated<O: ZoneOracle<Zone = Z>>(
        oracle: &O,
        country_code: String,
        default_zone_id: &str,
        zone_ids: Vec<String>,
        position: usize,
    ) -> Self {
        let mut recognized = Vec::with_capacity(zone_ids.len());
        for zone_id in zone_ids {
            if oracle.is_known(&zone_id) {
                recognized.push(zone_id);
            } else {
                warn!("skipping unrecognized zone id '{zone_id}' (byte {position})");
            }
        }

        // The default only has to be a recognized zone id; it is not
        // re-checked against the country's own list here, that is the
        // whole-document validator's job.
        let default_zone_id = if oracle.is_known(default_zone_id) {
            Some(default_zone_id.to_string())
        } else {
            warn!("unrecognized default time zone id '{default_zone_id}' (byte {position})");
            None
        };

        CountryTimeZones {
            country_code,
            default_zone_id,
            zone_ids: recognized,
            zones: OnceCell::new(),
        }
    }

    /// The normalized country code this record belongs to.
    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    /// The country's default zone id, if the data file named a recognized one.
    pub fn default_zone_id(&self) -> Option<&str> {
        self.default_zone_id.as_deref()
    }

    /// Zone ids in document (priority) order.
    pub fn zone_ids(&self) -> &[String] {
        &self.zone_ids
    }

    /// Resolved zones in priority order, materialized at most once.
    pub fn zones<O: ZoneOracle<Zone = Z>>(&self, oracle: &O) -> &[Z] {
        self.zones.get_or_init(|| {
            let mut zones = Vec::with_capacity(self.zone_ids.len());
            for zone_id in &self.zone_ids {
                match oracle.resolve(zone_id) {
                    Some(zone) => zones.push(zone),
                    // Recognition already happened at construction, but the
                    // oracle's answer can change between the two points.
                    None => warn!("skipping zone id '{zone_id}' that no longer resolves"),
                }
            }
            zones
        })
    }

    /// Finds a zone that has (or would have had) the given offset and DST
    /// state at `when`.
    ///
    /// Candidates are scanned in priority order. When several match and one
    /// of them is the optional `bias` zone, the bias wins; otherwise the
    /// first match does.
    pub fn lookup_by_offset<O: ZoneOracle<Zone = Z>>(
        &self,
        oracle: &O,
        offset_seconds: i32,
        is_dst: bool,
        when: DateTime<Utc>,
        bias: Option<&Z>,
    ) -> Option<&Z> {
        let mut first_match: Option<&Z> = None;
        for zone in self.zones(oracle) {
            let offset = oracle.offset_at(zone, when);
            if offset.is_dst != is_dst || offset.utc_offset_seconds != offset_seconds {
                continue;
            }

            let bias_id = match bias {
                // No bias, so the first match wins outright.
                None => return Some(zone),
                Some(bias) => oracle.zone_id(bias),
            };

            if first_match.is_none() {
                // Keep scanning in case the bias also matches; this is what
                // we return if it does not.
                first_match = Some(zone);
            }
            if oracle.zone_id(zone) == bias_id {
                return Some(zone);
            }
        }
        first_match
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{FakeOracle, FakeZone};
    use chrono::TimeZone as _;

    fn when() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2020, 1, 15, 12, 0, 0).single().unwrap()
    }

    fn ids(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    fn oracle() -> FakeOracle {
        FakeOracle::with_fixed_zones(&[
            ("a/east", -18000, false),
            ("a/fringe", -18000, false),
            ("a/west", -28800, false),
        ])
    }

    #[test]
    fn normalization_lowercases_ascii() {
        assert_eq!(normalize_country_code("GB"), "gb");
        assert_eq!(normalize_country_code("gb"), "gb");
    }

    #[test]
    fn unrecognized_ids_are_dropped_not_fatal() {
        let oracle = oracle();
        let record = CountryTimeZones::build_validated(
            &oracle,
            "xx".to_string(),
            "a/east",
            ids(&["a/east", "a/unknown", "a/west"]),
            0,
        );
        assert_eq!(record.zone_ids(), &["a/east".to_string(), "a/west".to_string()]);
        assert_eq!(record.default_zone_id(), Some("a/east"));
    }

    #[test]
    fn unrecognized_default_becomes_absent() {
        let oracle = oracle();
        let record = CountryTimeZones::build_validated(
            &oracle,
            "xx".to_string(),
            "a/unknown",
            ids(&["a/east"]),
            0,
        );
        assert_eq!(record.default_zone_id(), None);
        assert_eq!(record.zone_ids(), &["a/east".to_string()]);
    }

    #[test]
    fn record_survives_with_no_recognized_ids() {
        let oracle = oracle();
        let record = CountryTimeZones::build_validated(
            &oracle,
            "xx".to_string(),
            "a/unknown",
            ids(&["a/gone", "a/also-gone"]),
            0,
        );
        assert!(record.zone_ids().is_empty());
        assert!(record.zones(&oracle).is_empty());
    }

    #[test]
    fn materialization_drops_ids_the_oracle_stopped_resolving() {
        // "a/ghost" is recognized but refuses to resolve, standing in for a
        // zone database change between construction and materialization.
        let oracle = FakeOracle::with_fixed_zones(&[("a/east", -18000, false)])
            .recognizing_unresolvable("a/ghost");
        let record = CountryTimeZones::build_validated(
            &oracle,
            "xx".to_string(),
            "a/east",
            ids(&["a/east", "a/ghost"]),
            0,
        );
        assert_eq!(record.zone_ids().len(), 2);
        let zones: Vec<&str> = record.zones(&oracle).iter().map(|z| z.id).collect();
        assert_eq!(zones, vec!["a/east"]);
    }

    #[test]
    fn first_match_wins_without_bias() {
        let oracle = oracle();
        let record = CountryTimeZones::build_validated(
            &oracle,
            "xx".to_string(),
            "a/east",
            ids(&["a/east", "a/fringe", "a/west"]),
            0,
        );
        let hit = record
            .lookup_by_offset(&oracle, -18000, false, when(), None)
            .unwrap();
        assert_eq!(hit.id, "a/east");
    }

    #[test]
    fn bias_wins_among_matches_regardless_of_order() {
        let oracle = oracle();
        let record = CountryTimeZones::build_validated(
            &oracle,
            "xx".to_string(),
            "a/east",
            ids(&["a/east", "a/fringe", "a/west"]),
            0,
        );
        let bias = oracle.zone("a/fringe");
        let hit = record
            .lookup_by_offset(&oracle, -18000, false, when(), Some(&bias))
            .unwrap();
        assert_eq!(hit.id, "a/fringe");
    }

    #[test]
    fn non_matching_bias_falls_back_to_first_match() {
        let oracle = oracle();
        let record = CountryTimeZones::build_validated(
            &oracle,
            "xx".to_string(),
            "a/east",
            ids(&["a/east", "a/fringe", "a/west"]),
            0,
        );
        let bias = oracle.zone("a/west"); // wrong offset, never matches
        let hit = record
            .lookup_by_offset(&oracle, -18000, false, when(), Some(&bias))
            .unwrap();
        assert_eq!(hit.id, "a/east");
    }

    #[test]
    fn dst_mismatch_excludes_candidates() {
        let oracle = oracle();
        let record = CountryTimeZones::build_validated(
            &oracle,
            "xx".to_string(),
            "a/east",
            ids(&["a/east"]),
            0,
        );
        assert!(record
            .lookup_by_offset(&oracle, -18000, true, when(), None)
            .is_none());
    }

    #[test]
    fn no_candidates_yields_none() {
        let oracle = oracle();
        let record: CountryTimeZones<FakeZone> = CountryTimeZones::build_validated(
            &oracle,
            "xx".to_string(),
            "a/unknown",
            ids(&[]),
            0,
        );
        assert!(record
            .lookup_by_offset(&oracle, -18000, false, when(), None)
            .is_none());
    }
}
