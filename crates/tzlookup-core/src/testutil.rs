// crates/tzlookup-core/src/testutil.rs

//! Deterministic oracle for unit tests: fixed offsets, no real zone data.

use chrono::{DateTime, Utc};

use crate::oracle::{ZoneOffset, ZoneOracle};

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct FakeZone {
    pub(crate) id: &'static str,
    pub(crate) offset_seconds: i32,
    pub(crate) dst: bool,
}

pub(crate) struct FakeOracle {
    zones: Vec<FakeZone>,
    // Ids that is_known() accepts but resolve() rejects, to model a zone
    // database changing between recognition and materialization.
    ghosts: Vec<&'static str>,
}

impl FakeOracle {
    pub(crate) fn with_fixed_zones(entries: &[(&'static str, i32, bool)]) -> Self {
        FakeOracle {
            zones: entries
                .iter()
                .map(|&(id, offset_seconds, dst)| FakeZone {
                    id,
                    offset_seconds,
                    dst,
                })
                .collect(),
            ghosts: Vec::new(),
        }
    }

    pub(crate) fn recognizing_unresolvable(mut self, zone_id: &'static str) -> Self {
        self.ghosts.push(zone_id);
        self
    }

    pub(crate) fn zone(&self, zone_id: &str) -> FakeZone {
        self.resolve(zone_id)
            .unwrap_or_else(|| panic!("no fake zone '{zone_id}'"))
    }
}

impl ZoneOracle for FakeOracle {
    type Zone = FakeZone;

    fn resolve(&self, zone_id: &str) -> Option<FakeZone> {
        self.zones.iter().find(|zone| zone.id == zone_id).cloned()
    }

    fn is_known(&self, zone_id: &str) -> bool {
        self.resolve(zone_id).is_some() || self.ghosts.iter().any(|ghost| *ghost == zone_id)
    }

    fn zone_id<'a>(&self, zone: &'a FakeZone) -> &'a str {
        zone.id
    }

    fn offset_at(&self, zone: &FakeZone, _when: DateTime<Utc>) -> ZoneOffset {
        ZoneOffset {
            utc_offset_seconds: zone.offset_seconds,
            is_dst: zone.dst,
        }
    }
}
