//! Basic usage example for tzlookup-core
//!
//! This example demonstrates how to:
//! - Create a finder over an in-memory document
//! - Read the IANA version stamp
//! - Look up a country's default zone and zone list
//! - Resolve an observed offset/DST state to a concrete zone

use chrono::{TimeZone, Utc};
use tzlookup_core::TimeZoneFinder;

const DOC: &str = r#"
<timezones ianaversion="2023c">
  <countryzones>
    <country code="us" default="America/New_York">
      <id>America/New_York</id>
      <id>America/Detroit</id>
      <id>America/Chicago</id>
      <id>America/Denver</id>
      <id>America/Los_Angeles</id>
    </country>
    <country code="gb" default="Europe/London">
      <id>Europe/London</id>
    </country>
  </countryzones>
</timezones>"#;

fn main() {
    println!("=== tzlookup-core Basic Usage Example ===\n");

    // In production the document usually comes from a file:
    //   let finder = TimeZoneFinder::from_path("/etc/tzlookup.xml")?;
    let finder = TimeZoneFinder::from_xml(DOC);

    // Example 1: version metadata
    println!("--- Example 1: IANA version ---");
    println!("Data built against: {:?}\n", finder.schema_version());

    // Example 2: default zone for a country
    println!("--- Example 2: Default zone ---");
    for code in ["us", "GB", "xx"] {
        println!("{code}: {:?}", finder.default_time_zone_id(code));
    }
    println!();

    // Example 3: full zone list, in priority order
    println!("--- Example 3: Zone list for a country ---");
    if let Some(ids) = finder.time_zone_ids("us") {
        println!("Zones in 'us': {}", ids.len());
        for id in &ids {
            println!("- {id}");
        }
    }
    println!();

    // Example 4: offset matching, the way a phone resolves cell signaling
    println!("--- Example 4: Offset lookup ---");
    let when = Utc.with_ymd_and_hms(2020, 1, 15, 12, 0, 0).single().unwrap();

    // UTC-5, no DST, mid-January: eastern standard time.
    let hit = finder.time_zone_by_offset("us", -5 * 3600, false, when, None);
    println!("UTC-5 (no DST) in 'us' at {when}: {hit:?}");

    // Same query, but the device was last seen in Detroit.
    let bias = "America/Detroit".parse().unwrap();
    let hit = finder.time_zone_by_offset("us", -5 * 3600, false, when, Some(&bias));
    println!("Same with bias=America/Detroit:   {hit:?}");
}
