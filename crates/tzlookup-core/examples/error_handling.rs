//! Error handling example for tzlookup-core
//!
//! This example demonstrates how to:
//! - Handle missing data files
//! - Interpret the validator's error variants
//! - Distinguish "no such country" from "country with no usable zones"

use tzlookup_core::{TimeZoneFinder, TzLookupError};

fn main() {
    println!("=== tzlookup-core Error Handling Example ===\n");

    // Example 1: missing data file
    println!("--- Example 1: Missing data file ---");
    match TimeZoneFinder::from_path("/nonexistent/tzlookup.xml") {
        Ok(_) => println!("Unexpectedly opened a nonexistent file"),
        Err(TzLookupError::SourceUnavailable(detail)) => {
            println!("Source unavailable: {detail}");
        }
        Err(err) => println!("Other error: {err}"),
    }
    println!();

    // Example 2: structural problems caught by validation
    println!("--- Example 2: Validation errors ---");
    let bad_documents = [
        ("truncated", "<timezones><countryzones>"),
        (
            "duplicate country",
            r#"<timezones><countryzones>
                 <country code="gb" default="Europe/London"><id>Europe/London</id></country>
                 <country code="gb" default="Europe/London"><id>Europe/London</id></country>
               </countryzones></timezones>"#,
        ),
        (
            "default missing from zone list",
            r#"<timezones><countryzones>
                 <country code="gb" default="Europe/Paris"><id>Europe/London</id></country>
               </countryzones></timezones>"#,
        ),
        (
            "upper-case country code",
            r#"<timezones><countryzones>
                 <country code="GB" default="Europe/London"><id>Europe/London</id></country>
               </countryzones></timezones>"#,
        ),
    ];
    for (label, xml) in bad_documents {
        match TimeZoneFinder::from_xml(xml).validate() {
            Ok(()) => println!("{label}: unexpectedly valid"),
            Err(err) => println!("{label}: {err}"),
        }
    }
    println!();

    // Example 3: lookups degrade to None instead of failing
    println!("--- Example 3: Lookup misses ---");
    let finder = TimeZoneFinder::from_xml(
        r#"<timezones ianaversion="2023c"><countryzones>
             <country code="gb" default="Europe/London"><id>Europe/London</id></country>
           </countryzones></timezones>"#,
    );
    println!("Unknown country 'zz': {:?}", finder.time_zone_ids("zz"));
    println!("Known country 'gb':  {:?}", finder.time_zone_ids("gb"));
}
