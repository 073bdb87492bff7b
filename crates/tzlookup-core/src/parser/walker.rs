// crates/tzlookup-core/src/parser/walker.rs

//! Document walker: drives the navigation primitives through the expected
//! shape of a `tzlookup.xml` document and feeds each `<country>` record to
//! a pluggable processor.
//!
//! The expected structure is:
//!
//! ```text
//! <timezones ianaversion="2023c">
//!   <countryzones>
//!     <country code="us" default="America/New_York">
//!       <id>America/New_York</id>
//!       ...
//!     </country>
//!     ...
//!   </countryzones>
//! </timezones>
//! ```
//!
//! Unknown elements anywhere are tolerated and skipped. A processor may
//! halt the traversal early; when it does not, the walker consumes through
//! the closing `</timezones>` so truncated documents are always rejected.

use std::collections::HashSet;
use std::io::BufRead;

use crate::error::{Result, TzLookupError};
use crate::model::{normalize_country_code, CountryTimeZones};
use crate::oracle::ZoneOracle;

use super::cursor::DocCursor;
use super::navigate::{
    assert_on_end, consume_through_end, read_element_text, seek_optional_start,
    seek_required_start,
};

pub(crate) const TIMEZONES_ELEMENT: &str = "timezones";
pub(crate) const IANA_VERSION_ATTRIBUTE: &str = "ianaversion";
pub(crate) const COUNTRY_ZONES_ELEMENT: &str = "countryzones";
pub(crate) const COUNTRY_ELEMENT: &str = "country";
pub(crate) const COUNTRY_CODE_ATTRIBUTE: &str = "code";
pub(crate) const DEFAULT_TIME_ZONE_ID_ATTRIBUTE: &str = "default";
pub(crate) const ID_ELEMENT: &str = "id";

/// Whether the walker should keep iterating country records.
pub(crate) enum Flow {
    Continue,
    Halt,
}

/// Receives each `<country>` record in document order. Returning
/// [`Flow::Halt`] stops the traversal without error; problems with the data
/// are reported by failing the whole traversal.
pub(crate) trait CountryZonesProcessor {
    fn process(
        &mut self,
        country_code: &str,
        default_zone_id: &str,
        zone_ids: Vec<String>,
        position: usize,
    ) -> Result<Flow>;
}

/// Walks one whole document, applying `processor` to every country record.
pub(crate) fn process_document<R: BufRead, P: CountryZonesProcessor>(
    cursor: &mut DocCursor<R>,
    processor: &mut P,
) -> Result<()> {
    seek_required_start(cursor, TIMEZONES_ELEMENT)?;

    // The ianaversion attribute is versioning metadata; its absence is not
    // an error.

    // <countryzones> is the only expected child; skip anything before it.
    seek_required_start(cursor, COUNTRY_ZONES_ELEMENT)?;

    if let Flow::Halt = process_country_zones(cursor, processor)? {
        return Ok(());
    }

    assert_on_end(cursor, COUNTRY_ZONES_ELEMENT)?;
    cursor.advance()?;

    // Skip anything up to </timezones> so a truncated document cannot pass.
    consume_through_end(cursor, TIMEZONES_ELEMENT)?;
    assert_on_end(cursor, TIMEZONES_ELEMENT)
}

/// Reads the `ianaversion` attribute off the outer container.
pub(crate) fn read_schema_version<R: BufRead>(
    cursor: &mut DocCursor<R>,
) -> Result<Option<String>> {
    seek_required_start(cursor, TIMEZONES_ELEMENT)?;
    Ok(cursor.attribute(IANA_VERSION_ATTRIBUTE).map(str::to_string))
}

fn process_country_zones<R: BufRead, P: CountryZonesProcessor>(
    cursor: &mut DocCursor<R>,
    processor: &mut P,
) -> Result<Flow> {
    // Skip over any unexpected elements and process <country> elements.
    while seek_optional_start(cursor, COUNTRY_ELEMENT)? {
        let position = cursor.position();
        let code = required_attribute(cursor, COUNTRY_CODE_ATTRIBUTE)?;
        let default_zone_id = required_attribute(cursor, DEFAULT_TIME_ZONE_ID_ATTRIBUTE)?;
        let zone_ids = parse_zone_ids(cursor)?;

        if let Flow::Halt = processor.process(&code, &default_zone_id, zone_ids, position)? {
            return Ok(Flow::Halt);
        }

        assert_on_end(cursor, COUNTRY_ELEMENT)?;
    }
    Ok(Flow::Continue)
}

fn required_attribute<R: BufRead>(cursor: &DocCursor<R>, name: &'static str) -> Result<String> {
    match cursor.attribute(name) {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ => Err(TzLookupError::MissingAttribute {
            name,
            position: cursor.position(),
        }),
    }
}

/// Parses the ordered `<id>` list of one `<country>`, leaving the cursor on
/// `</country>`.
fn parse_zone_ids<R: BufRead>(cursor: &mut DocCursor<R>) -> Result<Vec<String>> {
    let mut zone_ids = Vec::new();
    while seek_optional_start(cursor, ID_ELEMENT)? {
        let zone_id = read_element_text(cursor)?;
        assert_on_end(cursor, ID_ELEMENT)?;
        zone_ids.push(zone_id);
    }
    Ok(zone_ids)
}

/// Whole-document validator. To pass, every country code must already be
/// normalized and unique, the id list must be non-empty, and the default
/// must be one of the ids. The ids themselves are deliberately not checked
/// against the zone oracle: a new data file may legitimately name zones the
/// runtime's database has not learned yet.
pub(crate) struct CountryZonesValidator {
    seen_codes: HashSet<String>,
}

impl CountryZonesValidator {
    pub(crate) fn new() -> Self {
        CountryZonesValidator {
            seen_codes: HashSet::new(),
        }
    }
}

impl CountryZonesProcessor for CountryZonesValidator {
    fn process(
        &mut self,
        country_code: &str,
        default_zone_id: &str,
        zone_ids: Vec<String>,
        position: usize,
    ) -> Result<Flow> {
        if normalize_country_code(country_code) != country_code {
            return Err(TzLookupError::NonNormalizedCountryCode {
                code: country_code.to_string(),
                position,
            });
        }
        if self.seen_codes.contains(country_code) {
            return Err(TzLookupError::DuplicateCountryCode {
                code: country_code.to_string(),
                position,
            });
        }
        if zone_ids.is_empty() {
            return Err(TzLookupError::EmptyZoneList {
                code: country_code.to_string(),
                position,
            });
        }
        if !zone_ids.iter().any(|id| id == default_zone_id) {
            return Err(TzLookupError::DefaultNotInZoneList {
                code: country_code.to_string(),
                default_id: default_zone_id.to_string(),
                position,
            });
        }
        self.seen_codes.insert(country_code.to_string());

        // Uniqueness can only be confirmed by seeing the whole file.
        Ok(Flow::Continue)
    }
}

/// Extracts the validated record for one target country, halting the
/// traversal as soon as it matches. Non-matching records pay no validation
/// cost.
pub(crate) struct SelectiveExtractor<'a, O: ZoneOracle> {
    /// Already normalized by the caller.
    target_code: &'a str,
    oracle: &'a O,
    matched: Option<CountryTimeZones<O::Zone>>,
}

impl<'a, O: ZoneOracle> SelectiveExtractor<'a, O> {
    pub(crate) fn new(target_code: &'a str, oracle: &'a O) -> Self {
        SelectiveExtractor {
            target_code,
            oracle,
            matched: None,
        }
    }

    /// The record that matched, or `None` if the traversal saw none.
    pub(crate) fn into_matched(self) -> Option<CountryTimeZones<O::Zone>> {
        self.matched
    }
}

impl<O: ZoneOracle> CountryZonesProcessor for SelectiveExtractor<'_, O> {
    fn process(
        &mut self,
        country_code: &str,
        default_zone_id: &str,
        zone_ids: Vec<String>,
        position: usize,
    ) -> Result<Flow> {
        let country_code = normalize_country_code(country_code);
        if country_code != self.target_code {
            return Ok(Flow::Continue);
        }
        self.matched = Some(CountryTimeZones::build_validated(
            self.oracle,
            country_code,
            default_zone_id,
            zone_ids,
            position,
        ));
        Ok(Flow::Halt)
    }
}
