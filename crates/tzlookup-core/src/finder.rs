// crates/tzlookup-core/src/finder.rs

//! # Finder Facade
//!
//! [`TimeZoneFinder`] ties the pieces together: it owns the document
//! source, the zone oracle, and a single-entry cache of the last country
//! resolved. Lookups hit the cache when the same country is queried again;
//! otherwise a selective traversal re-parses the document from scratch.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Utc};
use log::{debug, warn};

use crate::error::{Result, TzLookupError};
use crate::model::{normalize_country_code, CountryTimeZones};
use crate::oracle::ZoneOracle;
#[cfg(feature = "tzdb")]
use crate::oracle::TzdbOracle;
use crate::parser::cursor::DocCursor;
use crate::parser::walker::{
    self, CountryZonesProcessor, CountryZonesValidator, SelectiveExtractor,
};

/// Where the document comes from. A fresh reader is produced per traversal
/// so the same logical source can be parsed repeatedly.
enum XmlSource {
    File(PathBuf),
    Literal(String),
}

impl XmlSource {
    fn open(&self) -> Result<Box<dyn BufRead + '_>> {
        match self {
            XmlSource::File(path) => {
                let file = File::open(path).map_err(|e| {
                    TzLookupError::SourceUnavailable(format!("{}: {e}", path.display()))
                })?;
                Ok(Box::new(BufReader::new(file)))
            }
            XmlSource::Literal(xml) => Ok(Box::new(io::Cursor::new(xml.as_bytes()))),
        }
    }
}

/// A structure that can find matching time zones for a country.
///
/// Lookup operations never fail: any parse error along the way is logged
/// and reported as "no result", and the previously cached country is left
/// intact. Only [`validate`](Self::validate) surfaces parse errors.
///
/// Safe to share across threads; the cache is the only mutable state and
/// is replaced atomically, only ever with a fully validated record.
pub struct TimeZoneFinder<O: ZoneOracle> {
    source: XmlSource,
    oracle: O,
    // Cached record for the last country looked up.
    cache: Mutex<Option<Arc<CountryTimeZones<O::Zone>>>>,
}

#[cfg(feature = "tzdb")]
impl TimeZoneFinder<TzdbOracle> {
    /// Creates a finder reading from a data file, using the built-in
    /// `chrono-tz` oracle. The file must exist and be readable; its content
    /// is not validated up front, see [`validate`](Self::validate).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_path_with_oracle(path, TzdbOracle)
    }

    /// Creates a finder over an in-memory document, using the built-in
    /// `chrono-tz` oracle.
    pub fn from_xml(xml: impl Into<String>) -> Self {
        Self::from_xml_with_oracle(xml, TzdbOracle)
    }
}

impl<O: ZoneOracle> TimeZoneFinder<O> {
    /// Like [`TimeZoneFinder::from_path`] with a caller-supplied oracle.
    pub fn from_path_with_oracle(path: impl AsRef<Path>, oracle: O) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(TzLookupError::SourceUnavailable(format!(
                "{} is not a readable file",
                path.display()
            )));
        }
        Ok(Self::new(XmlSource::File(path.to_path_buf()), oracle))
    }

    /// Like [`TimeZoneFinder::from_xml`] with a caller-supplied oracle.
    pub fn from_xml_with_oracle(xml: impl Into<String>, oracle: O) -> Self {
        Self::new(XmlSource::Literal(xml.into()), oracle)
    }

    fn new(source: XmlSource, oracle: O) -> Self {
        TimeZoneFinder {
            source,
            oracle,
            cache: Mutex::new(None),
        }
    }

    /// Parses and validates the whole document: well-formed structure,
    /// normalized and unique country codes, non-empty zone lists, defaults
    /// contained in their lists. Any failure means the document should not
    /// be installed or trusted.
    pub fn validate(&self) -> Result<()> {
        let mut validator = CountryZonesValidator::new();
        self.process_document(&mut validator)
    }

    /// The IANA rules version associated with the data, or `None` when the
    /// attribute is absent or the document cannot be read. Never fails.
    pub fn schema_version(&self) -> Option<String> {
        let reader = self.source.open().ok()?;
        let mut cursor = DocCursor::new(reader);
        walker::read_schema_version(&mut cursor).ok().flatten()
    }

    /// The "default" zone id for a country: the best single choice when
    /// nothing but the country is known. `None` when the country is
    /// unrecognized, the data names no recognized default, or reading fails.
    pub fn default_time_zone_id(&self, country_code: &str) -> Option<String> {
        let record = self.resolve(country_code)?;
        record.default_zone_id().map(str::to_string)
    }

    /// Zone ids used in a country, in priority order. `None` when the
    /// country is unrecognized; may be present but empty when the data
    /// references only unrecognized zones.
    pub fn time_zone_ids(&self, country_code: &str) -> Option<Vec<String>> {
        self.resolve(country_code)
            .map(|record| record.zone_ids().to_vec())
    }

    /// Resolved zones used in a country, in priority order. Same absence
    /// rules as [`time_zone_ids`](Self::time_zone_ids).
    pub fn time_zones(&self, country_code: &str) -> Option<Vec<O::Zone>> {
        self.resolve(country_code)
            .map(|record| record.zones(&self.oracle).to_vec())
    }

    /// A zone of the country that has (or would have had) the given total
    /// UTC offset and DST state at `when`. When several zones match, a
    /// supplied `bias` zone wins if it is among them; otherwise the first
    /// match in priority order is returned.
    pub fn time_zone_by_offset(
        &self,
        country_code: &str,
        offset_seconds: i32,
        is_dst: bool,
        when: DateTime<Utc>,
        bias: Option<&O::Zone>,
    ) -> Option<O::Zone> {
        let record = self.resolve(country_code)?;
        record
            .lookup_by_offset(&self.oracle, offset_seconds, is_dst, when, bias)
            .cloned()
    }

    /// Returns the record for a country, consulting the cache first.
    /// Failed traversals leave the cache untouched.
    fn resolve(&self, country_code: &str) -> Option<Arc<CountryTimeZones<O::Zone>>> {
        let country_code = normalize_country_code(country_code);

        {
            let cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
            if let Some(record) = cache.as_ref() {
                if record.country_code() == country_code {
                    debug!("cache hit for country '{country_code}'");
                    return Some(Arc::clone(record));
                }
            }
        }

        let mut extractor = SelectiveExtractor::new(&country_code, &self.oracle);
        match self.process_document(&mut extractor) {
            Ok(()) => {
                // None matched: report no result but keep the cached value.
                let record = Arc::new(extractor.into_matched()?);
                let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
                *cache = Some(Arc::clone(&record));
                Some(record)
            }
            Err(err) => {
                warn!("error reading country zones: {err}");
                None
            }
        }
    }

    fn process_document<P: CountryZonesProcessor>(&self, processor: &mut P) -> Result<()> {
        let reader = self.source.open()?;
        let mut cursor = DocCursor::new(reader);
        walker::process_document(&mut cursor, processor)
        // The reader is dropped here on every path, success or failure.
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::FakeOracle;

    const DOC: &str = r#"
        <timezones ianaversion="2023c">
          <countryzones>
            <country code="xx" default="a/east">
              <id>a/east</id>
              <id>a/west</id>
            </country>
          </countryzones>
        </timezones>"#;

    fn finder() -> TimeZoneFinder<FakeOracle> {
        TimeZoneFinder::from_xml_with_oracle(
            DOC,
            FakeOracle::with_fixed_zones(&[("a/east", -18000, false), ("a/west", -28800, false)]),
        )
    }

    #[test]
    fn from_path_rejects_missing_files() {
        let err =
            TimeZoneFinder::from_path_with_oracle("/no/such/file.xml", FakeOracle::with_fixed_zones(&[]))
                .err()
                .unwrap();
        assert!(matches!(err, TzLookupError::SourceUnavailable(_)));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let finder = finder();
        assert_eq!(
            finder.time_zone_ids("XX"),
            finder.time_zone_ids("xx"),
        );
        assert_eq!(finder.default_time_zone_id("Xx").as_deref(), Some("a/east"));
    }

    #[test]
    fn unknown_country_does_not_clobber_the_cache() {
        let finder = finder();
        assert!(finder.time_zone_ids("xx").is_some());
        assert!(finder.time_zone_ids("zz").is_none());
        // The earlier record must still be served.
        assert_eq!(finder.default_time_zone_id("xx").as_deref(), Some("a/east"));
    }

    #[test]
    fn malformed_document_degrades_to_no_result() {
        let finder = TimeZoneFinder::from_xml_with_oracle(
            "<timezones><countryzones>",
            FakeOracle::with_fixed_zones(&[]),
        );
        assert!(finder.time_zone_ids("xx").is_none());
        assert!(finder.validate().is_err());
    }

    #[test]
    fn schema_version_survives_lookup_failures() {
        let finder = finder();
        assert_eq!(finder.schema_version().as_deref(), Some("2023c"));
        assert!(finder.time_zone_ids("zz").is_none());
        assert_eq!(finder.schema_version().as_deref(), Some("2023c"));
    }
}
