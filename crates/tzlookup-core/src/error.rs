// crates/tzlookup-core/src/error.rs

//! # Error Types
//!
//! Every structural problem found while walking a `tzlookup.xml` document
//! and every whole-document validation failure maps to one variant here.
//! Positions are byte offsets into the backing document, captured from the
//! tokenizer at the point the problem was detected.

use thiserror::Error;

/// Crate-local result alias.
pub type Result<T> = std::result::Result<T, TzLookupError>;

/// Errors raised while parsing or validating country zone data.
///
/// During [`validate`](crate::TimeZoneFinder::validate) these propagate to
/// the caller. During ordinary lookups they are caught at the facade, logged
/// and converted to "no result" so a transient read failure never invalidates
/// a previously cached country.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TzLookupError {
    /// A required child element was not found at the current nesting level.
    #[error("no child element <{name}> found (byte {position})")]
    MissingElement { name: String, position: usize },

    /// The document ended while more content was still expected.
    #[error("unexpected end of document while looking for <{name}>")]
    UnexpectedEof { name: String },

    /// The nesting depth dropped below the element being consumed.
    #[error("unexpected depth while looking for </{name}> (byte {position})")]
    UnexpectedDepth { name: String, position: usize },

    /// An end element with the wrong name appeared at the expected depth.
    #[error("unexpected end tag </{found}> while looking for </{expected}> (byte {position})")]
    UnexpectedEndTag {
        expected: String,
        found: String,
        position: usize,
    },

    /// The cursor was expected to be on a specific end element and was not.
    #[error("expected to be on end tag </{expected}> (byte {position})")]
    UnexpectedTag { expected: String, position: usize },

    /// An element that must carry a text payload was empty or held a child.
    #[error("no text found inside element (byte {position})")]
    MissingText { position: usize },

    /// Content followed the text payload where the element should end.
    #[error("unexpected content after element text (byte {position})")]
    UnexpectedTrailingContent { position: usize },

    /// A required `<country>` attribute was missing or empty.
    #[error("missing or empty attribute '{name}' on <country> (byte {position})")]
    MissingAttribute {
        name: &'static str,
        position: usize,
    },

    /// The same normalized country code appeared twice in one document.
    #[error("second entry for country code '{code}' (byte {position})")]
    DuplicateCountryCode { code: String, position: usize },

    /// A `<country>` element carried no `<id>` entries at all.
    #[error("no time zone ids for country code '{code}' (byte {position})")]
    EmptyZoneList { code: String, position: usize },

    /// The `default` attribute named a zone absent from the country's list.
    #[error(
        "default time zone id '{default_id}' for country code '{code}' \
         is not one of the country's zones (byte {position})"
    )]
    DefaultNotInZoneList {
        code: String,
        default_id: String,
        position: usize,
    },

    /// A country code in the document was not already lowercase ASCII.
    #[error("country code '{code}' is not normalized (byte {position})")]
    NonNormalizedCountryCode { code: String, position: usize },

    /// The backing data source could not be created or opened.
    #[error("cannot open time zone data source: {0}")]
    SourceUnavailable(String),

    /// The tokenizer rejected the document (ill-formed markup, bad encoding).
    #[error("malformed document: {0}")]
    Xml(#[from] quick_xml::Error),
}
