//! tzlookup-cli
//! ============
//!
//! Command-line interface for the `tzlookup-core` country/time-zone
//! resolver.
//!
//! This crate primarily provides a binary (`tzlookup`). We include a small
//! library target so that docs.rs renders a documentation page and shows
//! this overview. See the README for full usage examples.
//!
//! Quick start
//! -----------
//!
//! ```text
//! tzlookup --help
//! tzlookup --input tzlookup.xml validate
//! tzlookup --input tzlookup.xml country us
//! tzlookup --input tzlookup.xml lookup us --offset -18000 --at 2020-01-15T12:00:00Z
//! ```
//!
//! For programmatic access use the `tzlookup-core` crate directly.

// This library target intentionally exposes no API; the binary is the
// primary deliverable.
