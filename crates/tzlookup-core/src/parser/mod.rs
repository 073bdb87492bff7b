// crates/tzlookup-core/src/parser/mod.rs

//! # Streaming Parser
//!
//! Handles the document layer: a forward-only cursor over the tokenizer,
//! depth-tracking navigation primitives, and the walker that drives them
//! through the `tzlookup.xml` structure.

pub(crate) mod cursor;
pub(crate) mod navigate;
pub(crate) mod walker;
