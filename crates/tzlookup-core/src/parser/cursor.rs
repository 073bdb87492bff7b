// crates/tzlookup-core/src/parser/cursor.rs

//! Document cursor: a thin, forward-only adapter over the `quick-xml`
//! tokenizer. It owns the current structural token, tracks nesting depth,
//! and exposes attribute lookup — everything the navigation layer needs
//! without ever touching the tokenizer directly.
//!
//! Depth follows the pull-parser convention: a start element and its
//! matching end element report the same depth, and text reports the depth
//! of its enclosing element. The cursor never rewinds.

use std::io::BufRead;

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::Result;

/// One owned structural token of the document.
#[derive(Debug, Clone)]
pub(crate) enum Token {
    /// Position before the first `advance()`.
    DocumentStart,
    Start {
        name: String,
        attributes: Vec<(String, String)>,
    },
    End {
        name: String,
    },
    Text(String),
    Eof,
}

pub(crate) struct DocCursor<R: BufRead> {
    reader: Reader<R>,
    buf: Vec<u8>,
    depth: usize,
    current: Token,
}

impl<R: BufRead> DocCursor<R> {
    pub(crate) fn new(source: R) -> Self {
        let mut reader = Reader::from_reader(source);
        // Whitespace-only text between elements is noise for this format.
        reader.trim_text(true);
        // <countryzones/> must walk exactly like <countryzones></countryzones>.
        reader.expand_empty_elements(true);
        DocCursor {
            reader,
            buf: Vec::new(),
            depth: 0,
            current: Token::DocumentStart,
        }
    }

    /// Moves one structural token forward. Declarations, comments,
    /// processing instructions and doctype events are not surfaced; CDATA
    /// surfaces as text.
    pub(crate) fn advance(&mut self) -> Result<()> {
        if matches!(self.current, Token::End { .. }) {
            self.depth = self.depth.saturating_sub(1);
        }
        loop {
            self.buf.clear();
            let decoder = self.reader.decoder();
            let token = match self.reader.read_event_into(&mut self.buf)? {
                Event::Start(tag) => {
                    let name = decoder.decode(tag.name().as_ref())?.into_owned();
                    let mut attributes = Vec::new();
                    for attribute in tag.attributes() {
                        let attribute = attribute.map_err(quick_xml::Error::InvalidAttr)?;
                        let key = decoder.decode(attribute.key.as_ref())?.into_owned();
                        let value = attribute.unescape_value()?.into_owned();
                        attributes.push((key, value));
                    }
                    self.depth += 1;
                    Token::Start { name, attributes }
                }
                Event::End(tag) => {
                    let name = decoder.decode(tag.name().as_ref())?.into_owned();
                    Token::End { name }
                }
                Event::Text(text) => Token::Text(text.unescape()?.into_owned()),
                Event::CData(text) => Token::Text(decoder.decode(text.as_ref())?.into_owned()),
                Event::Eof => Token::Eof,
                _ => continue,
            };
            self.current = token;
            return Ok(());
        }
    }

    pub(crate) fn token(&self) -> &Token {
        &self.current
    }

    pub(crate) fn depth(&self) -> usize {
        self.depth
    }

    /// Byte offset into the document, used for error positions.
    pub(crate) fn position(&self) -> usize {
        self.reader.buffer_position()
    }

    /// Attribute value on the current start element, if any.
    pub(crate) fn attribute(&self, name: &str) -> Option<&str> {
        match &self.current {
            Token::Start { attributes, .. } => attributes
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.as_str()),
            _ => None,
        }
    }
}
