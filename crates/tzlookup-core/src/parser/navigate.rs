// crates/tzlookup-core/src/parser/navigate.rs

//! Structural navigation primitives built purely on the document cursor.
//!
//! This is a recursive-descent-by-depth-counter scheme: unknown or extra
//! elements anywhere are skipped whole (forward compatibility with future
//! schema additions) while truncation and tag mismatches are still
//! detected. All depth and recovery logic lives here; the walker above
//! only composes these four operations.

use std::io::BufRead;

use crate::error::{Result, TzLookupError};

use super::cursor::{DocCursor, Token};

/// Seeks a start element named `name` at the current nesting level,
/// failing with [`TzLookupError::MissingElement`] when the level ends first.
pub(crate) fn seek_required_start<R: BufRead>(
    cursor: &mut DocCursor<R>,
    name: &str,
) -> Result<()> {
    seek_start(cursor, name, true).map(|_| ())
}

/// Seeks a start element named `name` at the current nesting level. Returns
/// `false` with the cursor left on the level's end element when there is no
/// such child.
pub(crate) fn seek_optional_start<R: BufRead>(
    cursor: &mut DocCursor<R>,
    name: &str,
) -> Result<bool> {
    seek_start(cursor, name, false)
}

/// Advances until a start element named `name` is found without decreasing
/// the depth, or increasing it by more than one. Non-matching start elements
/// are consumed whole, descendants included, even ones whose own subtrees
/// contain the sought name.
fn seek_start<R: BufRead>(cursor: &mut DocCursor<R>, name: &str, required: bool) -> Result<bool> {
    loop {
        cursor.advance()?;
        let skip = match cursor.token() {
            Token::Start { name: current, .. } if current == name => return Ok(true),
            Token::Start { name: current, .. } => current.clone(),
            Token::End { .. } => {
                if required {
                    return Err(TzLookupError::MissingElement {
                        name: name.to_string(),
                        position: cursor.position(),
                    });
                }
                return Ok(false);
            }
            Token::Eof => {
                return Err(TzLookupError::UnexpectedEof {
                    name: name.to_string(),
                })
            }
            // Text between elements carries no structure here.
            _ => continue,
        };
        cursor.advance()?;
        consume_through_end(cursor, &skip)?;
    }
}

/// Consumes the remaining contents of an element, leaving the cursor on its
/// end element. The cursor must be on that end element already, on text
/// inside the element, or on a start element nested within it.
pub(crate) fn consume_through_end<R: BufRead>(cursor: &mut DocCursor<R>, name: &str) -> Result<()> {
    if let Token::End { name: current } = cursor.token() {
        if current == name {
            return Ok(());
        }
    }

    // Both the name and the depth must match to complete. Text sits at the
    // same depth as the end element we want; a nested start element sits one
    // deeper.
    let mut required_depth = cursor.depth();
    if matches!(cursor.token(), Token::Start { .. }) {
        required_depth = required_depth.saturating_sub(1);
    }

    loop {
        if matches!(cursor.token(), Token::Eof) {
            return Err(TzLookupError::UnexpectedEof {
                name: name.to_string(),
            });
        }
        cursor.advance()?;
        let depth = cursor.depth();
        if depth < required_depth {
            return Err(TzLookupError::UnexpectedDepth {
                name: name.to_string(),
                position: cursor.position(),
            });
        }
        if depth == required_depth {
            if let Token::End { name: current } = cursor.token() {
                if current == name {
                    return Ok(());
                }
                return Err(TzLookupError::UnexpectedEndTag {
                    expected: name.to_string(),
                    found: current.clone(),
                    position: cursor.position(),
                });
            }
        }
        // Anything else is either too deep or of no interest and is ignored.
    }
}

/// Reads the text payload of the current start element, leaving the cursor
/// on the matching end element.
pub(crate) fn read_element_text<R: BufRead>(cursor: &mut DocCursor<R>) -> Result<String> {
    cursor.advance()?;
    let text = match cursor.token() {
        Token::Text(text) => text.clone(),
        _ => {
            return Err(TzLookupError::MissingText {
                position: cursor.position(),
            })
        }
    };
    cursor.advance()?;
    if !matches!(cursor.token(), Token::End { .. }) {
        return Err(TzLookupError::UnexpectedTrailingContent {
            position: cursor.position(),
        });
    }
    Ok(text)
}

/// Asserts that the cursor currently sits on the end element named `name`.
pub(crate) fn assert_on_end<R: BufRead>(cursor: &DocCursor<R>, name: &str) -> Result<()> {
    match cursor.token() {
        Token::End { name: current } if current == name => Ok(()),
        _ => Err(TzLookupError::UnexpectedTag {
            expected: name.to_string(),
            position: cursor.position(),
        }),
    }
}
