//! Line codec
//!
//! Encoding and decoding of the inventory text format.
//!
//! ## Line Format
//! ```text
//! ┌──────────────┬───┬──────────────────┬───┬─────┬───┬───────┐
//! │ escaped name │ , │ escaped category │ , │ qty │ , │ price │
//! └──────────────┴───┴──────────────────┴───┴─────┴───┴───────┘
//! ```
//!
//! ### Escaping
//! - `|` → `||`
//! - `,` → `|,`
//!
//! `|` consumes the character after it, so a field separator is any comma not
//! consumed that way.

use crate::error::{InventoryError, Result};
use crate::item::Item;

/// Escape character
const ESCAPE: char = '|';

/// Field separator
const SEPARATOR: char = ',';

/// Minimum number of fields per line (extra trailing fields are ignored)
const MIN_FIELDS: usize = 4;

// =============================================================================
// Field Escaping
// =============================================================================

/// Escape a text field
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c == ESCAPE || c == SEPARATOR {
            out.push(ESCAPE);
        }
        out.push(c);
    }
    out
}

/// Reverse `escape`
///
/// A trailing lone `|` (never produced by `escape`) is kept as-is.
pub fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == ESCAPE {
            out.push(chars.next().unwrap_or(ESCAPE));
        } else {
            out.push(c);
        }
    }
    out
}

/// Split a line into raw (still escaped) fields
///
/// Empty fields are preserved, including trailing ones.
pub fn split_fields(line: &str) -> Vec<&str> {
    let mut fields = Vec::new();
    let mut start = 0;
    let mut chars = line.char_indices();

    while let Some((idx, c)) = chars.next() {
        if c == ESCAPE {
            chars.next();
        } else if c == SEPARATOR {
            fields.push(&line[start..idx]);
            start = idx + c.len_utf8();
        }
    }
    fields.push(&line[start..]);
    fields
}

// =============================================================================
// Line Encoding/Decoding
// =============================================================================

/// Encode one item as a line (without the trailing newline)
pub fn encode_line(item: &Item) -> String {
    format!(
        "{}{sep}{}{sep}{}{sep}{:?}",
        escape(&item.name),
        escape(&item.category),
        item.quantity,
        item.price,
        sep = SEPARATOR
    )
}

/// Decode one line; `line_no` is 1-based and only used for error reporting
pub fn decode_line(line: &str, line_no: usize) -> Result<Item> {
    let fields = split_fields(line);
    if fields.len() < MIN_FIELDS {
        return Err(InventoryError::Load {
            line: line_no,
            reason: format!("expected {} fields, found {}", MIN_FIELDS, fields.len()),
        });
    }

    let quantity = fields[2].parse::<u32>().map_err(|e| InventoryError::Load {
        line: line_no,
        reason: format!("invalid quantity {:?}: {}", fields[2], e),
    })?;

    let price = fields[3].parse::<f64>().map_err(|e| InventoryError::Load {
        line: line_no,
        reason: format!("invalid price {:?}: {}", fields[3], e),
    })?;

    Ok(Item {
        name: unescape(fields[0]),
        category: unescape(fields[1]),
        quantity,
        price,
    })
}

// =============================================================================
// Document Encoding/Decoding
// =============================================================================

/// Encode a full item list, one newline-terminated line per item
pub fn encode_document(items: &[Item]) -> String {
    let mut out = String::new();
    for item in items {
        out.push_str(&encode_line(item));
        out.push('\n');
    }
    out
}

/// Decode a full document
///
/// Blank lines are skipped. The first malformed line aborts the whole decode;
/// no partial result is returned.
pub fn decode_document(text: &str) -> Result<Vec<Item>> {
    let mut items = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        items.push(decode_line(line, idx + 1)?);
    }
    Ok(items)
}

// =============================================================================
// Unit Tests
// =============================================================================
