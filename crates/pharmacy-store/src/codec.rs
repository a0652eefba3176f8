//! # Line Codec
//!
//! One record per line, fields separated by commas.
//!
//! ## Quoting
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Field value          Written as            Read back as               │
//! │  ─────────────────    ──────────────────    ─────────────────────      │
//! │  Aspirin              Aspirin               Aspirin                    │
//! │  Doe, Jane            "Doe, Jane"           Doe, Jane                  │
//! │  5" gauze             "5"" gauze"           5" gauze                   │
//! │                                                                         │
//! │  Only fields containing a comma or a double quote are quoted, so a     │
//! │  plain file (`1,Aspirin,50,5.0`) is read exactly as it always was.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Quotes only mean something at the start of a field. A quote in the
//! middle of an unquoted field is kept as text.

use thiserror::Error;

/// Field separator.
pub const DELIMITER: char = ',';

const QUOTE: char = '"';

/// Reasons a line can't be split into fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("quoted field starting at column {column} is never closed")]
    UnterminatedQuote { column: usize },

    #[error("unexpected text after closing quote at column {column}")]
    TextAfterQuote { column: usize },
}

/// Joins fields into one line (without the trailing newline).
pub fn encode_line<S: AsRef<str>>(fields: &[S]) -> String {
    let mut line = String::new();

    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            line.push(DELIMITER);
        }
        encode_field(field.as_ref(), &mut line);
    }

    line
}

fn encode_field(field: &str, out: &mut String) {
    if !field.contains([DELIMITER, QUOTE]) {
        out.push_str(field);
        return;
    }

    out.push(QUOTE);
    for c in field.chars() {
        if c == QUOTE {
            out.push(QUOTE);
        }
        out.push(c);
    }
    out.push(QUOTE);
}

/// Splits one line into fields.
///
/// An empty line is a single empty field; callers decide whether blank
/// lines mean anything.
pub fn decode_line(line: &str) -> Result<Vec<String>, CodecError> {
    let mut fields = Vec::new();
    let mut chars = line.char_indices().peekable();

    loop {
        let mut value = String::new();

        if let Some(&(start, QUOTE)) = chars.peek() {
            chars.next();
            loop {
                match chars.next() {
                    None => return Err(CodecError::UnterminatedQuote { column: start + 1 }),
                    Some((_, QUOTE)) => {
                        if matches!(chars.peek(), Some(&(_, QUOTE))) {
                            chars.next();
                            value.push(QUOTE);
                        } else {
                            break;
                        }
                    }
                    Some((_, c)) => value.push(c),
                }
            }

            fields.push(value);
            match chars.next() {
                None => return Ok(fields),
                Some((_, DELIMITER)) => continue,
                Some((pos, _)) => return Err(CodecError::TextAfterQuote { column: pos + 1 }),
            }
        }

        loop {
            match chars.next() {
                None => {
                    fields.push(value);
                    return Ok(fields);
                }
                Some((_, DELIMITER)) => break,
                Some((_, c)) => value.push(c),
            }
        }
        fields.push(value);
    }
}
