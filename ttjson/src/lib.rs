//! A small JSON reader.
//!
//! `ttjson` decodes a complete JSON document held in memory into a [`Value`]
//! tree. It reads only; there is no encoder.
//!
//! # Parsing
//!
//! A [`Parser`] borrows the text and walks it once with a bounds-checked
//! cursor, dispatching on the next significant character to the string,
//! list, object, literal or number rule. Lists and objects recurse.
//!
//! The reader is deliberately forgiving in a few places:
//!
//! - `true`, `false` and `null` match in any ASCII case.
//! - Content after the root value is not checked.
//! - Unknown backslash escapes inside strings are kept as written.
//! - Duplicate object keys keep the last value.
//!
//! # Example
//!
//! ```
//! use ttjson::{parse, Value};
//!
//! let value = parse(r#"{"hp": 42, "tags": ["a", "b"]}"#).unwrap();
//! assert_eq!(value.get("hp"), Some(&Value::Int(42)));
//! assert_eq!(value.get("tags").and_then(|t| t.len()), Some(2));
//! ```

mod cursor;
mod error;
mod escape;
mod parser;
mod value;

pub use error::{ParseContext, ParseError, Production, Result};
pub use parser::{Parser, MAX_DEPTH};
pub use value::{Value, ValueKind};

/// Parse a JSON document from a string.
///
/// # Example
///
/// ```
/// use ttjson::parse;
///
/// let value = parse("42").unwrap();
/// assert_eq!(value.as_int(), Some(42));
/// ```
pub fn parse(input: &str) -> Result<Value> {
    parse_with_filename(input, None)
}

/// Parse a JSON document from a string with a filename for error messages.
pub fn parse_with_filename(input: &str, filename: Option<&str>) -> Result<Value> {
    let ctx = ParseContext::new(filename);
    Parser::with_context(input, ctx).parse()
}
