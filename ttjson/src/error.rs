//! Error types for JSON parsing.

use thiserror::Error;

/// Result type for JSON parsing operations.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Parse context carrying filename for error reporting.
#[derive(Clone, Debug, Default)]
pub struct ParseContext {
    pub filename: Option<String>,
}

impl ParseContext {
    /// Create a new parse context.
    pub fn new(filename: Option<&str>) -> Self {
        Self {
            filename: filename.map(String::from),
        }
    }

    /// Format a location suffix for error messages.
    pub fn loc_suffix(&self) -> String {
        match &self.filename {
            Some(name) => format!(" of <{}>", name),
            None => String::new(),
        }
    }
}

/// The production being read when the input ran out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Production {
    Value,
    String,
    List,
    Object,
}

impl std::fmt::Display for Production {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Production::Value => "value",
            Production::String => "string",
            Production::List => "list",
            Production::Object => "object",
        })
    }
}

/// Error type for JSON parsing.
///
/// Every variant carries the 0-based byte offset of the cursor when the
/// error was raised, and `loc`, a location suffix from the [`ParseContext`]
/// (empty when no filename was given).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// A structural character did not match.
    #[error("Expected '{expected}', got '{found}' at index {offset}{loc}")]
    UnexpectedChar {
        expected: char,
        found: char,
        offset: usize,
        loc: String,
    },

    /// No value starts at this character.
    #[error("Expected a value, got '{found}' at index {offset}{loc}")]
    ExpectedValue {
        found: char,
        offset: usize,
        loc: String,
    },

    /// The input ended in the middle of a production. `expected` is set
    /// when a specific structural character was required next.
    #[error("Unexpected end of input in {inside}{} at index {offset}{loc}", expecting(.expected))]
    UnexpectedEnd {
        inside: Production,
        expected: Option<char>,
        offset: usize,
        loc: String,
    },

    /// Lists and objects nested deeper than the parser allows.
    #[error("Maximum nesting depth of {limit} exceeded at index {offset}{loc}")]
    TooDeep {
        limit: usize,
        offset: usize,
        loc: String,
    },

    /// A numeric token did not parse in the mode its characters selected.
    #[error("Invalid number \"{literal}\" at index {offset}{loc}")]
    InvalidNumber {
        literal: String,
        offset: usize,
        loc: String,
    },
}

impl ParseError {
    /// Byte offset into the input where the error was detected.
    pub fn offset(&self) -> usize {
        match self {
            ParseError::UnexpectedChar { offset, .. }
            | ParseError::ExpectedValue { offset, .. }
            | ParseError::UnexpectedEnd { offset, .. }
            | ParseError::InvalidNumber { offset, .. }
            | ParseError::TooDeep { offset, .. } => *offset,
        }
    }

    /// Returns `true` if the error was caused by truncated input.
    pub fn is_eof(&self) -> bool {
        matches!(self, ParseError::UnexpectedEnd { .. })
    }
}

fn expecting(expected: &Option<char>) -> String {
    match expected {
        Some(ch) => format!(", expected '{}'", ch),
        None => String::new(),
    }
}
