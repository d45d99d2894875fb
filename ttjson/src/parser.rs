//! Recursive-descent parser.
//!
//! The parser reads the input once, left to right. At each value position it
//! dispatches on the next significant byte:
//!
//! - `"` string, `[` list, `{` object
//! - `true`, `false` or `null` in any ASCII case
//! - anything else goes to the number rule
//!
//! Every consume-routine either advances the cursor or returns an error, so a
//! parse always terminates. Content after the root value is not examined;
//! callers that care can compare [`Parser::position`] with the input length.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::error::{ParseContext, Production, Result};
use crate::escape;
use crate::Value;

/// Deepest nesting of lists and objects a document may use.
pub const MAX_DEPTH: usize = 256;

/// Bytes the number rule accepts. Wider than JSON's number grammar; malformed
/// tokens are rejected when the token is converted.
fn is_number_byte(b: u8) -> bool {
    matches!(
        b,
        b'0'..=b'9' | b'.' | b'e' | b'E' | b'+' | b'-' | b'x' | b'X' | b'a'..=b'f' | b'A'..=b'F'
    )
}

/// A single-document JSON parser over a borrowed text buffer.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    ctx: ParseContext,
    /// Lists and objects currently open.
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Create a parser over `text`.
    pub fn new(text: &'a str) -> Self {
        Self::with_context(text, ParseContext::default())
    }

    /// Create a parser whose errors name the file in `ctx`.
    pub fn with_context(text: &'a str, ctx: ParseContext) -> Self {
        Self {
            cursor: Cursor::new(text, ctx.loc_suffix()),
            ctx,
            depth: 0,
        }
    }

    /// Parse the text from the beginning and return its root value.
    ///
    /// Calling this again starts over from offset 0.
    pub fn parse(&mut self) -> Result<Value> {
        debug!(
            len = self.cursor.len(),
            filename = self.ctx.filename.as_deref(),
            "parsing JSON document"
        );
        self.cursor.reset();
        self.depth = 0;
        self.cursor.skip_whitespace();
        let result = self.consume_value();
        if let Err(err) = &result {
            debug!(error = %err, "JSON parse failed");
        }
        result
    }

    /// Byte offset just past the last value parsed.
    pub fn position(&self) -> usize {
        self.cursor.pos()
    }

    fn consume_value(&mut self) -> Result<Value> {
        match self.cursor.require(Production::Value)? {
            b'"' => Ok(Value::String(self.consume_string()?)),
            b'[' => Ok(Value::List(self.consume_list()?)),
            b'{' => Ok(Value::Object(self.consume_object()?)),
            _ => match self.consume_literal() {
                Some(value) => Ok(value),
                None => self.consume_number(),
            },
        }
    }

    /// Open a list or object, failing once more than [`MAX_DEPTH`] are open.
    fn enter(&mut self) -> Result<()> {
        if self.depth >= MAX_DEPTH {
            return Err(self.cursor.too_deep(MAX_DEPTH));
        }
        self.depth += 1;
        Ok(())
    }

    fn consume_literal(&mut self) -> Option<Value> {
        if self.cursor.eat_literal("true") {
            Some(Value::Bool(true))
        } else if self.cursor.eat_literal("false") {
            Some(Value::Bool(false))
        } else if self.cursor.eat_literal("null") {
            Some(Value::Null)
        } else {
            None
        }
    }

    fn consume_number(&mut self) -> Result<Value> {
        let start = self.cursor.pos();
        let token = self.cursor.take_while(is_number_byte);
        if token.is_empty() {
            return Err(self.cursor.expected_value());
        }

        if token.contains(['.', 'e', 'E']) {
            token
                .parse::<f64>()
                .map(Value::Double)
                .map_err(|_| self.cursor.invalid_number(token, start))
        } else {
            token
                .parse::<i64>()
                .map(Value::Int)
                .map_err(|_| self.cursor.invalid_number(token, start))
        }
    }

    fn consume_string(&mut self) -> Result<String> {
        self.cursor.expect(b'"', Production::String)?;
        let raw = self.cursor.take_quoted()?;
        Ok(escape::unescape(raw).into_owned())
    }

    fn consume_list(&mut self) -> Result<Vec<Value>> {
        self.enter()?;
        self.cursor.expect(b'[', Production::List)?;
        let mut items = Vec::new();
        loop {
            self.cursor.skip_whitespace();
            if self.cursor.require(Production::List)? == b']' {
                self.cursor.bump();
                break;
            }
            if !items.is_empty() {
                self.cursor.expect(b',', Production::List)?;
                self.cursor.skip_whitespace();
            }
            items.push(self.consume_value()?);
        }
        self.depth -= 1;
        trace!(len = items.len(), end = self.cursor.pos(), "consumed list");
        Ok(items)
    }

    fn consume_object(&mut self) -> Result<HashMap<String, Value>> {
        self.enter()?;
        self.cursor.expect(b'{', Production::Object)?;
        let mut members = HashMap::new();
        loop {
            self.cursor.skip_whitespace();
            if self.cursor.require(Production::Object)? == b'}' {
                self.cursor.bump();
                break;
            }
            if !members.is_empty() {
                self.cursor.expect(b',', Production::Object)?;
                self.cursor.skip_whitespace();
            }
            let key = self.consume_string()?;
            self.cursor.skip_whitespace();
            self.cursor.expect(b':', Production::Object)?;
            self.cursor.skip_whitespace();
            // Last write wins on duplicate keys.
            let value = self.consume_value()?;
            members.insert(key, value);
        }
        self.depth -= 1;
        trace!(len = members.len(), end = self.cursor.pos(), "consumed object");
        Ok(members)
    }
}
