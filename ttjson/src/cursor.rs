//! Bounds-checked read head over the input text.
//!
//! The cursor is a byte offset into a `&str`. It only ever stops on ASCII
//! bytes or just past them, so it always sits on a character boundary. Every
//! read returns an `Option` or a [`ParseError`]; nothing here indexes past the
//! end of the input.

use crate::error::{ParseError, Production};

pub(crate) struct Cursor<'a> {
    text: &'a str,
    pos: usize,
    /// Location suffix appended to every error message.
    loc: String,
}

impl<'a> Cursor<'a> {
    pub fn new(text: &'a str, loc: String) -> Self {
        Self { text, pos: 0, loc }
    }

    pub fn reset(&mut self) {
        self.pos = 0;
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// The byte under the cursor, or `None` at end of input.
    pub fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.pos).copied()
    }

    /// The byte under the cursor, or an end-of-input error naming `inside`.
    pub fn require(&self, inside: Production) -> Result<u8, ParseError> {
        self.peek().ok_or_else(|| self.end(inside))
    }

    /// Step over one ASCII byte previously seen with `peek`.
    pub fn bump(&mut self) {
        self.pos += 1;
    }

    /// Consume `expected` or fail with the character actually found.
    pub fn expect(&mut self, expected: u8, inside: Production) -> Result<(), ParseError> {
        match self.peek() {
            Some(byte) if byte == expected => {
                self.bump();
                Ok(())
            }
            _ => Err(self.unexpected(expected as char, inside)),
        }
    }

    pub fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t' | b'\r' | b'\n')) {
            self.bump();
        }
    }

    /// Consume `word` if the input continues with it, ignoring ASCII case.
    pub fn eat_literal(&mut self, word: &str) -> bool {
        let end = self.pos + word.len();
        match self.text.get(self.pos..end) {
            Some(ahead) if ahead.eq_ignore_ascii_case(word) => {
                self.pos = end;
                true
            }
            _ => false,
        }
    }

    /// Consume the longest run of ASCII bytes accepted by `accept`.
    pub fn take_while(&mut self, accept: impl Fn(u8) -> bool) -> &'a str {
        let start = self.pos;
        while self.peek().is_some_and(&accept) {
            self.bump();
        }
        let text = self.text;
        &text[start..self.pos]
    }

    /// Consume a string body up to and including the first unescaped `"`.
    ///
    /// The cursor must sit just past the opening quote. Returns the raw text
    /// between the quotes with escapes still in place.
    pub fn take_quoted(&mut self) -> Result<&'a str, ParseError> {
        let start = self.pos;
        let mut escaped = false;
        loop {
            let byte = self.require(Production::String)?;
            self.bump();
            if escaped {
                escaped = false;
            } else if byte == b'"' {
                let text = self.text;
                return Ok(&text[start..self.pos - 1]);
            } else if byte == b'\\' {
                escaped = true;
            }
        }
    }

    /// The full character under the cursor, for error messages.
    fn current_char(&self) -> Option<char> {
        self.text.get(self.pos..).and_then(|rest| rest.chars().next())
    }

    pub fn unexpected(&self, expected: char, inside: Production) -> ParseError {
        match self.current_char() {
            Some(found) => ParseError::UnexpectedChar {
                expected,
                found,
                offset: self.pos,
                loc: self.loc.clone(),
            },
            None => ParseError::UnexpectedEnd {
                inside,
                expected: Some(expected),
                offset: self.pos,
                loc: self.loc.clone(),
            },
        }
    }

    pub fn expected_value(&self) -> ParseError {
        match self.current_char() {
            Some(found) => ParseError::ExpectedValue {
                found,
                offset: self.pos,
                loc: self.loc.clone(),
            },
            None => self.end(Production::Value),
        }
    }

    pub fn end(&self, inside: Production) -> ParseError {
        ParseError::UnexpectedEnd {
            inside,
            expected: None,
            offset: self.pos,
            loc: self.loc.clone(),
        }
    }

    pub fn too_deep(&self, limit: usize) -> ParseError {
        ParseError::TooDeep {
            limit,
            offset: self.pos,
            loc: self.loc.clone(),
        }
    }

    pub fn invalid_number(&self, literal: &str, offset: usize) -> ParseError {
        ParseError::InvalidNumber {
            literal: literal.to_string(),
            offset,
            loc: self.loc.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor(text: &str) -> Cursor<'_> {
        Cursor::new(text, String::new())
    }

    #[test]
    fn test_skip_whitespace_stops_at_end() {
        let mut c = cursor(" \t\r\n");
        c.skip_whitespace();
        assert_eq!(c.pos(), 4);
        assert_eq!(c.peek(), None);
        assert!(c.require(Production::List).unwrap_err().is_eof());
    }

    #[test]
    fn test_skip_whitespace_leaves_other_bytes() {
        let mut c = cursor("  \u{a0}x");
        c.skip_whitespace();
        assert_eq!(c.pos(), 2);
    }

    #[test]
    fn test_expect() {
        let mut c = cursor("[x");
        c.expect(b'[', Production::List).unwrap();
        let err = c.expect(b']', Production::List).unwrap_err();
        assert_eq!(err.to_string(), "Expected ']', got 'x' at index 1");
        c.bump();
        let err = c.expect(b']', Production::List).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unexpected end of input in list, expected ']' at index 2"
        );
    }

    #[test]
    fn test_eat_literal_short_tail() {
        let mut c = cursor("tru");
        assert!(!c.eat_literal("true"));
        assert_eq!(c.pos(), 0);

        let mut c = cursor("NuLl,");
        assert!(c.eat_literal("null"));
        assert_eq!(c.pos(), 4);
    }

    #[test]
    fn test_eat_literal_non_boundary() {
        // 'é' is two bytes, so the 4-byte window ends mid-character.
        let mut c = cursor("tré");
        assert!(!c.eat_literal("true"));
    }

    #[test]
    fn test_take_while() {
        let mut c = cursor("123,");
        assert_eq!(c.take_while(|b| b.is_ascii_digit()), "123");
        assert_eq!(c.peek(), Some(b','));
        assert_eq!(c.take_while(|b| b.is_ascii_digit()), "");
    }

    #[test]
    fn test_take_quoted_escaped_quote() {
        let mut c = cursor(r#"a\"b" rest"#);
        assert_eq!(c.take_quoted().unwrap(), r#"a\"b"#);
        assert_eq!(c.pos(), 5);
    }

    #[test]
    fn test_take_quoted_escape_flag_resets() {
        let mut c = cursor(r#"a\\"b"#);
        assert_eq!(c.take_quoted().unwrap(), r"a\\");
    }

    #[test]
    fn test_take_quoted_unterminated() {
        let mut c = cursor(r#"abc\""#);
        let err = c.take_quoted().unwrap_err();
        assert_eq!(
            err,
            ParseError::UnexpectedEnd {
                inside: Production::String,
                expected: None,
                offset: 5,
                loc: String::new(),
            }
        );
    }

    #[test]
    fn test_unexpected_at_end_keeps_production() {
        let mut c = cursor("{");
        c.bump();
        let err = c.unexpected(':', Production::Object);
        assert_eq!(
            err,
            ParseError::UnexpectedEnd {
                inside: Production::Object,
                expected: Some(':'),
                offset: 1,
                loc: String::new(),
            }
        );
        assert!(c.expect(b':', Production::Object).unwrap_err().is_eof());
    }

    #[test]
    fn test_unexpected_reports_whole_char() {
        let mut c = cursor("ü");
        let err = c.expect(b':', Production::Object).unwrap_err();
        assert_eq!(err.to_string(), "Expected ':', got 'ü' at index 0");
    }
}
