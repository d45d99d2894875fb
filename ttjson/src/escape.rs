//! Decoding of the raw text between a string's quotes.
//!
//! Simple pairs (`\"`, `\\`, `\/`, `\b`, `\f`, `\n`, `\r`, `\t`) and `\uXXXX`
//! escapes are decoded in one left-to-right pass, so the output of one escape
//! is never rescanned. Anything else after a backslash is kept as written.

use std::borrow::Cow;

const REPLACEMENT: char = '\u{FFFD}';

/// Decode the escapes in `raw`, borrowing when there are none.
pub(crate) fn unescape(raw: &str) -> Cow<'_, str> {
    if !raw.contains('\\') {
        return Cow::Borrowed(raw);
    }

    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(slash) = rest.find('\\') {
        out.push_str(&rest[..slash]);
        rest = &rest[slash..];
        match escape_at(rest) {
            Some((ch, consumed)) => {
                out.push(ch);
                rest = &rest[consumed..];
            }
            None => {
                out.push('\\');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}

/// Decode the escape at the start of `s` (which begins with a backslash).
/// Returns the character and the number of bytes it spans.
fn escape_at(s: &str) -> Option<(char, usize)> {
    let ch = match s.as_bytes().get(1)? {
        b'"' => '"',
        b'\\' => '\\',
        b'/' => '/',
        b'b' => '\x08',
        b'f' => '\x0c',
        b'n' => '\n',
        b'r' => '\r',
        b't' => '\t',
        b'u' => return unicode_at(s),
        _ => return None,
    };
    Some((ch, 2))
}

/// Decode `\uXXXX`, joining a high surrogate with an immediately following
/// `\uXXXX` low surrogate. Unpaired surrogates become U+FFFD.
fn unicode_at(s: &str) -> Option<(char, usize)> {
    let unit = hex4(s, 2)?;
    match unit {
        0xD800..=0xDBFF => {
            let low = s
                .get(6..8)
                .filter(|next| *next == "\\u")
                .and_then(|_| hex4(s, 8))
                .filter(|low| (0xDC00..=0xDFFF).contains(low));
            match low {
                Some(low) => {
                    let cp = 0x10000
                        + ((u32::from(unit) - 0xD800) << 10)
                        + (u32::from(low) - 0xDC00);
                    Some((char::from_u32(cp).unwrap_or(REPLACEMENT), 12))
                }
                None => Some((REPLACEMENT, 6)),
            }
        }
        0xDC00..=0xDFFF => Some((REPLACEMENT, 6)),
        _ => Some((char::from_u32(u32::from(unit)).unwrap_or(REPLACEMENT), 6)),
    }
}

/// Read exactly four hex digits starting at byte `at`.
fn hex4(s: &str, at: usize) -> Option<u16> {
    let digits = s.get(at..at + 4)?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u16::from_str_radix(digits, 16).ok()
}
