//! Byte-offset helpers over UTF-8 text.
//!
//! Offsets are always on char boundaries; the executor only ever advances
//! by `char::len_utf8`.

/// Character starting at `offset`, if any.
#[inline]
pub fn char_at(text: &str, offset: usize) -> Option<char> {
    text.get(offset..)?.chars().next()
}

/// Character ending at `offset`, if any.
#[inline]
pub fn char_before(text: &str, offset: usize) -> Option<char> {
    text.get(..offset)?.chars().next_back()
}

/// Printable form of a single character for dumps and traces.
pub fn escape_char(c: char) -> String {
    match c {
        '\n' => "\\n".to_string(),
        '\r' => "\\r".to_string(),
        '\t' => "\\t".to_string(),
        '\x0b' => "\\v".to_string(),
        '\x0c' => "\\f".to_string(),
        ' ' => "' '".to_string(),
        c if c.is_control() => c.escape_unicode().to_string(),
        c => c.to_string(),
    }
}
