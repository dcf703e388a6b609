//! Percent-encoding for Flexivis parameter values.
//!
//! Flexivis reads its parameters from the URL fragment as `&`-separated
//! `key=value` pairs and treats a literal `+` as an encoded space. Generic
//! form encoding escapes far more than necessary, which makes links long and
//! unreadable, so values are encoded with a narrower policy:
//!
//! - ASCII letters, digits and `- _ . ~` are never escaped.
//! - Reserved characters (`: / ? # [ ] @ ! $ & ' ( ) * + , ; =`) are kept
//!   literal, except `&` (the parameter separator), `+` (read back as a space)
//!   and `#` (terminal URL detection stops at a second `#`).
//! - A space becomes `+`.
//! - Every other byte, including `%` itself, becomes `%XX` in uppercase hex.

use std::borrow::Cow;

const UPPER_HEX: &[u8; 16] = b"0123456789ABCDEF";

/// Encode `value` for use as a single Flexivis parameter value.
///
/// Returns the input unchanged (borrowed) when nothing needs escaping.
/// Encoding works on the UTF-8 bytes, so non-ASCII characters come out as
/// one `%XX` group per byte.
pub fn escape_parameter_value(value: &str) -> Cow<'_, str> {
    let mut has_space = false;
    let mut percent_encoded = 0usize;
    for &c in value.as_bytes() {
        if should_escape(c) {
            if c == b' ' {
                has_space = true;
            } else {
                percent_encoded += 1;
            }
        }
    }
    if percent_encoded == 0 && !has_space {
        return Cow::Borrowed(value);
    }

    let mut encoded = String::with_capacity(value.len() + 2 * percent_encoded);
    for &c in value.as_bytes() {
        if !should_escape(c) {
            encoded.push(char::from(c));
        } else if c == b' ' {
            encoded.push('+');
        } else {
            encoded.push('%');
            encoded.push(char::from(UPPER_HEX[usize::from(c >> 4)]));
            encoded.push(char::from(UPPER_HEX[usize::from(c & 0xf)]));
        }
    }
    Cow::Owned(encoded)
}

/// Whether `c` has to be transformed when it appears in a parameter value.
///
/// A space is reported as needing escaping; [`escape_parameter_value`] turns
/// it into `+` rather than `%20`.
pub fn should_escape(c: u8) -> bool {
    if c.is_ascii_alphanumeric() {
        return false;
    }
    match c {
        // Unreserved symbols (RFC 3986 §2.3).
        b'-' | b'_' | b'.' | b'~' => false,
        // Reserved characters (RFC 3986 §2.2) that carry meaning for Flexivis.
        b'&' | b'+' | b'#' => true,
        b':' | b'/' | b'?' | b'[' | b']' | b'@' | b'!' | b'$' | b'\'' | b'(' | b')' | b'*'
        | b',' | b';' | b'=' => false,
        _ => true,
    }
}
