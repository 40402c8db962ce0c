//! src/codec/percent.rs
//! RFC 3986 percent-encoding.
//!
//! Encoding escapes every byte of the UTF-8 representation that is not in
//! the unreserved set `A-Z a-z 0-9 - _ . ~` as uppercase `%XX`. Decoding is
//! strict: a `%` must be followed by two hex digits, and the decoded bytes
//! must be UTF-8. `+` is an ordinary character in both directions.

use crate::consts::UNRESERVED_PUNCTUATION;
use crate::error::BytekitError;

/// `true` for bytes in the RFC 3986 §2.3 unreserved set.
#[inline(always)]
pub fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || UNRESERVED_PUNCTUATION.contains(&byte)
}

/// Percent-encode `input`.
///
/// ```
/// assert_eq!(bytekit::encode_percent("a b/c"), "a%20b%2Fc");
/// assert_eq!(bytekit::encode_percent("é"), "%C3%A9");
/// ```
pub fn encode_percent(input: &str) -> String {
    urlencoding::encode(input).into_owned()
}

/// Offset of the first `%` not followed by two hex digits.
fn malformed_escape(bytes: &[u8]) -> Option<usize> {
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'%' {
            i += 1;
            continue;
        }
        match bytes.get(i + 1..i + 3) {
            Some(pair) if pair.iter().all(u8::is_ascii_hexdigit) => i += 3,
            _ => return Some(i),
        }
    }
    None
}

/// Reverse [`encode_percent`]. Hex digits are accepted in either case.
///
/// # Errors
///
/// - [`BytekitError::InvalidPercentEncoding`] - a `%` not followed by two hex digits
/// - [`BytekitError::InvalidUtf8`] - the decoded bytes are not UTF-8
pub fn decode_percent(input: &str) -> Result<String, BytekitError> {
    if let Some(offset) = malformed_escape(input.as_bytes()) {
        tracing::debug!(offset, "percent decoding rejected");
        return Err(BytekitError::InvalidPercentEncoding);
    }

    Ok(urlencoding::decode(input)?.into_owned())
}
