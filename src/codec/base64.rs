//! src/codec/base64.rs
//! Padded Base64 in both RFC 4648 alphabets.
//!
//! Decoding is strict: characters outside the selected alphabet, missing or
//! extra `=` padding and non-zero trailing bits are all rejected. The two
//! alphabets are never auto-detected.

use crate::error::BytekitError;
use crate::utils::bytes_to_text;
use ::base64::engine::general_purpose::{STANDARD, URL_SAFE};
use ::base64::Engine as _;

/// Standard alphabet (`+`, `/`) with `=` padding.
///
/// ```
/// assert_eq!(bytekit::encode_base64(b"hello"), "aGVsbG8=");
/// ```
#[inline]
pub fn encode_base64(input: &[u8]) -> String {
    STANDARD.encode(input)
}

/// Decode standard-alphabet, padded Base64.
///
/// # Errors
///
/// [`BytekitError::InvalidBase64`] on any alphabet or padding violation.
pub fn decode_base64(input: &str) -> Result<Vec<u8>, BytekitError> {
    STANDARD.decode(input).map_err(|e| {
        tracing::debug!(error = %e, "base64 decoding rejected");
        BytekitError::from(e)
    })
}

/// URL-safe alphabet (`-`, `_`) with `=` padding.
#[inline]
pub fn encode_base64_url_safe(input: &[u8]) -> String {
    URL_SAFE.encode(input)
}

/// Decode URL-safe, padded Base64.
pub fn decode_base64_url_safe(input: &str) -> Result<Vec<u8>, BytekitError> {
    URL_SAFE.decode(input).map_err(|e| {
        tracing::debug!(error = %e, "base64url decoding rejected");
        BytekitError::from(e)
    })
}

/// Decode standard Base64 and interpret the bytes as UTF-8.
pub fn decode_base64_to_text(input: &str) -> Result<String, BytekitError> {
    bytes_to_text(decode_base64(input)?)
}
