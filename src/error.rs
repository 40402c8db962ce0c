//! # Error Types
//!
//! This module defines the error type used throughout the library.
//! All fallible operations return [`Result<T, BytekitError>`](BytekitError).
//!
//! Digest and encode-direction operations never fail and therefore return
//! plain values.

use thiserror::Error;

/// The error type for all bytekit operations.
///
/// Every variant is local and recoverable. The crate only classifies the
/// failure; user-facing messaging is the caller's job.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BytekitError {
    /// A hex string had odd length or a non-hex character.
    #[error("invalid hex encoding")]
    InvalidHexEncoding,

    /// Bytes were not valid UTF-8 where text was required.
    #[error("invalid UTF-8")]
    InvalidUtf8,

    /// MAC key material could not be decoded from its textual form.
    #[error("invalid key encoding")]
    InvalidKeyEncoding,

    /// Cipher key length (in bytes) is not 16, 24 or 32.
    #[error("invalid key length: {0} bytes (expected 16, 24 or 32)")]
    InvalidKeyLength(usize),

    /// IV length (in bytes) is not 16.
    #[error("invalid IV length: {0} bytes (expected 16)")]
    InvalidIVLength(usize),

    /// Ciphertext length (in bytes) is not a positive multiple of the block size.
    #[error("invalid ciphertext length: {0} bytes")]
    InvalidCiphertextLength(usize),

    /// Decrypted trailing bytes are not valid PKCS#7 padding.
    ///
    /// Wrong key material and corrupted ciphertext both end up here and are
    /// deliberately not told apart.
    #[error("padding error")]
    PaddingError,

    /// Text is not valid Base64 for the selected alphabet.
    #[error("invalid Base64")]
    InvalidBase64,

    /// A `%` was not followed by two hex digits.
    #[error("invalid percent encoding")]
    InvalidPercentEncoding,

    /// Text is not a valid JSON document.
    #[error("invalid JSON: {0}")]
    InvalidJson(String),

    /// A builder was finished without a required parameter.
    #[error("missing parameter: {0}")]
    MissingParameter(&'static str),
}

impl From<hex::FromHexError> for BytekitError {
    fn from(_: hex::FromHexError) -> Self {
        BytekitError::InvalidHexEncoding
    }
}

impl From<base64::DecodeError> for BytekitError {
    fn from(_: base64::DecodeError) -> Self {
        BytekitError::InvalidBase64
    }
}

impl From<std::str::Utf8Error> for BytekitError {
    fn from(_: std::str::Utf8Error) -> Self {
        BytekitError::InvalidUtf8
    }
}

impl From<std::string::FromUtf8Error> for BytekitError {
    fn from(_: std::string::FromUtf8Error) -> Self {
        BytekitError::InvalidUtf8
    }
}

impl From<serde_json::Error> for BytekitError {
    fn from(err: serde_json::Error) -> Self {
        BytekitError::InvalidJson(err.to_string())
    }
}
