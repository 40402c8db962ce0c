//! # Key and IV Material
//!
//! Callers hand keys and IVs over in one of three representations. They are
//! normalized into secure-gate buffers before any cryptography runs, so the
//! rest of the crate only ever sees raw bytes.

use crate::aliases::{Iv16, KeyBytes};
use crate::consts::{AES_KEY_LENGTHS, IV_LENGTH};
use crate::error::BytekitError;
use crate::utils::decode_hex;

/// Key or IV material as supplied by the caller.
///
/// The same type is used for keys and IVs; the consuming operation decides
/// which length rules apply.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum KeyMaterial<'a> {
    /// Raw bytes, used as-is.
    Bytes(&'a [u8]),
    /// A UTF-8 string coerced byte-for-byte.
    Text(&'a str),
    /// A hexadecimal string (even number of digits, case-insensitive).
    Hex(&'a str),
}

impl<'a> KeyMaterial<'a> {
    #[must_use]
    pub const fn bytes(bytes: &'a [u8]) -> Self {
        KeyMaterial::Bytes(bytes)
    }

    #[must_use]
    pub const fn text(text: &'a str) -> Self {
        KeyMaterial::Text(text)
    }

    #[must_use]
    pub const fn hex(hex: &'a str) -> Self {
        KeyMaterial::Hex(hex)
    }

    /// Decode into raw bytes.
    ///
    /// # Errors
    ///
    /// [`BytekitError::InvalidHexEncoding`] when a `Hex` value is malformed.
    pub fn normalize(&self) -> Result<KeyBytes, BytekitError> {
        let bytes = match *self {
            KeyMaterial::Bytes(bytes) => bytes.to_vec(),
            KeyMaterial::Text(text) => text.as_bytes().to_vec(),
            KeyMaterial::Hex(hex) => decode_hex(hex)?,
        };
        Ok(KeyBytes::new(bytes))
    }
}

// Never print key material.
impl std::fmt::Debug for KeyMaterial<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            KeyMaterial::Bytes(_) => "Bytes",
            KeyMaterial::Text(_) => "Text",
            KeyMaterial::Hex(_) => "Hex",
        };
        write!(f, "KeyMaterial::{kind}([REDACTED])")
    }
}

impl<'a> From<&'a [u8]> for KeyMaterial<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        KeyMaterial::Bytes(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for KeyMaterial<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        KeyMaterial::Bytes(bytes)
    }
}

impl<'a> From<&'a Vec<u8>> for KeyMaterial<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        KeyMaterial::Bytes(bytes)
    }
}

impl<'a> From<&'a str> for KeyMaterial<'a> {
    fn from(text: &'a str) -> Self {
        KeyMaterial::Text(text)
    }
}

/// Normalized cipher parameters: a key of 16, 24 or 32 bytes and a 16-byte IV.
pub struct CipherParams {
    pub key: KeyBytes,
    pub iv: Iv16,
}

/// Normalize and validate a cipher key/IV pair.
///
/// Both values are decoded first, then the key length and finally the IV
/// length is checked.
pub fn normalize_cipher_params(
    key: &KeyMaterial<'_>,
    iv: &KeyMaterial<'_>,
) -> Result<CipherParams, BytekitError> {
    let key = key.normalize()?;
    let iv_bytes = iv.normalize()?;

    let key_len = key.expose_secret().len();
    if !AES_KEY_LENGTHS.contains(&key_len) {
        tracing::debug!(key_len, "cipher key rejected");
        return Err(BytekitError::InvalidKeyLength(key_len));
    }

    let iv_slice: &[u8] = iv_bytes.expose_secret();
    if iv_slice.len() != IV_LENGTH {
        tracing::debug!(iv_len = iv_slice.len(), "cipher IV rejected");
        return Err(BytekitError::InvalidIVLength(iv_slice.len()));
    }

    let mut iv = Iv16::new([0u8; 16]);
    iv.expose_secret_mut().copy_from_slice(iv_slice);

    Ok(CipherParams { key, iv })
}
