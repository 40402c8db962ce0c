// ============================================================================
// FILE: src/utils.rs
// ============================================================================

//! Utility functions used across the library.

use crate::error::BytekitError;

/// Renders bytes as lowercase hexadecimal, two characters per byte, no separators.
///
/// ```
/// assert_eq!(bytekit::utils::to_hex(&[0x00, 0xab, 0xff]), "00abff");
/// ```
#[inline]
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Decodes a hex string (even length, case-insensitive) into bytes.
///
/// # Errors
///
/// [`BytekitError::InvalidHexEncoding`] on odd length or any non-hex character.
#[inline]
pub fn decode_hex(text: &str) -> Result<Vec<u8>, BytekitError> {
    hex::decode(text).map_err(|e| {
        tracing::debug!(len = text.len(), error = %e, "hex decoding rejected");
        BytekitError::InvalidHexEncoding
    })
}

/// Converts owned bytes into a `String`, validating UTF-8.
#[inline]
pub fn bytes_to_text(bytes: Vec<u8>) -> Result<String, BytekitError> {
    Ok(String::from_utf8(bytes)?)
}

/// XORs two 16-byte blocks and writes the result to `output`.
///
/// Used for CBC chaining in both directions.
///
/// # Panics (by contract)
///
/// Panics if any of the three slices is shorter than 16 bytes. Callers only
/// pass `Block16`/`Iv16` contents or `chunks_exact(16)` chunks.
#[inline(always)]
pub const fn xor_blocks(block_a: &[u8], block_b: &[u8], output: &mut [u8]) {
    let mut i = 0;
    while i < 16 {
        output[i] = block_a[i] ^ block_b[i];
        i += 1;
    }
}
