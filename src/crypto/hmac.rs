// src/crypto/hmac.rs

//! HMAC (RFC 2104) over every supported digest.
//!
//! Key block handling (hash long keys, zero-pad short ones) lives inside the
//! `hmac` crate, so any key length is accepted.

use crate::aliases::{HmacMd5, HmacSha1, HmacSha224, HmacSha256, HmacSha384, HmacSha512};
use crate::digest::DigestAlgorithm;
use crate::error::BytekitError;
use crate::key::KeyMaterial;
use crate::utils::to_hex;
use ::hmac::digest::KeyInit;
use ::hmac::Mac;

#[inline(always)]
fn mac_with<M: Mac + KeyInit>(key: &[u8], input: &[u8]) -> Result<Vec<u8>, BytekitError> {
    // Infallible: HMAC takes keys of any length.
    let mut mac =
        <M as KeyInit>::new_from_slice(key).map_err(|_| BytekitError::InvalidKeyEncoding)?;
    mac.update(input);
    Ok(mac.finalize().into_bytes().to_vec())
}

/// Compute the HMAC of `input` under `key` with `algorithm`.
///
/// # Errors
///
/// [`BytekitError::InvalidKeyEncoding`] when the key is a malformed hex string.
///
/// ```
/// use bytekit::{hmac, DigestAlgorithm, KeyMaterial};
///
/// let tag = hmac(b"The quick brown fox", &KeyMaterial::text("key"), DigestAlgorithm::Md5)?;
/// assert_eq!(tag.len(), 16);
/// # Ok::<(), bytekit::BytekitError>(())
/// ```
pub fn hmac(
    input: &[u8],
    key: &KeyMaterial<'_>,
    algorithm: DigestAlgorithm,
) -> Result<Vec<u8>, BytekitError> {
    let key = key.normalize().map_err(|e| match e {
        BytekitError::InvalidHexEncoding => BytekitError::InvalidKeyEncoding,
        other => other,
    })?;
    let key: &[u8] = key.expose_secret();
    tracing::trace!(%algorithm, len = input.len(), "hmac");

    match algorithm {
        DigestAlgorithm::Md5 => mac_with::<HmacMd5>(key, input),
        DigestAlgorithm::Sha1 => mac_with::<HmacSha1>(key, input),
        DigestAlgorithm::Sha224 => mac_with::<HmacSha224>(key, input),
        DigestAlgorithm::Sha256 => mac_with::<HmacSha256>(key, input),
        DigestAlgorithm::Sha384 => mac_with::<HmacSha384>(key, input),
        DigestAlgorithm::Sha512 => mac_with::<HmacSha512>(key, input),
    }
}

/// [`hmac`] rendered as lowercase hex.
pub fn hmac_hex(
    input: &[u8],
    key: &KeyMaterial<'_>,
    algorithm: DigestAlgorithm,
) -> Result<String, BytekitError> {
    hmac(input, key, algorithm).map(|tag| to_hex(&tag))
}
