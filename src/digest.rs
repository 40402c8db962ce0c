//! # Digest Engine
//!
//! Fixed-size one-way hashes over arbitrary byte input.
//!
//! Every function here is total: any finite input, including the empty
//! slice, produces exactly [`DigestAlgorithm::output_len`] bytes.

use crate::utils::to_hex;
use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512};
use std::fmt;

/// The closed set of supported digest algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigestAlgorithm {
    Md5,
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
}

impl DigestAlgorithm {
    /// Every supported algorithm, shortest output first.
    pub const ALL: [DigestAlgorithm; 6] = [
        DigestAlgorithm::Md5,
        DigestAlgorithm::Sha1,
        DigestAlgorithm::Sha224,
        DigestAlgorithm::Sha256,
        DigestAlgorithm::Sha384,
        DigestAlgorithm::Sha512,
    ];

    /// Output length in bytes.
    #[must_use]
    pub const fn output_len(self) -> usize {
        match self {
            DigestAlgorithm::Md5 => 16,
            DigestAlgorithm::Sha1 => 20,
            DigestAlgorithm::Sha224 => 28,
            DigestAlgorithm::Sha256 => 32,
            DigestAlgorithm::Sha384 => 48,
            DigestAlgorithm::Sha512 => 64,
        }
    }

    /// Internal block size in bytes (the HMAC key block).
    #[must_use]
    pub const fn block_size(self) -> usize {
        match self {
            DigestAlgorithm::Md5
            | DigestAlgorithm::Sha1
            | DigestAlgorithm::Sha224
            | DigestAlgorithm::Sha256 => 64,
            DigestAlgorithm::Sha384 | DigestAlgorithm::Sha512 => 128,
        }
    }

    /// Canonical lowercase name, e.g. `"sha256"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            DigestAlgorithm::Md5 => "md5",
            DigestAlgorithm::Sha1 => "sha1",
            DigestAlgorithm::Sha224 => "sha224",
            DigestAlgorithm::Sha256 => "sha256",
            DigestAlgorithm::Sha384 => "sha384",
            DigestAlgorithm::Sha512 => "sha512",
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[inline(always)]
fn hash_with<D: Digest>(input: &[u8]) -> Vec<u8> {
    D::digest(input).to_vec()
}

/// Hash `input` with `algorithm`.
///
/// ```
/// use bytekit::{digest, DigestAlgorithm};
///
/// assert_eq!(digest(b"", DigestAlgorithm::Sha256).len(), 32);
/// ```
pub fn digest(input: &[u8], algorithm: DigestAlgorithm) -> Vec<u8> {
    tracing::trace!(%algorithm, len = input.len(), "digest");
    match algorithm {
        DigestAlgorithm::Md5 => hash_with::<Md5>(input),
        DigestAlgorithm::Sha1 => hash_with::<Sha1>(input),
        DigestAlgorithm::Sha224 => hash_with::<Sha224>(input),
        DigestAlgorithm::Sha256 => hash_with::<Sha256>(input),
        DigestAlgorithm::Sha384 => hash_with::<Sha384>(input),
        DigestAlgorithm::Sha512 => hash_with::<Sha512>(input),
    }
}

/// Hash `input` and render it as lowercase hex.
///
/// ```
/// use bytekit::{digest_hex, DigestAlgorithm};
///
/// assert_eq!(
///     digest_hex(b"hello", DigestAlgorithm::Md5),
///     "5d41402abc4b2a76b9719d911017c592"
/// );
/// ```
pub fn digest_hex(input: &[u8], algorithm: DigestAlgorithm) -> String {
    to_hex(&digest(input, algorithm))
}
