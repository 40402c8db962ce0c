//! # Constants
//!
//! Fixed parameters for the cipher engine and the percent codec.

/// AES block size in bytes. Also the only accepted IV length.
pub const AES_BLOCK_SIZE: usize = 16;

/// Accepted IV length for CBC mode.
pub const IV_LENGTH: usize = AES_BLOCK_SIZE;

/// AES-128 key length.
pub const AES128_KEY_LENGTH: usize = 16;

/// AES-192 key length.
pub const AES192_KEY_LENGTH: usize = 24;

/// AES-256 key length.
pub const AES256_KEY_LENGTH: usize = 32;

/// All accepted cipher key lengths, smallest first.
pub const AES_KEY_LENGTHS: [usize; 3] = [AES128_KEY_LENGTH, AES192_KEY_LENGTH, AES256_KEY_LENGTH];

/// Largest PKCS#7 pad value (one full block).
pub const PKCS7_MAX_PADDING: u8 = AES_BLOCK_SIZE as u8;

/// RFC 3986 §2.3 unreserved punctuation. Letters and digits are unreserved too.
pub const UNRESERVED_PUNCTUATION: &[u8] = b"-_.~";
