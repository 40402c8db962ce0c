//! tests/common.rs
//! Common constants and utilities shared across test files

/// 16-byte AES-128 key as a UTF-8 string
#[allow(dead_code)] // Used across multiple test files
pub const TEST_KEY_16: &str = "0123456789abcdef";

/// 24-byte AES-192 key as a UTF-8 string
#[allow(dead_code)] // Used across multiple test files
pub const TEST_KEY_24: &str = "0123456789abcdef01234567";

/// 32-byte AES-256 key as a UTF-8 string
#[allow(dead_code)] // Used across multiple test files
pub const TEST_KEY_32: &str = "0123456789abcdef0123456789abcdef";

/// 16-byte IV as a UTF-8 string
#[allow(dead_code)] // Used across multiple test files
pub const TEST_IV: &str = "fedcba9876543210";

/// Hex IV used by the NIST SP 800-38A CBC vectors
#[allow(dead_code)] // Used across multiple test files
pub const TEST_IV_HEX: &str = "000102030405060708090a0b0c0d0e0f";

/// Plaintext lengths around the block boundary
#[allow(dead_code)] // Used across multiple test files
pub const TEST_PLAINTEXT_LENGTHS: &[usize] = &[0, 1, 15, 16, 17, 1000];

/// Deterministic non-repeating test payload of `len` bytes
#[allow(dead_code)] // Used across multiple test files
pub fn test_payload(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 31 % 251) as u8).collect()
}
