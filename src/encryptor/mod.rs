// src/encryptor/mod.rs

//! High-level encryption facade.
//!
//! Core API: `encrypt(plaintext, &key, &iv)?` for AES-CBC with PKCS#7 padding.
//! Low level: `encrypt_stream(plaintext, &cipher, &iv)` once parameters are validated.

pub(crate) mod encrypt;
pub(crate) mod stream;

pub use encrypt::encrypt;
pub use stream::{encrypt_stream, padded_len};
