// src/decryptor/mod.rs

//! High-level decryption facade.
//!
//! Core API: `decrypt(ciphertext, &key, &iv)?`.
//! Helpers: `decrypt_stream` and `pkcs7_unpadded_len` for custom flows.

pub(crate) mod decrypt;
pub(crate) mod stream;

pub use decrypt::decrypt;
pub use stream::trailer::pkcs7_unpadded_len;
pub use stream::decrypt_stream;
