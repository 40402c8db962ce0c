// src/crypto/mod.rs

//! Low-level crypto primitives.
//!
//! - [`aes`] - AES-128/192/256 block cipher selected by key length
//! - [`hmac`] - RFC 2104 HMAC over every [`DigestAlgorithm`](crate::DigestAlgorithm)
//!
//! HMAC types are defined in `aliases.rs`.

pub mod aes;
pub mod hmac;
