//! # Builders
//!
//! This module provides builder patterns for configuring cryptographic operations.
//!
//! ## Modules
//!
//! - [`aes_cbc_builder`] - Builder for AES-CBC encryption/decryption with a fixed key and IV
//!
//! ## Usage
//!
//! Builders hold normalized-on-use key material so one configuration can be
//! applied to many messages.

pub mod aes_cbc_builder;

pub use aes_cbc_builder::AesCbcBuilder;
