//! # Secure-Gate Type Aliases
//!
//! Type aliases for secret material handled during a single call, built on
//! [`secure-gate`](https://github.com/Slurp9187/secure-gate). Every type is
//! zeroized on drop and only reachable through `.expose_secret()`.
//!
//! ## Type Categories
//!
//! ### HMAC Primitives
//! - [`HmacMd5`], [`HmacSha1`], [`HmacSha224`], [`HmacSha256`], [`HmacSha384`], [`HmacSha512`]
//!
//! ### Fixed-Size Secrets
//! - [`Block16`] - one AES block (CBC chaining value / plaintext block)
//! - [`Iv16`] - 16-byte initialization vector
//!
//! ### Dynamic Secrets
//! - [`KeyBytes`] - normalized key material of any length

use secure_gate::dynamic_alias;
use secure_gate::fixed_alias;

use hmac::Hmac;
use md5::Md5;
use sha1::Sha1;
use sha2::{Sha224, Sha256, Sha384, Sha512};

// ─────────────────────────────────────────────────────────────────────────────
// HMAC primitives
// ─────────────────────────────────────────────────────────────────────────────
pub type HmacMd5 = Hmac<Md5>;
pub type HmacSha1 = Hmac<Sha1>;
pub type HmacSha224 = Hmac<Sha224>;
pub type HmacSha256 = Hmac<Sha256>;
pub type HmacSha384 = Hmac<Sha384>;
pub type HmacSha512 = Hmac<Sha512>;

// ─────────────────────────────────────────────────────────────────────────────
// SpanBuffer: generic secure stack buffer
// ─────────────────────────────────────────────────────────────────────────────
pub type SpanBuffer<const N: usize> = secure_gate::Fixed<[u8; N]>;

pub type Block16 = SpanBuffer<16>; // one AES block

// ─────────────────────────────────────────────────────────────────────────────
// Dynamic secrets
// ─────────────────────────────────────────────────────────────────────────────
dynamic_alias!(KeyBytes, Vec<u8>); // normalized key or IV bytes

// ─────────────────────────────────────────────────────────────────────────────
// Fixed-size concrete secrets
// ─────────────────────────────────────────────────────────────────────────────
fixed_alias!(Iv16, 16); // CBC initialization vector
