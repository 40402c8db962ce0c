// src/lib.rs

pub mod aliases;
#[cfg(feature = "batch-ops")]
pub mod batch_ops;
pub mod builders;
pub mod codec;
pub mod consts;
pub mod crypto;
pub mod decryptor;
pub mod digest;
pub mod encryptor;
pub mod error;
pub mod ext;
pub mod key;
pub mod query;
pub mod utils;

// High-level API
pub use codec::{
    decode_base64, decode_base64_to_text, decode_base64_url_safe, decode_percent, encode_base64,
    encode_base64_url_safe, encode_percent,
};
pub use crypto::hmac::{hmac, hmac_hex};
pub use decryptor::decrypt;
pub use digest::{digest, digest_hex, DigestAlgorithm};
pub use encryptor::encrypt;
pub use error::BytekitError;
pub use key::KeyMaterial;
pub use query::{parse_query, parse_url_query, serialize_query, QueryParameterMap, QueryValue};
pub use utils::to_hex;

#[cfg(feature = "batch-ops")]
pub use batch_ops::{decrypt_batch, digest_batch, encrypt_batch};
