//! # Binary-Text Codecs
//!
//! - [`base64`] - RFC 4648 §4 (standard) and §5 (URL-safe) alphabets, padded
//! - [`percent`] - RFC 3986 percent-encoding over the UTF-8 bytes of a string

pub mod base64;
pub mod percent;

pub use self::base64::{
    decode_base64, decode_base64_to_text, decode_base64_url_safe, encode_base64,
    encode_base64_url_safe,
};
pub use self::percent::{decode_percent, encode_percent, is_unreserved};
