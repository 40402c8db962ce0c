//! # Extension Traits
//!
//! Method-style access to the transformation toolkit on `str` and `[u8]`.
//!
//! ```
//! use bytekit::ext::HashExt;
//!
//! assert_eq!("hello".md5_hash_string(), "5d41402abc4b2a76b9719d911017c592");
//! assert_eq!("hello".base64_encoded_string(), "aGVsbG8=");
//! assert_eq!(b"hello".base64_encoded_string(), "aGVsbG8=");
//! ```

use crate::codec::{
    decode_base64, decode_base64_to_text, decode_percent, encode_base64, encode_base64_url_safe,
    encode_percent,
};
use crate::crypto::hmac::{hmac, hmac_hex};
use crate::decryptor::decrypt;
use crate::digest::{digest, digest_hex, DigestAlgorithm};
use crate::encryptor::encrypt;
use crate::error::BytekitError;
use crate::key::KeyMaterial;
use crate::query::{parse_url_query, serialize_query, QueryParameterMap};
use crate::utils::{bytes_to_text, to_hex};

macro_rules! digest_methods {
    ($($data:ident, $string:ident => $alg:expr;)*) => {
        $(
            fn $data(&self) -> Vec<u8> {
                digest(self.as_input(), $alg)
            }

            fn $string(&self) -> String {
                digest_hex(self.as_input(), $alg)
            }
        )*
    };
}

macro_rules! hmac_methods {
    ($($data:ident, $string:ident => $alg:expr;)*) => {
        $(
            /// HMAC with a raw byte key.
            fn $data(&self, key: &[u8]) -> Result<Vec<u8>, BytekitError> {
                hmac(self.as_input(), &KeyMaterial::Bytes(key), $alg)
            }

            /// HMAC with a UTF-8 string key, rendered as lowercase hex.
            fn $string(&self, key: &str) -> Result<String, BytekitError> {
                hmac_hex(self.as_input(), &KeyMaterial::Text(key), $alg)
            }
        )*
    };
}

/// Digest, HMAC and encode operations shared by `str` and `[u8]`.
///
/// `str` inputs are hashed/encoded over their UTF-8 bytes.
pub trait HashExt {
    /// The bytes every operation runs over.
    fn as_input(&self) -> &[u8];

    fn hash_data(&self, algorithm: DigestAlgorithm) -> Vec<u8> {
        digest(self.as_input(), algorithm)
    }

    fn hash_string(&self, algorithm: DigestAlgorithm) -> String {
        digest_hex(self.as_input(), algorithm)
    }

    digest_methods! {
        md5_hash_data, md5_hash_string => DigestAlgorithm::Md5;
        sha1_hash_data, sha1_hash_string => DigestAlgorithm::Sha1;
        sha224_hash_data, sha224_hash_string => DigestAlgorithm::Sha224;
        sha256_hash_data, sha256_hash_string => DigestAlgorithm::Sha256;
        sha384_hash_data, sha384_hash_string => DigestAlgorithm::Sha384;
        sha512_hash_data, sha512_hash_string => DigestAlgorithm::Sha512;
    }

    hmac_methods! {
        hmac_md5_hash_data_with_key, hmac_md5_hash_string_with_key => DigestAlgorithm::Md5;
        hmac_sha1_hash_data_with_key, hmac_sha1_hash_string_with_key => DigestAlgorithm::Sha1;
        hmac_sha224_hash_data_with_key, hmac_sha224_hash_string_with_key => DigestAlgorithm::Sha224;
        hmac_sha256_hash_data_with_key, hmac_sha256_hash_string_with_key => DigestAlgorithm::Sha256;
        hmac_sha384_hash_data_with_key, hmac_sha384_hash_string_with_key => DigestAlgorithm::Sha384;
        hmac_sha512_hash_data_with_key, hmac_sha512_hash_string_with_key => DigestAlgorithm::Sha512;
    }

    fn base64_encoded_data(&self) -> Vec<u8> {
        encode_base64(self.as_input()).into_bytes()
    }

    fn base64_encoded_string(&self) -> String {
        encode_base64(self.as_input())
    }

    fn base64_encoded_url_safe_string(&self) -> String {
        encode_base64_url_safe(self.as_input())
    }

    fn hex_string(&self) -> String {
        to_hex(self.as_input())
    }

    /// AES-CBC encrypt with raw byte key and IV.
    fn aes_encrypted_data_with_key(&self, key: &[u8], iv: &[u8]) -> Result<Vec<u8>, BytekitError> {
        encrypt(self.as_input(), &KeyMaterial::Bytes(key), &KeyMaterial::Bytes(iv))
    }

    /// AES-CBC encrypt with key and IV given as UTF-8 strings.
    fn aes_encrypted_data_with_key_string(
        &self,
        key: &str,
        iv: &str,
    ) -> Result<Vec<u8>, BytekitError> {
        encrypt(self.as_input(), &KeyMaterial::Text(key), &KeyMaterial::Text(iv))
    }

    /// AES-CBC encrypt with key and IV given as hex strings.
    fn aes_encrypted_data_with_hex_key(
        &self,
        key: &str,
        iv: &str,
    ) -> Result<Vec<u8>, BytekitError> {
        encrypt(self.as_input(), &KeyMaterial::Hex(key), &KeyMaterial::Hex(iv))
    }
}

impl HashExt for str {
    #[inline(always)]
    fn as_input(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl HashExt for [u8] {
    #[inline(always)]
    fn as_input(&self) -> &[u8] {
        self
    }
}

/// Text-only helpers.
pub trait StrExt: HashExt {
    /// UTF-8 bytes of the string.
    fn data_value(&self) -> Vec<u8>;

    /// Trim leading and trailing whitespace (including newlines).
    fn trimmed_string(&self) -> String;

    /// Remove every occurrence of any character in `characters`.
    fn string_by_deleting_characters_in_string(&self, characters: &str) -> String;

    /// Apply literal replacements in order.
    fn string_by_replacing_with_pairs(&self, pairs: &[(&str, &str)]) -> String;

    /// RFC 3986 percent-encoding for a query key or value.
    fn url_encoded_string(&self) -> String;

    fn url_decoded_string(&self) -> Result<String, BytekitError>;

    fn base64_decoded_data(&self) -> Result<Vec<u8>, BytekitError>;

    fn base64_decoded_string(&self) -> Result<String, BytekitError>;

    /// Query parameters of this URL string.
    fn url_query_parameters(&self) -> Result<QueryParameterMap, BytekitError>;

    /// This URL string with `params` appended.
    fn string_by_adding_url_query_parameters(&self, params: &QueryParameterMap) -> String;

    /// Parse as JSON.
    fn json_value(&self) -> Result<serde_json::Value, BytekitError>;
}

impl StrExt for str {
    fn data_value(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }

    fn trimmed_string(&self) -> String {
        self.trim().to_owned()
    }

    fn string_by_deleting_characters_in_string(&self, characters: &str) -> String {
        self.chars().filter(|c| !characters.contains(*c)).collect()
    }

    fn string_by_replacing_with_pairs(&self, pairs: &[(&str, &str)]) -> String {
        pairs
            .iter()
            .filter(|(target, _)| !target.is_empty())
            .fold(self.to_owned(), |acc, (target, replacement)| {
                acc.replace(target, replacement)
            })
    }

    fn url_encoded_string(&self) -> String {
        encode_percent(self)
    }

    fn url_decoded_string(&self) -> Result<String, BytekitError> {
        decode_percent(self)
    }

    fn base64_decoded_data(&self) -> Result<Vec<u8>, BytekitError> {
        decode_base64(self)
    }

    fn base64_decoded_string(&self) -> Result<String, BytekitError> {
        decode_base64_to_text(self)
    }

    fn url_query_parameters(&self) -> Result<QueryParameterMap, BytekitError> {
        parse_url_query(self)
    }

    fn string_by_adding_url_query_parameters(&self, params: &QueryParameterMap) -> String {
        serialize_query(self, params)
    }

    fn json_value(&self) -> Result<serde_json::Value, BytekitError> {
        Ok(serde_json::from_str(self)?)
    }
}

/// Byte-only helpers.
pub trait BytesExt: HashExt {
    /// Interpret as UTF-8 text.
    fn utf8_string(&self) -> Result<String, BytekitError>;

    /// AES-CBC decrypt with raw byte key and IV.
    fn aes_decrypted_data_with_key(&self, key: &[u8], iv: &[u8]) -> Result<Vec<u8>, BytekitError>;

    /// AES-CBC decrypt with key and IV given as UTF-8 strings.
    fn aes_decrypted_data_with_key_string(
        &self,
        key: &str,
        iv: &str,
    ) -> Result<Vec<u8>, BytekitError>;

    /// AES-CBC decrypt with key and IV given as hex strings.
    fn aes_decrypted_data_with_hex_key(&self, key: &str, iv: &str)
        -> Result<Vec<u8>, BytekitError>;
}

impl BytesExt for [u8] {
    fn utf8_string(&self) -> Result<String, BytekitError> {
        bytes_to_text(self.as_input().to_vec())
    }

    fn aes_decrypted_data_with_key(&self, key: &[u8], iv: &[u8]) -> Result<Vec<u8>, BytekitError> {
        decrypt(self.as_input(), &KeyMaterial::Bytes(key), &KeyMaterial::Bytes(iv))
    }

    fn aes_decrypted_data_with_key_string(
        &self,
        key: &str,
        iv: &str,
    ) -> Result<Vec<u8>, BytekitError> {
        decrypt(self.as_input(), &KeyMaterial::Text(key), &KeyMaterial::Text(iv))
    }

    fn aes_decrypted_data_with_hex_key(
        &self,
        key: &str,
        iv: &str,
    ) -> Result<Vec<u8>, BytekitError> {
        decrypt(self.as_input(), &KeyMaterial::Hex(key), &KeyMaterial::Hex(iv))
    }
}
