//! src/encryptor/encrypt.rs
//! AES-CBC encryption entry point

use crate::crypto::aes::AesCipher;
use crate::encryptor::stream::encrypt_stream;
use crate::error::BytekitError;
use crate::key::{normalize_cipher_params, KeyMaterial};

/// Encrypt `plaintext` with AES-CBC and PKCS#7 padding.
///
/// The AES variant follows the key length (16, 24 or 32 bytes). Once the
/// key and IV are accepted, encryption cannot fail: any plaintext length,
/// including zero, yields a ciphertext that is a positive multiple of 16.
///
/// # Errors
///
/// - [`BytekitError::InvalidHexEncoding`] - key or IV is a malformed hex string
/// - [`BytekitError::InvalidKeyLength`] - key is not 16, 24 or 32 bytes
/// - [`BytekitError::InvalidIVLength`] - IV is not 16 bytes
///
/// # Example
///
/// ```
/// use bytekit::{decrypt, encrypt, KeyMaterial};
///
/// let key = KeyMaterial::text("0123456789abcdef");
/// let iv = KeyMaterial::hex("000102030405060708090a0b0c0d0e0f");
///
/// let ciphertext = encrypt(b"hello", &key, &iv)?;
/// assert_eq!(ciphertext.len(), 16);
/// assert_eq!(decrypt(&ciphertext, &key, &iv)?, b"hello");
/// # Ok::<(), bytekit::BytekitError>(())
/// ```
pub fn encrypt(
    plaintext: &[u8],
    key: &KeyMaterial<'_>,
    iv: &KeyMaterial<'_>,
) -> Result<Vec<u8>, BytekitError> {
    let params = normalize_cipher_params(key, iv)?;
    let cipher = AesCipher::new(params.key.expose_secret())?;
    tracing::trace!(
        key_bits = cipher.key_bits(),
        len = plaintext.len(),
        "aes-cbc encrypt"
    );
    Ok(encrypt_stream(plaintext, &cipher, &params.iv))
}
