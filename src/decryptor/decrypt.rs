//! src/decryptor/decrypt.rs
//! AES-CBC decryption entry point

use crate::crypto::aes::AesCipher;
use crate::decryptor::stream::decrypt_stream;
use crate::error::BytekitError;
use crate::key::{normalize_cipher_params, KeyMaterial};

/// Decrypt AES-CBC `ciphertext` and strip its PKCS#7 padding.
///
/// Wrong key material and corrupted ciphertext both surface as
/// [`BytekitError::PaddingError`]. Occasionally the garbage plaintext they
/// produce happens to end in valid padding, in which case decryption
/// "succeeds"; callers that need integrity must authenticate separately
/// (e.g. with [`hmac`](crate::hmac)).
///
/// # Errors
///
/// - [`BytekitError::InvalidHexEncoding`] - key or IV is a malformed hex string
/// - [`BytekitError::InvalidKeyLength`] - key is not 16, 24 or 32 bytes
/// - [`BytekitError::InvalidIVLength`] - IV is not 16 bytes
/// - [`BytekitError::InvalidCiphertextLength`] - not a positive multiple of 16
/// - [`BytekitError::PaddingError`] - trailing bytes are not valid PKCS#7
pub fn decrypt(
    ciphertext: &[u8],
    key: &KeyMaterial<'_>,
    iv: &KeyMaterial<'_>,
) -> Result<Vec<u8>, BytekitError> {
    let params = normalize_cipher_params(key, iv)?;
    let cipher = AesCipher::new(params.key.expose_secret())?;
    tracing::trace!(
        key_bits = cipher.key_bits(),
        len = ciphertext.len(),
        "aes-cbc decrypt"
    );
    decrypt_stream(ciphertext, &cipher, &params.iv)
}
