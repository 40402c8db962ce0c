// src/decryptor/stream/mod.rs

//! CBC block loop followed by the PKCS#7 trailer check.

pub(crate) mod trailer;

use crate::aliases::{Block16, Iv16};
use crate::consts::AES_BLOCK_SIZE;
use crate::crypto::aes::AesCipher;
use crate::error::BytekitError;
use crate::utils::xor_blocks;
use trailer::pkcs7_unpadded_len;

/// Decrypt block-aligned `ciphertext` under an already validated key schedule.
///
/// `ciphertext.len()` must be a positive multiple of 16; anything else is
/// reported as [`BytekitError::InvalidCiphertextLength`].
#[inline(always)]
pub fn decrypt_stream(
    ciphertext: &[u8],
    cipher: &AesCipher,
    iv: &Iv16,
) -> Result<Vec<u8>, BytekitError> {
    if ciphertext.is_empty() || ciphertext.len() % AES_BLOCK_SIZE != 0 {
        tracing::debug!(len = ciphertext.len(), "ciphertext length rejected");
        return Err(BytekitError::InvalidCiphertextLength(ciphertext.len()));
    }

    let mut plaintext = Vec::with_capacity(ciphertext.len());

    let mut prev_block = Block16::new(*iv.expose_secret());
    let mut block = Block16::new([0u8; 16]);
    let mut plaintext_block = Block16::new([0u8; 16]);

    for chunk in ciphertext.chunks_exact(AES_BLOCK_SIZE) {
        block.expose_secret_mut().copy_from_slice(chunk);
        cipher.decrypt_block(&mut block);
        xor_blocks(
            block.expose_secret(),
            prev_block.expose_secret(),
            plaintext_block.expose_secret_mut(),
        );
        plaintext.extend_from_slice(plaintext_block.expose_secret());
        prev_block.expose_secret_mut().copy_from_slice(chunk);
    }

    match pkcs7_unpadded_len(&plaintext) {
        Ok(len) => {
            plaintext.truncate(len);
            Ok(plaintext)
        }
        Err(e) => {
            plaintext.fill(0);
            Err(e)
        }
    }
}
