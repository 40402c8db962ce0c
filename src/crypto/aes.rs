//! src/crypto/aes.rs
//! AES block cipher with the variant picked from the key length.

use crate::aliases::Block16;
use crate::error::BytekitError;
use ::aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use ::aes::{Aes128, Aes192, Aes256, Block as AesBlock};

/// An initialized AES key schedule.
pub enum AesCipher {
    Aes128(Aes128),
    Aes192(Aes192),
    Aes256(Aes256),
}

impl AesCipher {
    /// Build the key schedule for a 16, 24 or 32 byte key.
    ///
    /// # Errors
    ///
    /// [`BytekitError::InvalidKeyLength`] for any other length.
    pub fn new(key: &[u8]) -> Result<Self, BytekitError> {
        let invalid = |_| BytekitError::InvalidKeyLength(key.len());
        match key.len() {
            16 => Aes128::new_from_slice(key).map(AesCipher::Aes128).map_err(invalid),
            24 => Aes192::new_from_slice(key).map(AesCipher::Aes192).map_err(invalid),
            32 => Aes256::new_from_slice(key).map(AesCipher::Aes256).map_err(invalid),
            n => Err(BytekitError::InvalidKeyLength(n)),
        }
    }

    /// Key size in bits.
    #[must_use]
    pub const fn key_bits(&self) -> u32 {
        match self {
            AesCipher::Aes128(_) => 128,
            AesCipher::Aes192(_) => 192,
            AesCipher::Aes256(_) => 256,
        }
    }

    #[inline(always)]
    pub fn encrypt_block(&self, block: &mut Block16) {
        let mut aes_block = AesBlock::from(*block.expose_secret());
        match self {
            AesCipher::Aes128(c) => c.encrypt_block(&mut aes_block),
            AesCipher::Aes192(c) => c.encrypt_block(&mut aes_block),
            AesCipher::Aes256(c) => c.encrypt_block(&mut aes_block),
        }
        block.expose_secret_mut().copy_from_slice(aes_block.as_slice());
    }

    #[inline(always)]
    pub fn decrypt_block(&self, block: &mut Block16) {
        let mut aes_block = AesBlock::from(*block.expose_secret());
        match self {
            AesCipher::Aes128(c) => c.decrypt_block(&mut aes_block),
            AesCipher::Aes192(c) => c.decrypt_block(&mut aes_block),
            AesCipher::Aes256(c) => c.decrypt_block(&mut aes_block),
        }
        block.expose_secret_mut().copy_from_slice(aes_block.as_slice());
    }
}
