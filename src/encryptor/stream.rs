//! src/encryptor/stream.rs
//! CBC chaining + PKCS#7 padding over an already validated key schedule

use crate::aliases::{Block16, Iv16};
use crate::consts::AES_BLOCK_SIZE;
use crate::crypto::aes::AesCipher;
use crate::utils::xor_blocks;

/// Ciphertext length for a plaintext of `len` bytes.
///
/// Always one byte of padding at least, so an exact multiple of the block
/// size gains a full padding block.
#[inline(always)]
pub const fn padded_len(len: usize) -> usize {
    (len / AES_BLOCK_SIZE + 1) * AES_BLOCK_SIZE
}

#[inline(always)]
pub fn encrypt_stream(plaintext: &[u8], cipher: &AesCipher, iv: &Iv16) -> Vec<u8> {
    let mut ciphertext = Vec::with_capacity(padded_len(plaintext.len()));

    // previous ciphertext block, seeded with the IV
    let mut prev_block = Block16::new(*iv.expose_secret());
    let mut block = Block16::new([0u8; 16]);

    let mut chunks = plaintext.chunks_exact(AES_BLOCK_SIZE);
    for chunk in &mut chunks {
        xor_blocks(chunk, prev_block.expose_secret(), block.expose_secret_mut());
        cipher.encrypt_block(&mut block);
        ciphertext.extend_from_slice(block.expose_secret());
        prev_block
            .expose_secret_mut()
            .copy_from_slice(block.expose_secret());
    }

    // Final block: remainder + PKCS#7 pad bytes (1..=16, each equal to the pad length)
    let remainder = chunks.remainder();
    let pad = (AES_BLOCK_SIZE - remainder.len()) as u8;
    let mut final_block = Block16::new([pad; 16]);
    final_block.expose_secret_mut()[..remainder.len()].copy_from_slice(remainder);

    xor_blocks(
        final_block.expose_secret(),
        prev_block.expose_secret(),
        block.expose_secret_mut(),
    );
    cipher.encrypt_block(&mut block);
    ciphertext.extend_from_slice(block.expose_secret());

    ciphertext
}
