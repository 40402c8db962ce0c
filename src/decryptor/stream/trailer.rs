//! src/decryptor/stream/trailer.rs
//! PKCS#7 trailer validation

use crate::consts::{AES_BLOCK_SIZE, PKCS7_MAX_PADDING};
use crate::error::BytekitError;

/// Length of `plaintext` once its PKCS#7 padding is removed.
///
/// The pad byte range is checked first (non-secret early return). The pad
/// bytes themselves are compared without a data-dependent exit, and no
/// detail about *which* check failed leaves this function.
///
/// # Errors
///
/// [`BytekitError::PaddingError`] when the input is empty, not block
/// aligned, or does not end in valid padding.
#[inline(always)]
pub fn pkcs7_unpadded_len(plaintext: &[u8]) -> Result<usize, BytekitError> {
    let len = plaintext.len();
    if len == 0 || len % AES_BLOCK_SIZE != 0 {
        return Err(BytekitError::PaddingError);
    }

    let block = &plaintext[len - AES_BLOCK_SIZE..];
    let padding = block[AES_BLOCK_SIZE - 1];

    if padding == 0 || padding > PKCS7_MAX_PADDING {
        tracing::debug!("pkcs7 padding rejected");
        return Err(BytekitError::PaddingError);
    }

    let padding_start = AES_BLOCK_SIZE - padding as usize;
    let mut diff = 0u8;
    for (i, &byte) in block.iter().enumerate() {
        let in_padding = ((i >= padding_start) as u8).wrapping_neg();
        diff |= (byte ^ padding) & in_padding;
    }

    if diff != 0 {
        tracing::debug!("pkcs7 padding rejected");
        return Err(BytekitError::PaddingError);
    }

    Ok(len - padding as usize)
}
