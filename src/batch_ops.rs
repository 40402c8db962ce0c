//! Parallel batch variants of the cipher and digest operations.
//!
//! Key and IV are normalized once per batch; each item runs independently on
//! the rayon pool. The first error aborts the batch.

use rayon::prelude::*;

use crate::crypto::aes::AesCipher;
use crate::decryptor::decrypt_stream;
use crate::digest::{digest, DigestAlgorithm};
use crate::encryptor::encrypt_stream;
use crate::error::BytekitError;
use crate::key::{normalize_cipher_params, KeyMaterial};

pub fn encrypt_batch<P>(
    plaintexts: &[P],
    key: &KeyMaterial<'_>,
    iv: &KeyMaterial<'_>,
) -> Result<Vec<Vec<u8>>, BytekitError>
where
    P: AsRef<[u8]> + Sync,
{
    let params = normalize_cipher_params(key, iv)?;
    let cipher = AesCipher::new(params.key.expose_secret())?;
    tracing::trace!(items = plaintexts.len(), "aes-cbc encrypt batch");

    Ok(plaintexts
        .par_iter()
        .map(|p| encrypt_stream(p.as_ref(), &cipher, &params.iv))
        .collect())
}

pub fn decrypt_batch<C>(
    ciphertexts: &[C],
    key: &KeyMaterial<'_>,
    iv: &KeyMaterial<'_>,
) -> Result<Vec<Vec<u8>>, BytekitError>
where
    C: AsRef<[u8]> + Sync,
{
    let params = normalize_cipher_params(key, iv)?;
    let cipher = AesCipher::new(params.key.expose_secret())?;
    tracing::trace!(items = ciphertexts.len(), "aes-cbc decrypt batch");

    ciphertexts
        .par_iter()
        .map(|c| decrypt_stream(c.as_ref(), &cipher, &params.iv))
        .collect()
}

pub fn digest_batch<I>(inputs: &[I], algorithm: DigestAlgorithm) -> Vec<Vec<u8>>
where
    I: AsRef<[u8]> + Sync,
{
    inputs
        .par_iter()
        .map(|input| digest(input.as_ref(), algorithm))
        .collect()
}
