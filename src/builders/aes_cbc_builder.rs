//! src/builders/aes_cbc_builder.rs
//! AES-CBC builder: key and IV configured once, reused per message

use crate::aliases::KeyBytes;
use crate::decryptor::decrypt;
use crate::encryptor::encrypt;
use crate::error::BytekitError;
use crate::key::KeyMaterial;
use secure_gate::Dynamic;

/// Owned key/IV material in the representation it was supplied in.
///
/// Hex text is kept undecoded so that decoding and validation happen in the
/// same order as the free functions.
enum Material {
    Raw(KeyBytes),
    Hex(Dynamic<String>),
}

impl Material {
    fn as_key_material(&self) -> KeyMaterial<'_> {
        match self {
            Material::Raw(bytes) => KeyMaterial::Bytes(bytes.expose_secret()),
            Material::Hex(text) => KeyMaterial::Hex(text.expose_secret()),
        }
    }
}

/// AES-CBC (PKCS#7) builder
///
/// # Thread Safety
///
/// This type is **thread-safe** (`Send + Sync`). A configured builder keeps no
/// per-call state; `encrypt`/`decrypt` take `&self`.
///
/// # Example
///
/// ```
/// use bytekit::builders::AesCbcBuilder;
///
/// let aes = AesCbcBuilder::new()
///     .with_key_string("0123456789abcdef0123456789abcdef")
///     .with_hex_iv("000102030405060708090a0b0c0d0e0f");
///
/// let ciphertext = aes.encrypt(b"secret")?;
/// assert_eq!(aes.decrypt(&ciphertext)?, b"secret");
/// # Ok::<(), bytekit::BytekitError>(())
/// ```
#[derive(Default)]
pub struct AesCbcBuilder {
    key: Option<Material>,
    iv: Option<Material>,
}

impl AesCbcBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw key bytes.
    #[must_use]
    pub fn with_key(mut self, key: &[u8]) -> Self {
        self.key = Some(Material::Raw(KeyBytes::new(key.to_vec())));
        self
    }

    /// Key as a UTF-8 string, coerced byte-for-byte.
    #[must_use]
    pub fn with_key_string(mut self, key: &str) -> Self {
        self.key = Some(Material::Raw(KeyBytes::new(key.as_bytes().to_vec())));
        self
    }

    /// Key as a hex string; decoded when an operation runs.
    #[must_use]
    pub fn with_hex_key(mut self, key: &str) -> Self {
        self.key = Some(Material::Hex(Dynamic::new(key.to_owned())));
        self
    }

    /// Raw IV bytes.
    #[must_use]
    pub fn with_iv(mut self, iv: &[u8]) -> Self {
        self.iv = Some(Material::Raw(KeyBytes::new(iv.to_vec())));
        self
    }

    /// IV as a UTF-8 string, coerced byte-for-byte.
    #[must_use]
    pub fn with_iv_string(mut self, iv: &str) -> Self {
        self.iv = Some(Material::Raw(KeyBytes::new(iv.as_bytes().to_vec())));
        self
    }

    /// IV as a hex string; decoded when an operation runs.
    #[must_use]
    pub fn with_hex_iv(mut self, iv: &str) -> Self {
        self.iv = Some(Material::Hex(Dynamic::new(iv.to_owned())));
        self
    }

    fn params(&self) -> Result<(KeyMaterial<'_>, KeyMaterial<'_>), BytekitError> {
        let key = self.key.as_ref().ok_or(BytekitError::MissingParameter("key"))?;
        let iv = self.iv.as_ref().ok_or(BytekitError::MissingParameter("iv"))?;
        Ok((key.as_key_material(), iv.as_key_material()))
    }

    /// Encrypt with the configured key and IV. See [`encrypt`](crate::encrypt).
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>, BytekitError> {
        let (key, iv) = self.params()?;
        encrypt(plaintext, &key, &iv)
    }

    /// Decrypt with the configured key and IV. See [`decrypt`](crate::decrypt).
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>, BytekitError> {
        let (key, iv) = self.params()?;
        decrypt(ciphertext, &key, &iv)
    }
}

impl std::fmt::Debug for AesCbcBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AesCbcBuilder")
            .field("key", &self.key.as_ref().map(|_| "[REDACTED]"))
            .field("iv", &self.iv.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}
