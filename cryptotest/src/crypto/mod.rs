//! Cryptographic primitives a provider can expose, and the named algorithms
//! the conformance categories look them up by.


pub mod algorithm;
pub mod provider;

use crate::utilities::error::*;

use bytes::Bytes;
use std::fmt::{Display, Formatter};

/// Hash functions, shared by digests, HMACs and HKDFs.
#[derive(Default, Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum HashScheme {
    #[default]
    SHA256,
    SHA384,
    SHA512,
}

impl HashScheme {
    /// Output size in bytes
    pub fn size(&self) -> usize {
        match *self {
            HashScheme::SHA256 => 32,
            HashScheme::SHA384 => 48,
            HashScheme::SHA512 => 64,
        }
    }
}

/// AEAD ciphers exercised by the Cipher category
#[allow(non_camel_case_types)]
#[derive(Default, Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum AeadScheme {
    #[default]
    AES128GCM,
    AES256GCM,
    ChaCha20Poly1305,
}

impl AeadScheme {
    /// Key size in bytes
    pub fn key_size(&self) -> usize {
        match *self {
            AeadScheme::AES128GCM => 16,
            AeadScheme::AES256GCM => 32,
            AeadScheme::ChaCha20Poly1305 => 32,
        }
    }

    /// Nonce size in bytes, 96 bits for every supported cipher
    pub fn nonce_size(&self) -> usize {
        12
    }

    /// Authentication tag appended to every ciphertext
    pub fn tag_size(&self) -> usize {
        16
    }
}

/// Signature schemes, also used to name key pair generators. P-521 and Ed448
/// have names but no bundled implementation.
#[allow(non_camel_case_types)]
#[derive(Default, Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum SignatureScheme {
    #[default]
    ED25519,
    ECDSA_SECP256R1_SHA256,
    ECDSA_SECP384R1_SHA384,
    ECDSA_SECP521R1_SHA512,
    ED448,
}

/// Sources of randomness
#[derive(Default, Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum RandScheme {
    /// ChaCha20 based deterministic generator seeded from the OS
    #[default]
    ChaCha20,
    /// Operating system generator
    System,
}

/// [RFC9180](https://www.rfc-editor.org/rfc/rfc9180.html#section-7.1) Key Encapsulation Mechanisms
#[allow(non_camel_case_types)]
#[derive(Default, Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum KemScheme {
    #[default]
    DHKEM_X25519_HKDF_SHA256,
    DHKEM_P256_HKDF_SHA256,
}

macro_rules! impl_display_debug {
    ($($t:ty),*) => {
        $(
            impl Display for $t {
                fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                    write!(f, "{self:?}")
                }
            }
        )*
    };
}

impl_display_debug!(HashScheme, AeadScheme, SignatureScheme, RandScheme, KemScheme);

/// Encoded key pair produced by a [`Signature`] primitive. The encoding is
/// backend specific and only meaningful to the primitive that made it.
#[derive(Default, Debug, Clone, Eq, PartialEq)]
pub struct SignatureKeyPair {
    pub(crate) private_key: Bytes,
    pub(crate) public_key: Bytes,
    pub(crate) signature_scheme: SignatureScheme,
}

impl SignatureKeyPair {
    pub fn private_key(&self) -> &[u8] {
        &self.private_key
    }

    pub fn public_key(&self) -> &[u8] {
        &self.public_key
    }

    pub fn signature_scheme(&self) -> SignatureScheme {
        self.signature_scheme
    }
}

/// Serialized KEM key pair
#[derive(Default, Debug, Clone, Eq, PartialEq)]
pub struct KemKeyPair {
    pub(crate) private_key: Bytes,
    pub(crate) public_key: Bytes,
    pub(crate) kem_scheme: KemScheme,
}

impl KemKeyPair {
    pub fn private_key(&self) -> &[u8] {
        &self.private_key
    }

    pub fn public_key(&self) -> &[u8] {
        &self.public_key
    }

    pub fn kem_scheme(&self) -> KemScheme {
        self.kem_scheme
    }
}

/// Source of random bytes behind the SecureRandom category
pub trait Rand: Send + Sync {
    fn fill(&self, buf: &mut [u8]) -> Result<()>;
}

/// Digest and HMAC over one hash function
pub trait Hash: Send + Sync {
    /// Output size in bytes
    fn size(&self) -> usize;

    fn digest(&self, data: &[u8]) -> Result<Bytes>;

    /// HMAC tag of `message` under `key`
    fn mac(&self, key: &[u8], message: &[u8]) -> Result<Bytes>;
}

/// [RFC5869](https://www.rfc-editor.org/rfc/rfc5869.html) HKDF
pub trait Kdf: Send + Sync {
    /// HKDF-Extract, returning a pseudorandom key of `extract_size` bytes
    fn extract(&self, secret: &[u8], salt: &[u8]) -> Result<Bytes>;
    /// HKDF-Expand of the pseudorandom key `secret` to `length` bytes
    fn expand(&self, secret: &[u8], info: &[u8], length: u16) -> Result<Bytes>;
    fn extract_size(&self) -> usize;
}

/// Authenticated encryption with associated data. Ciphertexts carry the tag
/// at the end.
pub trait Aead: Send + Sync {
    fn key_size(&self) -> usize;
    fn nonce_size(&self) -> usize;

    /// Authenticate and decrypt, failing when the tag does not verify
    fn open(
        &self,
        key: &[u8],
        nonce: &[u8],
        ciphertext: &[u8],
        additional_data: &[u8],
    ) -> Result<Bytes>;
    fn seal(
        &self,
        key: &[u8],
        nonce: &[u8],
        plaintext: &[u8],
        additional_data: &[u8],
    ) -> Result<Bytes>;
}

/// Signing and key pair generation for one scheme
pub trait Signature: Send + Sync {
    fn generate_key_pair(&self) -> Result<SignatureKeyPair>;

    fn signature_scheme(&self) -> SignatureScheme;

    /// Sign `message` with a private key from [`Signature::generate_key_pair`]
    fn sign(&self, sign_key: &[u8], message: &[u8]) -> Result<Bytes>;

    /// `Ok` only when `signature` is valid for `message` under `public_key`
    fn verify(&self, public_key: &[u8], message: &[u8], signature: &[u8]) -> Result<()>;
}

/// Key encapsulation
pub trait Kem: Send + Sync {
    fn generate_key_pair(&self) -> Result<KemKeyPair>;

    fn kem_scheme(&self) -> KemScheme;

    /// Encapsulate a fresh shared secret to public_key, returning (encapsulated key, secret)
    fn encapsulate(&self, public_key: &[u8], info: &[u8]) -> Result<(Bytes, Bytes)>;

    /// Recover the shared secret from an encapsulated key
    fn decapsulate(&self, private_key: &[u8], encapsulated_key: &[u8], info: &[u8])
        -> Result<Bytes>;
}
