mod aead;
mod hash;
mod kdf;
mod kem;
mod rand;
mod signature;

use self::aead::AeadSchemeWrapper;
use self::hash::HashSchemeWrapper;
use self::kdf::KdfSchemeWrapper;
use self::kem::KemSchemeWrapper;
use self::rand::RandChacha;
use self::signature::SignatureSchemeWrapper;
use super::*;
use crate::registry::Provider;

/// Name the RustCrypto backed provider registers under
pub const RUST_CRYPTO_PROVIDER_NAME: &str = "RustCrypto";

static HASHES: [HashSchemeWrapper; 3] = [
    HashSchemeWrapper(HashScheme::SHA256),
    HashSchemeWrapper(HashScheme::SHA384),
    HashSchemeWrapper(HashScheme::SHA512),
];

static KDFS: [KdfSchemeWrapper; 3] = [
    KdfSchemeWrapper(HashScheme::SHA256),
    KdfSchemeWrapper(HashScheme::SHA384),
    KdfSchemeWrapper(HashScheme::SHA512),
];

static AEADS: [AeadSchemeWrapper; 3] = [
    AeadSchemeWrapper(AeadScheme::AES128GCM),
    AeadSchemeWrapper(AeadScheme::AES256GCM),
    AeadSchemeWrapper(AeadScheme::ChaCha20Poly1305),
];

static SIGNATURES: [SignatureSchemeWrapper; 5] = [
    SignatureSchemeWrapper(SignatureScheme::ED25519),
    SignatureSchemeWrapper(SignatureScheme::ECDSA_SECP256R1_SHA256),
    SignatureSchemeWrapper(SignatureScheme::ECDSA_SECP384R1_SHA384),
    SignatureSchemeWrapper(SignatureScheme::ECDSA_SECP521R1_SHA512),
    SignatureSchemeWrapper(SignatureScheme::ED448),
];

static KEMS: [KemSchemeWrapper; 2] = [
    KemSchemeWrapper(KemScheme::DHKEM_X25519_HKDF_SHA256),
    KemSchemeWrapper(KemScheme::DHKEM_P256_HKDF_SHA256),
];

/// [RustCrypto](https://github.com/RustCrypto) based crypto provider
#[derive(Default, Debug)]
pub struct RustCryptoProvider {
    rand: RandChacha,
}

impl CryptoProvider for RustCryptoProvider {
    fn name(&self) -> &str {
        RUST_CRYPTO_PROVIDER_NAME
    }

    fn info(&self) -> &str {
        "RustCrypto provider (sha2, hmac, hkdf, aes-gcm, chacha20poly1305, ed25519-dalek, p256, p384, hpke)"
    }

    fn supported(&self) -> Vec<Algorithm> {
        vec![
            Algorithm::MessageDigest(HashScheme::SHA256),
            Algorithm::MessageDigest(HashScheme::SHA384),
            Algorithm::MessageDigest(HashScheme::SHA512),
            Algorithm::Mac(HashScheme::SHA256),
            Algorithm::Mac(HashScheme::SHA384),
            Algorithm::Mac(HashScheme::SHA512),
            Algorithm::Cipher(AeadScheme::AES128GCM),
            Algorithm::Cipher(AeadScheme::AES256GCM),
            Algorithm::Cipher(AeadScheme::ChaCha20Poly1305),
            Algorithm::Signature(SignatureScheme::ED25519),
            Algorithm::Signature(SignatureScheme::ECDSA_SECP256R1_SHA256),
            Algorithm::Signature(SignatureScheme::ECDSA_SECP384R1_SHA384),
            Algorithm::KeyPairGenerator(SignatureScheme::ED25519),
            Algorithm::KeyPairGenerator(SignatureScheme::ECDSA_SECP256R1_SHA256),
            Algorithm::KeyPairGenerator(SignatureScheme::ECDSA_SECP384R1_SHA384),
            Algorithm::Kdf(HashScheme::SHA256),
            Algorithm::Kdf(HashScheme::SHA384),
            Algorithm::Kdf(HashScheme::SHA512),
            Algorithm::SecureRandom(RandScheme::ChaCha20),
            Algorithm::Kem(KemScheme::DHKEM_X25519_HKDF_SHA256),
            Algorithm::Kem(KemScheme::DHKEM_P256_HKDF_SHA256),
        ]
    }

    fn rand(&self, scheme: RandScheme) -> Result<&dyn Rand> {
        match scheme {
            RandScheme::ChaCha20 => Ok(&self.rand),
            RandScheme::System => Err(Error::UnsupportedAlgorithm(
                scheme.to_string(),
                RUST_CRYPTO_PROVIDER_NAME.to_string(),
            )),
        }
    }

    fn hash(&self, scheme: HashScheme) -> Result<&dyn Hash> {
        Ok(&HASHES[scheme as usize])
    }

    fn kdf(&self, scheme: HashScheme) -> Result<&dyn Kdf> {
        Ok(&KDFS[scheme as usize])
    }

    fn aead(&self, scheme: AeadScheme) -> Result<&dyn Aead> {
        Ok(&AEADS[scheme as usize])
    }

    fn signature(&self, scheme: SignatureScheme) -> Result<&dyn Signature> {
        Ok(&SIGNATURES[scheme as usize])
    }

    fn kem(&self, scheme: KemScheme) -> Result<&dyn Kem> {
        Ok(&KEMS[scheme as usize])
    }
}

impl Provider for RustCryptoProvider {
    fn name(&self) -> &str {
        RUST_CRYPTO_PROVIDER_NAME
    }

    fn info(&self) -> &str {
        CryptoProvider::info(self)
    }

    fn services(&self) -> Vec<Service> {
        services_of(self)
    }

    fn attributes(&self) -> Vec<(String, String)> {
        attributes_of(self)
    }

    fn crypto(&self) -> Option<&dyn CryptoProvider> {
        Some(self)
    }
}
