mod aead;
mod hash;
mod kdf;
mod rand;
mod signature;

use self::aead::AeadSchemeWrapper;
use self::hash::HashSchemeWrapper;
use self::kdf::KdfSchemeWrapper;
use self::rand::RandSystem;
use self::signature::SignatureSchemeWrapper;
use super::*;
use crate::registry::Provider;

/// Name the ring backed provider registers under
pub const RING_CRYPTO_PROVIDER_NAME: &str = "Ring";

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

/// [ring](https://github.com/briansmith/ring) based crypto provider
#[derive(Default, Debug)]
pub struct RingCryptoProvider {
    rand: RandSystem,
}

impl CryptoProvider for RingCryptoProvider {
    fn name(&self) -> &str {
        RING_CRYPTO_PROVIDER_NAME
    }

    fn info(&self) -> &str {
        "ring provider (digest, hmac, hkdf, aead, signature verification)"
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
            Algorithm::SecureRandom(RandScheme::System),
        ]
    }

    fn rand(&self, scheme: RandScheme) -> Result<&dyn Rand> {
        match scheme {
            RandScheme::System => Ok(&self.rand),
            RandScheme::ChaCha20 => Err(Error::UnsupportedAlgorithm(
                scheme.to_string(),
                RING_CRYPTO_PROVIDER_NAME.to_string(),
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
}

impl Provider for RingCryptoProvider {
    fn name(&self) -> &str {
        RING_CRYPTO_PROVIDER_NAME
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
