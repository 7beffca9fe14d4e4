//! Named algorithms and the aliases they are known by.
//!
//! A provider advertises [`Algorithm`]s; the harness only ever sees them as
//! `(type, name, aliases)` services. Resolving a name or alias back to an
//! algorithm is what a category does before it asks a provider for the
//! matching primitive.

use super::*;
use crate::registry::Service;

use std::fmt::{Display, Formatter};

/// Service types understood by the bundled providers
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum ServiceType {
    MessageDigest,
    Mac,
    Cipher,
    Signature,
    KeyPairGenerator,
    KDF,
    SecureRandom,
    KEM,
}

impl ServiceType {
    pub fn as_str(&self) -> &'static str {
        match *self {
            ServiceType::MessageDigest => "MessageDigest",
            ServiceType::Mac => "Mac",
            ServiceType::Cipher => "Cipher",
            ServiceType::Signature => "Signature",
            ServiceType::KeyPairGenerator => "KeyPairGenerator",
            ServiceType::KDF => "KDF",
            ServiceType::SecureRandom => "SecureRandom",
            ServiceType::KEM => "KEM",
        }
    }
}

impl Display for ServiceType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A concrete algorithm a provider may implement
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Algorithm {
    MessageDigest(HashScheme),
    Mac(HashScheme),
    Cipher(AeadScheme),
    Signature(SignatureScheme),
    KeyPairGenerator(SignatureScheme),
    Kdf(HashScheme),
    SecureRandom(RandScheme),
    Kem(KemScheme),
}

impl Algorithm {
    pub fn service_type(&self) -> ServiceType {
        match *self {
            Algorithm::MessageDigest(_) => ServiceType::MessageDigest,
            Algorithm::Mac(_) => ServiceType::Mac,
            Algorithm::Cipher(_) => ServiceType::Cipher,
            Algorithm::Signature(_) => ServiceType::Signature,
            Algorithm::KeyPairGenerator(_) => ServiceType::KeyPairGenerator,
            Algorithm::Kdf(_) => ServiceType::KDF,
            Algorithm::SecureRandom(_) => ServiceType::SecureRandom,
            Algorithm::Kem(_) => ServiceType::KEM,
        }
    }

    /// Canonical algorithm name
    pub fn name(&self) -> &'static str {
        self.description().map(|d| d.name).unwrap_or("UNKNOWN")
    }

    /// Alternate names resolving to the same implementation
    pub fn aliases(&self) -> &'static [&'static str] {
        self.description().map(|d| d.aliases).unwrap_or(&[])
    }

    /// Build the service entry a provider named `provider` advertises for this algorithm
    pub fn service(&self, provider: &str) -> Service {
        Service::new(provider, self.service_type().as_str(), self.name())
            .with_aliases(self.aliases().iter().map(|a| a.to_string()))
    }

    /// Resolve `name`, the canonical name or any alias, compared case-insensitively,
    /// among algorithms of `service_type`
    pub fn lookup(service_type: &str, name: &str) -> Option<Algorithm> {
        ALGORITHM_DESCRIPTIONS
            .iter()
            .filter(|d| d.algorithm.service_type().as_str() == service_type)
            .find(|d| {
                d.name.eq_ignore_ascii_case(name)
                    || d.aliases.iter().any(|a| a.eq_ignore_ascii_case(name))
            })
            .map(|d| d.algorithm)
    }

    /// Every algorithm with a registered name, in table order
    pub fn all() -> impl Iterator<Item = Algorithm> {
        ALGORITHM_DESCRIPTIONS.iter().map(|d| d.algorithm)
    }

    fn description(&self) -> Option<&'static AlgorithmDescription> {
        ALGORITHM_DESCRIPTIONS.iter().find(|d| d.algorithm == *self)
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name(), self.service_type())
    }
}

struct AlgorithmDescription {
    algorithm: Algorithm,
    name: &'static str,
    aliases: &'static [&'static str],
}

static ALGORITHM_DESCRIPTIONS: [AlgorithmDescription; 26] = [
    // MessageDigest
    AlgorithmDescription {
        algorithm: Algorithm::MessageDigest(HashScheme::SHA256),
        name: "SHA-256",
        aliases: &["SHA256", "2.16.840.1.101.3.4.2.1", "OID.2.16.840.1.101.3.4.2.1"],
    },
    AlgorithmDescription {
        algorithm: Algorithm::MessageDigest(HashScheme::SHA384),
        name: "SHA-384",
        aliases: &["SHA384", "2.16.840.1.101.3.4.2.2", "OID.2.16.840.1.101.3.4.2.2"],
    },
    AlgorithmDescription {
        algorithm: Algorithm::MessageDigest(HashScheme::SHA512),
        name: "SHA-512",
        aliases: &["SHA512", "2.16.840.1.101.3.4.2.3", "OID.2.16.840.1.101.3.4.2.3"],
    },
    // Mac
    AlgorithmDescription {
        algorithm: Algorithm::Mac(HashScheme::SHA256),
        name: "HmacSHA256",
        aliases: &["HMAC-SHA256", "1.2.840.113549.2.9", "OID.1.2.840.113549.2.9"],
    },
    AlgorithmDescription {
        algorithm: Algorithm::Mac(HashScheme::SHA384),
        name: "HmacSHA384",
        aliases: &["HMAC-SHA384", "1.2.840.113549.2.10", "OID.1.2.840.113549.2.10"],
    },
    AlgorithmDescription {
        algorithm: Algorithm::Mac(HashScheme::SHA512),
        name: "HmacSHA512",
        aliases: &["HMAC-SHA512", "1.2.840.113549.2.11", "OID.1.2.840.113549.2.11"],
    },
    // Cipher
    AlgorithmDescription {
        algorithm: Algorithm::Cipher(AeadScheme::AES128GCM),
        name: "AES_128/GCM/NoPadding",
        aliases: &["AES128-GCM", "2.16.840.1.101.3.4.1.6", "OID.2.16.840.1.101.3.4.1.6"],
    },
    AlgorithmDescription {
        algorithm: Algorithm::Cipher(AeadScheme::AES256GCM),
        name: "AES_256/GCM/NoPadding",
        aliases: &["AES256-GCM", "2.16.840.1.101.3.4.1.46", "OID.2.16.840.1.101.3.4.1.46"],
    },
    AlgorithmDescription {
        algorithm: Algorithm::Cipher(AeadScheme::ChaCha20Poly1305),
        name: "ChaCha20-Poly1305",
        aliases: &[
            "CHACHA20-POLY1305",
            "1.2.840.113549.1.9.16.3.18",
            "OID.1.2.840.113549.1.9.16.3.18",
        ],
    },
    // Signature
    AlgorithmDescription {
        algorithm: Algorithm::Signature(SignatureScheme::ED25519),
        name: "Ed25519",
        aliases: &["EdDSA", "1.3.101.112", "OID.1.3.101.112"],
    },
    AlgorithmDescription {
        algorithm: Algorithm::Signature(SignatureScheme::ECDSA_SECP256R1_SHA256),
        name: "SHA256withECDSA",
        aliases: &["ECDSA-P256-SHA256", "1.2.840.10045.4.3.2", "OID.1.2.840.10045.4.3.2"],
    },
    AlgorithmDescription {
        algorithm: Algorithm::Signature(SignatureScheme::ECDSA_SECP384R1_SHA384),
        name: "SHA384withECDSA",
        aliases: &["ECDSA-P384-SHA384", "1.2.840.10045.4.3.3", "OID.1.2.840.10045.4.3.3"],
    },
    AlgorithmDescription {
        algorithm: Algorithm::Signature(SignatureScheme::ECDSA_SECP521R1_SHA512),
        name: "SHA512withECDSA",
        aliases: &["ECDSA-P521-SHA512", "1.2.840.10045.4.3.4", "OID.1.2.840.10045.4.3.4"],
    },
    AlgorithmDescription {
        algorithm: Algorithm::Signature(SignatureScheme::ED448),
        name: "Ed448",
        aliases: &["1.3.101.113", "OID.1.3.101.113"],
    },
    // KeyPairGenerator
    AlgorithmDescription {
        algorithm: Algorithm::KeyPairGenerator(SignatureScheme::ED25519),
        name: "Ed25519",
        aliases: &["1.3.101.112", "OID.1.3.101.112"],
    },
    AlgorithmDescription {
        algorithm: Algorithm::KeyPairGenerator(SignatureScheme::ECDSA_SECP256R1_SHA256),
        name: "EC-P256",
        aliases: &["secp256r1", "NIST P-256", "1.2.840.10045.3.1.7"],
    },
    AlgorithmDescription {
        algorithm: Algorithm::KeyPairGenerator(SignatureScheme::ECDSA_SECP384R1_SHA384),
        name: "EC-P384",
        aliases: &["secp384r1", "NIST P-384", "1.3.132.0.34"],
    },
    AlgorithmDescription {
        algorithm: Algorithm::KeyPairGenerator(SignatureScheme::ECDSA_SECP521R1_SHA512),
        name: "EC-P521",
        aliases: &["secp521r1", "NIST P-521", "1.3.132.0.35"],
    },
    AlgorithmDescription {
        algorithm: Algorithm::KeyPairGenerator(SignatureScheme::ED448),
        name: "Ed448",
        aliases: &["1.3.101.113", "OID.1.3.101.113"],
    },
    // KDF
    AlgorithmDescription {
        algorithm: Algorithm::Kdf(HashScheme::SHA256),
        name: "HKDF-SHA256",
        aliases: &["HKDFWithHmacSHA256"],
    },
    AlgorithmDescription {
        algorithm: Algorithm::Kdf(HashScheme::SHA384),
        name: "HKDF-SHA384",
        aliases: &["HKDFWithHmacSHA384"],
    },
    AlgorithmDescription {
        algorithm: Algorithm::Kdf(HashScheme::SHA512),
        name: "HKDF-SHA512",
        aliases: &["HKDFWithHmacSHA512"],
    },
    // SecureRandom
    AlgorithmDescription {
        algorithm: Algorithm::SecureRandom(RandScheme::ChaCha20),
        name: "ChaCha20",
        aliases: &["CHACHA20-DRBG"],
    },
    AlgorithmDescription {
        algorithm: Algorithm::SecureRandom(RandScheme::System),
        name: "SystemRandom",
        aliases: &["NativePRNG"],
    },
    // KEM
    AlgorithmDescription {
        algorithm: Algorithm::Kem(KemScheme::DHKEM_X25519_HKDF_SHA256),
        name: "DHKEM-X25519-HKDF-SHA256",
        aliases: &["X25519Kem", "0x0020"],
    },
    AlgorithmDescription {
        algorithm: Algorithm::Kem(KemScheme::DHKEM_P256_HKDF_SHA256),
        name: "DHKEM-P256-HKDF-SHA256",
        aliases: &["P256Kem", "0x0010"],
    },
];
