use bytes::Bytes;
use ring::{
    rand::SystemRandom,
    signature::{self, EcdsaKeyPair, Ed25519KeyPair, KeyPair, UnparsedPublicKey},
};

use crate::crypto::{SignatureKeyPair, SignatureScheme};
use crate::utilities::error::*;

/// Private keys produced by this backend are PKCS#8 documents; public keys
/// are raw Ed25519 keys or uncompressed SEC1 points.
#[derive(Default, Debug, Copy, Clone, Eq, PartialEq)]
pub(super) struct SignatureSchemeWrapper(pub(super) SignatureScheme);

fn ring_error(err: impl std::fmt::Display) -> Error {
    Error::RingCryptoError(err.to_string())
}

impl SignatureSchemeWrapper {
    fn ecdsa_signing(&self) -> Result<&'static signature::EcdsaSigningAlgorithm> {
        match self.0 {
            SignatureScheme::ECDSA_SECP256R1_SHA256 => Ok(&signature::ECDSA_P256_SHA256_ASN1_SIGNING),
            SignatureScheme::ECDSA_SECP384R1_SHA384 => Ok(&signature::ECDSA_P384_SHA384_ASN1_SIGNING),
            SignatureScheme::ECDSA_SECP521R1_SHA512 => Err(Error::UnsupportedEcdsa),
            SignatureScheme::ED448 => Err(Error::UnsupportedEd448),
            SignatureScheme::ED25519 => Err(Error::UnsupportedEcdsa),
        }
    }

    fn verification(&self) -> Result<&'static dyn signature::VerificationAlgorithm> {
        match self.0 {
            SignatureScheme::ED25519 => Ok(&signature::ED25519),
            SignatureScheme::ECDSA_SECP256R1_SHA256 => Ok(&signature::ECDSA_P256_SHA256_ASN1),
            SignatureScheme::ECDSA_SECP384R1_SHA384 => Ok(&signature::ECDSA_P384_SHA384_ASN1),
            SignatureScheme::ECDSA_SECP521R1_SHA512 => Err(Error::UnsupportedEcdsa),
            SignatureScheme::ED448 => Err(Error::UnsupportedEd448),
        }
    }
}

impl crate::crypto::Signature for SignatureSchemeWrapper {
    fn generate_key_pair(&self) -> Result<SignatureKeyPair> {
        let rng = SystemRandom::new();
        let (private_key, public_key) = match self.0 {
            SignatureScheme::ED25519 => {
                let pkcs8 = Ed25519KeyPair::generate_pkcs8(&rng).map_err(ring_error)?;
                let key_pair = Ed25519KeyPair::from_pkcs8(pkcs8.as_ref()).map_err(ring_error)?;
                (
                    pkcs8.as_ref().to_vec(),
                    key_pair.public_key().as_ref().to_vec(),
                )
            }
            _ => {
                let algorithm = self.ecdsa_signing()?;
                let pkcs8 = EcdsaKeyPair::generate_pkcs8(algorithm, &rng).map_err(ring_error)?;
                let key_pair =
                    EcdsaKeyPair::from_pkcs8(algorithm, pkcs8.as_ref(), &rng).map_err(ring_error)?;
                (
                    pkcs8.as_ref().to_vec(),
                    key_pair.public_key().as_ref().to_vec(),
                )
            }
        };

        Ok(SignatureKeyPair {
            private_key: private_key.into(),
            public_key: public_key.into(),
            signature_scheme: self.0,
        })
    }

    fn signature_scheme(&self) -> SignatureScheme {
        self.0
    }

    fn sign(&self, sign_key: &[u8], message: &[u8]) -> Result<Bytes> {
        match self.0 {
            SignatureScheme::ED25519 => {
                let key_pair = Ed25519KeyPair::from_pkcs8(sign_key)
                    .map_err(|_| Error::InvalidEd25519PrivateKey)?;
                Ok(Bytes::from(key_pair.sign(message).as_ref().to_vec()))
            }
            _ => {
                let algorithm = self.ecdsa_signing()?;
                let rng = SystemRandom::new();
                let key_pair = EcdsaKeyPair::from_pkcs8(algorithm, sign_key, &rng)
                    .map_err(|_| Error::InvalidECDSAPrivateKey)?;
                let signature = key_pair.sign(&rng, message).map_err(ring_error)?;
                Ok(Bytes::from(signature.as_ref().to_vec()))
            }
        }
    }

    fn verify(&self, public_key: &[u8], message: &[u8], signature: &[u8]) -> Result<()> {
        let algorithm = self.verification()?;
        UnparsedPublicKey::new(algorithm, public_key)
            .verify(message, signature)
            .map_err(ring_error)
    }
}
