use bytes::Bytes;
use rand_core::SeedableRng;
use signature::{Signer, Verifier};

use crate::crypto::{SignatureKeyPair, SignatureScheme};
use crate::utilities::error::*;

#[derive(Default, Debug, Copy, Clone, Eq, PartialEq)]
pub(super) struct SignatureSchemeWrapper(pub(super) SignatureScheme);

impl crate::crypto::Signature for SignatureSchemeWrapper {
    fn generate_key_pair(&self) -> Result<SignatureKeyPair> {
        let mut rng = rand_chacha::ChaCha20Rng::from_entropy();
        let (private_key, public_key) = match self.0 {
            SignatureScheme::ED25519 => {
                let signing_key = ed25519_dalek::SigningKey::generate(&mut rng);
                (
                    signing_key.to_bytes().to_vec(),
                    signing_key.verifying_key().to_bytes().to_vec(),
                )
            }
            SignatureScheme::ECDSA_SECP256R1_SHA256 => {
                let signing_key = p256::ecdsa::SigningKey::random(&mut rng);
                (
                    signing_key.to_bytes().to_vec(),
                    signing_key.verifying_key().to_sec1_bytes().to_vec(),
                )
            }
            SignatureScheme::ECDSA_SECP384R1_SHA384 => {
                let signing_key = p384::ecdsa::SigningKey::random(&mut rng);
                (
                    signing_key.to_bytes().to_vec(),
                    signing_key.verifying_key().to_sec1_bytes().to_vec(),
                )
            }
            SignatureScheme::ECDSA_SECP521R1_SHA512 => return Err(Error::UnsupportedEcdsa),
            SignatureScheme::ED448 => return Err(Error::UnsupportedEd448),
        };

        Ok(SignatureKeyPair {
            private_key: Bytes::from(private_key),
            public_key: Bytes::from(public_key),
            signature_scheme: self.0,
        })
    }

    fn signature_scheme(&self) -> SignatureScheme {
        self.0
    }

    fn sign(&self, sign_key: &[u8], message: &[u8]) -> Result<Bytes> {
        match self.0 {
            SignatureScheme::ED25519 => {
                let private_key = ed25519_dalek::SigningKey::from_bytes(
                    &sign_key
                        .try_into()
                        .map_err(|_| Error::InvalidEd25519PrivateKey)?,
                );
                let signature: ed25519_dalek::Signature = private_key.sign(message);
                Ok(Bytes::from(signature.to_bytes().to_vec()))
            }
            SignatureScheme::ECDSA_SECP256R1_SHA256 => {
                let private_key = p256::ecdsa::SigningKey::from_slice(sign_key)
                    .map_err(|_| Error::InvalidECDSAPrivateKey)?;
                let signature: p256::ecdsa::Signature = private_key.sign(message);
                Ok(Bytes::from(signature.to_der().as_bytes().to_vec()))
            }
            SignatureScheme::ECDSA_SECP384R1_SHA384 => {
                let private_key = p384::ecdsa::SigningKey::from_slice(sign_key)
                    .map_err(|_| Error::InvalidECDSAPrivateKey)?;
                let signature: p384::ecdsa::Signature = private_key.sign(message);
                Ok(Bytes::from(signature.to_der().as_bytes().to_vec()))
            }
            SignatureScheme::ECDSA_SECP521R1_SHA512 => Err(Error::UnsupportedEcdsa),
            SignatureScheme::ED448 => Err(Error::UnsupportedEd448),
        }
    }

    fn verify(&self, public_key: &[u8], message: &[u8], signature: &[u8]) -> Result<()> {
        match self.0 {
            SignatureScheme::ED25519 => {
                let verifying_key = ed25519_dalek::VerifyingKey::from_bytes(
                    &public_key
                        .try_into()
                        .map_err(|_| Error::InvalidEd25519PublicKey)?,
                )?;
                let signature = ed25519_dalek::Signature::from_slice(signature)?;
                verifying_key.verify(message, &signature)?;
                Ok(())
            }
            SignatureScheme::ECDSA_SECP256R1_SHA256 => {
                let encoded_point = p256::EncodedPoint::from_bytes(public_key)?;
                let verifying_key =
                    p256::ecdsa::VerifyingKey::from_encoded_point(&encoded_point)?;
                let signature = p256::ecdsa::Signature::from_der(signature)?;
                verifying_key.verify(message, &signature)?;
                Ok(())
            }
            SignatureScheme::ECDSA_SECP384R1_SHA384 => {
                let encoded_point = p384::EncodedPoint::from_bytes(public_key)?;
                let verifying_key =
                    p384::ecdsa::VerifyingKey::from_encoded_point(&encoded_point)?;
                let signature = p384::ecdsa::Signature::from_der(signature)?;
                verifying_key.verify(message, &signature)?;
                Ok(())
            }
            SignatureScheme::ECDSA_SECP521R1_SHA512 => Err(Error::UnsupportedEcdsa),
            SignatureScheme::ED448 => Err(Error::UnsupportedEd448),
        }
    }
}
