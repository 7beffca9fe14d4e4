use bytes::Bytes;
use hpke::{Deserializable, Serializable};
use rand_core::SeedableRng;

use crate::crypto::{KemKeyPair, KemScheme};
use crate::utilities::error::*;

/// Exporter context the shared secret is derived under
const EXPORTER_CONTEXT: &[u8] = b"cryptotest kem shared secret";
const SHARED_SECRET_SIZE: usize = 32;

// DHKEM wrapped in an HPKE base mode context; the shared secret is taken from the
// context's secret export interface so both sides can be compared.
#[derive(Default, Debug, Copy, Clone, Eq, PartialEq)]
pub(super) struct KemSchemeWrapper(pub(super) KemScheme);

fn hpke_error(err: hpke::HpkeError) -> Error {
    Error::HpkeError(err.to_string())
}

fn generate_key_pair_with<K: hpke::Kem>() -> (Vec<u8>, Vec<u8>) {
    let (private_key, public_key) =
        K::gen_keypair(&mut rand_chacha::ChaCha20Rng::from_entropy());
    (
        private_key.to_bytes().to_vec(),
        public_key.to_bytes().to_vec(),
    )
}

fn encapsulate_with<K: hpke::Kem>(public_key: &[u8], info: &[u8]) -> Result<(Bytes, Bytes)> {
    let public_key = K::PublicKey::from_bytes(public_key).map_err(hpke_error)?;

    let (encapped_key, encryption_context) = hpke::setup_sender::<
        hpke::aead::AesGcm128,
        hpke::kdf::HkdfSha256,
        K,
        _,
    >(
        &hpke::OpModeS::Base,
        &public_key,
        info,
        &mut rand_chacha::ChaCha20Rng::from_entropy(),
    )
    .map_err(hpke_error)?;

    let mut secret = vec![0u8; SHARED_SECRET_SIZE];
    encryption_context
        .export(EXPORTER_CONTEXT, &mut secret)
        .map_err(hpke_error)?;

    Ok((
        Bytes::from(encapped_key.to_bytes().to_vec()),
        Bytes::from(secret),
    ))
}

fn decapsulate_with<K: hpke::Kem>(
    private_key: &[u8],
    encapsulated_key: &[u8],
    info: &[u8],
) -> Result<Bytes> {
    let private_key = K::PrivateKey::from_bytes(private_key).map_err(hpke_error)?;
    let encapped_key = K::EncappedKey::from_bytes(encapsulated_key).map_err(hpke_error)?;

    let decryption_context = hpke::setup_receiver::<
        hpke::aead::AesGcm128,
        hpke::kdf::HkdfSha256,
        K,
    >(&hpke::OpModeR::Base, &private_key, &encapped_key, info)
    .map_err(hpke_error)?;

    let mut secret = vec![0u8; SHARED_SECRET_SIZE];
    decryption_context
        .export(EXPORTER_CONTEXT, &mut secret)
        .map_err(hpke_error)?;

    Ok(Bytes::from(secret))
}

impl crate::crypto::Kem for KemSchemeWrapper {
    fn generate_key_pair(&self) -> Result<KemKeyPair> {
        let (private_key, public_key) = match self.0 {
            KemScheme::DHKEM_X25519_HKDF_SHA256 => {
                generate_key_pair_with::<hpke::kem::X25519HkdfSha256>()
            }
            KemScheme::DHKEM_P256_HKDF_SHA256 => {
                generate_key_pair_with::<hpke::kem::DhP256HkdfSha256>()
            }
        };

        Ok(KemKeyPair {
            private_key: Bytes::from(private_key),
            public_key: Bytes::from(public_key),
            kem_scheme: self.0,
        })
    }

    fn kem_scheme(&self) -> KemScheme {
        self.0
    }

    fn encapsulate(&self, public_key: &[u8], info: &[u8]) -> Result<(Bytes, Bytes)> {
        match self.0 {
            KemScheme::DHKEM_X25519_HKDF_SHA256 => {
                encapsulate_with::<hpke::kem::X25519HkdfSha256>(public_key, info)
            }
            KemScheme::DHKEM_P256_HKDF_SHA256 => {
                encapsulate_with::<hpke::kem::DhP256HkdfSha256>(public_key, info)
            }
        }
    }

    fn decapsulate(
        &self,
        private_key: &[u8],
        encapsulated_key: &[u8],
        info: &[u8],
    ) -> Result<Bytes> {
        match self.0 {
            KemScheme::DHKEM_X25519_HKDF_SHA256 => {
                decapsulate_with::<hpke::kem::X25519HkdfSha256>(private_key, encapsulated_key, info)
            }
            KemScheme::DHKEM_P256_HKDF_SHA256 => {
                decapsulate_with::<hpke::kem::DhP256HkdfSha256>(private_key, encapsulated_key, info)
            }
        }
    }
}
