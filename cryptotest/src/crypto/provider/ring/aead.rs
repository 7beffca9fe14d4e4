use bytes::Bytes;
use ring::aead;

use crate::crypto::AeadScheme;
use crate::utilities::error::*;

#[derive(Default, Debug, Copy, Clone, Eq, PartialEq)]
pub(super) struct AeadSchemeWrapper(pub(super) AeadScheme);

impl AeadSchemeWrapper {
    fn key(&self, key: &[u8]) -> Result<aead::LessSafeKey> {
        if key.len() != self.0.key_size() {
            return Err(Error::InvalidKeyLength {
                expected: self.0.key_size(),
                actual: key.len(),
            });
        }
        let algorithm = match self.0 {
            AeadScheme::AES128GCM => &aead::AES_128_GCM,
            AeadScheme::AES256GCM => &aead::AES_256_GCM,
            AeadScheme::ChaCha20Poly1305 => &aead::CHACHA20_POLY1305,
        };
        let unbound_key = aead::UnboundKey::new(algorithm, key)
            .map_err(|err| Error::RingCryptoError(err.to_string()))?;
        Ok(aead::LessSafeKey::new(unbound_key))
    }

    fn nonce(&self, nonce: &[u8]) -> Result<aead::Nonce> {
        if nonce.len() != self.0.nonce_size() {
            return Err(Error::InvalidNonceLength {
                expected: self.0.nonce_size(),
                actual: nonce.len(),
            });
        }
        aead::Nonce::try_assume_unique_for_key(nonce)
            .map_err(|err| Error::RingCryptoError(err.to_string()))
    }
}

impl crate::crypto::Aead for AeadSchemeWrapper {
    fn key_size(&self) -> usize {
        self.0.key_size()
    }

    fn nonce_size(&self) -> usize {
        self.0.nonce_size()
    }

    fn open(
        &self,
        key: &[u8],
        nonce: &[u8],
        ciphertext: &[u8],
        additional_data: &[u8],
    ) -> Result<Bytes> {
        let key = self.key(key)?;
        let nonce = self.nonce(nonce)?;
        let mut in_out = ciphertext.to_vec();
        let plaintext = key
            .open_in_place(nonce, aead::Aad::from(additional_data), &mut in_out)
            .map_err(|err| Error::RingCryptoError(err.to_string()))?;
        Ok(Bytes::from(plaintext.to_vec()))
    }

    fn seal(
        &self,
        key: &[u8],
        nonce: &[u8],
        plaintext: &[u8],
        additional_data: &[u8],
    ) -> Result<Bytes> {
        let key = self.key(key)?;
        let nonce = self.nonce(nonce)?;
        let mut in_out = plaintext.to_vec();
        key.seal_in_place_append_tag(nonce, aead::Aad::from(additional_data), &mut in_out)
            .map_err(|err| Error::RingCryptoError(err.to_string()))?;
        Ok(Bytes::from(in_out))
    }
}
