use aead::{generic_array::GenericArray, Aead as AeadCipher, KeyInit, Payload};
use aes_gcm::{Aes128Gcm, Aes256Gcm};
use bytes::Bytes;
use chacha20poly1305::ChaCha20Poly1305;

use crate::crypto::*;

#[derive(Default, Debug, Copy, Clone, Eq, PartialEq)]
pub(super) struct AeadSchemeWrapper(pub(super) AeadScheme);

impl AeadSchemeWrapper {
    fn check_lengths(&self, key: &[u8], nonce: &[u8]) -> Result<()> {
        if key.len() != self.0.key_size() {
            return Err(Error::InvalidKeyLength {
                expected: self.0.key_size(),
                actual: key.len(),
            });
        }
        if nonce.len() != self.0.nonce_size() {
            return Err(Error::InvalidNonceLength {
                expected: self.0.nonce_size(),
                actual: nonce.len(),
            });
        }
        Ok(())
    }
}

fn seal_with<C: KeyInit + AeadCipher>(
    key: &[u8],
    nonce: &[u8],
    payload: Payload<'_, '_>,
) -> Result<Vec<u8>> {
    let cipher =
        C::new_from_slice(key).map_err(|err| Error::RustCryptoError(err.to_string()))?;
    cipher
        .encrypt(GenericArray::from_slice(nonce), payload)
        .map_err(|err| Error::RustCryptoError(err.to_string()))
}

fn open_with<C: KeyInit + AeadCipher>(
    key: &[u8],
    nonce: &[u8],
    payload: Payload<'_, '_>,
) -> Result<Vec<u8>> {
    let cipher =
        C::new_from_slice(key).map_err(|err| Error::RustCryptoError(err.to_string()))?;
    cipher
        .decrypt(GenericArray::from_slice(nonce), payload)
        .map_err(|err| Error::RustCryptoError(err.to_string()))
}

impl Aead for AeadSchemeWrapper {
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
        self.check_lengths(key, nonce)?;
        let payload = Payload {
            msg: ciphertext,
            aad: additional_data,
        };
        let plaintext = match self.0 {
            AeadScheme::AES128GCM => open_with::<Aes128Gcm>(key, nonce, payload)?,
            AeadScheme::AES256GCM => open_with::<Aes256Gcm>(key, nonce, payload)?,
            AeadScheme::ChaCha20Poly1305 => open_with::<ChaCha20Poly1305>(key, nonce, payload)?,
        };
        Ok(Bytes::from(plaintext))
    }

    fn seal(
        &self,
        key: &[u8],
        nonce: &[u8],
        plaintext: &[u8],
        additional_data: &[u8],
    ) -> Result<Bytes> {
        self.check_lengths(key, nonce)?;
        let payload = Payload {
            msg: plaintext,
            aad: additional_data,
        };
        let ciphertext = match self.0 {
            AeadScheme::AES128GCM => seal_with::<Aes128Gcm>(key, nonce, payload)?,
            AeadScheme::AES256GCM => seal_with::<Aes256Gcm>(key, nonce, payload)?,
            AeadScheme::ChaCha20Poly1305 => seal_with::<ChaCha20Poly1305>(key, nonce, payload)?,
        };
        Ok(Bytes::from(ciphertext))
    }
}
