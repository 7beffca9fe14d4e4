use bytes::Bytes;
use ring::{hkdf, hmac};

use crate::crypto::HashScheme;
use crate::utilities::error::*;

#[derive(Default, Debug, Copy, Clone, Eq, PartialEq)]
pub(super) struct KdfSchemeWrapper(pub(super) HashScheme);

struct OkmLength(usize);

impl hkdf::KeyType for OkmLength {
    fn len(&self) -> usize {
        self.0
    }
}

impl KdfSchemeWrapper {
    fn algorithms(&self) -> (hmac::Algorithm, hkdf::Algorithm) {
        match self.0 {
            HashScheme::SHA256 => (hmac::HMAC_SHA256, hkdf::HKDF_SHA256),
            HashScheme::SHA384 => (hmac::HMAC_SHA384, hkdf::HKDF_SHA384),
            HashScheme::SHA512 => (hmac::HMAC_SHA512, hkdf::HKDF_SHA512),
        }
    }
}

impl crate::crypto::Kdf for KdfSchemeWrapper {
    fn extract(&self, secret: &[u8], salt: &[u8]) -> Result<Bytes> {
        let (hmac_algorithm, _) = self.algorithms();
        let key = hmac::Key::new(hmac_algorithm, salt);
        Ok(Bytes::from(hmac::sign(&key, secret).as_ref().to_vec()))
    }

    fn expand(&self, secret: &[u8], info: &[u8], length: u16) -> Result<Bytes> {
        let (_, hkdf_algorithm) = self.algorithms();
        let prk = hkdf::Prk::new_less_safe(hkdf_algorithm, secret);
        let info = [info];
        let okm = prk
            .expand(&info, OkmLength(length as usize))
            .map_err(|err| Error::RingCryptoError(err.to_string()))?;
        let mut out = vec![0u8; length as usize];
        okm.fill(&mut out)
            .map_err(|err| Error::RingCryptoError(err.to_string()))?;
        Ok(Bytes::from(out))
    }

    fn extract_size(&self) -> usize {
        self.0.size()
    }
}
