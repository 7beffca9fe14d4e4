use bytes::Bytes;
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256, Sha384, Sha512};

use crate::crypto::HashScheme;
use crate::utilities::error::*;

#[derive(Default, Debug, Copy, Clone, Eq, PartialEq)]
pub(super) struct HashSchemeWrapper(pub(super) HashScheme);

impl crate::crypto::Hash for HashSchemeWrapper {
    fn size(&self) -> usize {
        self.0.size()
    }

    fn digest(&self, data: &[u8]) -> Result<Bytes> {
        let out = match self.0 {
            HashScheme::SHA256 => {
                let mut h = Sha256::new();
                h.update(data);
                h.finalize().to_vec()
            }
            HashScheme::SHA384 => {
                let mut h = Sha384::new();
                h.update(data);
                h.finalize().to_vec()
            }
            HashScheme::SHA512 => {
                let mut h = Sha512::new();
                h.update(data);
                h.finalize().to_vec()
            }
        };
        Ok(Bytes::from(out))
    }

    fn mac(&self, key: &[u8], message: &[u8]) -> Result<Bytes> {
        let out = match self.0 {
            HashScheme::SHA256 => {
                let mut m = Hmac::<Sha256>::new_from_slice(key)?;
                m.update(message);
                m.finalize().into_bytes().to_vec()
            }
            HashScheme::SHA384 => {
                let mut m = Hmac::<Sha384>::new_from_slice(key)?;
                m.update(message);
                m.finalize().into_bytes().to_vec()
            }
            HashScheme::SHA512 => {
                let mut m = Hmac::<Sha512>::new_from_slice(key)?;
                m.update(message);
                m.finalize().into_bytes().to_vec()
            }
        };
        Ok(Bytes::from(out))
    }
}
