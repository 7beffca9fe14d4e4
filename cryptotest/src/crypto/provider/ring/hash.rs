use bytes::Bytes;
use ring::{digest, hmac};

use crate::crypto::HashScheme;
use crate::utilities::error::*;

#[derive(Default, Debug, Copy, Clone, Eq, PartialEq)]
pub(super) struct HashSchemeWrapper(pub(super) HashScheme);

impl HashSchemeWrapper {
    fn digest_algorithm(&self) -> &'static digest::Algorithm {
        match self.0 {
            HashScheme::SHA256 => &digest::SHA256,
            HashScheme::SHA384 => &digest::SHA384,
            HashScheme::SHA512 => &digest::SHA512,
        }
    }

    fn hmac_algorithm(&self) -> hmac::Algorithm {
        match self.0 {
            HashScheme::SHA256 => hmac::HMAC_SHA256,
            HashScheme::SHA384 => hmac::HMAC_SHA384,
            HashScheme::SHA512 => hmac::HMAC_SHA512,
        }
    }
}

impl crate::crypto::Hash for HashSchemeWrapper {
    fn size(&self) -> usize {
        self.digest_algorithm().output_len()
    }

    fn digest(&self, data: &[u8]) -> Result<Bytes> {
        let output = digest::digest(self.digest_algorithm(), data);
        Ok(Bytes::copy_from_slice(output.as_ref()))
    }

    fn mac(&self, key: &[u8], message: &[u8]) -> Result<Bytes> {
        let key = hmac::Key::new(self.hmac_algorithm(), key);
        let tag = hmac::sign(&key, message);
        Ok(Bytes::copy_from_slice(tag.as_ref()))
    }
}
