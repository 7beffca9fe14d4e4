use bytes::Bytes;
use hkdf::Hkdf;
use sha2::{Sha256, Sha384, Sha512};

use crate::crypto::*;

// HKDF over one of the SHA-2 hash functions.
#[derive(Default, Debug, Copy, Clone, Eq, PartialEq)]
pub(super) struct KdfSchemeWrapper(pub(super) HashScheme);

fn kdf_error(err: impl std::fmt::Display) -> Error {
    Error::RustCryptoError(err.to_string())
}

impl Kdf for KdfSchemeWrapper {
    fn extract(&self, secret: &[u8], salt: &[u8]) -> Result<Bytes> {
        let prk = match self.0 {
            HashScheme::SHA256 => Hkdf::<Sha256>::extract(Some(salt), secret).0.to_vec(),
            HashScheme::SHA384 => Hkdf::<Sha384>::extract(Some(salt), secret).0.to_vec(),
            HashScheme::SHA512 => Hkdf::<Sha512>::extract(Some(salt), secret).0.to_vec(),
        };
        Ok(Bytes::from(prk))
    }

    fn expand(&self, secret: &[u8], info: &[u8], length: u16) -> Result<Bytes> {
        let mut out = vec![0u8; length as usize];

        match self.0 {
            HashScheme::SHA256 => Hkdf::<Sha256>::from_prk(secret)
                .map_err(kdf_error)?
                .expand(info, &mut out)
                .map_err(kdf_error)?,
            HashScheme::SHA384 => Hkdf::<Sha384>::from_prk(secret)
                .map_err(kdf_error)?
                .expand(info, &mut out)
                .map_err(kdf_error)?,
            HashScheme::SHA512 => Hkdf::<Sha512>::from_prk(secret)
                .map_err(kdf_error)?
                .expand(info, &mut out)
                .map_err(kdf_error)?,
        };

        Ok(Bytes::from(out))
    }

    fn extract_size(&self) -> usize {
        self.0.size()
    }
}
