use ring::rand::{SecureRandom, SystemRandom};

use crate::utilities::error::*;

#[derive(Debug)]
pub(super) struct RandSystem(SystemRandom);

impl Default for RandSystem {
    fn default() -> Self {
        Self(SystemRandom::new())
    }
}

impl crate::crypto::Rand for RandSystem {
    fn fill(&self, buf: &mut [u8]) -> Result<()> {
        self.0
            .fill(buf)
            .map_err(|err| Error::RingCryptoError(err.to_string()))
    }
}
