use rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use std::sync::Mutex;

use crate::utilities::error::*;

/// Output after which the generator is reseeded from the operating system
const RESEED_INTERVAL: u64 = 1 << 20;

#[derive(Debug)]
struct DrbgState {
    rng: ChaCha20Rng,
    produced: u64,
}

/// ChaCha20 DRBG shared by every caller of the provider
#[derive(Debug)]
pub(super) struct RandChacha {
    state: Mutex<DrbgState>,
}

impl Default for RandChacha {
    fn default() -> Self {
        Self {
            state: Mutex::new(DrbgState {
                rng: ChaCha20Rng::from_entropy(),
                produced: 0,
            }),
        }
    }
}

impl crate::crypto::Rand for RandChacha {
    fn fill(&self, buf: &mut [u8]) -> Result<()> {
        let mut state = self
            .state
            .lock()
            .map_err(|err| Error::Other(err.to_string()))?;
        if state.produced >= RESEED_INTERVAL {
            state.rng = ChaCha20Rng::from_rng(rand_core::OsRng)
                .map_err(|err| Error::RustCryptoError(err.to_string()))?;
            state.produced = 0;
        }
        state
            .rng
            .try_fill_bytes(buf)
            .map_err(|err| Error::RustCryptoError(err.to_string()))?;
        state.produced += buf.len() as u64;
        Ok(())
    }
}
