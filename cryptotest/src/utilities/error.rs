use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("no such algorithm: {0}")]
    NoSuchAlgorithm(String),
    #[error("algorithm {0} is not supported by provider {1}")]
    UnsupportedAlgorithm(String, String),
    #[error("invalid key length {actual}, expected {expected}")]
    InvalidKeyLength { expected: usize, actual: usize },
    #[error("invalid nonce length {actual}, expected {expected}")]
    InvalidNonceLength { expected: usize, actual: usize },
    #[error("invalid Ed25519 private key")]
    InvalidEd25519PrivateKey,
    #[error("invalid Ed25519 public key")]
    InvalidEd25519PublicKey,
    #[error("invalid ECDSA private key")]
    InvalidECDSAPrivateKey,
    #[error("unsupported Ecdsa")]
    UnsupportedEcdsa,
    #[error("unsupported Ed448")]
    UnsupportedEd448,
    #[error("RingCrypto error {0}")]
    RingCryptoError(String),
    #[error("RustCrypto error {0}")]
    RustCryptoError(String),
    #[error("Hpke error {0}")]
    HpkeError(String),

    #[error("invalid algorithm filter {pattern:?}: {source}")]
    InvalidAlgorithmFilter {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("{0}")]
    Io(#[source] IoError),
    #[error("failed to read settings {path}: {source}")]
    Settings {
        path: String,
        #[source]
        source: IoError,
    },
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("serde_json error: {0}")]
    SerdeJson(#[from] serde_json::Error),
    #[cfg(feature = "RustCryptoProvider")]
    #[error("{0}")]
    Sec1(#[source] sec1::Error),
    #[cfg(feature = "RustCryptoProvider")]
    #[error("{0}")]
    Ecdsa(#[source] ecdsa::Error),
    #[cfg(feature = "RustCryptoProvider")]
    #[error("{0}")]
    SignatureDigest(#[source] signature::digest::InvalidLength),

    #[error("{0}")]
    Other(String),
}

#[derive(Debug, Error)]
#[error("io error: {0}")]
pub struct IoError(#[from] pub io::Error);

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(IoError(e))
    }
}

#[cfg(feature = "RustCryptoProvider")]
impl From<sec1::Error> for Error {
    fn from(e: sec1::Error) -> Self {
        Error::Sec1(e)
    }
}

#[cfg(feature = "RustCryptoProvider")]
impl From<ecdsa::Error> for Error {
    fn from(e: ecdsa::Error) -> Self {
        Error::Ecdsa(e)
    }
}

#[cfg(feature = "RustCryptoProvider")]
impl From<signature::digest::InvalidLength> for Error {
    fn from(e: signature::digest::InvalidLength) -> Self {
        Error::SignatureDigest(e)
    }
}

/// Outcome of a category check that did not pass.
///
/// The variant decides which bucket the unit lands in: an ignored unit is
/// counted separately and is never a failure, the other three are failures
/// reported in their own section of the category explanation.
#[derive(Error, Debug)]
pub enum Failure {
    /// The combination is known not to be meaningful here.
    #[error("ignored: {0}")]
    Ignored(String),
    /// No working instance could be obtained for the requested name.
    #[error("failed to init: {0}")]
    Instantiation(#[source] Error),
    /// An instance was obtained but exercising it failed.
    #[error("failed to use: {0}")]
    Run(#[source] Error),
    /// Anything the check did not anticipate, including panics.
    #[error("error: {0}")]
    Other(#[source] Error),
}

impl Failure {
    pub fn ignored(reason: impl Into<String>) -> Self {
        Failure::Ignored(reason.into())
    }

    pub fn run(reason: impl Into<String>) -> Self {
        Failure::Run(Error::Other(reason.into()))
    }
}
