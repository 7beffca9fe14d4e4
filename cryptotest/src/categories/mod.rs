//! Test categories bundled with the harness, one per service type the
//! installed providers advertise.


mod cipher;
mod kdf;
mod kem;
mod key_pair_generator;
mod mac;
mod message_digest;
mod secure_random;
mod signature;

pub use self::cipher::CipherTests;
pub use self::kdf::KdfTests;
pub use self::kem::KemTests;
pub use self::key_pair_generator::KeyPairGeneratorTests;
pub use self::mac::MacTests;
pub use self::message_digest::MessageDigestTests;
pub use self::secure_random::SecureRandomTests;
pub use self::signature::SignatureTests;

use crate::crypto::{algorithm::Algorithm, provider::CryptoProvider};
use crate::discovery::Registration;
use crate::enumerator::TestUnit;
use crate::utilities::error::*;

use tracing::info;

/// Every bundled category. The leading abstract entry is the common base
/// the concrete categories share and is never run.
pub static REGISTRATIONS: [Registration; 9] = [
    Registration::abstract_base("AlgorithmTest"),
    Registration::concrete("MessageDigestTests", MessageDigestTests::create),
    Registration::concrete("MacTests", MacTests::create),
    Registration::concrete("CipherTests", CipherTests::create),
    Registration::concrete("SignatureTests", SignatureTests::create),
    Registration::concrete("KeyPairGeneratorTests", KeyPairGeneratorTests::create),
    Registration::concrete("KDFTests", KdfTests::create),
    Registration::concrete("SecureRandomTests", SecureRandomTests::create),
    Registration::concrete("KEMTests", KemTests::create),
];

pub(crate) const MESSAGE: &[u8] = b"cryptotest message";

/// Resolve the unit's name among the algorithms its provider implements
pub(crate) fn get_instance(
    unit: &TestUnit,
) -> std::result::Result<(&dyn CryptoProvider, Algorithm), Failure> {
    let crypto = unit.provider.crypto().ok_or_else(|| {
        Failure::ignored(format!(
            "provider {} exposes no primitives",
            unit.provider.name()
        ))
    })?;
    let algorithm = crypto
        .get_instance(unit.service_type(), &unit.name)
        .map_err(Failure::Instantiation)?;
    Ok((crypto, algorithm))
}

fn is_unsupported(err: &Error) -> bool {
    matches!(err, Error::UnsupportedEcdsa | Error::UnsupportedEd448)
}

/// Classify an error raised while obtaining a primitive
pub(crate) fn init_failure(err: Error) -> Failure {
    if is_unsupported(&err) {
        Failure::Ignored(err.to_string())
    } else {
        Failure::Instantiation(err)
    }
}

/// Classify an error raised while exercising a primitive
pub(crate) fn run_failure(err: Error) -> Failure {
    if is_unsupported(&err) {
        Failure::Ignored(err.to_string())
    } else {
        Failure::Run(err)
    }
}

/// Error for a resolved algorithm of the wrong family
pub(crate) fn unexpected(unit: &TestUnit, algorithm: Algorithm) -> Failure {
    Failure::Other(Error::Other(format!(
        "{} resolved to {}",
        unit.name, algorithm
    )))
}

/// Log a computed value when result printing is on
pub(crate) fn print_result(enabled: bool, unit: &TestUnit, value: &[u8]) {
    if enabled {
        info!("{}: [{}]", unit.name, hex::encode(value));
    }
}
