//! CryptoProvider trait and the bundled implementations that back the
//! conformance run.

#[cfg(test)]
mod provider_test;

#[cfg(feature = "RingCryptoProvider")]
mod ring;
#[cfg(feature = "RingCryptoProvider")]
pub use self::ring::RingCryptoProvider;
#[cfg(feature = "RustCryptoProvider")]
mod rust;
#[cfg(feature = "RustCryptoProvider")]
pub use self::rust::RustCryptoProvider;

use crate::crypto::{algorithm::Algorithm, *};
use crate::registry::Service;

/// CryptoProvider trait specifies the cryptographic primitives a provider
/// implements, addressed by scheme
pub trait CryptoProvider: Send + Sync {
    /// Provider name, unique within a registry
    fn name(&self) -> &str;

    /// Human readable description
    fn info(&self) -> &str;

    /// Return supported algorithms, in the order they are advertised
    fn supported(&self) -> Vec<Algorithm>;

    /// Check whether the algorithm is supported or not
    fn supports(&self, algorithm: Algorithm) -> bool {
        self.supported().contains(&algorithm)
    }

    /// Derive Rand trait object based on the given scheme
    fn rand(&self, scheme: RandScheme) -> Result<&dyn Rand>;

    /// Derive Hash trait object based on the given scheme
    fn hash(&self, scheme: HashScheme) -> Result<&dyn Hash>;

    /// Derive Kdf trait object based on the given scheme
    fn kdf(&self, scheme: HashScheme) -> Result<&dyn Kdf>;

    /// Derive Aead trait object based on the given scheme
    fn aead(&self, scheme: AeadScheme) -> Result<&dyn Aead>;

    /// Derive Signature trait object based on the given scheme
    fn signature(&self, scheme: SignatureScheme) -> Result<&dyn Signature>;

    /// Derive Kem trait object based on the given scheme
    fn kem(&self, scheme: KemScheme) -> Result<&dyn Kem> {
        Err(Error::UnsupportedAlgorithm(
            scheme.to_string(),
            self.name().to_string(),
        ))
    }

    /// Resolve `name` (canonical name or alias) of the given service type to an
    /// algorithm this provider implements
    fn get_instance(&self, service_type: &str, name: &str) -> Result<Algorithm> {
        let algorithm = Algorithm::lookup(service_type, name)
            .ok_or_else(|| Error::NoSuchAlgorithm(format!("{name} ({service_type})")))?;
        if self.supports(algorithm) {
            Ok(algorithm)
        } else {
            Err(Error::UnsupportedAlgorithm(
                name.to_string(),
                self.name().to_string(),
            ))
        }
    }
}

/// Services advertised by a crypto provider, one per supported algorithm
pub fn services_of(crypto_provider: &dyn CryptoProvider) -> Vec<Service> {
    crypto_provider
        .supported()
        .iter()
        .map(|algorithm| algorithm.service(crypto_provider.name()))
        .collect()
}

/// Property style attributes of a crypto provider: identity entries followed by
/// one entry per service and alias
pub fn attributes_of(crypto_provider: &dyn CryptoProvider) -> Vec<(String, String)> {
    let name = crypto_provider.name();
    let mut attributes = vec![
        ("Provider.id name".to_string(), name.to_string()),
        (
            "Provider.id info".to_string(),
            crypto_provider.info().to_string(),
        ),
    ];
    for service in services_of(crypto_provider) {
        attributes.push((
            format!("{}.{}", service.service_type(), service.algorithm()),
            name.to_string(),
        ));
        for alias in service.aliases() {
            attributes.push((
                format!("Alg.Alias.{}.{}", service.service_type(), alias),
                service.algorithm().to_string(),
            ));
        }
    }
    attributes
}
