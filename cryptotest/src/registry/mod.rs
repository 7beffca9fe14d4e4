//! Provider registry the harness enumerates.
//!
//! The registry is a plain ordered list handed to every component that needs
//! it. Nothing in the harness mutates it once a run has started.


#[cfg(feature = "RingCryptoProvider")]
use crate::crypto::provider::RingCryptoProvider;
#[cfg(feature = "RustCryptoProvider")]
use crate::crypto::provider::RustCryptoProvider;
use crate::crypto::provider::CryptoProvider;

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One (type, algorithm) pair offered by a provider
#[derive(Default, Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Service {
    provider: String,
    service_type: String,
    algorithm: String,
    aliases: Vec<String>,
}

impl Service {
    pub fn new(
        provider: impl Into<String>,
        service_type: impl Into<String>,
        algorithm: impl Into<String>,
    ) -> Self {
        Self {
            provider: provider.into(),
            service_type: service_type.into(),
            algorithm: algorithm.into(),
            aliases: vec![],
        }
    }

    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases = aliases.into_iter().map(Into::into).collect();
        self
    }

    /// Name of the provider owning this service
    pub fn provider(&self) -> &str {
        &self.provider
    }

    pub fn service_type(&self) -> &str {
        &self.service_type
    }

    /// Canonical algorithm name
    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }
}

/// Provider is a named source of services
pub trait Provider: Send + Sync {
    /// Provider name
    fn name(&self) -> &str;

    /// Human readable description
    fn info(&self) -> &str;

    /// Services in the order the provider advertises them
    fn services(&self) -> Vec<Service>;

    /// Key/value description of the provider, printed when attribute output is on
    fn attributes(&self) -> Vec<(String, String)> {
        vec![("Provider.id name".to_string(), self.name().to_string())]
    }

    /// Primitives backing the advertised services, if the provider has any
    fn crypto(&self) -> Option<&dyn CryptoProvider> {
        None
    }
}

/// Provider made of declared data only: used for providers described in
/// configuration and for mocks
#[derive(Default, Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct StaticProvider {
    name: String,
    #[serde(default)]
    info: String,
    #[serde(default)]
    services: Vec<Service>,
}

impl StaticProvider {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_info(mut self, info: impl Into<String>) -> Self {
        self.info = info.into();
        self
    }

    /// Add a service owned by this provider, `aliases` may be empty
    pub fn with_service(mut self, service_type: &str, algorithm: &str, aliases: &[&str]) -> Self {
        let service = Service::new(self.name.as_str(), service_type, algorithm)
            .with_aliases(aliases.iter().copied());
        self.services.push(service);
        self
    }
}

impl Provider for StaticProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn info(&self) -> &str {
        &self.info
    }

    fn services(&self) -> Vec<Service> {
        self.services.clone()
    }
}

/// Ordered set of registered providers
#[derive(Default, Clone)]
pub struct ProviderRegistry {
    providers: Vec<Arc<dyn Provider>>,
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.providers.iter().map(|p| p.name()))
            .finish()
    }
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every backend compiled into this build
    pub fn installed() -> Self {
        #[allow(unused_mut)]
        let mut registry = Self::new();
        #[cfg(feature = "RustCryptoProvider")]
        registry.register(Arc::new(RustCryptoProvider::default()));
        #[cfg(feature = "RingCryptoProvider")]
        registry.register(Arc::new(RingCryptoProvider::default()));
        registry
    }

    pub fn with_provider(mut self, provider: impl Provider + 'static) -> Self {
        self.register(Arc::new(provider));
        self
    }

    pub fn register(&mut self, provider: Arc<dyn Provider>) {
        self.providers.push(provider);
    }

    pub fn providers(&self) -> &[Arc<dyn Provider>] {
        &self.providers
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn Provider>> {
        self.providers.iter().find(|p| p.name() == name)
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}
