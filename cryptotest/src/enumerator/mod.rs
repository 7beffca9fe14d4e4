//! Flattens a provider registry into the ordered stream of test units.


use crate::registry::{Provider, ProviderRegistry, Service};

use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// The atomic thing a category exercises: one name of one service of one
/// provider
#[derive(Clone)]
pub struct TestUnit {
    pub provider: Arc<dyn Provider>,
    pub service: Service,
    pub name: String,
}

impl Debug for TestUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestUnit")
            .field("provider", &self.provider.name())
            .field("service", &self.service)
            .field("name", &self.name)
            .finish()
    }
}

impl TestUnit {
    pub fn service_type(&self) -> &str {
        self.service.service_type()
    }

    pub fn algorithm(&self) -> &str {
        self.service.algorithm()
    }

    /// Whether the unit addresses the service by an alias
    pub fn is_alias(&self) -> bool {
        self.name != self.service.algorithm()
    }
}

/// Names a service is exercised under: the canonical name first, then every
/// alias when `test_aliases` is set
pub fn create_names(service: &Service, test_aliases: bool) -> Vec<String> {
    let mut names = vec![service.algorithm().to_string()];
    if test_aliases {
        names.extend(service.aliases().iter().cloned());
    }
    names
}

/// Every (provider, service, name) combination of `registry`, in provider
/// order, then service order, then name order
pub fn test_units(registry: &ProviderRegistry, test_aliases: bool) -> Vec<TestUnit> {
    let mut units = vec![];
    for provider in registry.providers() {
        for service in provider.services() {
            for name in create_names(&service, test_aliases) {
                units.push(TestUnit {
                    provider: Arc::clone(provider),
                    service: service.clone(),
                    name,
                });
            }
        }
    }
    units
}

/// Report line identifying the `counter`th unit of a run
pub fn generate_title(counter: usize, unit: &TestUnit) -> String {
    format!(
        "{})\t{}: \t{}~{}\t ({})",
        counter,
        unit.provider.name(),
        unit.algorithm(),
        unit.name,
        unit.service_type()
    )
}
