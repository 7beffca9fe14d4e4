//! Registration table of test categories.
//!
//! Categories are listed by [`TestSource`]s at compile time instead of being
//! found by scanning. An entry without a factory stands for a shared base
//! that is never run on its own.


use crate::config::Settings;
use crate::runner::AlgorithmTest;
use crate::utilities::error::*;

use std::collections::HashSet;
use std::fmt::{Debug, Formatter};
use tracing::debug;

/// Builds a fresh category instance for one run
pub type TestFactory = fn(&Settings) -> Box<dyn AlgorithmTest>;

#[derive(Clone, Copy)]
pub struct Registration {
    pub name: &'static str,
    pub factory: Option<TestFactory>,
}

impl Debug for Registration {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registration")
            .field("name", &self.name)
            .field("instantiable", &self.is_instantiable())
            .finish()
    }
}

impl Registration {
    pub const fn concrete(name: &'static str, factory: TestFactory) -> Self {
        Self {
            name,
            factory: Some(factory),
        }
    }

    pub const fn abstract_base(name: &'static str) -> Self {
        Self {
            name,
            factory: None,
        }
    }

    pub fn is_instantiable(&self) -> bool {
        self.factory.is_some()
    }

    /// Build the category, `None` for abstract entries
    pub fn instantiate(&self, settings: &Settings) -> Option<Box<dyn AlgorithmTest>> {
        self.factory.map(|factory| factory(settings))
    }
}

/// A location categories are registered in
pub trait TestSource {
    fn name(&self) -> &str;

    fn registrations(&self) -> Result<Vec<Registration>>;
}

/// Categories bundled with this crate
#[derive(Default, Debug, Copy, Clone)]
pub struct BuiltinTests;

impl TestSource for BuiltinTests {
    fn name(&self) -> &str {
        "builtin"
    }

    fn registrations(&self) -> Result<Vec<Registration>> {
        Ok(crate::categories::REGISTRATIONS.to_vec())
    }
}

#[derive(Default)]
pub struct TestCatalog {
    sources: Vec<Box<dyn TestSource + Send + Sync>>,
}

impl TestCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog over the bundled categories only
    pub fn builtin() -> Self {
        Self::new().with_source(BuiltinTests)
    }

    pub fn with_source(mut self, source: impl TestSource + Send + Sync + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Instantiable registrations of every readable source.
    ///
    /// Sources that fail to list their entries are skipped. A name
    /// registered more than once is kept the first time only.
    pub fn discover(&self) -> Vec<Registration> {
        let mut names = HashSet::new();
        let mut found = vec![];
        for source in &self.sources {
            let registrations = match source.registrations() {
                Ok(registrations) => registrations,
                Err(err) => {
                    debug!("skipping test source {}: {}", source.name(), err);
                    continue;
                }
            };
            for registration in registrations {
                if registration.is_instantiable() && names.insert(registration.name) {
                    found.push(registration);
                }
            }
        }
        found
    }
}
