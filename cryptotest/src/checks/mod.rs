//! Whole-provider-set checks that bypass the per-unit runner.


use crate::config::{PresenceLists, Settings};
use crate::enumerator::create_names;
use crate::registry::ProviderRegistry;
use crate::result::TestResult;

use std::collections::BTreeSet;
use tracing::{info, warn};

/// Render a list the way the report prints name lists
fn listed(names: &[String]) -> String {
    format!("[{}]", names.join(", "))
}

/// Tracks which required names were met and which forbidden names appeared
#[derive(Debug)]
struct Presence<'a> {
    lists: &'a PresenceLists,
    missing: Vec<String>,
    found_bad: Vec<String>,
}

impl<'a> Presence<'a> {
    fn new(lists: &'a PresenceLists) -> Self {
        Self {
            lists,
            missing: lists.must_be.clone(),
            found_bad: vec![],
        }
    }

    /// Record `name`; `owner` is what gets reported when the name is forbidden
    fn hit(&mut self, name: &str, owner: &str, log: &mut Vec<String>, indent: &str) {
        if let Some(position) = self.missing.iter().position(|m| m == name) {
            self.missing.remove(position);
            log.push(format!("{indent}test hit: {name} was requested"));
        }
        if self.lists.must_not_be.iter().any(|m| m == name) {
            log.push(format!("{indent}test hit: {name} was supposed to be missing"));
            self.found_bad.push(owner.to_string());
        }
    }

    fn failures(&self) -> usize {
        self.missing.len() + self.found_bad.len()
    }

    fn explain(&self, what: &str, checked: usize) -> String {
        let mut explanation = format!("Checked {checked} {what}\n");
        if self.found_bad.is_empty() {
            explanation.push_str(&format!(
                "no bad {} appeared (from total of {}: {})\n",
                what,
                self.lists.must_not_be.len(),
                listed(&self.lists.must_not_be)
            ));
        } else {
            explanation.push_str(&format!(
                "{} bad {} (namely: {}) appeared (from total of {}: {})\n",
                self.found_bad.len(),
                what,
                listed(&self.found_bad),
                self.lists.must_not_be.len(),
                listed(&self.lists.must_not_be)
            ));
        }
        if self.missing.is_empty() {
            explanation.push_str(&format!(
                "all expected {} appeared (from total of {}: {})\n",
                what,
                self.lists.must_be.len(),
                listed(&self.lists.must_be)
            ));
        } else {
            explanation.push_str(&format!(
                "{} expected {} (namely: {}) did not appear (from total of {}: {})\n",
                self.missing.len(),
                what,
                listed(&self.missing),
                self.lists.must_be.len(),
                listed(&self.lists.must_be)
            ));
        }
        explanation.push_str(&format!("failed: {} {}", self.failures(), what));
        explanation
    }
}

/// Verifies the set of registered providers against the configured
/// must-be and must-not-be name lists
#[derive(Debug, Clone)]
pub struct TestProviders {
    lists: PresenceLists,
    print_atts: bool,
}

impl TestProviders {
    pub const NAME: &'static str = "TestProviders";

    pub fn new(settings: &Settings) -> Self {
        Self {
            lists: settings.providers.clone(),
            print_atts: settings.verbosity.print_atts,
        }
    }

    pub fn run(&self, registry: &ProviderRegistry) -> TestResult {
        info!("running: {}", Self::NAME);
        let mut presence = Presence::new(&self.lists);
        let mut log = vec![];
        let mut seen = 0;
        for provider in registry.providers() {
            seen += 1;
            log.push(format!("{}) {}", seen, provider.name()));
            presence.hit(provider.name(), provider.name(), &mut log, "");
            if self.print_atts {
                log.push("\t**************atts**************".to_string());
                for (key, value) in provider.attributes() {
                    log.push(format!("\t{key}={value}"));
                }
            }
        }

        let explanation = presence.explain("providers", seen);
        let result = if presence.failures() == 0 {
            TestResult::pass(explanation, Self::NAME, seen)
        } else {
            TestResult::fail(explanation, Self::NAME, seen, presence.failures())
        };
        result.with_log(log)
    }
}

/// Outcome of the service inventory
#[derive(Debug, Clone)]
pub struct ServiceInventory {
    pub result: TestResult,
    /// Service types no category claims
    pub uncovered: BTreeSet<String>,
    /// Units contributed by the uncovered types
    pub uncovered_units: usize,
}

/// Verifies every registered algorithm name and alias against the
/// configured must-be and must-not-be lists, and reports service types no
/// category covers
#[derive(Debug, Clone)]
pub struct TestServices {
    lists: PresenceLists,
    test_aliases: bool,
    print_aliases: bool,
}

impl TestServices {
    pub const NAME: &'static str = "TestServices";

    pub fn new(settings: &Settings) -> Self {
        Self {
            lists: settings.services.clone(),
            test_aliases: settings.test_aliases,
            print_aliases: settings.verbosity.print_aliases,
        }
    }

    /// Run the inventory; `covered` lists the service types of the
    /// discovered categories
    pub fn run<'a>(
        &self,
        registry: &ProviderRegistry,
        covered: impl IntoIterator<Item = &'a str>,
    ) -> ServiceInventory {
        info!("running: {}", Self::NAME);
        let mut presence = Presence::new(&self.lists);
        let mut log = vec![];
        let mut types = BTreeSet::new();
        let mut units_per_type = std::collections::BTreeMap::<String, usize>::new();
        let mut seen = 0;

        for provider in registry.providers() {
            log.push(provider.name().to_string());
            for service in provider.services() {
                seen += 1;
                types.insert(service.service_type().to_string());
                log.push(format!(
                    "\t{}) {} ({})",
                    seen,
                    service.algorithm(),
                    service.service_type()
                ));
                presence.hit(service.algorithm(), service.algorithm(), &mut log, "\t");
                if self.test_aliases {
                    for alias in service.aliases() {
                        seen += 1;
                        if self.print_aliases {
                            log.push(format!(
                                "\t\t{}) {} ({})",
                                seen,
                                alias,
                                service.service_type()
                            ));
                        }
                        presence.hit(alias, service.algorithm(), &mut log, "\t\t");
                    }
                }
                *units_per_type
                    .entry(service.service_type().to_string())
                    .or_default() += create_names(&service, self.test_aliases).len();
            }
        }

        log.push(format!("Known types size: {}", types.len()));
        for part in covered {
            types.remove(part);
        }
        let uncovered_units = types
            .iter()
            .filter_map(|t| units_per_type.get(t))
            .sum();
        if !types.is_empty() {
            warn!(
                "{} service types are not covered by any category: {:?}",
                types.len(),
                types
            );
        }
        log.push(format!("Missing to test types: {types:?}"));

        let explanation = presence.explain("services", seen);
        let result = if presence.failures() == 0 {
            TestResult::pass(explanation, Self::NAME, seen)
        } else {
            TestResult::fail(explanation, Self::NAME, seen, presence.failures())
        };
        ServiceInventory {
            result: result.with_log(log),
            uncovered: types,
            uncovered_units,
        }
    }
}
