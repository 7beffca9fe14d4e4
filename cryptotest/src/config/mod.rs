//! Harness settings.
//!
//! Settings come from an optional TOML file, are adjusted by the
//! `CRYPTOTESTS_*` environment variables and finally by command line flags.

#[cfg(test)]
mod config_test;

use crate::registry::StaticProvider;
use crate::utilities::error::*;

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

pub const ENV_TEST_ALIASES: &str = "CRYPTOTESTS_TEST_ALIASES";
pub const ENV_PRINT_STACKS: &str = "CRYPTOTESTS_PRINT_STACKS";
pub const ENV_PRINT_RESULTS: &str = "CRYPTOTESTS_PRINT_RESULTS";

/// Algorithm names that must never be registered by default
pub const DEFAULT_FORBIDDEN_SERVICES: [&str; 2] = ["NIST P-192", "1.2.840.10045.3.1.1"];

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerbositySettings {
    /// Print provider attributes in the provider-set check
    pub print_atts: bool,
    /// Print the alias list of every service in the service-inventory check
    pub print_aliases: bool,
    /// Print the values computed by the category checks
    pub print_results: bool,
    /// Log the full error chain of every failing unit as it happens
    pub print_stacks: bool,
}

impl Default for VerbositySettings {
    fn default() -> Self {
        Self {
            print_atts: true,
            print_aliases: true,
            print_results: false,
            print_stacks: false,
        }
    }
}

/// Names that must, or must not, be present
#[derive(Default, Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresenceLists {
    pub must_be: Vec<String>,
    pub must_not_be: Vec<String>,
}

/// Full-match regular expressions narrowing the names one category executes
#[derive(Default, Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryFilter {
    pub include: Option<String>,
    pub exclude: Option<String>,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Exercise every alias of a service, not only its canonical name
    pub test_aliases: bool,
    /// Run categories on scoped threads
    pub parallel: bool,
    pub verbosity: VerbositySettings,
    pub providers: PresenceLists,
    pub services: PresenceLists,
    /// Per-category filters keyed by category name, e.g. `CipherTests`
    pub categories: BTreeMap<String, CategoryFilter>,
    /// Declared-only providers added to the installed registry
    pub extra_providers: Vec<StaticProvider>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            test_aliases: true,
            parallel: false,
            verbosity: VerbositySettings::default(),
            providers: PresenceLists::default(),
            services: PresenceLists {
                must_be: vec![],
                must_not_be: DEFAULT_FORBIDDEN_SERVICES
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            },
            categories: BTreeMap::new(),
            extra_providers: vec![],
        }
    }
}

impl Settings {
    /// Load settings from a TOML file; absent keys keep their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|err| Error::Settings {
            path: path.display().to_string(),
            source: IoError(err),
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let settings: Self = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check that every configured filter compiles
    pub fn validate(&self) -> Result<()> {
        for filter in self.categories.values() {
            for pattern in filter.include.iter().chain(filter.exclude.iter()) {
                compile_filter(pattern)?;
            }
        }
        Ok(())
    }

    /// Apply the `CRYPTOTESTS_*` overrides from the process environment
    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply the `CRYPTOTESTS_*` overrides resolved through `lookup`
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        self.test_aliases = parse_bool(lookup(ENV_TEST_ALIASES).as_deref(), self.test_aliases);
        self.verbosity.print_stacks = parse_bool(
            lookup(ENV_PRINT_STACKS).as_deref(),
            self.verbosity.print_stacks,
        );
        self.verbosity.print_results = parse_bool(
            lookup(ENV_PRINT_RESULTS).as_deref(),
            self.verbosity.print_results,
        );
    }

    pub fn filter(&self, category: &str) -> Option<&CategoryFilter> {
        self.categories.get(category)
    }
}

/// `1`/`true` and `0`/`false`, case-insensitive; anything else keeps `default`
pub fn parse_bool(value: Option<&str>, default: bool) -> bool {
    match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        Some("1") | Some("true") => true,
        Some("0") | Some("false") => false,
        _ => default,
    }
}

/// Compile `pattern` so that it has to match a whole name
pub fn compile_filter(pattern: &str) -> Result<Regex> {
    Regex::new(&format!("^(?:{pattern})$")).map_err(|source| Error::InvalidAlgorithmFilter {
        pattern: pattern.to_string(),
        source,
    })
}

#[derive(Default, Debug, Clone)]
pub struct SettingsBuilder {
    settings: Settings,
}

impl SettingsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_test_aliases(mut self, test_aliases: bool) -> Self {
        self.settings.test_aliases = test_aliases;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.settings.parallel = parallel;
        self
    }

    pub fn with_print_stacks(mut self, print_stacks: bool) -> Self {
        self.settings.verbosity.print_stacks = print_stacks;
        self
    }

    pub fn with_print_results(mut self, print_results: bool) -> Self {
        self.settings.verbosity.print_results = print_results;
        self
    }

    pub fn with_print_atts(mut self, print_atts: bool) -> Self {
        self.settings.verbosity.print_atts = print_atts;
        self
    }

    pub fn with_print_aliases(mut self, print_aliases: bool) -> Self {
        self.settings.verbosity.print_aliases = print_aliases;
        self
    }

    pub fn with_required_provider(mut self, name: impl Into<String>) -> Self {
        self.settings.providers.must_be.push(name.into());
        self
    }

    pub fn with_forbidden_provider(mut self, name: impl Into<String>) -> Self {
        self.settings.providers.must_not_be.push(name.into());
        self
    }

    pub fn with_required_service(mut self, name: impl Into<String>) -> Self {
        self.settings.services.must_be.push(name.into());
        self
    }

    pub fn with_forbidden_service(mut self, name: impl Into<String>) -> Self {
        self.settings.services.must_not_be.push(name.into());
        self
    }

    pub fn with_category_filter(
        mut self,
        category: impl Into<String>,
        filter: CategoryFilter,
    ) -> Self {
        self.settings.categories.insert(category.into(), filter);
        self
    }

    pub fn build(self) -> Settings {
        self.settings
    }
}
