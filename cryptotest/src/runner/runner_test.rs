use super::*;
use crate::config::{CategoryFilter, SettingsBuilder};
use crate::registry::StaticProvider;
use crate::result::State;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

type Outcome = fn(&TestUnit) -> std::result::Result<(), Failure>;

struct MockTest {
    part: &'static str,
    allow: Option<&'static str>,
    exclude: Option<&'static str>,
    outcome: Outcome,
    calls: Arc<AtomicUsize>,
}

impl MockTest {
    fn new(part: &'static str, outcome: Outcome) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                part,
                allow: None,
                exclude: None,
                outcome,
                calls: Arc::clone(&calls),
            },
            calls,
        )
    }
}

impl AlgorithmTest for MockTest {
    fn tested_part(&self) -> &str {
        self.part
    }

    fn algorithm_exclude_list(&self) -> Option<&str> {
        self.exclude
    }

    fn algorithm_allow_list(&self) -> Option<&str> {
        self.allow
    }

    fn check_algorithm(&self, unit: &TestUnit) -> std::result::Result<(), Failure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        (self.outcome)(unit)
    }
}

fn pass(_: &TestUnit) -> std::result::Result<(), Failure> {
    Ok(())
}

fn run_failure(unit: &TestUnit) -> std::result::Result<(), Failure> {
    Err(Failure::run(format!("cannot use {}", unit.name)))
}

fn cipher_registry() -> ProviderRegistry {
    ProviderRegistry::new().with_provider(
        StaticProvider::new("Mock").with_service("Cipher", "AES", &["AES-1", "AES-2"]),
    )
}

fn mixed_registry() -> ProviderRegistry {
    ProviderRegistry::new()
        .with_provider(
            StaticProvider::new("First")
                .with_service("Cipher", "AES", &["AES-1"])
                .with_service("Mac", "HmacSHA1", &["HMAC-SHA1"]),
        )
        .with_provider(StaticProvider::new("Second").with_service("Cipher", "DES", &[]))
}

fn runner(test: MockTest, registry: &ProviderRegistry, settings: &Settings) -> AlgorithmRunner {
    AlgorithmRunner::new(Box::new(test), registry, settings).expect("valid filters")
}

#[test]
fn test_checks_every_alias() -> Result<()> {
    let (test, calls) = MockTest::new("Cipher", pass);
    let r = runner(test, &cipher_registry(), &Settings::default());
    let result = r.run();

    assert_eq!(calls.load(Ordering::SeqCst), 3);
    assert!(result.is_passed());
    assert_eq!(result.subtests(), 3);
    assert_eq!(result.explanation(), "All Cipher passed");
    assert_eq!(result.test(), "CipherTests");
    let stats = result.stats().copied().unwrap_or_default();
    assert_eq!((stats.seen, stats.executed, stats.passed), (3, 3, 3));
    Ok(())
}

#[test]
fn test_checks_canonical_name_only_without_aliases() -> Result<()> {
    let (test, calls) = MockTest::new("Cipher", pass);
    let settings = SettingsBuilder::new().with_test_aliases(false).build();
    let result = runner(test, &cipher_registry(), &settings).run();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(result.seen(), Some(1));
    Ok(())
}

#[test]
fn test_seen_counts_every_unit() -> Result<()> {
    let registry = mixed_registry();
    let (cipher, cipher_calls) = MockTest::new("Cipher", pass);
    let (mac, mac_calls) = MockTest::new("Mac", pass);
    let cipher_result = runner(cipher, &registry, &Settings::default()).run();
    let mac_result = runner(mac, &registry, &Settings::default()).run();

    assert_eq!(cipher_calls.load(Ordering::SeqCst), 3);
    assert_eq!(mac_calls.load(Ordering::SeqCst), 2);
    assert_eq!(cipher_result.seen(), Some(5));
    assert_eq!(mac_result.seen(), Some(5));
    Ok(())
}

#[test]
fn test_run_failures_are_reported() -> Result<()> {
    let (test, _) = MockTest::new("Cipher", run_failure);
    let result = runner(test, &cipher_registry(), &Settings::default()).run();

    assert_eq!(result.state(), State::Failed);
    let stats = result.stats().copied().unwrap_or_default();
    assert_eq!(result.failures(), stats.executed);
    assert_eq!(result.failures(), 3);
    assert!(result
        .explanation()
        .starts_with("3 Cipher failed\n** failed runs: 3 **\n"));
    assert!(result.explanation().contains("** failed inits: 0 **"));
    assert!(result.explanation().contains("** error runs: 0 **"));
    for name in ["AES~AES\t", "AES~AES-1\t", "AES~AES-2\t"] {
        assert_eq!(result.explanation().matches(name).count(), 1, "{name}");
    }
    assert!(result.explanation().contains("failed to use: cannot use AES-2"));
    Ok(())
}

#[test]
fn test_ignored_units_are_not_counted() -> Result<()> {
    let (test, calls) = MockTest::new("Cipher", |unit| {
        if unit.is_alias() {
            Err(Failure::ignored("aliases are not meaningful"))
        } else {
            Ok(())
        }
    });
    let result = runner(test, &cipher_registry(), &Settings::default()).run();

    assert_eq!(calls.load(Ordering::SeqCst), 3);
    assert!(result.is_passed());
    assert_eq!(result.failures(), 0);
    let stats = result.stats().copied().unwrap_or_default();
    assert_eq!(stats.ignored, 2);
    assert_eq!(stats.passed, 1);
    assert_eq!(
        result
            .log()
            .iter()
            .filter(|line| *line == "Ignored: aliases are not meaningful")
            .count(),
        2
    );
    Ok(())
}

#[test]
fn test_failure_buckets() -> Result<()> {
    let (test, _) = MockTest::new("Cipher", |unit| match unit.name.as_str() {
        "AES" => Err(Failure::Instantiation(Error::NoSuchAlgorithm("AES".into()))),
        "AES-1" => Err(Failure::Other(Error::Other("unexpected".into()))),
        _ => panic!("check exploded"),
    });
    let result = runner(test, &cipher_registry(), &Settings::default()).run();

    assert!(result.is_failed());
    assert_eq!(result.failures(), 3);
    let explanation = result.explanation();
    assert!(explanation.contains("** failed runs: 0 **"));
    assert!(explanation.contains("** failed inits: 1 **"));
    assert!(explanation.contains("** error runs: 2 **"));
    assert!(explanation.contains("panicked: check exploded"));
    assert!(explanation.contains("no such algorithm: AES"));
    Ok(())
}

#[test]
fn test_runner_debug_shows_compiled_filters() {
    let (mut test, calls) = MockTest::new("Cipher", pass);
    test.exclude = Some("AES-2");
    let r = runner(test, &cipher_registry(), &Settings::default());
    let debug = format!("{r:?}");
    assert!(debug.contains("CipherTests"));
    assert!(debug.contains("^(?:AES-2)$"));

    // nothing runs until the runner is consumed
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    let result = r.run();
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert!(result.is_passed());
}

#[test]
fn test_category_filters() -> Result<()> {
    let (mut test, calls) = MockTest::new("Cipher", pass);
    test.exclude = Some("AES-.*");
    let result = runner(test, &mixed_registry(), &Settings::default()).run();
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    let stats = result.stats().copied().unwrap_or_default();
    assert_eq!((stats.executed, stats.filtered), (2, 1));

    // the allow list has to match the whole name
    let (mut test, calls) = MockTest::new("Cipher", pass);
    test.allow = Some("AES");
    runner(test, &mixed_registry(), &Settings::default()).run();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    Ok(())
}

#[test]
fn test_configured_filter_overrides_category() -> Result<()> {
    let (mut test, calls) = MockTest::new("Cipher", pass);
    test.allow = Some("AES");
    let settings = SettingsBuilder::new()
        .with_category_filter(
            "CipherTests",
            CategoryFilter {
                include: Some("DES|AES-1".to_string()),
                exclude: None,
            },
        )
        .build();
    runner(test, &mixed_registry(), &settings).run();
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    Ok(())
}

#[test]
fn test_invalid_filter() {
    let (mut test, _) = MockTest::new("Cipher", pass);
    test.exclude = Some("[unclosed");
    let err = AlgorithmRunner::new(Box::new(test), &cipher_registry(), &Settings::default());
    assert!(matches!(err, Err(Error::InvalidAlgorithmFilter { .. })));
}
