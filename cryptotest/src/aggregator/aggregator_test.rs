use super::*;
use crate::config::{CategoryFilter, SettingsBuilder};
use crate::discovery::TestSource;
use crate::enumerator::TestUnit;
use crate::registry::StaticProvider;
use crate::runner::AlgorithmTest;

struct Typed {
    part: &'static str,
    fail: bool,
}

impl AlgorithmTest for Typed {
    fn tested_part(&self) -> &str {
        self.part
    }

    fn check_algorithm(&self, unit: &TestUnit) -> std::result::Result<(), Failure> {
        if self.fail {
            Err(Failure::run(format!("{} is broken", unit.name)))
        } else {
            Ok(())
        }
    }
}

fn cipher(_: &Settings) -> Box<dyn AlgorithmTest> {
    Box::new(Typed {
        part: "Cipher",
        fail: false,
    })
}

fn mac(_: &Settings) -> Box<dyn AlgorithmTest> {
    Box::new(Typed {
        part: "Mac",
        fail: false,
    })
}

fn broken_mac(_: &Settings) -> Box<dyn AlgorithmTest> {
    Box::new(Typed {
        part: "Mac",
        fail: true,
    })
}

struct Split {
    name: &'static str,
    allow: Option<&'static str>,
    exclude: Option<&'static str>,
}

impl AlgorithmTest for Split {
    fn tested_part(&self) -> &str {
        "Mac"
    }

    fn name(&self) -> String {
        self.name.to_string()
    }

    fn algorithm_exclude_list(&self) -> Option<&str> {
        self.exclude
    }

    fn algorithm_allow_list(&self) -> Option<&str> {
        self.allow
    }

    fn check_algorithm(&self, _: &TestUnit) -> std::result::Result<(), Failure> {
        Ok(())
    }
}

fn mac_without_alias(_: &Settings) -> Box<dyn AlgorithmTest> {
    Box::new(Split {
        name: "MacTests",
        allow: None,
        exclude: Some("HMAC-SHA1"),
    })
}

fn mac_alias_only(_: &Settings) -> Box<dyn AlgorithmTest> {
    Box::new(Split {
        name: "MacAliasTests",
        allow: Some("HMAC-SHA1"),
        exclude: None,
    })
}

struct Table(Vec<Registration>);

impl TestSource for Table {
    fn name(&self) -> &str {
        "table"
    }

    fn registrations(&self) -> Result<Vec<Registration>> {
        Ok(self.0.clone())
    }
}

fn catalog(registrations: Vec<Registration>) -> TestCatalog {
    TestCatalog::new().with_source(Table(registrations))
}

fn registry() -> ProviderRegistry {
    ProviderRegistry::new()
        .with_provider(
            StaticProvider::new("First")
                .with_service("Cipher", "AES", &["AES-1", "AES-2"])
                .with_service("Mac", "HmacSHA1", &["HMAC-SHA1"]),
        )
        .with_provider(StaticProvider::new("Second").with_service("Cipher", "DES", &[]))
}

fn run(
    settings: Settings,
    registrations: Vec<Registration>,
    registry: ProviderRegistry,
) -> Result<Report> {
    CryptoTest::new(registry, settings)
        .with_catalog(catalog(registrations))
        .run_all()
}

#[test]
fn test_run_all_passes() -> Result<()> {
    let report = run(
        Settings::default(),
        vec![
            Registration::concrete("CipherTests", cipher),
            Registration::concrete("MacTests", mac),
        ],
        registry(),
    )?;

    assert!(report.is_passed(), "{}", report.render());
    let names: Vec<&str> = report.results().iter().map(|r| r.test()).collect();
    assert_eq!(
        names,
        vec![
            "CipherTests",
            "MacTests",
            TestProviders::NAME,
            TestServices::NAME,
            CONSTANT_SERVICES,
            NO_ALGORITHM_MISSED,
        ]
    );
    assert_eq!(report.checks(), 6);
    assert_eq!(report.runs(), 6);
    assert_eq!(
        report.get(NO_ALGORITHM_MISSED).map(|r| r.explanation()),
        Some("Tested all 6 algorithms")
    );
    assert_eq!(report.get("CipherTests").and_then(|r| r.seen()), Some(6));
    assert_eq!(report.get("MacTests").and_then(|r| r.seen()), Some(6));
    assert!(report.render().ends_with("Test runs: 6; failed :0"));
    Ok(())
}

#[test]
fn test_uncovered_type_is_advisory() -> Result<()> {
    let report = run(
        Settings::default(),
        vec![Registration::concrete("CipherTests", cipher)],
        registry(),
    )?;

    assert!(report.is_passed(), "{}", report.render());
    let services = report.get(TestServices::NAME).map(|r| r.log().join("\n"));
    assert!(services.unwrap_or_default().contains("\"Mac\""));
    Ok(())
}

#[test]
fn test_type_split_across_categories() -> Result<()> {
    let report = run(
        Settings::default(),
        vec![
            Registration::concrete("CipherTests", cipher),
            Registration::concrete("MacTests", mac_without_alias),
            Registration::concrete("MacAliasTests", mac_alias_only),
        ],
        registry(),
    )?;

    assert!(report.is_passed(), "{}", report.render());
    assert_eq!(report.get("MacTests").map(|r| r.subtests()), Some(1));
    assert_eq!(report.get("MacAliasTests").map(|r| r.subtests()), Some(1));
    assert_eq!(
        report.get(NO_ALGORITHM_MISSED).map(|r| r.explanation()),
        Some("Tested all 6 algorithms")
    );
    Ok(())
}

#[test]
fn test_filtered_units_are_missed() -> Result<()> {
    let settings = SettingsBuilder::new()
        .with_category_filter(
            "CipherTests",
            CategoryFilter {
                include: None,
                exclude: Some(".*".to_string()),
            },
        )
        .build();
    let report = run(
        settings,
        vec![
            Registration::concrete("CipherTests", cipher),
            Registration::concrete("MacTests", mac),
        ],
        registry(),
    )?;

    assert_eq!(report.get("CipherTests").map(|r| r.is_passed()), Some(true));
    let missed = report.get(NO_ALGORITHM_MISSED);
    assert_eq!(missed.map(|r| r.is_failed()), Some(true));
    assert_eq!(
        missed.map(|r| r.explanation()),
        Some("Some algorithms missed! Checked 2 from 6")
    );
    assert!(!report.is_passed());
    Ok(())
}

#[test]
fn test_duplicate_category_breaks_the_count() -> Result<()> {
    let report = run(
        Settings::default(),
        vec![
            Registration::concrete("CipherTests", cipher),
            Registration::concrete("MacTests", mac),
            Registration::concrete("MoreMacTests", mac),
        ],
        registry(),
    )?;

    // two categories claim the Mac units
    let missed = report.get(NO_ALGORITHM_MISSED);
    assert_eq!(missed.map(|r| r.is_failed()), Some(true));
    assert_eq!(
        missed.map(|r| r.explanation()),
        Some("Some algorithms missed! Checked 8 from 6")
    );
    assert_eq!(report.failed(), 1);
    Ok(())
}

#[test]
fn test_failures_are_counted_not_fatal() -> Result<()> {
    let settings = SettingsBuilder::new().with_forbidden_provider("Second").build();
    let report = run(
        settings,
        vec![
            Registration::concrete("CipherTests", cipher),
            Registration::concrete("MacTests", broken_mac),
        ],
        registry(),
    )?;

    assert_eq!(report.failed(), 2);
    assert!(!report.is_passed());
    assert_eq!(report.get("MacTests").map(|r| r.failures()), Some(2));
    assert_eq!(report.get(TestProviders::NAME).map(|r| r.is_failed()), Some(true));
    assert_eq!(report.get("CipherTests").map(|r| r.is_passed()), Some(true));
    Ok(())
}

#[test]
fn test_invalid_filter_fails_only_its_category() -> Result<()> {
    let settings = SettingsBuilder::new()
        .with_category_filter(
            "MacTests",
            CategoryFilter {
                include: Some("(".to_string()),
                exclude: None,
            },
        )
        .build();
    let report = run(
        settings,
        vec![
            Registration::concrete("CipherTests", cipher),
            Registration::concrete("MacTests", mac),
        ],
        registry(),
    )?;

    assert_eq!(report.get("MacTests").map(|r| r.is_failed()), Some(true));
    assert_eq!(report.get("CipherTests").map(|r| r.is_passed()), Some(true));
    Ok(())
}

#[test]
fn test_constant_services() {
    assert!(constant_services(&[6, 6, 6]).is_passed());
    assert!(constant_services(&[]).is_passed());
    let changed = constant_services(&[6, 7]);
    assert!(changed.is_failed());
    assert_eq!(changed.failures(), 1);
}

#[test]
fn test_no_categories() -> Result<()> {
    let report = run(Settings::default(), vec![], registry())?;
    assert_eq!(
        report.get(NO_ALGORITHM_MISSED).map(|r| r.explanation()),
        Some("Tested all 6 algorithms")
    );
    assert!(report.is_passed());
    Ok(())
}

#[test]
fn test_only() {
    let crypto_test = CryptoTest::new(registry(), Settings::default())
        .with_catalog(catalog(vec![
            Registration::concrete("CipherTests", cipher),
            Registration::concrete("MacTests", mac),
        ]))
        .with_only(vec!["MacTests".to_string()]);
    let names: Vec<&str> = crypto_test.categories().iter().map(|r| r.name).collect();
    assert_eq!(names, vec!["MacTests"]);
}

#[test]
fn test_parallel_matches_sequential() -> Result<()> {
    let registrations = vec![
        Registration::concrete("CipherTests", cipher),
        Registration::concrete("MacTests", broken_mac),
    ];
    let sequential = run(Settings::default(), registrations.clone(), registry())?;
    let parallel = run(
        SettingsBuilder::new().with_parallel(true).build(),
        registrations,
        registry(),
    )?;

    let states = |report: &Report| -> Vec<String> {
        report.results().iter().map(|r| r.to_string()).collect()
    };
    assert_eq!(states(&sequential), states(&parallel));
    assert_eq!(sequential.checks(), parallel.checks());
    Ok(())
}

#[test]
fn test_report_json() -> Result<()> {
    let report = run(
        Settings::default(),
        vec![Registration::concrete("CipherTests", cipher)],
        registry(),
    )?;
    let value: serde_json::Value = serde_json::from_str(&report.to_json()?)?;
    assert_eq!(value["failed"], 0);
    assert_eq!(value["results"][0]["test"], "CipherTests");
    assert_eq!(value["results"][0]["stats"]["executed"], 4);
    Ok(())
}

#[cfg(feature = "RustCryptoProvider")]
#[test]
fn test_installed_providers_pass() -> Result<()> {
    let report = CryptoTest::new(ProviderRegistry::installed(), Settings::default()).run_all()?;
    assert!(report.is_passed(), "{}", report.render());
    assert!(report.checks() > 0);
    Ok(())
}

#[cfg(feature = "RustCryptoProvider")]
#[test]
fn test_declared_provider_is_ignored() -> Result<()> {
    let registry = ProviderRegistry::installed().with_provider(
        StaticProvider::new("Declared").with_service("MessageDigest", "SHA-256", &[]),
    );
    let report = CryptoTest::new(registry, Settings::default()).run_all()?;
    assert!(report.is_passed(), "{}", report.render());
    let digests = report.get("MessageDigestTests").and_then(|r| r.stats().copied());
    assert_eq!(digests.map(|s| s.ignored), Some(1));
    Ok(())
}
