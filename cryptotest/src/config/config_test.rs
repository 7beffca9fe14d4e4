use super::*;

use std::collections::HashMap;
use std::io::Write;

#[test]
fn test_default_settings() {
    let settings = Settings::default();
    assert!(settings.test_aliases);
    assert!(!settings.parallel);
    assert!(settings.verbosity.print_atts);
    assert!(settings.verbosity.print_aliases);
    assert!(!settings.verbosity.print_results);
    assert!(!settings.verbosity.print_stacks);
    assert_eq!(
        settings.services.must_not_be,
        vec!["NIST P-192", "1.2.840.10045.3.1.1"]
    );
    assert!(settings.providers.must_be.is_empty());
}

#[test]
fn test_parse_bool() {
    assert!(parse_bool(Some("1"), false));
    assert!(parse_bool(Some("TRUE"), false));
    assert!(!parse_bool(Some("0"), true));
    assert!(!parse_bool(Some("False"), true));
    assert!(parse_bool(Some("yes"), true));
    assert!(!parse_bool(Some("yes"), false));
    assert!(parse_bool(None, true));
}

#[test]
fn test_apply_overrides() {
    let env: HashMap<&str, &str> = [
        (ENV_TEST_ALIASES, "false"),
        (ENV_PRINT_STACKS, "1"),
        (ENV_PRINT_RESULTS, "maybe"),
    ]
    .into_iter()
    .collect();

    let mut settings = Settings::default();
    settings.apply_overrides(|key| env.get(key).map(|v| v.to_string()));
    assert!(!settings.test_aliases);
    assert!(settings.verbosity.print_stacks);
    assert!(!settings.verbosity.print_results);
}

#[test]
fn test_from_toml() -> Result<()> {
    let settings = Settings::from_toml(
        r#"
test_aliases = false
parallel = true

[verbosity]
print_results = true

[providers]
must_be = ["RustCrypto"]
must_not_be = ["Legacy"]

[categories.CipherTests]
include = "AES.*"

[[extra_providers]]
name = "Declared"
services = [{ provider = "Declared", service_type = "Mac", algorithm = "HmacMD5", aliases = [] }]
"#,
    )?;

    assert!(!settings.test_aliases);
    assert!(settings.parallel);
    assert!(settings.verbosity.print_results);
    assert!(settings.verbosity.print_atts);
    assert_eq!(settings.providers.must_be, vec!["RustCrypto"]);
    assert_eq!(settings.services.must_not_be.len(), 2);
    assert_eq!(
        settings.filter("CipherTests").and_then(|f| f.include.as_deref()),
        Some("AES.*")
    );
    assert!(settings.filter("MacTests").is_none());
    assert_eq!(settings.extra_providers.len(), 1);

    Ok(())
}

#[test]
fn test_from_toml_rejects_bad_filter() {
    let err = Settings::from_toml("[categories.MacTests]\nexclude = \"(\"\n");
    assert!(matches!(err, Err(Error::InvalidAlgorithmFilter { .. })));
}

#[test]
fn test_load_file() -> Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    writeln!(file, "[services]\nmust_be = [\"SHA-256\"]")?;

    let settings = Settings::load(file.path())?;
    assert_eq!(settings.services.must_be, vec!["SHA-256"]);
    // explicit table replaces the whole section, serde defaults fill the rest
    assert!(settings.services.must_not_be.is_empty());

    assert!(matches!(
        Settings::load(&file.path().with_extension("missing")),
        Err(Error::Settings { .. })
    ));
    Ok(())
}

#[test]
fn test_compile_filter_is_full_match() -> Result<()> {
    let regex = compile_filter("AES")?;
    assert!(regex.is_match("AES"));
    assert!(!regex.is_match("AES_128/GCM/NoPadding"));

    let regex = compile_filter("AES.*|SHA-1")?;
    assert!(regex.is_match("AES_128/GCM/NoPadding"));
    assert!(regex.is_match("SHA-1"));
    assert!(!regex.is_match("SHA-1x"));
    Ok(())
}

#[test]
fn test_settings_builder() {
    let settings = SettingsBuilder::new()
        .with_test_aliases(false)
        .with_print_stacks(true)
        .with_forbidden_provider("X")
        .with_required_service("SHA-256")
        .with_category_filter(
            "CipherTests",
            CategoryFilter {
                include: None,
                exclude: Some("ChaCha.*".to_string()),
            },
        )
        .build();

    assert!(!settings.test_aliases);
    assert!(settings.verbosity.print_stacks);
    assert_eq!(settings.providers.must_not_be, vec!["X"]);
    assert_eq!(settings.services.must_be, vec!["SHA-256"]);
    assert_eq!(settings.services.must_not_be.len(), 2);
    assert!(settings.filter("CipherTests").is_some());
}
