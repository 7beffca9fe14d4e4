use super::*;

use std::io::Write;

#[test]
fn test_cli_flags() {
    let cli = Cli::try_parse_from([
        "cryptotest",
        "--no-aliases",
        "--parallel",
        "--only",
        "CipherTests",
        "--only",
        "MacTests",
        "--format",
        "json",
    ])
    .expect("valid arguments");

    assert!(cli.no_aliases);
    assert!(cli.parallel);
    assert!(!cli.list);
    assert_eq!(cli.only, vec!["CipherTests", "MacTests"]);
    assert_eq!(cli.format, Format::Json);
}

#[test]
fn test_cli_rejects_unknown_format() {
    assert!(Cli::try_parse_from(["cryptotest", "--format", "xml"]).is_err());
}

#[test]
fn test_flags_override_config_file() -> Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    writeln!(file, "test_aliases = true\n[verbosity]\nprint_stacks = false")?;
    let path = file.path().to_string_lossy().to_string();

    let cli = Cli::try_parse_from(["cryptotest", "--config", &path, "--no-aliases", "--print-stacks"])
        .expect("valid arguments");
    let settings = cli.settings()?;
    assert!(!settings.test_aliases);
    assert!(settings.verbosity.print_stacks);
    Ok(())
}

#[test]
fn test_extra_providers_are_registered() -> Result<()> {
    let settings = Settings::from_toml(
        r#"
[[extra_providers]]
name = "Declared"
"#,
    )?;
    let registry = registry(&settings);
    assert!(registry.get("Declared").is_some());
    Ok(())
}
