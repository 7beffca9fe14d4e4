#[cfg(test)]
mod main_test;

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::error;

use cryptotest::aggregator::CryptoTest;
use cryptotest::config::Settings;
use cryptotest::registry::ProviderRegistry;
use cryptotest::utilities::error::*;
use cryptotest::utilities::logging::init_tracing;

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Run every test category against every registered crypto provider
#[derive(Parser, Debug)]
#[command(name = "cryptotest", version)]
struct Cli {
    /// TOML settings file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Exercise canonical algorithm names only
    #[arg(long)]
    no_aliases: bool,
    /// Log the error chain of every failing unit as it happens
    #[arg(long)]
    print_stacks: bool,
    /// Log the values computed by the checks
    #[arg(long)]
    print_results: bool,
    /// Run categories concurrently
    #[arg(long)]
    parallel: bool,
    /// Run only the named category, may be repeated
    #[arg(long, value_name = "CATEGORY")]
    only: Vec<String>,
    /// List providers and categories, then exit
    #[arg(long)]
    list: bool,
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
    /// Debug level diagnostics unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Settings from the file, then the environment, then the flags
    fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };
        settings.apply_env();
        if self.no_aliases {
            settings.test_aliases = false;
        }
        if self.print_stacks {
            settings.verbosity.print_stacks = true;
        }
        if self.print_results {
            settings.verbosity.print_results = true;
        }
        if self.parallel {
            settings.parallel = true;
        }
        Ok(settings)
    }
}

fn registry(settings: &Settings) -> ProviderRegistry {
    let mut registry = ProviderRegistry::installed();
    for provider in &settings.extra_providers {
        registry.register(Arc::new(provider.clone()));
    }
    registry
}

fn run(cli: &Cli) -> Result<bool> {
    let settings = cli.settings()?;
    let crypto_test = CryptoTest::new(registry(&settings), settings).with_only(cli.only.clone());

    if cli.list {
        for provider in crypto_test.registry().providers() {
            println!("provider: {} ({} services)", provider.name(), provider.services().len());
        }
        for registration in crypto_test.categories() {
            println!("category: {}", registration.name);
        }
        return Ok(true);
    }

    let report = crypto_test.run_all()?;
    match cli.format {
        Format::Text => println!("{}", report.render()),
        Format::Json => println!("{}", report.to_json()?),
    }
    if !report.is_passed() {
        error!("Some tests failed: {}", report.failed());
    }
    Ok(report.is_passed())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(err) = init_tracing(cli.verbose) {
        eprintln!("failed to initialize logging: {err}");
    }

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            error!("{}", err);
            ExitCode::from(2)
        }
    }
}
