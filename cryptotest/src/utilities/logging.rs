//! Diagnostic logging for the harness.
//!
//! The report itself is written to stdout by the binary; everything emitted
//! through `tracing` goes to stderr so the two never interleave in a pipe.

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::utilities::error::*;

/// Default filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "cryptotest=info";

/// Install the global tracing subscriber. Call once per process.
pub fn init_tracing(verbose: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("cryptotest=debug")
        } else {
            EnvFilter::new(DEFAULT_LOG_FILTER)
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_thread_names(false)
                .compact(),
        )
        .try_init()
        .map_err(|err| Error::Other(err.to_string()))?;

    info!("cryptotest logging initialized");
    Ok(())
}
