//! Diagnostics go to stderr through `tracing`. `RUST_LOG` wins when set; otherwise
//! `--verbose` selects debug output for this crate and the default is warnings only.

use tracing_subscriber::{fmt, EnvFilter};

pub fn filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "folio=debug" } else { "folio=warn" })
    })
}

/// Installs the global subscriber. Calling it again is harmless.
pub fn init(verbose: bool) {
    let _ = fmt()
        .with_env_filter(filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
