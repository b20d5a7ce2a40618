//! Diagnostic logging setup.
//!
//! Results go to stdout; diagnostics go through `tracing` to stderr so that
//! `--json` output stays machine-readable.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const VERBOSE_FILTER: &str = "storelens=debug,storelens_core=debug";
pub const QUIET_FILTER: &str = "storelens=error,storelens_core=error";
pub const DEFAULT_FILTER: &str = "storelens=info,storelens_core=info";

/// Picks the filter: `--verbose`, then `--quiet`, then `RUST_LOG`, then info.
#[must_use]
pub fn build_filter(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Installs the global subscriber. Call once, before any logging.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(build_filter(verbose, quiet))
        .with(fmt_layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_parse() {
        let _ = EnvFilter::new(VERBOSE_FILTER);
        let _ = EnvFilter::new(QUIET_FILTER);
        let _ = build_filter(false, true);
    }

    #[test]
    fn repeated_init_does_not_panic() {
        init_logger(false, true, true);
        init_logger(true, false, true);
    }
}
