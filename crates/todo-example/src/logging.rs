//! Diagnostic logging for `tdoo`.
//!
//! Events go to stderr so they never mix with command output. `TDOO_LOG`
//! takes an `EnvFilter` directive string and wins over the `-v` flags.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

pub const LOG_ENV: &str = "TDOO_LOG";

/// Default level for a `-v` count: warn, then debug, then trace.
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

fn build_env_filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level_for(verbosity)))
}

/// Installs the global subscriber. A second call is a no-op.
pub fn init_logging(verbosity: u8) {
    let _ = Registry::default()
        .with(build_env_filter(verbosity))
        .with(
            fmt::layer()
                .with_target(true)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for(0), "warn");
        assert_eq!(level_for(1), "debug");
        assert_eq!(level_for(5), "trace");
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init_logging(0);
        init_logging(2);
    }
}
