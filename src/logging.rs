// SPDX-License-Identifier: MPL-2.0
//! Structured logging setup.
//!
//! Output goes to stderr through `tracing-subscriber`. Passwords and API keys
//! are never logged at any level.

use tracing_subscriber::EnvFilter;

/// Level used when nothing else selects one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Picks the filter directive.
///
/// Priority: `RUST_LOG` > `--debug` > config `log_level` > [`DEFAULT_LOG_LEVEL`].
#[must_use]
pub fn filter_directive(
    rust_log: Option<&str>,
    debug_flag: bool,
    config_level: Option<&str>,
) -> String {
    if let Some(directive) = rust_log.filter(|value| !value.trim().is_empty()) {
        return directive.to_string();
    }
    if debug_flag {
        return "debug".to_string();
    }
    config_level
        .filter(|level| !level.trim().is_empty())
        .unwrap_or(DEFAULT_LOG_LEVEL)
        .to_string()
}

/// Initializes the global subscriber. Call once, before the UI starts.
pub fn init(debug_flag: bool, config_level: Option<&str>) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let directive = filter_directive(rust_log.as_deref(), debug_flag, config_level);
    let filter =
        EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact()
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(
            version = env!("CARGO_PKG_VERSION"),
            filter = %directive,
            "logging initialised"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rust_log_wins() {
        assert_eq!(
            filter_directive(Some("neo_enhance=trace"), true, Some("warn")),
            "neo_enhance=trace"
        );
    }

    #[test]
    fn debug_flag_beats_config() {
        assert_eq!(filter_directive(None, true, Some("warn")), "debug");
    }

    #[test]
    fn config_level_used_when_alone() {
        assert_eq!(filter_directive(None, false, Some("warn")), "warn");
    }

    #[test]
    fn falls_back_to_info() {
        assert_eq!(filter_directive(None, false, None), "info");
        assert_eq!(filter_directive(Some(" "), false, Some("")), "info");
    }
}
