// HookLog - util/logging.rs
//
// Structured logging with runtime-selectable debug mode.
//
// Level sources, highest priority first:
//   - RUST_LOG (used verbatim)
//   - --debug on the command line
//   - [logging] level in config.toml
//   - "info"
//
// Output: stderr. The bearer token is never logged; payload bodies only
// appear at debug level.

use tracing_subscriber::EnvFilter;

/// Dependencies whose own logging drowns out the app's at debug level.
const QUIET_TARGETS: &[&str] = &["hyper_util=warn", "reqwest=info", "winit=warn", "eframe=info"];

/// Build the filter for the chosen base level, keeping noisy dependencies quiet.
fn level_filter(level: &str) -> EnvFilter {
    let directives = std::iter::once(level)
        .chain(QUIET_TARGETS.iter().copied())
        .collect::<Vec<_>>()
        .join(",");
    EnvFilter::new(directives)
}

/// Initialise the logging subsystem. Safe to call more than once.
pub fn init(debug_flag: bool, config_level: Option<&str>) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if debug_flag {
        level_filter("debug")
    } else {
        level_filter(config_level.unwrap_or(super::constants::DEFAULT_LOG_LEVEL))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(true)
        .compact()
        .try_init();

    tracing::debug!(
        app = super::constants::APP_NAME,
        version = super::constants::APP_VERSION,
        debug = debug_flag,
        "Logging initialised"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_filter_keeps_base_level_first() {
        let rendered = level_filter("warn").to_string();
        assert!(rendered.contains("warn"), "{rendered}");
        assert!(rendered.contains("hyper_util=warn"), "{rendered}");
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init(false, Some("info"));
        init(true, None);
    }
}
