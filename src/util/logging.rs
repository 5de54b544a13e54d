// PidScope - util/logging.rs
//
// Structured logging with runtime-selectable debug mode.
//
// Activation:
//   - Environment variable: RUST_LOG=debug (or trace)
//   - CLI flag: --debug (sets the debug level)
//
// Output: stderr only. The filtered log lines on stdout stay clean so the
// tool can be piped. Never logs secrets, tokens, or PII at any level.

use tracing_subscriber::EnvFilter;

/// Initialise the logging subsystem.
///
/// `debug_flag` is true when the user passed --debug on the CLI.
/// Priority: RUST_LOG env var > CLI --debug flag > default "info".
pub fn init(debug_flag: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        // RUST_LOG takes highest priority (already set)
        EnvFilter::from_default_env()
    } else if debug_flag {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new(super::constants::DEFAULT_LOG_LEVEL)
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact()
        .init();

    tracing::debug!(
        app = super::constants::APP_NAME,
        version = super::constants::APP_VERSION,
        "Logging initialised"
    );
}
