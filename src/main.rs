// PidScope - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Logging initialisation (debug mode support)
// 3. Filter configuration assembly (built-in tables + optional overlay)
// 4. Input source selection and SIGINT hookup
// 5. Running the monitor loop and reporting the exit status

use clap::Parser;
use pidscope::app::{monitor, source::LineSource};
use pidscope::core::config::{self, FilterConfig, PatternOverlay};
use pidscope::core::session::SessionFilter;
use pidscope::util::constants;
use pidscope::util::error::{ConfigError, MonitorError};
use signal_hook::consts::SIGINT;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// PidScope - Filter Android logcat output down to a single application.
///
/// Pipe `adb logcat` into PidScope (or point it at a captured log file)
/// to see only the lines belonging to one package's processes, with
/// known-noisy system lines suppressed and crash evidence always shown.
#[derive(Parser, Debug)]
#[command(name = "pidscope", version, about)]
struct Cli {
    /// Package name to monitor.
    #[arg(default_value = constants::DEFAULT_PACKAGE)]
    package_name: String,

    /// Log file to process (reads the live stream from stdin if omitted).
    log_file: Option<PathBuf>,

    /// Show more verbose output (fewer filters).
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,

    /// Maximum number of consecutive identical lines to show (0 for unlimited).
    #[arg(short = 'c', long = "count", default_value_t = constants::DEFAULT_MAX_REPEATS)]
    count: u32,

    /// Do not filter out backup-related logs.
    #[arg(short = 'b', long = "no-backup-filter")]
    no_backup_filter: bool,

    /// TOML file with extra whitelist tags and ignore patterns,
    /// extending the built-in tables.
    #[arg(short = 'p', long = "patterns")]
    patterns: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    pidscope::util::logging::init(cli.debug);

    tracing::info!(
        version = constants::APP_VERSION,
        package = %cli.package_name,
        source = %cli
            .log_file
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "stdin".to_string()),
        "PidScope starting"
    );

    if let Err(e) = run(cli) {
        tracing::error!(error = %e, "Monitoring failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), MonitorError> {
    let mut config = FilterConfig::new(cli.package_name);
    config.max_repeats = cli.count;
    config.backup_filter = !cli.no_backup_filter;
    config.verbose = cli.verbose;

    if let Some(ref path) = cli.patterns {
        let overlay = load_patterns_overlay(path)?;
        config.apply_overlay(overlay);
    }

    // SIGINT sets the flag; the driver notices within one poll interval
    // and ends the run cleanly.
    let interrupt = Arc::new(AtomicBool::new(false));
    signal_hook::flag::register(SIGINT, Arc::clone(&interrupt)).map_err(|e| {
        MonitorError::Io {
            path: PathBuf::from("<signal>"),
            operation: "register SIGINT handler",
            source: e,
        }
    })?;

    let mut source = match cli.log_file {
        Some(ref path) => LineSource::file(path)?,
        None => LineSource::stdin_live(),
    };

    let mut session = SessionFilter::new(config);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let summary = monitor::run_monitor(&mut source, &mut session, &interrupt, &mut out)
        .map_err(|e| MonitorError::Io {
            path: cli
                .log_file
                .clone()
                .unwrap_or_else(|| PathBuf::from("<stdin>")),
            operation: "monitor",
            source: e,
        })?;

    tracing::info!(
        lines_read = summary.lines_read,
        lines_printed = summary.lines_printed,
        pids = session.state().tracked_pids.len(),
        interrupted = summary.interrupted,
        "PidScope finished"
    );

    Ok(())
}

/// Read and validate a pattern overlay file.
///
/// The size cap is checked before the file is read so a mistakenly
/// passed huge file never lands in memory.
fn load_patterns_overlay(path: &Path) -> Result<PatternOverlay, MonitorError> {
    let metadata = std::fs::metadata(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    if metadata.len() > constants::MAX_OVERLAY_FILE_SIZE {
        return Err(ConfigError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size: constants::MAX_OVERLAY_FILE_SIZE,
        }
        .into());
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let overlay = config::parse_overlay_toml(&content, path)?;
    config::validate_overlay(&overlay)?;

    tracing::info!(file = %path.display(), "Pattern overlay loaded");
    Ok(overlay)
}
