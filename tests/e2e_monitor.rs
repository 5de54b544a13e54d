// PidScope - tests/e2e_monitor.rs
//
// End-to-end tests for the monitoring pipeline.
//
// These tests exercise the real file source, the real session filter,
// and the real driver loop writing to an in-memory sink — no mocks, no
// stubs. This covers the full path from a raw logcat capture on disk to
// the filtered, repeat-suppressed output a user would see.

use pidscope::app::monitor::run_monitor;
use pidscope::app::source::LineSource;
use pidscope::core::config::FilterConfig;
use pidscope::core::session::SessionFilter;
use std::io::Write;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

// =============================================================================
// Helpers
// =============================================================================

/// Absolute path to the on-disk fixture files.
fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Run the monitor over a log file and return (stdout text, summary).
fn run_over_file(
    path: &PathBuf,
    config: FilterConfig,
) -> (String, pidscope::app::monitor::MonitorSummary) {
    let mut source = LineSource::file(path).expect("fixture should open");
    let mut session = SessionFilter::new(config);
    let interrupt = AtomicBool::new(false);
    let mut out = Vec::new();

    let summary =
        run_monitor(&mut source, &mut session, &interrupt, &mut out).expect("run should succeed");

    (String::from_utf8(out).expect("output is UTF-8"), summary)
}

// =============================================================================
// Full pipeline over the fixture capture
// =============================================================================

/// The fixture exercises PID discovery, backup pre-filtering, noisy-line
/// denial, tag whitelisting with an ignore-pattern override, repeat
/// suppression, and a sticky crash section. The complete output is
/// pinned so any behavioural drift shows up as a diff.
#[test]
fn e2e_filters_fixture_capture() {
    let mut config = FilterConfig::new("com.mycompany.GlobeTrotter");
    config.max_repeats = 2;

    let (output, summary) = run_over_file(&fixture("logcat_sample.log"), config);

    let expected = "\
Monitoring logs for package: com.mycompany.GlobeTrotter...
Press Ctrl+C to stop monitoring
Found app PID: 4711
03-15 10:01:01.000  4711  4711 I ActivityManager: Start proc 4711:com.mycompany.GlobeTrotter/u0a123 for activity {com.mycompany.GlobeTrotter/.MainActivity}
03-15 10:01:01.200  4711  4711 I GlobeTrotter: Application starting
03-15 10:01:02.000  4711  4711 D GlobeTrotter: tick
03-15 10:01:02.000  4711  4711 D GlobeTrotter: tick
... (suppressing identical lines) ...
03-15 10:01:02.500  4711  4711 I GlobeTrotter: tock
03-15 10:01:03.000   999   999 W Unity: shader warmup took 120ms
--------- beginning of crash
03-15 10:01:04.000  4711  4711 E AndroidRuntime: FATAL EXCEPTION: main
03-15 10:01:04.001  4711  4711 E AndroidRuntime: java.lang.RuntimeException: Unable to resume activity
#01 pc 00000000000a5b44  /system/lib64/libutils.so
03-15 10:01:04.100   812   998 W BufferQueueProducer: dequeueBuffer: slot 5
";

    assert_eq!(output, expected);
    assert_eq!(summary.lines_read, 21);
    assert_eq!(summary.lines_printed, 11);
    assert!(!summary.interrupted);
}

/// Once the crash section begins, lines that the noisy deny list would
/// otherwise drop keep printing to the end of the capture.
#[test]
fn e2e_crash_section_overrides_noise_until_eof() {
    let config = FilterConfig::new("com.mycompany.GlobeTrotter");
    let (output, _) = run_over_file(&fixture("logcat_sample.log"), config);

    // This BufferQueueProducer line sits after the crash banner; the
    // identical-tag line before the banner is absent.
    assert!(output.contains("dequeueBuffer: slot 5"));
    assert!(!output.contains("BufferQueue has been abandoned"));
}

// =============================================================================
// Repeat suppression without a threshold
// =============================================================================

/// Threshold 0 means unlimited: identical consecutive lines all print
/// and the suppression notice never appears.
#[test]
fn e2e_threshold_zero_prints_all_repeats() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    for _ in 0..4 {
        writeln!(file, "03-15 11:00:00.000  4711  4711 D GlobeTrotter: heartbeat").unwrap();
    }
    file.flush().unwrap();

    let mut config = FilterConfig::new("com.mycompany.GlobeTrotter");
    config.max_repeats = 0;
    // The GlobeTrotter tag is whitelisted, so no PID discovery is needed.
    let mut session = SessionFilter::new(config);
    let mut source = LineSource::file(file.path()).unwrap();
    let interrupt = AtomicBool::new(false);
    let mut out = Vec::new();
    run_monitor(&mut source, &mut session, &interrupt, &mut out).unwrap();

    let output = String::from_utf8(out).unwrap();
    assert_eq!(output.matches("heartbeat").count(), 4);
    assert!(!output.contains("suppressing identical lines"));
}

// =============================================================================
// Interrupt handling
// =============================================================================

/// An interrupt flag raised before the first pull ends the run cleanly
/// with the distinct stop notice and a success result.
#[test]
fn e2e_interrupt_ends_run_cleanly() {
    let config = FilterConfig::new("com.mycompany.GlobeTrotter");
    let mut source = LineSource::file(&fixture("logcat_sample.log")).unwrap();
    let mut session = SessionFilter::new(config);
    let interrupt = AtomicBool::new(false);
    interrupt.store(true, Ordering::SeqCst);
    let mut out = Vec::new();

    let summary = run_monitor(&mut source, &mut session, &interrupt, &mut out)
        .expect("interrupted run still succeeds");

    let output = String::from_utf8(out).unwrap();
    assert!(summary.interrupted);
    assert_eq!(summary.lines_read, 0);
    assert!(output.ends_with("\nMonitoring stopped by user\n"));
}
