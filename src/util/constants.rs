// PidScope - util/constants.rs
//
// Single source of truth for all named constants, limits, defaults, and
// the pattern tables that drive line classification. The tables are
// ordered; classification rules consult them in the order given here.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "PidScope";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Monitoring defaults
// =============================================================================

/// Package monitored when none is given on the command line.
pub const DEFAULT_PACKAGE: &str = "com.mycompany.GlobeTrotter";

/// Default maximum number of consecutive identical lines to show.
/// 0 means unlimited (repeat suppression disabled).
pub const DEFAULT_MAX_REPEATS: u32 = 0;

/// How long the driver waits on the live-stream channel before waking to
/// check the interrupt flag (ms). Bounds the Ctrl+C response latency.
pub const LIVE_POLL_INTERVAL_MS: u64 = 100;

// =============================================================================
// Pattern overlay limits
// =============================================================================

/// Maximum size of a pattern overlay TOML file in bytes.
pub const MAX_OVERLAY_FILE_SIZE: u64 = 64 * 1024; // 64 KB

/// Maximum number of patterns a single overlay may add to one table.
pub const MAX_OVERLAY_PATTERNS: usize = 500;

// =============================================================================
// Status line text
// =============================================================================

/// Notice printed exactly once when a run of identical lines crosses the
/// configured repeat threshold.
pub const REPEAT_SUPPRESSION_NOTICE: &str = "... (suppressing identical lines) ...";

/// Final status line for a run ended by Ctrl+C rather than end of input.
pub const INTERRUPT_NOTICE: &str = "Monitoring stopped by user";

// =============================================================================
// Crash detection
// =============================================================================

/// Marker logcat emits at the start of a crash buffer section. Seeing it
/// switches the session into crash mode for the remainder of the run.
pub const CRASH_SECTION_BEGIN: &str = "--------- beginning of crash";

/// Substrings that mark a line as crash evidence on their own, package
/// independent: fatal exceptions, native crash signals, stack traces,
/// and crash-reporter output.
pub const CRASH_MARKERS: &[&str] = &[
    "FATAL EXCEPTION",
    "Native crash",
    "SIGSEGV",
    "SIGABRT",
    "backtrace:",
    "Stack trace:",
    "AndroidRuntime: FATAL EXCEPTION:",
    "AndroidRuntime: java.lang.",
    "Exception:",
    "crash_dump",
];

/// Substrings that mark a line as crash evidence only when the monitored
/// package name also appears in the line.
pub const PACKAGE_CRASH_MARKERS: &[&str] = &[
    "Force finishing activity",
    "WIN DEATH",
    "DEBUG",
];

/// Bionic libc tag; crash-relevant when paired with one of
/// [`LIBC_CRASH_DETAILS`] on the same line.
pub const LIBC_TAG: &str = "libc:";

/// Detail substrings that make a `libc:` line crash evidence.
pub const LIBC_CRASH_DETAILS: &[&str] = &["Fatal signal", "abort"];

/// debuggerd report tag; crash-relevant when paired with
/// [`DEBUG_REPORT_DETAIL`] on the same line.
pub const DEBUG_REPORT_TAG: &str = "DEBUG:";

/// Detail substring that makes a `DEBUG:` line crash evidence.
pub const DEBUG_REPORT_DETAIL: &str = "Dumping";

// =============================================================================
// PID announcement detection
// =============================================================================

/// Monkey test runner marker; any pid extracted from such a line belongs
/// to the instrumented app.
pub const MONKEY_MARKER: &str = "W Monkey";

/// Main activity debug tag; logged by the app process itself.
pub const DEBUG_ACTIVITY_MARKER: &str = "D ImmersiveActivity";

/// Keyword required alongside the `pid <pid>` announcement form.
pub const ANNOUNCEMENT_FOR_KEYWORD: &str = "for";

// =============================================================================
// Tag whitelist
// =============================================================================

/// Tags exempted from PID-based filtering: they carry relevant diagnostics
/// regardless of which process emitted them.
pub const WHITELIST_TAGS: &[&str] = &[
    "ImmersiveActivity",
    "GlobeTrotter",
    "VrApi",
    "Unity",
    "AndroidRuntime",
    "art",
    "System.err",
    "DEBUG",
    "WARN",
    "ERROR",
    "FATAL",
];

// =============================================================================
// Always-deny noisy patterns
// =============================================================================

/// High-volume, low-value lines dropped regardless of PID or tag.
/// Checked after crash detection, so crash evidence always wins.
pub const NOISY_PATTERNS: &[&str] = &[
    // Media playback related
    "ExoPlayerImplInternal",
    "MediaCodec",
    "CodecException",
    "setSurface()",
    "Invalid to call at Released state",
    "rendering to non-initialized",
    "releaseOutputBuffer()",
    "BufferQueueProducer",
    "MediaPlayer",
    "AudioTrack",
    // System errors and warnings
    "ApkAssets",
    "Compatibility callbacks",
    "ClassNotFoundException",
    "NoClassDefFoundError",
    "Service not registered",
    "Timeout",
    "FetchBLEStatsTask",
    "W System",
    "type=1400",
    "audit",
];

// =============================================================================
// Ignore patterns
// =============================================================================

/// Deny list applied to lines that already passed the PID/tag whitelist.
/// Larger and more specific than [`NOISY_PATTERNS`]; a match here
/// suppresses a line the whitelist would otherwise show.
pub const IGNORE_PATTERNS: &[&str] = &[
    // OpenXR permission checks and extensions
    "Required permission horizonos.permission",
    "Required permission com.oculus.permission",
    "xrEnumerateInstanceExtensionProperties: skipping extension",
    "Checking for permission",
    "PassesGKKillswitch",
    "checkTrexKillswitchGk",
    "xrPerfSettingsSetPerformanceLevelEXT",
    "xrCreateInstance",
    "xrCreateSession",
    "xrBeginSession",
    "PostSessionStateChange",
    "Extension status:",
    "missing uses-feature string",
    "missing uses-permission string",
    // Avatar and 3D rendering related
    "Avatar2ResourceSystem",
    "Failed to get TexCoord1 attribute",
    "LoadMorphTargets",
    "TexCoord1 attribute info for buffer",
    "Avatar2ResourceSystem: LoadMorphTargets: Failed to get TexCoord1",
    // Media and codec related
    "CCodecBufferChannel",
    "BufferQueueProducer",
    "dequeueBuffer",
    "Codec2Client",
    "query -- param skipped",
    "flushed work; ignored",
    "Discard frames from previous generation",
    "Ignoring stale input buffer",
    "DequeueBuffer: dequeueBuffer failed",
    // System framework
    "PersistableBundle",
    "ReactNativeJS",
    "IPCThreadState",
    "Adreno",
    "Failed acquire read lock",
    "diagnosticdata",
    "Choreographer",
    "OpenGLRenderer",
    "ViewRootImpl",
    "InputMethodManager",
    "HostConnection",
    "EGL_emulation",
    "SurfaceFlinger",
    "ConfigStore",
    "RenderThread",
    "ActivityThread",
    "ThreadPoolExecutor",
    "dalvikvm",
    "libEGL",
    "eglCodecCommon",
    // Networking and services
    "resolv",
    "netd",
    "crash-uploader",
    "CloudBackup",
    "UIManagerBinding",
    "VrApi",
    "AudioFlinger",
    "oneway function results",
    "CompatibilityChangeReporter",
    "Tracking",
    "MRSS",
    "MrRuntime",
    "VD628x",
    "UnifiedTelemetryLogger",
    // Backup related
    "FullBackup_native",
    "file_backup_helper",
    "BackupManagerService",
    "BackupRestoreController",
    // Federated-computing / mixed-reality JNI exception noise
    "OculusFederatedComputingIPCServer: encountered JNI exception in EndGPRIPSTransaction: java.util.NoSuchElementException: Key",
    "OculusFederatedComputingIPCServer: java.util.NoSuchElementException: Key",
    "MIXEDREALITY: PlaneFreeSpace: PlaneFreespaceComputeCapability: GpripsClient: Exception in task: Failed to end transaction: java.util.NoSuchElementException: Key",
    // ExoPlayer and system errors
    "ExoPlayerImplInternal",
    "No Compatibility callbacks set! Querying change",
    "type=1400 audit(0.0:",
    "FetchBLEStatsTask: FetchBLEStatsTask did not succeed",
    "IPCManager: java.lang.IllegalArgumentException: Service not registered",
    "System.err: INFO: com.whatsapp",
    // Key-value backup machinery
    "KeyValueBackupTask",
    "PFTBT",
    "KVBT",
    "OculusStorageFullBackupPlugin",
    "OculusCloudBackupManagementServiceClient",
    "measured [",
    "TrafficStats",
    "KvBackupCoordinator",
    "GraphQLClient",
    "OkHttpClientFacade",
];

// =============================================================================
// Backup pre-filter
// =============================================================================

/// Backup-subsystem substrings dropped before classification even runs
/// (unless disabled with --no-backup-filter).
pub const BACKUP_PATTERNS: &[&str] = &[
    "FullBackup",
    "file_backup_helper",
    "BackupManagerService",
    "measured [",
];

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
