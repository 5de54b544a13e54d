// PidScope - core/model.rs
//
// Core data model types. Pure data definitions with no I/O and no
// platform dependencies; the shared vocabulary across all layers.

use std::collections::HashSet;

// =============================================================================
// Parsed line (output of the line parser)
// =============================================================================

/// Structured fields extracted from a raw logcat line.
///
/// Produced only for lines matching the fixed logcat shape; lines that do
/// not match stay unparsed and are classified on raw text alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    /// Process ID that emitted the line.
    pub pid: String,

    /// Single-letter log level (V, D, I, W, E, F).
    pub level: char,

    /// Source tag, trimmed, without the terminating colon.
    pub tag: String,
}

// =============================================================================
// Classification
// =============================================================================

/// What the classifier decided to do with a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Show the line (subject to repeat suppression in the driver).
    Print,

    /// Drop the line.
    Suppress,
}

/// Full classifier verdict for one line.
///
/// `new_pid` and `enters_crash` are instructions to the session filter:
/// the classifier itself never mutates state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub action: Action,

    /// True when the line is the crash-section-begin marker; the session
    /// enters crash mode for the remainder of the run.
    pub enters_crash: bool,

    /// A previously-unseen app PID announced by this line, to be added to
    /// the tracked set.
    pub new_pid: Option<String>,
}

impl Classification {
    pub fn suppress() -> Self {
        Self {
            action: Action::Suppress,
            enters_crash: false,
            new_pid: None,
        }
    }

    pub fn print() -> Self {
        Self {
            action: Action::Print,
            enters_crash: false,
            new_pid: None,
        }
    }
}

// =============================================================================
// Session state
// =============================================================================

/// Mutable state carried across one monitoring run.
///
/// Owned exclusively by the session filter; the classifier sees it
/// read-only.
#[derive(Debug, Default)]
pub struct SessionState {
    /// PIDs attributed to the monitored app. Grows monotonically; a PID is
    /// trusted for the rest of the run once seen.
    pub tracked_pids: HashSet<String>,

    /// True from the first crash-section-begin marker onwards. Nothing
    /// clears it; every later line prints until the run ends.
    pub in_crash_section: bool,

    /// Last line that was decided Print (not last line seen).
    pub last_line: Option<String>,

    /// Consecutive occurrences of `last_line` beyond the first.
    pub repeat_count: u32,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }
}

// =============================================================================
// Output events
// =============================================================================

/// What the session filter tells the driver to emit, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputEvent {
    /// A log line that passed filtering.
    Line(String),

    /// Status line announcing a newly discovered app PID. Emitted before
    /// the announcing line itself and exempt from repeat suppression.
    FoundPid(String),

    /// One-time notice that a run of identical lines crossed the repeat
    /// threshold.
    RepeatNotice,
}
