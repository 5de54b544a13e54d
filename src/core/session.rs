// PidScope - core/session.rs
//
// The session filter: owns the mutable state carried across one
// monitoring run and turns raw input lines into output events.
// Core layer: pure logic, no I/O — the driver in app/monitor.rs feeds
// lines in and writes the returned events to the sink.

use crate::core::classify::classify;
use crate::core::config::FilterConfig;
use crate::core::model::{Action, OutputEvent, SessionState};
use crate::core::parser;

/// Stateful filter for one monitoring run.
///
/// Processing order per line: backup pre-filter, parse, classify, state
/// updates (tracked PIDs, crash mode), repeat suppression.
pub struct SessionFilter {
    config: FilterConfig,
    state: SessionState,
}

impl SessionFilter {
    pub fn new(config: FilterConfig) -> Self {
        Self {
            config,
            state: SessionState::new(),
        }
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Advance the session by one raw input line.
    ///
    /// Returns the events to emit for this line, in order. An empty vec
    /// means the line was dropped. Leading/trailing whitespace is
    /// stripped before any rule runs.
    pub fn advance(&mut self, raw: &str) -> Vec<OutputEvent> {
        let line = raw.trim();

        // Empty lines are dropped outright; the parser never runs.
        if line.is_empty() {
            return Vec::new();
        }

        // Backup noise is dropped before classification and never touches
        // repeat state.
        if self.config.backup_filter
            && self
                .config
                .backup_patterns
                .iter()
                .any(|p| line.contains(p.as_str()))
        {
            return Vec::new();
        }

        let parsed = parser::parse_line(line);
        let verdict = classify(line, parsed.as_ref(), &self.state, &self.config);

        let mut events = Vec::new();

        if let Some(pid) = verdict.new_pid {
            tracing::info!(pid = %pid, package = %self.config.package, "New app PID tracked");
            self.state.tracked_pids.insert(pid.clone());
            events.push(OutputEvent::FoundPid(pid));
        }

        if verdict.enters_crash && !self.state.in_crash_section {
            tracing::warn!(package = %self.config.package, "Entering crash section");
            self.state.in_crash_section = true;
        }

        if verdict.action == Action::Print {
            self.emit_with_repeat_suppression(line, &mut events);
        }

        events
    }

    /// Repeat suppression over print-decided lines.
    ///
    /// With threshold N > 0, a run of identical lines shows exactly N
    /// lines, then one notice when occurrence N+1 arrives, then nothing
    /// until a different line resets the run. Threshold 0 disables
    /// suppression entirely.
    fn emit_with_repeat_suppression(&mut self, line: &str, events: &mut Vec<OutputEvent>) {
        let is_repeat = self.state.last_line.as_deref() == Some(line);

        if is_repeat && self.config.max_repeats > 0 {
            self.state.repeat_count += 1;
            if self.state.repeat_count < self.config.max_repeats {
                events.push(OutputEvent::Line(line.to_string()));
            } else if self.state.repeat_count == self.config.max_repeats {
                events.push(OutputEvent::RepeatNotice);
            }
            // Beyond the threshold: nothing further for this run.
        } else {
            self.state.repeat_count = 0;
            events.push(OutputEvent::Line(line.to_string()));
        }

        self.state.last_line = Some(line.to_string());
    }
}
