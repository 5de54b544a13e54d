// PidScope - app/monitor.rs
//
// The monitoring driver: pulls lines from the input source, feeds them
// through the session filter, and writes the resulting events to the
// output sink in arrival order.
//
// The loop has exactly one suspension point: the bounded wait inside
// LineSource::next_line. The interrupt flag is checked on every
// iteration, so Ctrl+C ends the run within one poll interval. Both
// termination paths (end of input, interrupt) are clean successes.

use crate::app::source::{LineSource, NextLine};
use crate::core::model::OutputEvent;
use crate::core::session::SessionFilter;
use crate::util::constants::{INTERRUPT_NOTICE, REPEAT_SUPPRESSION_NOTICE};
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};

/// End-of-run statistics, logged by the caller.
#[derive(Debug, Default, Clone, Copy)]
pub struct MonitorSummary {
    /// Lines pulled from the source (including dropped ones).
    pub lines_read: u64,

    /// Lines written to the sink (excluding status lines).
    pub lines_printed: u64,

    /// True when the run ended on the interrupt flag rather than EOF.
    pub interrupted: bool,
}

/// Run the monitoring loop until end of input or interruption.
///
/// A closed sink (e.g. the consumer of a pipe exiting) ends the run
/// cleanly rather than failing it; any other I/O error propagates.
pub fn run_monitor(
    source: &mut LineSource,
    session: &mut SessionFilter,
    interrupt: &AtomicBool,
    out: &mut impl Write,
) -> io::Result<MonitorSummary> {
    let mut summary = MonitorSummary::default();

    writeln!(
        out,
        "Monitoring logs for package: {}...",
        session.config().package
    )?;
    writeln!(out, "Press Ctrl+C to stop monitoring")?;

    loop {
        if interrupt.load(Ordering::SeqCst) {
            summary.interrupted = true;
            writeln!(out, "\n{INTERRUPT_NOTICE}")?;
            break;
        }

        let line = match source.next_line()? {
            NextLine::Line(line) => line,
            NextLine::Idle => continue,
            NextLine::Eof => break,
        };

        summary.lines_read += 1;

        for event in session.advance(&line) {
            let result = match event {
                OutputEvent::FoundPid(pid) => writeln!(out, "Found app PID: {pid}"),
                OutputEvent::Line(text) => {
                    summary.lines_printed += 1;
                    writeln!(out, "{text}")
                }
                OutputEvent::RepeatNotice => writeln!(out, "{REPEAT_SUPPRESSION_NOTICE}"),
            };
            match result {
                Ok(()) => {}
                Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
                    tracing::debug!("Output sink closed; stopping");
                    return Ok(summary);
                }
                Err(e) => return Err(e),
            }
        }
    }

    tracing::info!(
        lines_read = summary.lines_read,
        lines_printed = summary.lines_printed,
        interrupted = summary.interrupted,
        "Monitoring run finished"
    );

    Ok(summary)
}
