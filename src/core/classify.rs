// PidScope - core/classify.rs
//
// Line classification: the priority-ordered rules that decide whether a
// line is shown, dropped, or switches the session into crash mode.
// Pure function of (line, parsed fields, read-only session state, config);
// state mutation happens in the session filter.
// Core layer: pure logic, no I/O.

use crate::core::config::FilterConfig;
use crate::core::model::{Action, Classification, ParsedLine, SessionState};
use crate::util::constants;

/// Classify one raw line.
///
/// Rules are evaluated in strict priority order; the first match wins:
///
/// 1. empty line -> suppress
/// 2. new app PID announcement -> print, report the PID
/// 3. crash indicator -> print (section-begin marker also enters crash mode)
/// 4. session already in crash mode -> print
/// 5. always-deny noisy pattern -> suppress
/// 6. tracked PID or whitelisted tag -> print, unless an ignore pattern
///    matches (deny dominates the whitelist)
/// 7. default -> suppress
///
/// PID discovery is deliberately checked before the deny rules: the line
/// announcing a newly starting process must never be swallowed by them.
/// Unparsed lines can only hit the raw-text rules (3, 4, 5, 7).
pub fn classify(
    raw: &str,
    parsed: Option<&ParsedLine>,
    state: &SessionState,
    config: &FilterConfig,
) -> Classification {
    if raw.is_empty() {
        return Classification::suppress();
    }

    if let Some(line) = parsed {
        if !state.tracked_pids.contains(&line.pid)
            && raw.contains(config.package.as_str())
            && is_pid_announcement(raw, &config.package, &line.pid)
        {
            return Classification {
                action: Action::Print,
                enters_crash: false,
                new_pid: Some(line.pid.clone()),
            };
        }
    }

    if is_crash_related(raw, &config.package) {
        return Classification {
            action: Action::Print,
            enters_crash: raw.contains(constants::CRASH_SECTION_BEGIN),
            new_pid: None,
        };
    }

    if state.in_crash_section {
        return Classification::print();
    }

    if contains_any(raw, &config.noisy_patterns) {
        return Classification::suppress();
    }

    if let Some(line) = parsed {
        if state.tracked_pids.contains(&line.pid)
            || config.whitelist_tags.iter().any(|t| *t == line.tag)
        {
            if contains_any(raw, &config.ignore_patterns) {
                return Classification::suppress();
            }
            return Classification::print();
        }
    }

    Classification::suppress()
}

/// Check whether a line announces `pid` as a process of the monitored
/// package. The caller has already established that the package name
/// appears in the line and that the PID is not yet tracked.
fn is_pid_announcement(raw: &str, package: &str, pid: &str) -> bool {
    // Process start for our package
    raw.contains(&format!("Start proc {pid}:{package}"))
        // Activity manager starting our package
        || raw.contains(&format!("pid={pid}"))
        // Activity manager with different format
        || (raw.contains(&format!("pid {pid}"))
            && raw.contains(constants::ANNOUNCEMENT_FOR_KEYWORD))
        // Monkey test runner
        || raw.contains(constants::MONKEY_MARKER)
        // Our main activity logs
        || raw.contains(constants::DEBUG_ACTIVITY_MARKER)
        // Explicit process name mention
        || raw.contains(&format!("Process {package} (pid {pid})"))
}

/// Check whether a line is crash evidence.
///
/// Operates on raw text so crash output that does not match the logcat
/// shape (native backtraces, the section banner itself) is still caught.
fn is_crash_related(raw: &str, package: &str) -> bool {
    raw.contains(constants::CRASH_SECTION_BEGIN)
        || constants::CRASH_MARKERS.iter().any(|m| raw.contains(m))
        || (raw.contains(package)
            && constants::PACKAGE_CRASH_MARKERS.iter().any(|m| raw.contains(m)))
        || (raw.contains(constants::LIBC_TAG)
            && constants::LIBC_CRASH_DETAILS.iter().any(|m| raw.contains(m)))
        || (raw.contains(constants::DEBUG_REPORT_TAG)
            && raw.contains(constants::DEBUG_REPORT_DETAIL))
}

/// Plain case-sensitive substring containment against an ordered table.
fn contains_any(raw: &str, patterns: &[String]) -> bool {
    patterns.iter().any(|p| raw.contains(p.as_str()))
}
