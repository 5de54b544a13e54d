// PidScope - core/parser.rs
//
// Logcat line parsing: extracts the (pid, level, tag) triple from the
// fixed textual shape of a logcat line.
// Core layer: pure logic, no I/O.

use crate::core::model::ParsedLine;
use regex::Regex;
use std::sync::OnceLock;

/// The fixed logcat shape: PID, a second numeric field (thread id,
/// discarded), a single uppercase level letter, then a tag running up to
/// the first colon. The PID must sit at the start of the line or after
/// whitespace so digits embedded in a message are never mistaken for one.
fn line_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?:^|\s)(\d+)\s+\d+\s+([A-Z])\s+([^:]+)")
            .expect("line_pattern: invalid regex")
    })
}

/// Extract structured fields from a raw logcat line.
///
/// Returns `None` when the line does not match the logcat shape. Such
/// lines are never tracked as new PIDs and never matched against the
/// PID/tag whitelist, but remain subject to the raw-text classification
/// rules (crash markers, noisy deny list, crash-mode passthrough).
pub fn parse_line(line: &str) -> Option<ParsedLine> {
    let caps = line_pattern().captures(line)?;

    // All three groups are guaranteed by the pattern; level is a single
    // [A-Z] char by construction.
    let pid = caps[1].to_string();
    let level = caps[2].chars().next()?;
    let tag = caps[3].trim().to_string();

    Some(ParsedLine { pid, level, tag })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_threadtime_line() {
        let line = "03-15 10:01:01.000  4711  4711 I GlobeTrotter: Application starting";
        let parsed = parse_line(line).expect("line should parse");
        assert_eq!(parsed.pid, "4711");
        assert_eq!(parsed.level, 'I');
        assert_eq!(parsed.tag, "GlobeTrotter");
    }

    #[test]
    fn parses_line_without_timestamp_prefix() {
        // A pre-trimmed line starting directly at the PID field.
        let line = "1234  5678 E MyTag: Start proc 1234:com.mycompany.GlobeTrotter";
        let parsed = parse_line(line).expect("line should parse");
        assert_eq!(parsed.pid, "1234");
        assert_eq!(parsed.level, 'E');
        assert_eq!(parsed.tag, "MyTag");
    }

    #[test]
    fn tag_is_trimmed() {
        let line = "  999  1000 W  ActivityManager : something happened";
        let parsed = parse_line(line).expect("line should parse");
        assert_eq!(parsed.tag, "ActivityManager");
    }

    #[test]
    fn tag_without_colon_runs_to_end_of_line() {
        let line = "  42  42 D chatty uid=1000 expire 3 lines";
        let parsed = parse_line(line).expect("line should parse");
        assert_eq!(parsed.pid, "42");
        assert_eq!(parsed.tag, "chatty uid=1000 expire 3 lines");
    }

    #[test]
    fn crash_banner_is_unparseable() {
        assert!(parse_line("--------- beginning of crash").is_none());
    }

    #[test]
    fn prose_is_unparseable() {
        assert!(parse_line("some free-form text with no pid fields").is_none());
        assert!(parse_line("").is_none());
    }

    #[test]
    fn digits_inside_words_are_not_a_pid() {
        // "abc123 456 E Tag:" has no whitespace-delimited leading pid.
        assert!(parse_line("abc123def 456 E Tag: message").is_none());
    }
}
