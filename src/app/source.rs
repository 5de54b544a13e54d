// PidScope - app/source.rs
//
// Input sources: a single "next line or end-of-stream" pull interface
// over the two ways logcat output arrives.
//
//   - File: an already-captured log, read line by line to the end.
//   - Live: the stream piped into stdin by a running `adb logcat`. A
//     background reader thread pushes decoded lines into an mpsc channel;
//     the driver waits on the channel with a short timeout so it can
//     check the interrupt flag between lines. The polling/wait behaviour
//     is an implementation detail of this variant, not of the driver.
//
// Encoding: lines are decoded as lossy UTF-8 so a stray binary byte in
// the stream cannot abort a monitoring run.

use crate::util::constants::LIVE_POLL_INTERVAL_MS;
use crate::util::error::MonitorError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::mpsc;
use std::time::Duration;

/// One pull from an input source.
#[derive(Debug)]
pub enum NextLine {
    /// A complete line, newline stripped.
    Line(String),

    /// No line arrived within the poll interval (live source only).
    /// The driver uses this to check for interruption.
    Idle,

    /// The source is exhausted: end of file, or the producing process
    /// closed the stream.
    Eof,
}

/// A source of newline-terminated text, consumed strictly forward.
pub enum LineSource {
    File(BufReader<File>),
    Live(mpsc::Receiver<String>),
}

impl LineSource {
    /// Open a captured log file for sequential reading.
    pub fn file(path: &Path) -> Result<Self, MonitorError> {
        let file = File::open(path).map_err(|e| MonitorError::Io {
            path: path.to_path_buf(),
            operation: "open",
            source: e,
        })?;
        tracing::debug!(file = %path.display(), "Reading from log file");
        Ok(Self::File(BufReader::new(file)))
    }

    /// Attach to the live stream on stdin.
    ///
    /// Spawns the reader thread immediately. The thread exits when stdin
    /// closes or the receiver is dropped; on interrupt it is simply left
    /// blocked in its read and torn down with the process.
    pub fn stdin_live() -> Self {
        let (tx, rx) = mpsc::channel();

        std::thread::spawn(move || {
            let stdin = std::io::stdin();
            let mut reader = stdin.lock();
            let mut buf = Vec::new();
            loop {
                buf.clear();
                match reader.read_until(b'\n', &mut buf) {
                    Ok(0) => break,
                    Ok(_) => {
                        let line = String::from_utf8_lossy(&buf);
                        if tx.send(line.trim_end_matches(['\r', '\n']).to_string()).is_err() {
                            // Driver gone — stop reading.
                            break;
                        }
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "Live stream read error");
                        break;
                    }
                }
            }
        });

        tracing::debug!("Reading from live stream on stdin");
        Self::Live(rx)
    }

    /// Pull the next line, an idle tick, or end-of-stream.
    ///
    /// Blocks for at most `LIVE_POLL_INTERVAL_MS` on the live variant;
    /// the file variant never reports `Idle`.
    pub fn next_line(&mut self) -> std::io::Result<NextLine> {
        match self {
            Self::File(reader) => {
                let mut buf = Vec::new();
                if reader.read_until(b'\n', &mut buf)? == 0 {
                    return Ok(NextLine::Eof);
                }
                let line = String::from_utf8_lossy(&buf);
                Ok(NextLine::Line(
                    line.trim_end_matches(['\r', '\n']).to_string(),
                ))
            }
            Self::Live(rx) => match rx.recv_timeout(Duration::from_millis(LIVE_POLL_INTERVAL_MS)) {
                Ok(line) => Ok(NextLine::Line(line)),
                Err(mpsc::RecvTimeoutError::Timeout) => Ok(NextLine::Idle),
                Err(mpsc::RecvTimeoutError::Disconnected) => Ok(NextLine::Eof),
            },
        }
    }
}
