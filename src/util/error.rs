// PidScope - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// The classification core never produces errors; everything here belongs
// to the startup boundary (configuration and I/O).

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all PidScope operations.
#[derive(Debug)]
pub enum MonitorError {
    /// Pattern overlay loading or validation failed.
    Config(ConfigError),

    /// I/O error with path context.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for MonitorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "Configuration error: {e}"),
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for MonitorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Io { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to pattern overlay loading and validation.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML file could not be parsed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// Overlay file exceeds the maximum allowed size.
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// An overlay table contains an empty pattern string, which would
    /// match every line.
    EmptyPattern { field: &'static str, index: usize },

    /// An overlay table exceeds the per-table pattern limit.
    TooManyPatterns {
        field: &'static str,
        count: usize,
        max: usize,
    },

    /// I/O error reading the overlay file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Failed to parse TOML '{}': {source}", path.display())
            }
            Self::FileTooLarge {
                path,
                size,
                max_size,
            } => write!(
                f,
                "Pattern file '{}' is {size} bytes, exceeds maximum of {max_size} bytes",
                path.display()
            ),
            Self::EmptyPattern { field, index } => {
                write!(f, "Pattern '{field}[{index}]' is empty")
            }
            Self::TooManyPatterns { field, count, max } => {
                write!(f, "'{field}' has {count} patterns, exceeds maximum of {max}")
            }
            Self::Io { path, source } => {
                write!(f, "Failed to read '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ConfigError> for MonitorError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Convenience type alias for PidScope results.
pub type Result<T> = std::result::Result<T, MonitorError>;
