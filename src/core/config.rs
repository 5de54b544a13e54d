// PidScope - core/config.rs
//
// Filter configuration: the built-in pattern tables plus an optional
// user-supplied TOML overlay that extends them.
// Core layer: accepts TOML strings, never touches the filesystem.
// I/O is handled by the caller, which feeds file content here.

use crate::util::constants;
use crate::util::error::ConfigError;
use serde::Deserialize;
use std::path::Path;

// =============================================================================
// Runtime configuration
// =============================================================================

/// Immutable filter configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct FilterConfig {
    /// Package name to monitor.
    pub package: String,

    /// Tags exempted from PID-based filtering.
    pub whitelist_tags: Vec<String>,

    /// Deny patterns applied after a whitelist match.
    pub ignore_patterns: Vec<String>,

    /// Always-deny patterns applied regardless of PID or tag.
    pub noisy_patterns: Vec<String>,

    /// Backup-subsystem patterns dropped before classification.
    pub backup_patterns: Vec<String>,

    /// Whether the backup pre-filter is active.
    pub backup_filter: bool,

    /// Maximum consecutive identical lines to show; 0 = unlimited.
    pub max_repeats: u32,

    /// Reserved for reduced filtering; threaded through but currently
    /// without effect on classification.
    pub verbose: bool,
}

impl FilterConfig {
    /// Build a configuration for `package` from the built-in tables.
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            whitelist_tags: to_owned_table(constants::WHITELIST_TAGS),
            ignore_patterns: to_owned_table(constants::IGNORE_PATTERNS),
            noisy_patterns: to_owned_table(constants::NOISY_PATTERNS),
            backup_patterns: to_owned_table(constants::BACKUP_PATTERNS),
            backup_filter: true,
            max_repeats: constants::DEFAULT_MAX_REPEATS,
            verbose: false,
        }
    }

    /// Extend the built-in tables with a validated overlay.
    ///
    /// Overlay entries are appended after the built-ins, preserving the
    /// built-in ordering for earlier rules.
    pub fn apply_overlay(&mut self, overlay: PatternOverlay) {
        tracing::debug!(
            whitelist_tags = overlay.whitelist_tags.len(),
            ignore_patterns = overlay.ignore_patterns.len(),
            "Applying pattern overlay"
        );
        self.whitelist_tags.extend(overlay.whitelist_tags);
        self.ignore_patterns.extend(overlay.ignore_patterns);
    }
}

fn to_owned_table(table: &[&str]) -> Vec<String> {
    table.iter().map(|s| s.to_string()).collect()
}

// =============================================================================
// TOML overlay (raw input)
// =============================================================================

/// Raw pattern overlay as deserialised from a .toml file.
///
/// Both tables are optional; present entries extend (never replace) the
/// built-in tables.
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
pub struct PatternOverlay {
    /// Extra tags exempted from PID-based filtering.
    #[serde(default)]
    pub whitelist_tags: Vec<String>,

    /// Extra deny patterns checked after a whitelist match.
    #[serde(default)]
    pub ignore_patterns: Vec<String>,
}

/// Parse a TOML string into a `PatternOverlay`.
///
/// `source_path` is used for error messages only (not for I/O).
pub fn parse_overlay_toml(
    toml_content: &str,
    source_path: &Path,
) -> Result<PatternOverlay, ConfigError> {
    toml::from_str(toml_content).map_err(|e| ConfigError::TomlParse {
        path: source_path.to_path_buf(),
        source: e,
    })
}

/// Validate an overlay before it is applied.
///
/// Rejects empty pattern strings (they would match every line) and
/// tables beyond the per-table limit.
pub fn validate_overlay(overlay: &PatternOverlay) -> Result<(), ConfigError> {
    validate_table(&overlay.whitelist_tags, "whitelist_tags")?;
    validate_table(&overlay.ignore_patterns, "ignore_patterns")?;
    Ok(())
}

fn validate_table(table: &[String], field: &'static str) -> Result<(), ConfigError> {
    if table.len() > constants::MAX_OVERLAY_PATTERNS {
        return Err(ConfigError::TooManyPatterns {
            field,
            count: table.len(),
            max: constants::MAX_OVERLAY_PATTERNS,
        });
    }
    for (index, pattern) in table.iter().enumerate() {
        if pattern.trim().is_empty() {
            return Err(ConfigError::EmptyPattern { field, index });
        }
    }
    Ok(())
}
