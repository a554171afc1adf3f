//! Error types with fix suggestions
//!
//! Every fallible operation in the toolkit returns [`ShapekitError`].
//! Nothing is retried or logged-and-dropped: errors surface to the caller.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Trait for errors that provide fix suggestions
pub trait FixSuggestion {
    fn fix_suggestion(&self) -> Option<&str>;
}

/// Result alias used throughout the crate
pub type Result<T, E = ShapekitError> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum ShapekitError {
    // ─────────────────────────────────────────────────────────────
    // Dispatch (SK-010)
    // ─────────────────────────────────────────────────────────────

    #[error("SK-010: No case matched subject {subject}")]
    UnmatchedCase { subject: String },

    // ─────────────────────────────────────────────────────────────
    // File loading (SK-020 to SK-023)
    // ─────────────────────────────────────────────────────────────

    #[error("SK-020: Cannot read '{}': {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("SK-021: Invalid JSON in '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("SK-022: Unknown text encoding '{name}'")]
    UnknownEncoding { name: String },

    #[error("SK-023: Unknown read flag '{flag}'")]
    UnknownReadFlag { flag: String },

    // ─────────────────────────────────────────────────────────────
    // Shell commands (SK-030 to SK-032)
    // ─────────────────────────────────────────────────────────────

    #[error("SK-030: Failed to execute command '{command}': {source}")]
    CommandSpawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("SK-031: Command '{command}' failed ({}): {stderr}", exit_label(.code))]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
        stdout: String,
    },

    #[error("SK-032: No shell command named '{name}'")]
    UnknownCommand { name: String },

    // ─────────────────────────────────────────────────────────────
    // Container shapes (SK-040 to SK-043)
    // ─────────────────────────────────────────────────────────────

    #[error("SK-040: Expected an object or array, got {found}")]
    InvalidInput { found: &'static str },

    #[error("SK-041: Key index {index} is out of bounds for entry {entry} of length {len}")]
    IndexOutOfBounds { index: i64, len: usize, entry: usize },

    #[error("SK-042: Unknown type tag '{tag}'")]
    UnknownTypeTag { tag: String },

    #[error("SK-043: Expected an array, got {found}")]
    NotAnArray { found: &'static str },

    // ─────────────────────────────────────────────────────────────
    // Configuration (SK-050)
    // ─────────────────────────────────────────────────────────────

    #[error("SK-050: Invalid config '{}': {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit status {}", code),
        None => "terminated by signal".to_string(),
    }
}

impl FixSuggestion for ShapekitError {
    fn fix_suggestion(&self) -> Option<&str> {
        match self {
            ShapekitError::UnmatchedCase { .. } => {
                Some("Register a case for this value or supply a fallback handler")
            }
            ShapekitError::FileAccess { .. } => Some("Check file path, permissions and encoding"),
            ShapekitError::Parse { .. } => Some("Ensure the file is valid JSON (try parsing with jq)"),
            ShapekitError::UnknownEncoding { .. } => Some("Use one of: utf8, latin1"),
            ShapekitError::UnknownReadFlag { .. } => Some("Use one of: r, r+"),
            ShapekitError::CommandSpawn { .. } => Some("Check the configured shell program exists"),
            ShapekitError::CommandFailed { .. } => Some("Run the command by hand and inspect stderr"),
            ShapekitError::UnknownCommand { .. } => {
                Some("Declare the command under commands: in the config file")
            }
            ShapekitError::InvalidInput { .. } => Some("Pass a JSON object (or array) as input"),
            ShapekitError::IndexOutOfBounds { .. } => {
                Some("Use a key index between 0 and the shortest entry's length minus one")
            }
            ShapekitError::UnknownTypeTag { .. } => {
                Some("Use one of: null, boolean, number, string, object")
            }
            ShapekitError::NotAnArray { .. } => Some("Pass a JSON array of [key, value...] entries"),
            ShapekitError::Config { .. } => Some("Check YAML syntax: indentation and quoting"),
        }
    }
}

/// Short JSON type name used in error messages
pub fn kind_name(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
