//! Error types for Frost
//!
//! Uses `thiserror` for library errors; the binary boundary wraps these in
//! `anyhow` and maps them to exit codes.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Frost operations
pub type FrostResult<T> = Result<T, FrostError>;

/// Main error type for Frost operations
#[derive(Error, Debug)]
pub enum FrostError {
    /// Isolated environment not found at the expected location
    #[error("isolated environment not found: expected activation script at {expected}\nCreate it with: python -m venv {venv_dir}")]
    VenvMissing { expected: PathBuf, venv_dir: PathBuf },

    /// Entry-point file missing from the workspace
    #[error("entry point not found: {path}")]
    EntryPointMissing { path: PathBuf },

    /// Configured icon resource missing from the workspace
    #[error("icon resource not found: {path}")]
    IconMissing { path: PathBuf },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The freezing tool could not be spawned at all
    #[error("failed to launch '{program}': {source}")]
    ToolLaunch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The freezing tool ran but exited non-zero
    #[error("{}", tool_failed_message(.program, .code))]
    ToolFailed { program: String, code: Option<i32> },

    /// The tool reported success but the expected artifact is absent
    #[error("build reported success but artifact is missing: {expected}")]
    ArtifactMissing { expected: PathBuf },
}

fn tool_failed_message(program: &str, code: &Option<i32>) -> String {
    match code {
        Some(c) => format!("'{}' failed with exit code {}", program, c),
        None => format!("'{}' failed with a signal", program),
    }
}

impl FrostError {
    /// Exit code for this error: the tool's own code is propagated,
    /// everything else is 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            FrostError::ToolFailed { code: Some(c), .. } => *c,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_error_display_venv_missing() {
        let err = FrostError::VenvMissing {
            expected: PathBuf::from(".venv/bin/activate"),
            venv_dir: PathBuf::from(".venv"),
        };
        let msg = err.to_string();
        assert!(msg.contains(".venv/bin/activate"));
        assert!(msg.contains("python -m venv"));
    }

    #[test]
    fn test_error_display_tool_failed() {
        let err = FrostError::ToolFailed {
            program: "pyinstaller".to_string(),
            code: Some(2),
        };
        assert_eq!(err.to_string(), "'pyinstaller' failed with exit code 2");
    }

    #[test]
    fn test_error_display_tool_killed_by_signal() {
        let err = FrostError::ToolFailed {
            program: "pyinstaller".to_string(),
            code: None,
        };
        assert_eq!(err.to_string(), "'pyinstaller' failed with a signal");
    }

    #[test]
    fn test_exit_code_propagates_tool_code() {
        let err = FrostError::ToolFailed {
            program: "pyinstaller".to_string(),
            code: Some(3),
        };
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_exit_code_defaults_to_one() {
        let err = FrostError::EntryPointMissing {
            path: PathBuf::from("main.py"),
        };
        assert_eq!(err.exit_code(), 1);
    }
}
