//! Clean result types

use std::path::PathBuf;

/// Outcome for one cleanup target
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanOutcome {
    /// Path existed and was removed (or would be, in dry run)
    Removed,
    /// Path was already absent; a no-op, not an error
    Absent,
}

impl std::fmt::Display for CleanOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CleanOutcome::Removed => write!(f, "removed"),
            CleanOutcome::Absent => write!(f, "absent"),
        }
    }
}

/// A cleanup target with its outcome
#[derive(Debug, Clone)]
pub struct CleanedPath {
    pub path: PathBuf,
    pub outcome: CleanOutcome,
}

/// Result of a clean operation
#[derive(Debug, Clone, Default)]
pub struct CleanResult {
    /// Per-target outcomes, in processing order
    pub paths: Vec<CleanedPath>,
    /// Removal failures
    pub errors: Vec<String>,
}

impl CleanResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, path: PathBuf, outcome: CleanOutcome) {
        self.paths.push(CleanedPath { path, outcome });
    }

    pub fn add_error(&mut self, error: String) {
        self.errors.push(error);
    }

    /// Count of targets actually removed
    pub fn removed_count(&self) -> usize {
        self.paths
            .iter()
            .filter(|p| p.outcome == CleanOutcome::Removed)
            .count()
    }

    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}
