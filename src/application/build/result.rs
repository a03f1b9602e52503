//! Build result types

use std::path::PathBuf;

use crate::application::clean::CleanResult;
use crate::domain::services::ToolInvocation;

/// Report for a completed (or previewed) pipeline run
#[derive(Debug, Clone)]
pub struct BuildReport {
    /// Final artifact path (expected path in dry-run mode)
    pub artifact: PathBuf,
    /// The tool invocation that ran (or would run)
    pub invocation: ToolInvocation,
    /// Pre-build slate reset
    pub pre_clean: CleanResult,
    /// Post-build transient cleanup; absent in dry-run mode
    pub post_clean: Option<CleanResult>,
    /// Whether this was a preview only
    pub dry_run: bool,
}

impl BuildReport {
    /// Total artifacts removed across both cleanup passes
    pub fn cleaned_count(&self) -> usize {
        self.pre_clean.removed_count()
            + self
                .post_clean
                .as_ref()
                .map(CleanResult::removed_count)
                .unwrap_or(0)
    }
}
