//! ToolRunner port - synchronous invocation of the freezing tool
//!
//! The pipeline waits for the tool to exit; there is no streaming control or
//! cancellation beyond the terminal's own interrupt handling.

use std::path::Path;

use crate::domain::services::ToolInvocation;
use crate::error::FrostResult;

/// Outcome of a tool run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolStatus {
    /// Exited with code 0
    Success,
    /// Exited non-zero
    Failed(i32),
    /// Terminated without an exit code (signal)
    Interrupted,
}

impl ToolStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, ToolStatus::Success)
    }

    /// Exit code to surface, if the tool produced one
    pub fn code(&self) -> Option<i32> {
        match self {
            ToolStatus::Success => Some(0),
            ToolStatus::Failed(c) => Some(*c),
            ToolStatus::Interrupted => None,
        }
    }
}

/// Abstract runner for the freezing tool
///
/// Implementations:
/// - `ProcessToolRunner` - spawns the real subprocess
/// - scripted mocks in use-case tests
pub trait ToolRunner {
    /// Run the tool in `cwd` and wait for it to exit.
    ///
    /// Launch failures (program not found) are errors; a non-zero exit is a
    /// normal `ToolStatus` so the use case can drive its failure state.
    fn run(&self, invocation: &ToolInvocation, cwd: &Path) -> FrostResult<ToolStatus>;
}
