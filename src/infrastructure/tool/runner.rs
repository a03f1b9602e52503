//! Process-based tool runner
//!
//! Spawns the freezing tool inside the activated environment and waits for
//! it synchronously. Stdio is inherited so the tool's own progress output
//! streams straight to the terminal.

use std::path::Path;
use std::process::Command;

use crate::domain::entities::Venv;
use crate::domain::ports::{ToolRunner, ToolStatus};
use crate::domain::services::ToolInvocation;
use crate::error::{FrostError, FrostResult};
use crate::infrastructure::env::activate;

/// Runs the freezing tool as a real subprocess
pub struct ProcessToolRunner {
    venv: Venv,
    quiet: bool,
}

impl ProcessToolRunner {
    /// Create a runner that activates `venv` for every invocation
    pub fn new(venv: Venv) -> Self {
        Self { venv, quiet: false }
    }

    /// Suppress the tool's stdout (used in JSON mode, where the event
    /// stream on stdout must stay machine-parseable). The tool's stderr is
    /// always inherited: its diagnostics must reach the user on failure.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }
}

impl ToolRunner for ProcessToolRunner {
    fn run(&self, invocation: &ToolInvocation, cwd: &Path) -> FrostResult<ToolStatus> {
        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args).current_dir(cwd);
        activate(&mut cmd, &self.venv);

        if self.quiet {
            cmd.stdout(std::process::Stdio::null());
        }

        let status = cmd.status().map_err(|source| FrostError::ToolLaunch {
            program: invocation.program.clone(),
            source,
        })?;

        Ok(if status.success() {
            ToolStatus::Success
        } else {
            match status.code() {
                Some(code) => ToolStatus::Failed(code),
                None => ToolStatus::Interrupted,
            }
        })
    }
}
