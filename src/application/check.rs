//! Check use case - workspace diagnostics
//!
//! Validates everything `frost build` is about to rely on, without running
//! anything: entry point, icon resource, isolated environment, and the
//! freezing tool inside it.

use crate::domain::entities::{Venv, Workspace};
use crate::domain::ports::FileSystem;

/// Severity of a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckLevel {
    Pass,
    Warning,
    Fatal,
}

/// One diagnostic finding
#[derive(Debug, Clone)]
pub struct CheckFinding {
    pub level: CheckLevel,
    pub subject: String,
    pub detail: String,
}

impl CheckFinding {
    fn pass(subject: &str, detail: String) -> Self {
        Self {
            level: CheckLevel::Pass,
            subject: subject.to_string(),
            detail,
        }
    }

    fn warning(subject: &str, detail: String) -> Self {
        Self {
            level: CheckLevel::Warning,
            subject: subject.to_string(),
            detail,
        }
    }

    fn fatal(subject: &str, detail: String) -> Self {
        Self {
            level: CheckLevel::Fatal,
            subject: subject.to_string(),
            detail,
        }
    }
}

/// Full diagnostics report
#[derive(Debug, Clone, Default)]
pub struct CheckReport {
    pub findings: Vec<CheckFinding>,
}

impl CheckReport {
    /// True when a build would be refused
    pub fn has_fatal(&self) -> bool {
        self.findings.iter().any(|f| f.level == CheckLevel::Fatal)
    }

    pub fn warning_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|f| f.level == CheckLevel::Warning)
            .count()
    }
}

/// Run all workspace checks
pub fn run_checks<FS: FileSystem>(
    workspace: &Workspace,
    tool_program: &str,
    fs: &FS,
) -> CheckReport {
    let mut report = CheckReport::default();

    if fs.exists(&workspace.entry) {
        report.findings.push(CheckFinding::pass(
            "entry point",
            workspace.entry.display().to_string(),
        ));
    } else {
        report.findings.push(CheckFinding::fatal(
            "entry point",
            format!("not found: {}", workspace.entry.display()),
        ));
    }

    match &workspace.icon {
        Some(icon) if fs.exists(icon) => {
            report
                .findings
                .push(CheckFinding::pass("icon", icon.display().to_string()));
        }
        Some(icon) => {
            report.findings.push(CheckFinding::fatal(
                "icon",
                format!("not found: {}", icon.display()),
            ));
        }
        None => {
            report.findings.push(CheckFinding::warning(
                "icon",
                "no icon configured; the artifact gets the platform default".to_string(),
            ));
        }
    }

    let venv = Venv::resolve(&workspace.venv_dir);
    if fs.exists(&venv.activation_script) {
        report.findings.push(CheckFinding::pass(
            "environment",
            venv.dir.display().to_string(),
        ));

        // The tool must live inside the environment; PATH fallback would
        // defeat the isolation the pipeline depends on.
        let tool_path = venv
            .scripts_dir
            .join(format!("{}{}", tool_program, std::env::consts::EXE_SUFFIX));
        if fs.exists(&tool_path) {
            report.findings.push(CheckFinding::pass(
                "freezing tool",
                tool_path.display().to_string(),
            ));
        } else {
            report.findings.push(CheckFinding::warning(
                "freezing tool",
                format!(
                    "'{}' not found in {}; install it into the environment",
                    tool_program,
                    venv.scripts_dir.display()
                ),
            ));
        }
    } else {
        report.findings.push(CheckFinding::fatal(
            "environment",
            format!(
                "activation script not found: {}",
                venv.activation_script.display()
            ),
        ));
    }

    report
}
