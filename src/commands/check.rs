//! Check command handler

use std::path::Path;

use anyhow::Result;

use frost::application::check::{run_checks, CheckLevel};
use frost::domain::entities::Workspace;
use frost::infrastructure::LocalFs;

use super::load_config;

/// Execute the check command; returns the process exit code
pub fn cmd_check(root: &Path, json: bool) -> Result<i32> {
    let config = load_config(root, json)?;
    let workspace = Workspace::resolve(root, &config);

    let report = run_checks(&workspace, &config.tool.program, &LocalFs::new());

    if json {
        for finding in &report.findings {
            println!(
                "{}",
                serde_json::json!({
                    "event": "check",
                    "level": match finding.level {
                        CheckLevel::Pass => "pass",
                        CheckLevel::Warning => "warning",
                        CheckLevel::Fatal => "fatal",
                    },
                    "subject": finding.subject,
                    "detail": finding.detail,
                })
            );
        }
        println!(
            "{}",
            serde_json::json!({
                "event": "summary",
                "status": if report.has_fatal() { "fatal" } else { "ok" },
                "warnings": report.warning_count(),
            })
        );
    } else {
        for finding in &report.findings {
            let mark = match finding.level {
                CheckLevel::Pass => "✓",
                CheckLevel::Warning => "!",
                CheckLevel::Fatal => "✗",
            };
            println!("{} {:<14} {}", mark, finding.subject, finding.detail);
        }
        println!();
        if report.has_fatal() {
            eprintln!("Workspace is not buildable.");
        } else if report.warning_count() > 0 {
            println!("Workspace is buildable ({} warning(s)).", report.warning_count());
        } else {
            println!("Workspace is buildable.");
        }
    }

    Ok(if report.has_fatal() { 1 } else { 0 })
}
