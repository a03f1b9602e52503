//! Clean command handler

use std::path::Path;

use anyhow::Result;

use frost::application::clean::{CleanOptions, CleanOutcome, CleanUseCase};
use frost::domain::entities::Workspace;
use frost::infrastructure::LocalFs;

use super::load_config;

/// Execute the clean command; returns the process exit code
pub fn cmd_clean(
    root: &Path,
    keep_dist: bool,
    dry_run: bool,
    json: bool,
    verbose: u8,
) -> Result<i32> {
    let config = load_config(root, json)?;
    let workspace = Workspace::resolve(root, &config);

    let options = CleanOptions::new()
        .with_dist(!keep_dist)
        .with_dry_run(dry_run);

    let use_case = CleanUseCase::new(LocalFs::new());
    let result = use_case.execute(&workspace, &options);

    if json {
        for cleaned in &result.paths {
            println!(
                "{}",
                serde_json::json!({
                    "event": "cleaned",
                    "path": cleaned.path.display().to_string(),
                    "removed": cleaned.outcome == CleanOutcome::Removed,
                    "dry_run": dry_run,
                })
            );
        }
        println!(
            "{}",
            serde_json::json!({
                "event": "summary",
                "status": if result.is_success() { "success" } else { "error" },
                "removed": result.removed_count(),
                "errors": result.errors.len(),
            })
        );
    } else {
        for cleaned in &result.paths {
            match cleaned.outcome {
                CleanOutcome::Removed => {
                    let verb = if dry_run { "would remove" } else { "removed" };
                    println!("{} {}", verb, cleaned.path.display());
                }
                CleanOutcome::Absent => {
                    if verbose > 0 {
                        println!("absent  {}", cleaned.path.display());
                    }
                }
            }
        }
        if result.removed_count() == 0 {
            println!("Nothing to clean.");
        }
        for error in &result.errors {
            eprintln!("error: {}", error);
        }
    }

    Ok(if result.is_success() { 0 } else { 1 })
}
