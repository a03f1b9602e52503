//! Build command handler
//!
//! Wires config loading, the build use case, and the event sink; maps
//! pipeline errors to the process exit code.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;

use frost::application::build::{BuildOptions, BuildUseCase};
use frost::config::{BundleMode, Config};
use frost::domain::entities::{Venv, Workspace};
use frost::domain::ports::BuildEventSink;
use frost::infrastructure::{ConsoleEventSink, JsonEventSink, LocalFs, ProcessToolRunner};

use super::load_config;

/// CLI overrides applied on top of `frost.toml`
#[derive(Debug, Default)]
pub struct BuildOverrides {
    pub name: Option<String>,
    pub entry: Option<PathBuf>,
    pub dist: Option<PathBuf>,
    pub onedir: bool,
    pub console: bool,
    pub no_icon: bool,
}

impl BuildOverrides {
    fn apply(&self, config: &mut Config) {
        if let Some(name) = &self.name {
            config.project.name = name.clone();
        }
        if let Some(entry) = &self.entry {
            config.project.entry = entry.clone();
        }
        if let Some(dist) = &self.dist {
            config.paths.dist = dist.clone();
        }
        if self.onedir {
            config.bundle.mode = BundleMode::OneDir;
        }
        if self.console {
            config.bundle.windowed = false;
        }
        if self.no_icon {
            config.bundle.icon = None;
        }
    }
}

/// Execute the build command; returns the process exit code
pub fn cmd_build(
    root: &Path,
    overrides: &BuildOverrides,
    no_clean_dist: bool,
    dry_run: bool,
    json: bool,
    verbose: u8,
) -> Result<i32> {
    let mut config = load_config(root, json)?;
    overrides.apply(&mut config);

    let workspace = Workspace::resolve(root, &config);
    let venv = Venv::resolve(&workspace.venv_dir);

    let runner = ProcessToolRunner::new(venv).quiet(json);
    let use_case = BuildUseCase::new(LocalFs::new(), runner);

    let events: Arc<dyn BuildEventSink> = if json {
        Arc::new(JsonEventSink::new())
    } else {
        Arc::new(ConsoleEventSink::new(verbose))
    };

    let options = BuildOptions::new()
        .with_dry_run(dry_run)
        .with_clean_dist_before(!no_clean_dist);

    match use_case.execute_with_events(&workspace, &config, &options, events) {
        Ok(report) => {
            if json {
                let summary = serde_json::json!({
                    "event": "summary",
                    "status": "success",
                    "artifact": report.artifact.display().to_string(),
                    "cleaned": report.cleaned_count(),
                    "dry_run": report.dry_run,
                });
                println!("{}", summary);
            } else if report.dry_run {
                println!();
                println!("Dry run. Would execute:");
                println!("  {}", report.invocation.display_line());
                println!("Expected artifact: {}", report.artifact.display());
            } else {
                println!();
                println!("Artifact: {}", report.artifact.display());
            }
            Ok(0)
        }
        // The event sink already reported the failure; close the JSON
        // stream with the same terminal summary the success path emits.
        Err(e) => {
            if json {
                let summary = serde_json::json!({
                    "event": "summary",
                    "status": "failure",
                    "exit_code": e.exit_code(),
                    "message": e.to_string(),
                });
                println!("{}", summary);
            }
            Ok(e.exit_code())
        }
    }
}
