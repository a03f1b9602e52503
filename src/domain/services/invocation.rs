//! Freezing-tool invocation planning
//!
//! Pure construction of the argument vector from configuration. Nothing here
//! touches the filesystem or spawns anything, which keeps the exact command
//! line unit-testable.

use crate::config::{BundleMode, Config};

/// A fully planned tool invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvocation {
    /// Program name, resolved via the activated environment's PATH
    pub program: String,
    /// Arguments in final order
    pub args: Vec<String>,
}

impl ToolInvocation {
    /// Render as a single line for logs and dry-run output
    pub fn display_line(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            if arg.contains(' ') {
                line.push('"');
                line.push_str(arg);
                line.push('"');
            } else {
                line.push_str(arg);
            }
        }
        line
    }
}

/// Plan the freezing-tool command line for this configuration.
///
/// Paths are passed relative to the project root; the runner sets the
/// working directory accordingly, so the spec file lands in the root where
/// the cleaner expects it.
pub fn plan_invocation(config: &Config) -> ToolInvocation {
    let mut args: Vec<String> = Vec::new();

    // Never prompt about overwriting; the cleaner guarantees a clean slate
    // but the tool must not block a CI run either way.
    args.push("--noconfirm".to_string());

    match config.bundle.mode {
        BundleMode::OneFile => args.push("--onefile".to_string()),
        BundleMode::OneDir => args.push("--onedir".to_string()),
    }

    if config.bundle.windowed {
        args.push("--windowed".to_string());
    }

    if let Some(icon) = &config.bundle.icon {
        args.push("--icon".to_string());
        args.push(icon.display().to_string());
    }

    args.push("--name".to_string());
    args.push(config.project.name.clone());

    args.push("--distpath".to_string());
    args.push(config.paths.dist.display().to_string());

    args.push("--workpath".to_string());
    args.push(config.paths.build.display().to_string());

    args.push("--specpath".to_string());
    args.push(".".to_string());

    args.extend(config.tool.extra_args.iter().cloned());

    args.push(config.project.entry.display().to_string());

    ToolInvocation {
        program: config.tool.program.clone(),
        args,
    }
}
