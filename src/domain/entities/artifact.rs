//! Expected-artifact derivation
//!
//! The freezing tool names its output after the configured name; where it
//! lands depends on the bundling mode and the platform executable suffix.

use std::path::PathBuf;

use crate::config::BundleMode;

use super::workspace::Workspace;

/// Path the final executable is expected at after a successful build
pub fn expected_artifact(workspace: &Workspace, name: &str, mode: BundleMode) -> PathBuf {
    let file_name = format!("{}{}", name, std::env::consts::EXE_SUFFIX);
    match mode {
        BundleMode::OneFile => workspace.dist_dir.join(file_name),
        // One-dir mode nests the executable inside a directory of
        // supporting files named after the app.
        BundleMode::OneDir => workspace.dist_dir.join(name).join(file_name),
    }
}
