//! Workspace entity
//!
//! The project root plus every path the pipeline touches, resolved once from
//! configuration. Holds the pre-flight invariant: entry point and icon must
//! exist before packaging starts.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::domain::ports::FileSystem;
use crate::error::{FrostError, FrostResult};

/// Resolved workspace paths for one pipeline run
#[derive(Debug, Clone)]
pub struct Workspace {
    /// Project root directory
    pub root: PathBuf,
    /// Entry-point script
    pub entry: PathBuf,
    /// Icon resource, when configured
    pub icon: Option<PathBuf>,
    /// Isolated environment directory
    pub venv_dir: PathBuf,
    /// Output directory for the final artifact
    pub dist_dir: PathBuf,
    /// Transient work directory
    pub build_dir: PathBuf,
}

impl Workspace {
    /// Resolve workspace paths from configuration, relative to `root`
    pub fn resolve(root: &Path, config: &Config) -> Self {
        Self {
            root: root.to_path_buf(),
            entry: root.join(&config.project.entry),
            icon: config.bundle.icon.as_ref().map(|p| root.join(p)),
            venv_dir: root.join(&config.paths.venv),
            dist_dir: root.join(&config.paths.dist),
            build_dir: root.join(&config.paths.build),
        }
    }

    /// Check the inputs the freezing tool will consume.
    ///
    /// Runs before any destructive stage so a bad workspace never triggers
    /// cleanup of prior outputs.
    pub fn validate_inputs<FS: FileSystem>(&self, fs: &FS) -> FrostResult<()> {
        if !fs.exists(&self.entry) {
            return Err(FrostError::EntryPointMissing {
                path: self.entry.clone(),
            });
        }
        if let Some(icon) = &self.icon {
            if !fs.exists(icon) {
                return Err(FrostError::IconMissing { path: icon.clone() });
            }
        }
        Ok(())
    }
}
