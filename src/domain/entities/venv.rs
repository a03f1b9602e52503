//! Isolated-environment entity
//!
//! Pure path derivation for a Python virtual environment. The platform
//! decides where the activation script and the scripts directory live;
//! actually wiring the environment into a subprocess is infrastructure.

use std::path::{Path, PathBuf};

use crate::domain::ports::FileSystem;
use crate::error::{FrostError, FrostResult};

/// A resolved (but not yet verified) virtual environment
#[derive(Debug, Clone)]
pub struct Venv {
    /// Environment root directory
    pub dir: PathBuf,
    /// Directory holding the interpreter and entry scripts
    pub scripts_dir: PathBuf,
    /// Activation script whose presence marks a usable environment
    pub activation_script: PathBuf,
}

impl Venv {
    /// Derive the environment layout for the current platform
    pub fn resolve(dir: &Path) -> Self {
        let scripts_dir = if cfg!(windows) {
            dir.join("Scripts")
        } else {
            dir.join("bin")
        };
        let activation_script = if cfg!(windows) {
            scripts_dir.join("activate.bat")
        } else {
            scripts_dir.join("activate")
        };
        Self {
            dir: dir.to_path_buf(),
            scripts_dir,
            activation_script,
        }
    }

    /// Verify the environment exists; the pipeline fails fast here, before
    /// any destructive stage runs.
    pub fn verify<FS: FileSystem>(&self, fs: &FS) -> FrostResult<()> {
        if !fs.exists(&self.activation_script) {
            return Err(FrostError::VenvMissing {
                expected: self.activation_script.clone(),
                venv_dir: self.dir.clone(),
            });
        }
        Ok(())
    }
}
