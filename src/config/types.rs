//! Configuration type definitions
//!
//! Defaults mirror the values the pipeline was originally hard-coded with:
//! `main.py` entry, `PDF Letterhead Merger` output name, one-file windowed
//! bundle with `icon.ico`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::FrostResult;

use super::loader::{self, ConfigWarning};

/// Bundling mode for the freezing tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BundleMode {
    /// One self-contained executable
    #[default]
    OneFile,
    /// A directory of supporting files next to the executable
    OneDir,
}

impl std::fmt::Display for BundleMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BundleMode::OneFile => write!(f, "onefile"),
            BundleMode::OneDir => write!(f, "onedir"),
        }
    }
}

/// Project identity configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Entry-point script handed to the freezing tool
    #[serde(default = "default_entry")]
    pub entry: PathBuf,

    /// Name of the produced executable
    #[serde(default = "default_name")]
    pub name: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            entry: default_entry(),
            name: default_name(),
        }
    }
}

fn default_entry() -> PathBuf {
    PathBuf::from("main.py")
}

fn default_name() -> String {
    "PDF Letterhead Merger".to_string()
}

/// Bundle configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundleConfig {
    #[serde(default)]
    pub mode: BundleMode,

    /// Windowed (no console) mode
    #[serde(default = "default_true")]
    pub windowed: bool,

    /// Icon resource bundled into the artifact; optional
    #[serde(default = "default_icon")]
    pub icon: Option<PathBuf>,
}

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            mode: BundleMode::default(),
            windowed: true,
            icon: default_icon(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_icon() -> Option<PathBuf> {
    Some(PathBuf::from("icon.ico"))
}

/// Workspace path configuration, all relative to the project root
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Isolated environment directory
    #[serde(default = "default_venv")]
    pub venv: PathBuf,

    /// Output directory holding the final artifact
    #[serde(default = "default_dist")]
    pub dist: PathBuf,

    /// Transient work directory the freezing tool writes into
    #[serde(default = "default_build")]
    pub build: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            venv: default_venv(),
            dist: default_dist(),
            build: default_build(),
        }
    }
}

fn default_venv() -> PathBuf {
    PathBuf::from(".venv")
}

fn default_dist() -> PathBuf {
    PathBuf::from("dist")
}

fn default_build() -> PathBuf {
    PathBuf::from("build")
}

/// Freezing-tool configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolConfig {
    /// Program name; resolved inside the activated environment's PATH
    #[serde(default = "default_program")]
    pub program: String,

    /// Extra arguments appended verbatim (hidden imports, data files, ...)
    #[serde(default)]
    pub extra_args: Vec<String>,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            extra_args: Vec::new(),
        }
    }
}

fn default_program() -> String {
    "pyinstaller".to_string()
}

/// Top-level configuration, loaded from `frost.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub project: ProjectConfig,

    #[serde(default)]
    pub bundle: BundleConfig,

    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub tool: ToolConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> FrostResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect unknown-key warnings
    pub fn load_with_warnings(path: &Path) -> FrostResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from the project's `frost.toml` if present, else defaults.
    /// Environment overrides apply in both cases.
    pub fn load_or_default(project_root: &Path) -> Self {
        loader::load_or_default(project_root)
    }
}
