//! Configuration handling for Frost
//!
//! Loads `frost.toml` with serde defaults that match the pipeline's original
//! hard-coded values, surfaces unknown keys as warnings, and applies
//! `FROST_*` environment overrides.

mod loader;
mod types;


pub use loader::{load_or_default, load_with_warnings, with_env_overrides, ConfigWarning, CONFIG_FILE};
pub use types::{BundleConfig, BundleMode, Config, PathsConfig, ProjectConfig, ToolConfig};
