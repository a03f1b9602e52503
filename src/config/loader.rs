//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{FrostError, FrostResult};

use super::types::{BundleMode, Config};

/// Name of the project configuration file
pub const CONFIG_FILE: &str = "frost.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown key '{}' in {}", self.key, self.file.display())?;
        if let Some(s) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", s)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> FrostResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| FrostError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                suggestion: suggest_key(&key),
                key,
                file: path.to_path_buf(),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from the project's `frost.toml` if present, else defaults,
/// with `FROST_*` environment overrides applied either way.
pub fn load_or_default(project_root: &Path) -> Config {
    let config_path = project_root.join(CONFIG_FILE);
    let config = if config_path.exists() {
        Config::load(&config_path).unwrap_or_default()
    } else {
        Config::default()
    };
    with_env_overrides(config)
}

/// Apply environment variable overrides (FROST_* prefix)
pub fn with_env_overrides(mut config: Config) -> Config {
    if let Ok(dist) = std::env::var("FROST_DIST") {
        if !dist.is_empty() {
            config.paths.dist = PathBuf::from(dist);
        }
    }

    if let Ok(tool) = std::env::var("FROST_TOOL") {
        if !tool.is_empty() {
            config.tool.program = tool;
        }
    }

    if let Ok(mode) = std::env::var("FROST_BUNDLE_MODE") {
        config.bundle.mode = match mode.to_lowercase().as_str() {
            "onedir" => BundleMode::OneDir,
            _ => BundleMode::OneFile,
        };
    }

    config
}

/// Suggest a known key for a likely typo
fn suggest_key(key: &str) -> Option<String> {
    const KNOWN: &[&str] = &[
        "entry",
        "name",
        "mode",
        "windowed",
        "icon",
        "venv",
        "dist",
        "build",
        "program",
        "extra_args",
    ];

    KNOWN
        .iter()
        .find(|known| {
            let k = key.to_lowercase();
            known.starts_with(&k) || k.starts_with(**known)
        })
        .map(|s| s.to_string())
}
