//! Command handlers - thin wiring between the CLI and the use cases

mod build;
mod check;
mod clean;

pub use build::{cmd_build, BuildOverrides};
pub use check::cmd_check;
pub use clean::cmd_clean;

use std::path::Path;

use anyhow::{Context, Result};

use frost::config::{self, Config, CONFIG_FILE};

/// Load the project configuration, surfacing unknown-key warnings on the
/// console (suppressed in JSON mode to keep the stream parseable).
pub(crate) fn load_config(root: &Path, json: bool) -> Result<Config> {
    let config_path = root.join(CONFIG_FILE);
    let config = if config_path.exists() {
        let (config, warnings) = Config::load_with_warnings(&config_path)
            .with_context(|| format!("failed to load {}", config_path.display()))?;
        if !json {
            for warning in &warnings {
                eprintln!("warning: {}", warning);
            }
        }
        config
    } else {
        Config::default()
    };
    Ok(config::with_env_overrides(config))
}
