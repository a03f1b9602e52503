//! Frost - deterministic freeze-build pipeline
//!
//! Frost replaces ad-hoc packaging scripts with a transactional build
//! pipeline: it locates an isolated Python environment, resets the build
//! slate, invokes a freezing tool with an explicit configuration, and
//! guarantees the same cleanup on every exit path. The workspace always
//! ends up either "clean with artifact" or "clean without artifact".

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::build::{BuildOptions, BuildReport, BuildUseCase};
pub use application::check::{run_checks, CheckLevel, CheckReport};
pub use application::clean::{CleanOptions, CleanResult, CleanUseCase};
pub use config::{BundleMode, Config};
pub use domain::entities::{Venv, Workspace};
pub use error::{FrostError, FrostResult};
