//! Domain entities

pub mod artifact;
pub mod venv;
pub mod workspace;

pub use artifact::expected_artifact;
pub use venv::Venv;
pub use workspace::Workspace;
