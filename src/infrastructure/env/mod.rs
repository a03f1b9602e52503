//! Environment activation

mod venv;

pub use venv::activate;
