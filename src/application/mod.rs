//! Application layer - use cases orchestrating the domain

pub mod build;
pub mod check;
pub mod clean;
