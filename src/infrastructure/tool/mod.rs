//! Freezing-tool runners

mod runner;

pub use runner::ProcessToolRunner;
