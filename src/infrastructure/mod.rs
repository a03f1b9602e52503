//! Infrastructure layer - concrete implementations of the domain ports

pub mod env;
pub mod events;
pub mod fs;
pub mod tool;

pub use events::{ConsoleEventSink, JsonEventSink};
pub use fs::LocalFs;
pub use tool::ProcessToolRunner;
