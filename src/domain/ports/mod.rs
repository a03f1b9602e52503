//! Ports - abstract interfaces the application layer depends on

pub mod build_events;
pub mod file_system;
pub mod tool_runner;

pub use build_events::{BuildEvent, BuildEventSink, NoopEventSink};
pub use file_system::{FileSystem, FsError, FsResult};
pub use tool_runner::{ToolRunner, ToolStatus};
