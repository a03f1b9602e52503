//! Build Event Port
//!
//! Provides an observable interface for pipeline runs. Enables progress
//! reporting on the console and NDJSON event streams for CI.

use std::path::PathBuf;

/// Event emitted during a pipeline run
#[derive(Debug, Clone)]
pub enum BuildEvent {
    /// Pipeline started
    Started { name: String, entry: PathBuf },

    /// Isolated environment located and staged for activation
    EnvironmentReady { venv: PathBuf },

    /// A stale or transient artifact was removed (or found absent)
    Cleaned { path: PathBuf, removed: bool },

    /// Freezing tool about to run
    ToolStarted { program: String, args: Vec<String> },

    /// Freezing tool exited
    ToolFinished { code: Option<i32> },

    /// Pipeline completed; final artifact verified on disk
    Completed { artifact: PathBuf },

    /// Pipeline failed
    Failed { message: String },
}

/// Trait for receiving build events
///
/// Implementations:
/// - `ConsoleEventSink`: human-readable progress in the terminal
/// - `JsonEventSink`: NDJSON event stream for CI
/// - `NoopEventSink`: silent operation
pub trait BuildEventSink: Send + Sync {
    /// Handle a build event
    fn on_event(&self, event: BuildEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl BuildEventSink for NoopEventSink {
    fn on_event(&self, _event: BuildEvent) {}
}
