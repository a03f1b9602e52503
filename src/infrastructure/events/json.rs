//! NDJSON event sink for CI
//!
//! One JSON object per line on stdout; consumers can follow the pipeline
//! without scraping human output.

use serde_json::json;

use crate::domain::ports::{BuildEvent, BuildEventSink};

/// Streams build events as newline-delimited JSON
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonEventSink;

impl JsonEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl BuildEventSink for JsonEventSink {
    fn on_event(&self, event: BuildEvent) {
        let value = match event {
            BuildEvent::Started { name, entry } => json!({
                "event": "started",
                "name": name,
                "entry": entry.display().to_string(),
            }),
            BuildEvent::EnvironmentReady { venv } => json!({
                "event": "environment_ready",
                "venv": venv.display().to_string(),
            }),
            BuildEvent::Cleaned { path, removed } => json!({
                "event": "cleaned",
                "path": path.display().to_string(),
                "removed": removed,
            }),
            BuildEvent::ToolStarted { program, args } => json!({
                "event": "tool_started",
                "program": program,
                "args": args,
            }),
            BuildEvent::ToolFinished { code } => json!({
                "event": "tool_finished",
                "code": code,
            }),
            BuildEvent::Completed { artifact } => json!({
                "event": "completed",
                "artifact": artifact.display().to_string(),
            }),
            BuildEvent::Failed { message } => json!({
                "event": "failed",
                "message": message,
            }),
        };
        println!("{}", value);
    }
}
