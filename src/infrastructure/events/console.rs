//! Console event sink
//!
//! Human-readable progress. Decorations are dropped when stdout is not a
//! terminal so piped output stays plain.

use is_terminal::IsTerminal;

use crate::domain::ports::{BuildEvent, BuildEventSink};

/// Renders build events for a human at a terminal
pub struct ConsoleEventSink {
    verbose: u8,
    decorated: bool,
}

impl ConsoleEventSink {
    pub fn new(verbose: u8) -> Self {
        Self {
            verbose,
            decorated: std::io::stdout().is_terminal(),
        }
    }

    fn ok_mark(&self) -> &'static str {
        if self.decorated {
            "✓"
        } else {
            "ok:"
        }
    }

    fn fail_mark(&self) -> &'static str {
        if self.decorated {
            "✗"
        } else {
            "error:"
        }
    }
}

impl BuildEventSink for ConsoleEventSink {
    fn on_event(&self, event: BuildEvent) {
        match event {
            BuildEvent::Started { name, entry } => {
                println!("Building '{}' from {}", name, entry.display());
            }
            BuildEvent::EnvironmentReady { venv } => {
                if self.verbose > 0 {
                    println!("{} environment: {}", self.ok_mark(), venv.display());
                }
            }
            BuildEvent::Cleaned { path, removed } => {
                if removed {
                    println!("{} cleaned {}", self.ok_mark(), path.display());
                } else if self.verbose > 1 {
                    println!("  nothing to clean at {}", path.display());
                }
            }
            BuildEvent::ToolStarted { program, args } => {
                if self.verbose > 0 {
                    println!("$ {} {}", program, args.join(" "));
                } else {
                    println!("Running {}...", program);
                }
            }
            BuildEvent::ToolFinished { code } => {
                if self.verbose > 0 {
                    match code {
                        Some(c) => println!("tool exited with code {}", c),
                        None => println!("tool terminated by signal"),
                    }
                }
            }
            BuildEvent::Completed { artifact } => {
                println!("{} built {}", self.ok_mark(), artifact.display());
            }
            BuildEvent::Failed { message } => {
                eprintln!("{} {}", self.fail_mark(), message);
            }
        }
    }
}
