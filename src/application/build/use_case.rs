//! Build Use Case
//!
//! Orchestrates the pipeline:
//! 1. Locate the isolated environment (fail fast, before anything destructive)
//! 2. Validate workspace inputs (entry point, icon)
//! 3. Reset the slate (build dir, spec files, stale output dir)
//! 4. Run the freezing tool and wait
//! 5. Terminal state: shared transient cleanup on BOTH outcomes, artifact
//!    verification and report on success, diagnostic and propagated exit
//!    status on failure
//!
//! The run is strictly sequential and transactional: every exit path leaves
//! the workspace either "clean with artifact" or "clean without artifact".

use std::sync::Arc;

use crate::application::clean::{CleanOptions, CleanResult, CleanUseCase};
use crate::config::Config;
use crate::domain::entities::{expected_artifact, Venv, Workspace};
use crate::domain::ports::{BuildEvent, BuildEventSink, FileSystem, NoopEventSink, ToolRunner};
use crate::domain::services::plan_invocation;
use crate::error::{FrostError, FrostResult};

use super::options::BuildOptions;
use super::result::BuildReport;

/// Build use case - runs the freeze pipeline
///
/// Parameterized by its ports so tests can script the tool and inspect
/// events without spawning anything.
pub struct BuildUseCase<FS, TR>
where
    FS: FileSystem + Clone,
    TR: ToolRunner,
{
    fs: FS,
    runner: TR,
}

impl<FS, TR> BuildUseCase<FS, TR>
where
    FS: FileSystem + Clone,
    TR: ToolRunner,
{
    pub fn new(fs: FS, runner: TR) -> Self {
        Self { fs, runner }
    }

    /// Execute the pipeline silently
    pub fn execute(&self, workspace: &Workspace, config: &Config, options: &BuildOptions) -> FrostResult<BuildReport> {
        self.execute_with_events(workspace, config, options, Arc::new(NoopEventSink))
    }

    /// Execute the pipeline with event reporting
    pub fn execute_with_events(
        &self,
        workspace: &Workspace,
        config: &Config,
        options: &BuildOptions,
        events: Arc<dyn BuildEventSink>,
    ) -> FrostResult<BuildReport> {
        // Stage 1: environment fail-fast. Nothing has been touched yet, so
        // an abort here performs no cleanup of outputs.
        let venv = Venv::resolve(&workspace.venv_dir);
        if let Err(e) = venv.verify(&self.fs) {
            events.on_event(BuildEvent::Failed {
                message: e.to_string(),
            });
            return Err(e);
        }

        // Workspace invariant: inputs must exist before packaging starts.
        if let Err(e) = workspace.validate_inputs(&self.fs) {
            events.on_event(BuildEvent::Failed {
                message: e.to_string(),
            });
            return Err(e);
        }

        events.on_event(BuildEvent::Started {
            name: config.project.name.clone(),
            entry: workspace.entry.clone(),
        });
        events.on_event(BuildEvent::EnvironmentReady {
            venv: venv.dir.clone(),
        });

        let cleaner = CleanUseCase::new(self.fs.clone());
        let invocation = plan_invocation(config);
        let artifact = expected_artifact(workspace, &config.project.name, config.bundle.mode);

        // Stage 2: reset the slate so the tool never sees stale state.
        let pre_clean = cleaner.execute(
            workspace,
            &CleanOptions::new()
                .with_dist(options.clean_dist_before)
                .with_dry_run(options.dry_run),
        );
        if options.dry_run {
            // Preview only: no Cleaned/ToolStarted events for actions that
            // never happened; the report carries the planned invocation.
            return Ok(BuildReport {
                artifact,
                invocation,
                pre_clean,
                post_clean: None,
                dry_run: true,
            });
        }
        Self::emit_clean_events(&events, &pre_clean);

        events.on_event(BuildEvent::ToolStarted {
            program: invocation.program.clone(),
            args: invocation.args.clone(),
        });

        // Stage 3: run the tool and wait synchronously.
        let status = match self.runner.run(&invocation, &workspace.root) {
            Ok(status) => status,
            Err(e) => {
                // Launch failure: run the same terminal cleanup so no
                // half-prepared state survives.
                let _ = self.terminal_clean(&cleaner, workspace, true);
                events.on_event(BuildEvent::Failed {
                    message: e.to_string(),
                });
                return Err(e);
            }
        };
        events.on_event(BuildEvent::ToolFinished {
            code: status.code(),
        });

        // Stage 4: terminal states. Both share the transient cleanup; the
        // failure state additionally drops the output dir so no partial
        // artifact is left to mislead.
        if !status.is_success() {
            let post_clean = self.terminal_clean(&cleaner, workspace, true);
            let err = FrostError::ToolFailed {
                program: invocation.program.clone(),
                code: match status.code() {
                    Some(0) | None => None,
                    Some(c) => Some(c),
                },
            };
            events.on_event(BuildEvent::Failed {
                message: err.to_string(),
            });
            Self::emit_clean_events(&events, &post_clean);
            return Err(err);
        }

        let post_clean = self.terminal_clean(&cleaner, workspace, false);
        Self::emit_clean_events(&events, &post_clean);

        if !self.fs.exists(&artifact) {
            // The tool claimed success but produced nothing where expected;
            // treat as a failure and clear the output dir too.
            let _ = self.terminal_clean(&cleaner, workspace, true);
            let err = FrostError::ArtifactMissing {
                expected: artifact.clone(),
            };
            events.on_event(BuildEvent::Failed {
                message: err.to_string(),
            });
            return Err(err);
        }

        events.on_event(BuildEvent::Completed {
            artifact: artifact.clone(),
        });

        Ok(BuildReport {
            artifact,
            invocation,
            pre_clean,
            post_clean: Some(post_clean),
            dry_run: false,
        })
    }

    /// The shared terminal cleanup: transients always, dist only on failure
    fn terminal_clean(
        &self,
        cleaner: &CleanUseCase<FS>,
        workspace: &Workspace,
        include_dist: bool,
    ) -> CleanResult {
        cleaner.execute(workspace, &CleanOptions::new().with_dist(include_dist))
    }

    fn emit_clean_events(events: &Arc<dyn BuildEventSink>, result: &CleanResult) {
        use crate::application::clean::CleanOutcome;
        for cleaned in &result.paths {
            events.on_event(BuildEvent::Cleaned {
                path: cleaned.path.clone(),
                removed: cleaned.outcome == CleanOutcome::Removed,
            });
        }
    }
}
