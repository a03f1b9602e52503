//! Clean Use Case
//!
//! The single idempotent cleanup routine shared by the pre-build slate
//! reset, both terminal states of the build pipeline, and `frost clean`.
//! Targets are the transient build directory, leftover spec files in the
//! project root, and optionally the output directory. Absence of any target
//! is a no-op.

use std::path::Path;

use crate::domain::entities::Workspace;
use crate::domain::ports::FileSystem;

use super::options::CleanOptions;
use super::result::{CleanOutcome, CleanResult};

/// Suffix of the intermediate configuration files the freezing tool leaves
/// in the project root.
const SPEC_SUFFIX: &str = ".spec";

/// Clean use case - removes build artifacts idempotently
pub struct CleanUseCase<FS>
where
    FS: FileSystem,
{
    fs: FS,
}

impl<FS> CleanUseCase<FS>
where
    FS: FileSystem,
{
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }

    /// Execute the clean operation against a resolved workspace
    pub fn execute(&self, workspace: &Workspace, options: &CleanOptions) -> CleanResult {
        let mut result = CleanResult::new();

        self.remove_dir(&workspace.build_dir, options.dry_run, &mut result);

        match self.fs.list_with_suffix(&workspace.root, SPEC_SUFFIX) {
            Ok(spec_files) => {
                for spec in spec_files {
                    self.remove_file(&spec, options.dry_run, &mut result);
                }
            }
            Err(e) => result.add_error(format!(
                "failed to scan {} for spec files: {}",
                workspace.root.display(),
                e
            )),
        }

        if options.include_dist {
            self.remove_dir(&workspace.dist_dir, options.dry_run, &mut result);
        }

        result
    }

    fn remove_dir(&self, path: &Path, dry_run: bool, result: &mut CleanResult) {
        if !self.fs.exists(path) {
            result.add(path.to_path_buf(), CleanOutcome::Absent);
            return;
        }
        if dry_run {
            result.add(path.to_path_buf(), CleanOutcome::Removed);
            return;
        }
        match self.fs.remove_dir_all(path) {
            Ok(()) => result.add(path.to_path_buf(), CleanOutcome::Removed),
            Err(e) => result.add_error(format!("failed to remove {}: {}", path.display(), e)),
        }
    }

    fn remove_file(&self, path: &Path, dry_run: bool, result: &mut CleanResult) {
        if !self.fs.exists(path) {
            result.add(path.to_path_buf(), CleanOutcome::Absent);
            return;
        }
        if dry_run {
            result.add(path.to_path_buf(), CleanOutcome::Removed);
            return;
        }
        match self.fs.remove_file(path) {
            Ok(()) => result.add(path.to_path_buf(), CleanOutcome::Removed),
            Err(e) => result.add_error(format!("failed to remove {}: {}", path.display(), e)),
        }
    }
}
