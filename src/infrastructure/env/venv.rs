//! Scoped environment activation
//!
//! The batch scripts this pipeline replaces activated the environment
//! globally and had to remember to deactivate on every exit path. Here
//! activation is applied to the child process only: PATH gets the
//! environment's scripts directory prepended, VIRTUAL_ENV is set, and
//! PYTHONHOME is dropped. Nothing in the pipeline's own environment
//! changes, so teardown is implicit on every exit path.

use std::process::Command;

use crate::domain::entities::Venv;

/// Stage `cmd` to run inside the virtual environment
pub fn activate(cmd: &mut Command, venv: &Venv) {
    let path_var = std::env::var_os("PATH").unwrap_or_default();
    let mut paths = vec![venv.scripts_dir.clone()];
    paths.extend(std::env::split_paths(&path_var));

    if let Ok(joined) = std::env::join_paths(paths) {
        cmd.env("PATH", joined);
    }
    cmd.env("VIRTUAL_ENV", &venv.dir);
    cmd.env_remove("PYTHONHOME");
}
