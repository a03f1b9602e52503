//! Common test utilities for Frost CLI tests.
//!
//! Provides `TestEnv` - an isolated temp workspace with helpers to lay out
//! project files, a fake virtual environment, a scripted stand-in for the
//! freezing tool, and to run the frost binary.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Default artifact name, matching the default configuration
pub const APP_NAME: &str = "PDF Letterhead Merger";

/// Result of running a frost CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated test workspace
pub struct TestEnv {
    pub root: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            root: TempDir::new().expect("failed to create temp workspace"),
        }
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    /// Write the entry point and icon the default config expects
    pub fn write_sources(&self) {
        std::fs::write(self.path("main.py"), "print('merge')").unwrap();
        std::fs::write(self.path("icon.ico"), [0u8; 8]).unwrap();
    }

    /// Write a frost.toml
    pub fn write_config(&self, content: &str) {
        std::fs::write(self.path("frost.toml"), content).unwrap();
    }

    /// Directory holding the fake environment's scripts
    pub fn venv_scripts_dir(&self) -> PathBuf {
        if cfg!(windows) {
            self.path(".venv/Scripts")
        } else {
            self.path(".venv/bin")
        }
    }

    /// Create a fake virtual environment (activation script only)
    pub fn create_venv(&self) {
        let scripts = self.venv_scripts_dir();
        std::fs::create_dir_all(&scripts).unwrap();
        let activate = if cfg!(windows) {
            scripts.join("activate.bat")
        } else {
            scripts.join("activate")
        };
        std::fs::write(activate, "# fake activation script").unwrap();
    }

    /// Install a scripted stand-in for the freezing tool into the fake
    /// environment. The script honours --name/--distpath/--workpath and
    /// leaves behind exactly what the real tool would: an artifact in the
    /// dist dir, a work dir, and a spec file in the project root.
    #[cfg(unix)]
    pub fn install_fake_tool(&self) {
        self.install_tool_script(
            r#"#!/bin/sh
name="app"; dist="dist"; work="build"
while [ $# -gt 0 ]; do
  case "$1" in
    --name) name="$2"; shift 2 ;;
    --distpath) dist="$2"; shift 2 ;;
    --workpath) work="$2"; shift 2 ;;
    *) shift ;;
  esac
done
mkdir -p "$dist" "$work/$name"
printf 'binary' > "$dist/$name"
printf '# stub spec\n' > "$name.spec"
exit 0
"#,
        );
    }

    /// Install a freezing-tool stand-in that prints a diagnostic on stderr,
    /// leaves partial state, and fails
    #[cfg(unix)]
    pub fn install_failing_tool(&self, code: i32) {
        self.install_tool_script(&format!(
            r#"#!/bin/sh
mkdir -p dist build
printf 'half' > dist/partial
printf '# stub spec\n' > broken.spec
echo "FATAL: hidden import 'pystray' not found" >&2
exit {code}
"#
        ));
    }

    #[cfg(unix)]
    fn install_tool_script(&self, script: &str) {
        use std::os::unix::fs::PermissionsExt;

        let scripts = self.venv_scripts_dir();
        std::fs::create_dir_all(&scripts).unwrap();
        let tool = scripts.join("pyinstaller");
        std::fs::write(&tool, script).unwrap();
        std::fs::set_permissions(&tool, std::fs::Permissions::from_mode(0o755)).unwrap();
    }

    /// Run frost in this workspace
    pub fn run(&self, args: &[&str]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_frost"));
        cmd.current_dir(self.root.path())
            .args(args)
            .env_remove("FROST_DIST")
            .env_remove("FROST_TOOL")
            .env_remove("FROST_BUNDLE_MODE");

        let output = cmd.output().expect("failed to execute frost");
        output_to_result(output)
    }

    /// Expected artifact path for the default one-file configuration
    pub fn artifact_path(&self) -> PathBuf {
        self.path("dist")
            .join(format!("{}{}", APP_NAME, std::env::consts::EXE_SUFFIX))
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Workspace with sources, venv, and a succeeding fake tool
#[cfg(unix)]
pub fn buildable_env() -> TestEnv {
    let env = TestEnv::new();
    env.write_sources();
    env.create_venv();
    env.install_fake_tool();
    env
}
