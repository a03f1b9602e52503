//! Integration tests for `frost build`.
//!
//! The freezing tool is a scripted shell stand-in installed into the fake
//! environment, so these run on unix only.

#![cfg(unix)]

mod common;

use common::{buildable_env, TestEnv, APP_NAME};

#[test]
fn build_help_shows_options() {
    let env = TestEnv::new();
    let result = env.run(&["build", "--help"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.contains("--dry-run"));
    assert!(result.stdout.contains("--onedir"));
    assert!(result.stdout.contains("--no-clean-dist"));
}

#[test]
fn successful_build_produces_only_the_artifact() {
    let env = buildable_env();

    let result = env.run(&["build"]);

    assert!(result.success, "{}", result.combined_output());
    assert_eq!(result.exit_code, 0);
    assert!(env.artifact_path().exists());
    assert!(!env.path("build").exists(), "work dir must be cleaned");
    assert!(
        !env.path(&format!("{}.spec", APP_NAME)).exists(),
        "spec file must be cleaned"
    );
    assert!(result.stdout.contains("Artifact:"));
}

#[test]
fn stale_dist_is_replaced() {
    let env = buildable_env();
    std::fs::create_dir_all(env.path("dist")).unwrap();
    std::fs::write(env.path("dist/stale.exe"), "old").unwrap();

    let result = env.run(&["build"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(!env.path("dist/stale.exe").exists());
    assert!(env.artifact_path().exists());

    // Exactly one file in dist.
    let entries: Vec<_> = std::fs::read_dir(env.path("dist"))
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(entries, vec![APP_NAME.to_string()]);
}

#[test]
fn repeated_builds_are_reproducible() {
    let env = buildable_env();

    assert!(env.run(&["build"]).success);
    let first: Vec<_> = list_sorted(&env);

    assert!(env.run(&["build"]).success);
    let second: Vec<_> = list_sorted(&env);

    assert_eq!(first, second);
}

fn list_sorted(env: &TestEnv) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(env.path("dist"))
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}

#[test]
fn missing_venv_fails_without_creating_output() {
    let env = TestEnv::new();
    env.write_sources();

    let result = env.run(&["build"]);

    assert!(!result.success);
    assert_eq!(result.exit_code, 1);
    assert!(
        result.stderr.contains(".venv"),
        "diagnostic must name the expected path:\n{}",
        result.combined_output()
    );
    assert!(!env.path("dist").exists());
}

#[test]
fn missing_entry_point_fails() {
    let env = TestEnv::new();
    env.create_venv();
    env.install_fake_tool();
    std::fs::write(env.path("icon.ico"), [0u8; 8]).unwrap();

    let result = env.run(&["build"]);

    assert!(!result.success);
    assert!(result.stderr.contains("main.py"));
}

#[test]
fn tool_failure_propagates_exit_code_and_cleans_up() {
    let env = TestEnv::new();
    env.write_sources();
    env.create_venv();
    env.install_failing_tool(3);

    let result = env.run(&["build"]);

    assert!(!result.success);
    assert_eq!(result.exit_code, 3, "{}", result.combined_output());
    // Failure-path cleanup: transients and the partial dist are gone.
    assert!(!env.path("build").exists());
    assert!(!env.path("broken.spec").exists());
    assert!(!env.path("dist").exists());
}

#[test]
fn dry_run_previews_without_side_effects() {
    let env = buildable_env();
    std::fs::create_dir_all(env.path("build")).unwrap();

    let result = env.run(&["build", "--dry-run"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.contains("pyinstaller"));
    assert!(result.stdout.contains("--onefile"));
    assert!(env.path("build").exists(), "dry run must not delete");
    assert!(!env.path("dist").exists(), "dry run must not build");
}

#[test]
fn cli_overrides_take_precedence_over_config() {
    let env = buildable_env();
    env.write_config(
        r#"
[project]
name = "Config Name"

[paths]
dist = "_output"
"#,
    );

    let result = env.run(&["build", "--name", "Override Name", "--no-icon"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(env.path("_output/Override Name").exists());
}

#[test]
fn json_mode_emits_event_stream() {
    let env = buildable_env();

    let result = env.run(&["build", "--json"]);

    assert!(result.success, "{}", result.combined_output());
    let events: Vec<serde_json::Value> = result
        .stdout
        .lines()
        .map(|l| serde_json::from_str(l).expect("every line must be valid JSON"))
        .collect();

    let kinds: Vec<&str> = events
        .iter()
        .map(|e| e["event"].as_str().unwrap())
        .collect();
    assert!(kinds.contains(&"started"));
    assert!(kinds.contains(&"tool_started"));
    assert!(kinds.contains(&"completed"));
    assert_eq!(*kinds.last().unwrap(), "summary");
    assert_eq!(events.last().unwrap()["status"], "success");
}

#[test]
fn json_mode_reports_failure() {
    let env = TestEnv::new();
    env.write_sources();
    env.create_venv();
    env.install_failing_tool(2);

    let result = env.run(&["build", "--json"]);

    assert!(!result.success);
    assert_eq!(result.exit_code, 2);
    let failed = result.stdout.lines().any(|l| {
        serde_json::from_str::<serde_json::Value>(l)
            .map(|v| v["event"] == "failed")
            .unwrap_or(false)
    });
    assert!(failed, "stream must contain a failed event:\n{}", result.stdout);

    // The stream ends with a terminal summary, same as the success path.
    let last: serde_json::Value =
        serde_json::from_str(result.stdout.lines().last().unwrap()).unwrap();
    assert_eq!(last["event"], "summary");
    assert_eq!(last["status"], "failure");
    assert_eq!(last["exit_code"], 2);
}

#[test]
fn json_mode_surfaces_tool_diagnostics() {
    let env = TestEnv::new();
    env.write_sources();
    env.create_venv();
    env.install_failing_tool(1);

    let result = env.run(&["build", "--json"]);

    assert!(!result.success);
    // The tool's own stderr diagnostics must reach the user even in JSON
    // mode; only stdout is reserved for the event stream.
    assert!(
        result.stderr.contains("hidden import"),
        "tool stderr must not be swallowed:\n{}",
        result.combined_output()
    );
    for line in result.stdout.lines() {
        serde_json::from_str::<serde_json::Value>(line)
            .expect("stdout must stay machine-parseable");
    }
}

#[test]
fn onedir_mode_builds_nested_artifact() {
    let env = TestEnv::new();
    env.write_sources();
    env.create_venv();
    // A one-dir aware stand-in: artifact nested under a directory named
    // after the app.
    env.install_fake_tool();
    env.write_config(
        r#"
[bundle]
mode = "onedir"
"#,
    );

    let result = env.run(&["build"]);

    // The simple stand-in writes a flat artifact, which one-dir
    // verification rejects: the pipeline must fail rather than report a
    // success it cannot prove.
    assert!(!result.success, "{}", result.combined_output());
    assert!(result.stderr.contains("artifact is missing"));
}
