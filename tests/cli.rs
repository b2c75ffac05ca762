//! Command line behavior of the `kodegen_bundler_electron` binary.

mod common;

use assert_cmd::Command;
use common::{copy_fixture, fixture};
use predicates::prelude::*;

fn bin() -> Command {
    let mut cmd = Command::cargo_bin("kodegen_bundler_electron").unwrap();
    cmd.env_remove("EMBER_CLI_ELECTRON")
        .env_remove("EMBER_ENV")
        .env_remove("EMBER_CLI_ELECTRON_BUILD_PLATFORM")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn assembles_into_the_output_directory() {
    let out = tempfile::tempdir().unwrap();
    let dest = out.path().join("electron-out");

    bin()
        .arg("--project-root")
        .arg(fixture())
        .arg("--build-output")
        .arg(fixture().join("dist"))
        .arg("--output")
        .arg(&dest)
        .args(["--electron", "--platform", "linux"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Assembled 9 file(s)"))
        .stderr(predicate::str::contains("ember-welcome-page"));

    assert_eq!(
        std::fs::read_to_string(dest.join("ember-electron/resources/tray.png")).unwrap(),
        "linux-tray\n"
    );
    assert!(dest.join("ember/index.html").is_file());
    assert!(!dest.join("ember-electron/.compilerc").exists());
}

#[test]
fn environment_variables_enable_the_build_and_test_mode() {
    let out = tempfile::tempdir().unwrap();
    let dest = out.path().join("electron-out");

    bin()
        .env("EMBER_CLI_ELECTRON", "1")
        .env("EMBER_ENV", "test")
        .env("EMBER_CLI_ELECTRON_BUILD_PLATFORM", "linux")
        .arg("-p")
        .arg(fixture())
        .arg("-i")
        .arg(fixture().join("dist"))
        .arg("-o")
        .arg(&dest)
        .assert()
        .success();

    assert_eq!(
        std::fs::read_to_string(dest.join("ember-electron/main.js")).unwrap(),
        "require('./test-support');\n"
    );
}

#[test]
fn falsey_switch_passes_the_build_through() {
    let out = tempfile::tempdir().unwrap();
    let dest = out.path().join("plain");

    bin()
        .env("EMBER_CLI_ELECTRON", "false")
        .arg("-p")
        .arg(fixture())
        .arg("-i")
        .arg(fixture().join("dist"))
        .arg("-o")
        .arg(&dest)
        .assert()
        .success();

    assert!(dest.join("index.html").is_file());
    assert!(!dest.join("package.json").exists());
}

#[test]
fn print_plan_lists_rules_in_order() {
    bin()
        .arg("-p")
        .arg(fixture())
        .arg("-i")
        .arg(fixture().join("dist"))
        .args(["--electron", "--platform", "darwin", "--print-plan"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Composition plan for darwin"))
        .stdout(predicate::str::contains(
            "5. resources-darwin: subtree resources-darwin/ of harness -> ember-electron/resources",
        ));
}

#[test]
fn dry_run_json_summary_writes_nothing() {
    let out = tempfile::tempdir().unwrap();
    let dest = out.path().join("never-written");

    let assert = bin()
        .arg("-p")
        .arg(fixture())
        .arg("-i")
        .arg(fixture().join("dist"))
        .arg("-o")
        .arg(&dest)
        .args(["--electron", "--platform", "linux", "--dry-run", "--json"])
        .assert()
        .success();

    let summary: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(summary["platform"], "linux");
    assert_eq!(summary["files"], 9);
    assert_eq!(summary["advisories"], 1);
    assert_eq!(summary["written"], false);
    assert!(!dest.exists());
}

#[test]
fn missing_output_is_rejected() {
    bin()
        .arg("-i")
        .arg(fixture().join("dist"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("--output is required"))
        .stderr(predicate::str::contains("--help"));
}

#[test]
fn missing_build_output_fails_with_a_hint() {
    let out = tempfile::tempdir().unwrap();

    bin()
        .arg("-p")
        .arg(fixture())
        .arg("-i")
        .arg(out.path().join("no-such-dist"))
        .arg("-o")
        .arg(out.path().join("dest"))
        .args(["--electron", "--platform", "linux"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing input"))
        .stderr(predicate::str::contains("hint:"));
}

#[test]
fn invalid_platform_is_rejected() {
    bin()
        .arg("-p")
        .arg(fixture())
        .arg("-i")
        .arg(fixture().join("dist"))
        .args(["--electron", "--platform", "../etc", "--print-plan"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid platform identifier"));
}

#[test]
fn output_over_the_project_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let project = dir.path().join("proj");
    copy_fixture(&project);

    bin()
        .arg("-p")
        .arg(&project)
        .arg("-i")
        .arg(project.join("dist"))
        .arg("-o")
        .arg(&project)
        .args(["--electron", "--platform", "linux"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("would replace input"));

    assert!(project.join("dist/index.html").is_file());
    assert!(project.join("tests/ember-electron/main.js").is_file());
    assert!(project.join("ember-electron/resources-linux/tray.png").is_file());
}

#[test]
fn output_over_the_build_output_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let project = dir.path().join("proj");
    copy_fixture(&project);

    bin()
        .arg("-p")
        .arg(&project)
        .arg("-i")
        .arg(project.join("dist"))
        .arg("-o")
        .arg(project.join("dist"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("would replace input"));

    assert!(project.join("dist/assets/app.js").is_file());
}

#[test]
fn output_inside_the_project_is_allowed() {
    let dir = tempfile::tempdir().unwrap();
    let project = dir.path().join("proj");
    copy_fixture(&project);

    bin()
        .arg("-p")
        .arg(&project)
        .arg("-i")
        .arg(project.join("dist"))
        .arg("-o")
        .arg(project.join("electron-out"))
        .args(["--electron", "--platform", "linux"])
        .assert()
        .success();

    assert!(project.join("electron-out/package.json").is_file());
    assert!(project.join("dist/index.html").is_file());
}

#[test]
fn help_describes_the_electron_switch_values() {
    bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("one of 0, false, no, off"));
}

#[test]
fn zero_switch_passes_the_build_through() {
    let out = tempfile::tempdir().unwrap();
    let dest = out.path().join("plain");

    bin()
        .env("EMBER_CLI_ELECTRON", "0")
        .arg("-p")
        .arg(fixture())
        .arg("-i")
        .arg(fixture().join("dist"))
        .arg("-o")
        .arg(&dest)
        .assert()
        .success();

    assert!(!dest.join("package.json").exists());
}
