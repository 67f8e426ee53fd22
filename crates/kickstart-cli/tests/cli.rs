//! End-to-end tests for the `kickstart` binary.
//!
//! None of these reach a successful spawn, so no terminal window is opened.

mod common;

use common::TestContext;
use predicates::prelude::*;

#[test]
fn help_lists_subcommands() {
    let ctx = TestContext::new();
    ctx.command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("launch"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn missing_project_path_reports_and_exits() {
    let ctx = TestContext::new().with_default_config();
    let missing = ctx.path().join("missing");

    ctx.command()
        .arg("launch")
        .arg(&missing)
        .assert()
        .code(6)
        .stdout(predicate::str::contains(format!(
            "Path does not exist: {}",
            missing.display()
        )))
        .stdout(predicate::str::contains("Please update the project path"))
        .stdout(predicate::str::contains("Press Enter").not());
}

#[test]
fn launch_is_the_default_command() {
    let ctx = TestContext::new().with_config("project:\n  path: /kickstart-test/definitely/missing\n");

    ctx.command()
        .assert()
        .code(6)
        .stdout(predicate::str::contains("Path does not exist"));
}

#[test]
fn default_launch_accepts_path_and_flags() {
    let ctx = TestContext::new().with_default_config();
    let project = ctx.project("empty", None);

    ctx.command()
        .arg(&project)
        .arg("--no-pause")
        .assert()
        .code(5)
        .stdout(predicate::str::contains(format!(
            "package.json not found in {}",
            project.display()
        )));
}

#[test]
fn missing_manifest_reports_and_exits() {
    let ctx = TestContext::new().with_default_config();
    let project = ctx.project("empty", None);

    ctx.command()
        .arg("launch")
        .arg(&project)
        .arg("--no-pause")
        .assert()
        .code(5)
        .stdout(predicate::str::contains(format!(
            "package.json not found in {}",
            project.display()
        )))
        .stdout(predicate::str::contains(
            "Make sure this is the correct project folder.",
        ));
}

#[test]
fn launch_without_project_path_is_config_error() {
    let ctx = TestContext::new().with_default_config();

    ctx.command()
        .arg("launch")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("project.path"));
}

#[test]
fn check_reports_resolved_command_without_spawning() {
    let ctx = TestContext::new().with_default_config();
    let project = ctx.project(
        "organiser",
        Some(r#"{"name": "doc-organiser", "scripts": {"dev": "vite"}}"#),
    );

    ctx.command()
        .args(["check", "--from-manifest", "--terminal", "posix"])
        .arg(&project)
        .assert()
        .success()
        .stdout(predicate::str::contains("doc-organiser is ready to launch"))
        .stdout(predicate::str::contains("npm run dev"))
        .stdout(predicate::str::contains("posix (gnome-terminal)"));
}

#[test]
fn check_uses_configured_command_and_strategy() {
    let ctx = TestContext::new();
    let project = ctx.project("organiser", Some("{}"));
    let ctx = ctx.with_config(&format!(
        "project:\n  path: {}\n  name: Document Organiser\nstart:\n  command: yarn start\nterminal:\n  strategy: windows\n",
        project.display()
    ));

    ctx.command()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Document Organiser is ready to launch"))
        .stdout(predicate::str::contains("yarn start"))
        .stdout(predicate::str::contains("windows (cmd)"));
}

#[test]
fn check_missing_manifest_fails() {
    let ctx = TestContext::new().with_default_config();
    let project = ctx.project("empty", None);

    ctx.command()
        .arg("check")
        .arg(&project)
        .assert()
        .code(5)
        .stderr(predicate::str::contains("package.json not found"));
}

#[test]
fn explicit_missing_config_is_an_error() {
    let ctx = TestContext::new();

    ctx.command()
        .args(["check", "/tmp"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn invalid_config_is_reported() {
    let ctx = TestContext::new().with_config("terminal:\n  strategy: amiga\n");

    ctx.command()
        .arg("config")
        .arg("show")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn config_init_show_and_path() {
    let ctx = TestContext::new();
    let project = ctx.project("organiser", Some("{}"));

    ctx.command()
        .args(["config", "init", "--project"])
        .arg(&project)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    ctx.command()
        .args(["config", "init"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--force"));

    ctx.command()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("command: npm run start"))
        .stdout(predicate::str::contains(project.display().to_string()));

    ctx.command()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("kickstart.yaml"));
}

#[test]
fn quiet_and_verbose_conflict() {
    let ctx = TestContext::new();
    ctx.command().args(["-q", "-v", "check"]).assert().code(2);
}
