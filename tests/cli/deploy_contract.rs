use crate::harness::TestContext;
use predicates::prelude::*;
use std::fs;

#[test]
fn deploy_writes_layout_for_known_user() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["deploy", "--user", "alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Created mpv.conf"))
        .stdout(predicate::str::contains("✅ Created input.conf"))
        .stdout(predicate::str::contains("✅ Created my notes.txt"))
        .stdout(predicate::str::contains("✅ Created autoload.lua"))
        .stdout(predicate::str::contains("✅ Created mpv_chapters.js"));

    ctx.assert_deployed("alice");
    ctx.assert_exact_layout("alice");
    assert!(!ctx.users_root().join("bob").join("AppData").exists());
}

#[test]
fn deploy_prints_one_line_per_file() {
    let ctx = TestContext::new();

    let output = ctx.cli().args(["deploy", "-u", "alice"]).output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().filter(|line| line.starts_with("✅ Created")).count(), 5);
}

#[test]
fn deploy_is_the_default_command() {
    let ctx = TestContext::new();

    ctx.cli().args(["--user", "bob"]).assert().success();

    ctx.assert_deployed("bob");
}

#[test]
fn deploy_reads_user_from_stdin() {
    let ctx = TestContext::new();

    ctx.cli().arg("deploy").write_stdin("alice\n").assert().success();

    ctx.assert_deployed("alice");
}

#[test]
fn deploy_rejects_unknown_user_without_side_effects() {
    let ctx = TestContext::new();
    let before = ctx.snapshot();

    ctx.cli()
        .args(["deploy", "--user", "charlie"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid user profile 'charlie'"));

    assert_eq!(ctx.snapshot(), before);
}

#[test]
fn deploy_rejects_empty_stdin_line() {
    let ctx = TestContext::new();
    let before = ctx.snapshot();

    ctx.cli()
        .arg("deploy")
        .write_stdin("\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Invalid user profile ''"));

    assert_eq!(ctx.snapshot(), before);
}

#[test]
fn deploy_keeps_spaces_in_user_names() {
    let ctx = TestContext::with_users(&["alice", "alice "]);

    ctx.cli().args(["deploy", "--user", "alice "]).assert().success();
    ctx.cli().arg("deploy").write_stdin("alice \r\n").assert().success();

    ctx.assert_deployed("alice ");
    assert!(!ctx.users_root().join("alice").join("AppData").exists());
}

#[test]
fn deploy_twice_overwrites_modified_files() {
    let ctx = TestContext::new();
    ctx.cli().args(["deploy", "-u", "alice"]).assert().success();
    fs::write(ctx.config_dir("alice").join("input.conf"), "q quit\n").unwrap();

    ctx.cli().args(["deploy", "-u", "alice"]).assert().success();

    ctx.assert_deployed("alice");
    ctx.assert_exact_layout("alice");
}

#[test]
fn deploy_accepts_existing_directories() {
    let ctx = TestContext::new();
    fs::create_dir_all(ctx.scripts_dir("alice")).unwrap();

    ctx.cli().args(["d", "-u", "alice"]).assert().success();

    ctx.assert_deployed("alice");
}

#[test]
fn deploy_reports_io_failure() {
    let ctx = TestContext::new();
    let roaming = ctx.config_dir("alice").parent().unwrap().to_path_buf();
    fs::create_dir_all(&roaming).unwrap();
    fs::write(roaming.join("mpv"), "a file where the directory should be").unwrap();

    ctx.cli()
        .args(["deploy", "-u", "alice"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error:"));
}

#[test]
fn dry_run_plans_without_writing() {
    let ctx = TestContext::new();
    let before = ctx.snapshot();

    ctx.cli()
        .args(["deploy", "--dry-run", "-u", "alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would write mpv.conf"))
        .stdout(predicate::str::contains("Would write mpv_chapters.js"));

    assert_eq!(ctx.snapshot(), before);
}
