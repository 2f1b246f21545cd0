use crate::harness::TestContext;
use mpvcfg::{AppError, DeployOptions, DeployOutcome, ProfileLayout, deploy_at};

#[test]
fn deploy_at_returns_written_paths_in_order() {
    let ctx = TestContext::new();

    let outcome =
        deploy_at(ctx.users_root(), ProfileLayout::Windows, "alice", DeployOptions::default())
            .expect("deploy failed");

    let DeployOutcome::Deployed { paths, written } = outcome else {
        panic!("expected a deployment");
    };
    assert_eq!(paths.config_dir, ctx.config_dir("alice"));
    assert_eq!(paths.scripts_dir, ctx.scripts_dir("alice"));
    assert_eq!(
        written,
        vec![
            ctx.config_dir("alice").join("mpv.conf"),
            ctx.config_dir("alice").join("input.conf"),
            ctx.config_dir("alice").join("my notes.txt"),
            ctx.scripts_dir("alice").join("autoload.lua"),
            ctx.scripts_dir("alice").join("mpv_chapters.js"),
        ]
    );
    ctx.assert_deployed("alice");
}

#[test]
fn deploy_at_unknown_user_is_a_soft_outcome() {
    let ctx = TestContext::new();
    let before = ctx.snapshot();

    let outcome =
        deploy_at(ctx.users_root(), ProfileLayout::Windows, "charlie", DeployOptions::default())
            .expect("unknown profile should not be an error");

    assert_eq!(
        outcome,
        DeployOutcome::ProfileNotFound {
            identifier: "charlie".into(),
            users_root: ctx.users_root().to_path_buf(),
        }
    );
    assert!(matches!(outcome.into_result(), Err(AppError::ProfileNotFound { .. })));
    assert_eq!(ctx.snapshot(), before);
}

#[test]
fn content_does_not_depend_on_the_user() {
    let ctx = TestContext::with_users(&["alice", "Bob Smith", "x.y-z"]);

    for user in ["alice", "Bob Smith", "x.y-z"] {
        deploy_at(ctx.users_root(), ProfileLayout::Windows, user, DeployOptions::default())
            .expect("deploy failed");
        ctx.assert_deployed(user);
        ctx.assert_exact_layout(user);
    }
}

#[test]
fn deploy_at_dry_run_touches_nothing() {
    let ctx = TestContext::new();
    let before = ctx.snapshot();

    let outcome =
        deploy_at(ctx.users_root(), ProfileLayout::Xdg, "bob", DeployOptions { dry_run: true })
            .expect("dry run failed");

    let DeployOutcome::Planned { planned, .. } = outcome else {
        panic!("expected a plan");
    };
    assert_eq!(planned.len(), 5);
    assert!(planned[0].ends_with(".config/mpv/mpv.conf"));
    assert_eq!(ctx.snapshot(), before);
}

#[test]
fn deploy_at_matches_profile_names_with_surrounding_spaces() {
    let ctx = TestContext::with_users(&["bob ", "bob"]);

    let outcome =
        deploy_at(ctx.users_root(), ProfileLayout::Windows, "bob ", DeployOptions::default())
            .expect("deploy failed");

    assert!(matches!(outcome, DeployOutcome::Deployed { .. }));
    ctx.assert_deployed("bob ");
    assert!(!ctx.users_root().join("bob").join("AppData").exists());
}

#[cfg(target_os = "linux")]
#[test]
fn deploy_at_never_creates_a_profile_for_a_non_utf8_entry() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let ctx = TestContext::with_users(&[]);
    std::fs::create_dir(ctx.users_root().join(OsStr::from_bytes(b"caf\xFF"))).unwrap();
    let before = ctx.snapshot();

    let outcome = deploy_at(
        ctx.users_root(),
        ProfileLayout::Windows,
        "caf\u{FFFD}",
        DeployOptions::default(),
    )
    .expect("deploy failed");

    assert!(matches!(outcome, DeployOutcome::ProfileNotFound { .. }));
    assert_eq!(ctx.snapshot(), before);
    assert_eq!(std::fs::read_dir(ctx.users_root()).unwrap().count(), 1);
}
