//! Debug console behavioral specifications.
//!
//! The console reads one command per line; these specs pipe a whole
//! session through stdin and inspect what it printed and wrote.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

/// Spec: docs/specs/04-console.md#commands
///
/// > A scripted session can write files, query paths, and run commands
#[test]
fn a_scripted_session_drives_the_capability_surface() {
    let project = Project::new();

    noi_cmd()
        .arg("console")
        .current_dir(project.path())
        .write_stdin("file a.txt hello console\nexists a.txt\nexec echo shell-ok\nexit\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("true"))
        .stdout(predicates::str::contains("shell-ok"));

    assert_eq!(project.read("a.txt"), "hello console");
}

/// Spec: docs/specs/04-console.md#errors
///
/// > Errors are printed and the session keeps going
#[test]
fn errors_keep_the_session_alive() {
    let project = Project::new();

    noi_cmd()
        .arg("console")
        .current_dir(project.path())
        .write_stdin("evaluate 1+1\nexists nothing\nexit\n")
        .assert()
        .success()
        .stderr(predicates::str::contains("unknown command `evaluate`"))
        .stdout(predicates::str::contains("false"));
}

/// Spec: docs/specs/04-console.md#commands
///
/// > render substitutes inline name=value parameters without writing
#[test]
fn render_inspects_a_template_read_only() {
    noi_cmd()
        .arg("console")
        .current_dir(fixture("webapp"))
        .write_stdin("render .noi/component/component.tsx.tmpl name=nav-bar\nexit\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("export function NavBar()"));
}

/// Spec: docs/specs/04-console.md#commands
///
/// > cd moves the session and pwd reports where it is
#[test]
fn cd_and_pwd_track_the_working_directory() {
    let project = Project::new();

    noi_cmd()
        .arg("console")
        .current_dir(project.path())
        .write_stdin("mkdir packages/core\ncd packages/core\npwd\nfile inner.txt x\nexit\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("packages/core"));

    assert_eq!(project.read("packages/core/inner.txt"), "x");
}

/// Spec: docs/specs/04-console.md#session
///
/// > End of input ends the session cleanly
#[test]
fn end_of_input_ends_the_session() {
    let project = Project::new();

    noi_cmd()
        .arg("console")
        .current_dir(project.path())
        .write_stdin("")
        .assert()
        .success();
}

/// Spec: docs/specs/04-console.md#commands
///
/// > help lists every console command
#[test]
fn help_lists_the_commands() {
    let project = Project::new();

    noi_cmd()
        .arg("console")
        .current_dir(project.path())
        .write_stdin("help\nexit\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("render <template>"))
        .stdout(predicates::str::contains("exit | quit"));
}
