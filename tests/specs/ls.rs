//! Listing behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

/// Spec: docs/specs/02-discovery.md#listing
///
/// > noi ls prints the available commands sorted by name
#[test]
fn ls_lists_commands_sorted() {
    let project = Project::new();
    project
        .command("", &["hook"], "steps = []\n")
        .command("", &["component"], "steps = []\n")
        .command("", &["api"], "steps = []\n");

    noi_cmd()
        .arg("ls")
        .current_dir(project.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("Available templates:"))
        .stdout(predicates::str::contains("api\ncomponent\nhook"));
}

/// Spec: docs/specs/02-discovery.md#listing
///
/// > Listing aggregates commands from every ancestor and deduplicates
#[test]
fn ls_merges_commands_from_the_whole_chain() {
    let project = Project::new();
    project
        .command("", &["alpha"], "steps = []\n")
        .command("", &["beta"], "steps = []\n")
        .command("packages/web", &["beta"], "steps = []\n")
        .command("packages/web", &["gamma"], "steps = []\n");

    noi_cmd()
        .arg("ls")
        .current_dir(project.path().join("packages/web"))
        .assert()
        .success()
        .stdout(predicates::str::contains("alpha"))
        .stdout(predicates::str::contains("beta"))
        .stdout(predicates::str::contains("gamma"));
}

/// Spec: docs/specs/02-discovery.md#listing
///
/// > With no .noi folder anywhere, ls reports that nothing is defined
#[test]
fn ls_reports_when_nothing_is_defined() {
    let project = Project::new();

    noi_cmd()
        .arg("ls")
        .current_dir(project.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("No templates found"));
}

/// Spec: docs/specs/02-discovery.md#listing
///
/// > Commands listed in the webapp fixture include both levels
#[test]
fn ls_sees_the_webapp_fixture_commands() {
    noi_cmd()
        .arg("ls")
        .current_dir(fixture("webapp").join("packages/web"))
        .assert()
        .success()
        .stdout(predicates::str::contains("component"))
        .stdout(predicates::str::contains("hook"))
        .stdout(predicates::str::contains("page"));
}
