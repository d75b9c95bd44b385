// crates/cli/tests/cli_tests.rs

pub mod common;

use common::{get_command, get_command_with_test_config, setup_default_test_config};
use predicates::prelude::*;

#[test]
fn test_cli_help() {
    let mut cmd = get_command();
    cmd.arg("--help");
    cmd.assert().success().stdout(predicate::str::contains(
        "Siteprov - Provision communication and team sites",
    ));
}

#[test]
fn test_cli_version() {
    let mut cmd = get_command();
    cmd.arg("--version");
    cmd.assert().success();
}

#[test]
fn test_cli_invalid_command() {
    let mut cmd = get_command();
    cmd.arg("invalid-command");
    cmd.assert().failure();
}

#[test]
fn test_cli_invalid_subcommand() {
    let mut cmd = get_command();
    cmd.args(["config", "invalid-subcommand"]);
    cmd.assert().failure();
}

#[test]
fn test_cli_new_requires_type() {
    let mut cmd = get_command();
    cmd.args(["new", "--title", "Contoso News"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("--type"));
}

#[test]
fn test_cli_rejects_unknown_site_design() {
    let mut cmd = get_command();
    cmd.args(["new", "--type", "communication-site", "--site-design", "Hero"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unknown site design `Hero`"));
}

#[test]
fn test_cli_rejects_unknown_connection_kind() {
    let mut cmd = get_command();
    cmd.args(["--connection-kind", "carrier-pigeon", "config", "validate"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unknown connection kind"));
}

#[test]
fn test_cli_verbose_flag() {
    let mut cmd = get_command();
    cmd.args(["-v", "help"]);
    cmd.assert().success();
}

#[test]
fn test_fields_lists_team_site_fields() {
    let temp_dir = setup_default_test_config();
    let mut cmd = get_command_with_test_config(&temp_dir);
    cmd.args(["--no-color", "fields", "--type", "team-site"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("alias"))
        .stdout(predicate::str::contains("owners"))
        .stdout(predicate::str::contains("site_design").not())
        .stdout(predicate::str::contains("url").not());
}

#[test]
fn test_fields_shows_communication_design_modes() {
    let temp_dir = setup_default_test_config();
    let mut cmd = get_command_with_test_config(&temp_dir);
    cmd.args(["--no-color", "fields", "--type", "CommunicationSite"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("site_design_id"))
        .stdout(predicate::str::contains("custom design"))
        .stdout(predicate::str::contains("Topic"));
}

#[test]
fn test_fields_unknown_type_fails() {
    let temp_dir = setup_default_test_config();
    let mut cmd = get_command_with_test_config(&temp_dir);
    cmd.args(["--no-color", "fields", "--type", "wiki"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid_argument"))
        .stderr(predicate::str::contains("Unknown site type `wiki`"));
}
