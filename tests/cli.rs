//! Argument parsing and process level behaviour of the `slcli` binary.

use assert_cmd::Command;
use clap::CommandFactory;
use predicates::prelude::*;
use softlayer_cli::cli::Cli;

/// Test that the clap definitions are internally consistent
#[test]
fn test_command_definitions() {
    Cli::command().debug_assert();
}

/// Test that help exits cleanly
#[test]
fn test_help() {
    Command::cargo_bin("slcli")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("autoscale"))
        .stdout(predicate::str::contains("hardware"));
}

/// Test that a bad id fails locally with exit code 1, without credentials
#[test]
fn test_invalid_id_exit_code() {
    Command::cargo_bin("slcli")
        .unwrap()
        .args(["hardware", "detail", "abc"])
        .env_remove("SL_USERNAME")
        .env_remove("SL_API_KEY")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("FAILED"))
        .stderr(predicate::str::contains(
            "Invalid input for 'Hardware server ID'. It must be a positive integer.",
        ));
}

/// Test that an unknown output format is rejected before dispatch
#[test]
fn test_invalid_output_format() {
    Command::cargo_bin("slcli")
        .unwrap()
        .args(["autoscale", "list", "--output", "yaml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid output format, only JSON is supported now."));
}

/// Test that an unknown subcommand is a usage error
#[test]
fn test_unknown_subcommand() {
    Command::cargo_bin("slcli")
        .unwrap()
        .args(["hardware", "explode"])
        .assert()
        .code(1);
}
