use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_help_lists_configuration() {
    let mut cmd = Command::new(cargo_bin!("transfer-manager"));
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--host"))
        .stdout(predicate::str::contains("--port"))
        .stdout(predicate::str::contains("--log-filter"))
        .stdout(predicate::str::contains("TRANSFER_MANAGER_PORT"));
}

#[test]
fn test_invalid_port_is_rejected_before_startup() {
    let mut cmd = Command::new(cargo_bin!("transfer-manager"));
    cmd.arg("--port").arg("not_a_port");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'not_a_port'"));
}

#[test]
fn test_invalid_port_from_environment_is_rejected() {
    let mut cmd = Command::new(cargo_bin!("transfer-manager"));
    cmd.env("TRANSFER_MANAGER_PORT", "99999");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid value '99999'"));
}
