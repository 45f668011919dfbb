use assert_cmd::cargo::{self};
use predicates::str::contains;

#[test]
fn prints_help() {
    let mut cmd = cargo::cargo_bin_cmd!("linesheet");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(contains("linesheet"));
}

#[test]
fn rejects_unknown_flags() {
    let mut cmd = cargo::cargo_bin_cmd!("linesheet");
    cmd.arg("--not-a-flag").assert().failure();
}
