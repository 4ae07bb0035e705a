//! End-to-end checks of the `ptrsweep` binary that need no DNS traffic.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn ptrsweep() -> Command {
    let mut cmd = Command::cargo_bin("ptrsweep").unwrap();
    // Unroutable endpoint; none of these tests should reach a lookup.
    cmd.args(["--dns", "127.0.0.1", "--port", "9", "--timeout", "1"]);
    cmd
}

#[test]
fn help_lists_resolver_flags() {
    Command::cargo_bin("ptrsweep")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--dns"))
        .stdout(predicate::str::contains("--port"))
        .stdout(predicate::str::contains("-c"))
        .stdout(predicate::str::contains("-v"));
}

#[test]
fn empty_input_exits_cleanly() {
    ptrsweep()
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
}

#[test]
fn invalid_cidr_is_reported_once() {
    ptrsweep()
        .write_stdin("10.0.0.0/abc\n")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr("Invalid CIDR block: 10.0.0.0/abc\n");
}

#[test]
fn every_invalid_line_gets_its_own_diagnostic() {
    ptrsweep()
        .write_stdin("1.2.3.4/40\nfoo/bar\n")
        .assert()
        .success()
        .stderr("Invalid CIDR block: 1.2.3.4/40\nInvalid CIDR block: foo/bar\n");
}

#[test]
fn zero_concurrency_is_rejected() {
    ptrsweep()
        .args(["-c", "0"])
        .write_stdin("")
        .assert()
        .failure();
}

#[test]
fn unreadable_config_is_fatal() {
    ptrsweep()
        .args(["--config", "/nonexistent/ptrsweep.toml"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read config file"));
}

#[test]
fn config_file_is_applied() {
    let mut tmpfile = tempfile::NamedTempFile::new().unwrap();
    writeln!(tmpfile, "concurrency = 3\nlog_level = \"warn\"").unwrap();

    ptrsweep()
        .arg("--config")
        .arg(tmpfile.path())
        .write_stdin("10.0.0.0/abc\n")
        .assert()
        .success()
        .stderr("Invalid CIDR block: 10.0.0.0/abc\n");
}
