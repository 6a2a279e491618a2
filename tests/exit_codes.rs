//! Process-level tests: the binary's stdout and exit code as a monitoring
//! system sees them.

use std::process::{Command, Output};

mod common;
use common::FakeMtr;

fn check_mtr(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_check-mtr"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_unknown_flag_exits_unknown() {
    let output = check_mtr(&["-H", "target", "--no-such-flag"]);
    assert_eq!(output.status.code(), Some(3));
    assert!(stdout(&output).starts_with("UNKNOWN - "));
}

#[test]
fn test_missing_host_exits_unknown() {
    let output = check_mtr(&["-l", "10"]);
    assert_eq!(output.status.code(), Some(3));
    assert_eq!(stdout(&output).trim_end(), "UNKNOWN - No host was given!");
}

#[test]
fn test_malformed_pattern_exits_unknown() {
    let output = check_mtr(&["-H", "target", "-j", "r1,*1-2-3"]);
    assert_eq!(output.status.code(), Some(3));
    assert!(stdout(&output).starts_with("UNKNOWN - Wrong format of hops string: "));
}

#[test]
fn test_help_and_version_exit_zero() {
    let help = check_mtr(&["--help"]);
    assert_eq!(help.status.code(), Some(0));
    assert!(stdout(&help).contains("--jumps"));

    let version = check_mtr(&["--version"]);
    assert_eq!(version.status.code(), Some(0));
    assert!(stdout(&version).contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_passing_path_exits_ok() {
    let mtr = FakeMtr::printing(&common::report_json(&[("r1", 5.0, 0.0), ("r2", 10.0, 0.0)]));
    let mtr_path = mtr.path.to_string_lossy().into_owned();

    let output = check_mtr(&["-H", "target", "-j", "r1,r2", "-l", "50", "--mtr-path", &mtr_path]);
    assert_eq!(output.status.code(), Some(0));

    let text = stdout(&output);
    assert!(text.starts_with("OK - All values were in the valid range\nHops:\n"));
    assert!(text.contains("'hop_r2_rta'=10ms;;"));
}

#[test]
fn test_violation_exits_critical() {
    let mtr = FakeMtr::printing(&common::report_json(&[("r1", 5.0, 0.0), ("r2", 10.0, 0.0)]));
    let mtr_path = mtr.path.to_string_lossy().into_owned();

    let output = check_mtr(&["-H", "target", "-j", "r1,r5", "--mtr-path", &mtr_path]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output)
        .starts_with("CRITICAL - The expected hop r5 was not in the routing path!"));
}

#[test]
fn test_failing_mtr_exits_unknown() {
    let mtr = FakeMtr::with_script("exit 1");
    let mtr_path = mtr.path.to_string_lossy().into_owned();

    let output = check_mtr(&["-H", "target", "-l", "10", "--mtr-path", &mtr_path]);
    assert_eq!(output.status.code(), Some(3));

    let text = stdout(&output);
    assert!(text.starts_with("UNKNOWN - mtr failed: "));
    assert!(!text.contains("Hops:"));
}
