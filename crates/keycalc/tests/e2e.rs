//! End-to-end CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn keycalc() -> Command {
    let mut cmd = Command::cargo_bin("keycalc").expect("binary not found");
    cmd.env_remove("KEYCALC_KEYS")
        .env_remove("KEYCALC_HISTORY_SIZE")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn help_flag() {
    keycalc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("calculator"));
}

#[test]
fn version_flag() {
    keycalc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("keycalc"));
}

#[test]
fn addition_quiet() {
    keycalc()
        .args(["--keys", "5+3=", "-q"])
        .assert()
        .success()
        .stdout("8\n");
}

#[test]
fn addition_with_history() {
    keycalc()
        .args(["--keys", "5+3="])
        .assert()
        .success()
        .stdout(predicate::str::contains("History:"))
        .stdout(predicate::str::contains("5 + 3 = 8"));
}

#[test]
fn percent() {
    keycalc()
        .args(["-k", "10%", "-q"])
        .assert()
        .success()
        .stdout("0.1\n");
}

#[test]
fn division_by_zero() {
    keycalc()
        .args(["-k", "7/0<Enter>", "-q"])
        .assert()
        .success()
        .stdout("Error\n");
}

#[test]
fn operator_after_error_carries_it_forward() {
    keycalc()
        .args(["-k", "7/0=+"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Error +\n0\n"));

    keycalc()
        .args(["-k", "7/0=+5=", "-q"])
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn chained_operators() {
    keycalc()
        .args(["-k", "9+1*2="])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("20\n"))
        .stdout(predicate::str::contains("10 × 2 = 20"))
        .stdout(predicate::str::contains("9 + 1 = 10"));
}

#[test]
fn grouped_display() {
    keycalc()
        .args(["-k", "1234567.50", "-q"])
        .assert()
        .success()
        .stdout("1,234,567.50\n");
}

#[test]
fn pending_operator_shows_previous_line() {
    keycalc()
        .args(["-k", "1200+"])
        .assert()
        .success()
        .stdout("1,200 +\n0\n");
}

#[test]
fn json_output() {
    let output = keycalc()
        .args(["-k", "6*7=", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["display"]["current_text"], "42");
    assert_eq!(value["history"][0]["expression"], "6 × 7 =");
    assert_eq!(value["history"][0]["result"], "42");
}

#[test]
fn trace_output() {
    keycalc()
        .args(["-k", "12<Backspace>", "--trace"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Trace ==="))
        .stdout(predicate::str::contains("Backspace  1"));
}

#[test]
fn demo_history() {
    keycalc()
        .args(["-k", "", "--demo-history"])
        .assert()
        .success()
        .stdout(predicate::str::contains("100 ÷ 4 = 25"))
        .stdout(predicate::str::contains("12 × 12 = 144"));
}

#[test]
fn history_size_from_env() {
    keycalc()
        .env("KEYCALC_HISTORY_SIZE", "1")
        .args(["-k", "1+1=2+2=", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 + 2 =").and(predicate::str::contains("1 + 1 =").not()));
}

#[test]
fn unknown_key_fails() {
    keycalc()
        .args(["-k", "5x3"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown key: x"));
}

#[test]
fn unterminated_key_fails() {
    keycalc()
        .args(["-k", "5<Enter"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unterminated"));
}

#[test]
fn zero_history_size_fails() {
    keycalc()
        .args(["-k", "1", "--history-size", "0"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("history size"));
}

#[test]
fn completion_bash() {
    keycalc()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("keycalc"));
}
