//! Subprocess-driven CLI tests: each test shells out to the built binary and inspects stdout,
//! stderr, and the exit code, exercising the argv surface rather than the library directly.

use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_kstab"))
        .args(args)
        .output()
        .expect("binary should spawn")
}

#[test]
fn help_prints_usage() {
    let output = run(&["--help"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("kstab"));
}

#[test]
fn test_verb_passes_smoke_checks() {
    let output = run(&["test"]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("smoke checks passed"));
}

#[test]
fn verify_verb_reports_stability() {
    let output = run(&["verify", "6", "1"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("1-stable"));
}

#[test]
fn verify_verb_json_is_well_formed() {
    let output = run(&["--json", "verify", "6", "2"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("valid json");
    assert_eq!(parsed["n"], 6);
    assert_eq!(parsed["k"], 2);
}

#[test]
fn existence_verb_at_k_one_always_reports_true() {
    let output = run(&["existence", "7", "1"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("exists: true"));
}

#[test]
fn out_of_range_k_exits_with_code_two() {
    let output = run(&["verify", "5", "9"]);
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn generate_verb_prints_requested_model() {
    let output = run(&["generate", "roommates", "5"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("roommates"));
}

#[test]
fn brute_force_house_allocation_rejects_n_above_eight() {
    let output = run(&["brute-force-house-allocation", "9", "1"]);
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn key_k_values_verb_runs() {
    let output = run(&["key-k-values"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Key k Values"));
}
