//! Command-line tests for the `pagesim` binary.
//!
//! These run the built executable and check exit status, stdout and stderr.

use std::path::Path;
use std::process::{Command, Output};

use tempfile::tempdir;

fn pagesim(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pagesim"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

/// Rejected input: status 1, nothing on stdout, one `error:` line on stderr.
fn assert_rejected(args: &[&str]) {
    let output = pagesim(args);
    let err = stderr(&output);

    assert_eq!(output.status.code(), Some(1), "args {:?}", args);
    assert!(output.stdout.is_empty(), "args {:?} printed {:?}", args, stdout(&output));
    assert!(err.starts_with("error: "), "args {:?} stderr {:?}", args, err);
    assert_eq!(err.lines().count(), 1, "args {:?} stderr {:?}", args, err);
}

// ============================================================================
// Configuration errors
// ============================================================================

#[test]
fn test_zero_frames_rejected() {
    assert_rejected(&["run", "fifo", "0", "A"]);
}

#[test]
fn test_negative_frames_rejected() {
    assert_rejected(&["run", "lru", "-1", "A"]);
    assert_rejected(&["compare", "-4", "A", "B"]);
}

#[test]
fn test_unknown_policy_rejected() {
    assert_rejected(&["run", "mru", "3", "A"]);
    assert_rejected(&["run", "5", "3", "A"]);
}

#[test]
fn test_multi_symbol_page_rejected() {
    assert_rejected(&["run", "1", "3", "A", "BC"]);
}

#[test]
fn test_invalid_capacity_reported_once() {
    let output = pagesim(&["run", "fifo", "0", "A"]);
    assert_eq!(stderr(&output), "error: Invalid frame capacity: 0 (must be at least 1)\n");
}

#[test]
fn test_failed_validation_creates_no_output_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("o.txt");
    let path_str = path.to_str().unwrap();

    assert_rejected(&["-o", path_str, "run", "fifo", "-1", "A"]);
    assert!(!Path::new(&path).exists());

    assert_rejected(&["-o", path_str, "compare", "0", "A"]);
    assert!(!Path::new(&path).exists());
}

// ============================================================================
// Traces
// ============================================================================

#[test]
fn test_quiet_prints_only_total() {
    let output = pagesim(&["run", "4", "2", "A", "B", "A", "C", "-q"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "Total page faults: 3\n");
    assert!(output.stderr.is_empty());
}

#[test]
fn test_full_trace() {
    let args = ["run", "fifo", "3", "A", "B", "C", "A", "B", "D", "A", "B", "C", "D"];
    let output = pagesim(&args);
    let trace = stdout(&output);

    assert!(output.status.success());
    assert!(trace.starts_with("Sequence Number: 0\nReference: A\nPage Fault: true\n"));
    assert_eq!(trace.matches("Sequence Number:").count(), 10);
    assert_eq!(trace.matches("Victim:").count(), 5);
    assert!(trace.ends_with("Frame 1: C\nFrame 2: D\nFrame 3: B\n\nTotal page faults: 8\n"));
}

#[test]
fn test_clock_trace_marks_flags() {
    let output = pagesim(&["run", "clock", "2", "A", "B"]);
    assert!(stdout(&output).contains("Frame 1: A*\nFrame 2: B*\n"));
}

#[test]
fn test_empty_reference_string() {
    let output = pagesim(&["run", "optimal", "2"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "Total page faults: 0\n");
}

#[test]
fn test_output_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("trace.txt");

    let output = pagesim(&["-o", path.to_str().unwrap(), "run", "lru", "1", "X", "X", "Y"]);

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    let trace = std::fs::read_to_string(&path).unwrap();
    assert!(trace.contains("Reference: Y\nPage Fault: true\nVictim: X\nFrame 1: Y\n"));
    assert!(trace.ends_with("Total page faults: 2\n"));
}

// ============================================================================
// Compare
// ============================================================================

#[test]
fn test_compare_table() {
    let args = ["compare", "3", "A", "B", "C", "A", "B", "D", "A", "B", "C", "D"];
    let output = pagesim(&args);
    assert!(output.status.success());

    let table = stdout(&output);
    let rows: Vec<(String, u64)> = table
        .lines()
        .skip(1)
        .map(|line| {
            let mut cols = line.split_whitespace();
            let policy = cols.next().unwrap().to_string();
            let faults = cols.next().unwrap().parse().unwrap();
            (policy, faults)
        })
        .collect();

    assert!(table.starts_with("Policy"));
    assert_eq!(
        rows,
        vec![
            ("FIFO".to_string(), 8),
            ("LRU".to_string(), 6),
            ("Clock".to_string(), 8),
            ("Optimal".to_string(), 5),
        ]
    );
}
