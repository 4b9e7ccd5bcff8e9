use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use serde_json::Value;
use tempfile::TempDir;

fn bin_path() -> String {
    std::env::var("CARGO_BIN_EXE_turtle-ps").unwrap_or_else(|_| "target/debug/turtle-ps".to_string())
}

/// Empty config file so a user's own configuration never leaks into tests
fn empty_config(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("empty.toml");
    std::fs::write(&path, "").expect("write empty config");
    path
}

fn run_with_stdin(args: &[&str], stdin: impl AsRef<[u8]>) -> Output {
    let mut child = Command::new(bin_path())
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn turtle-ps");

    child
        .stdin
        .take()
        .expect("Child stdin should be available")
        .write_all(stdin.as_ref())
        .expect("write program");

    child.wait_with_output().expect("wait for turtle-ps")
}

#[test]
fn postscript_from_stdin() {
    let dir = TempDir::new().unwrap();
    let config = empty_config(&dir);
    let output = run_with_stdin(
        &["--config", config.to_str().unwrap()],
        "U C 0.5 0.5 0.5 S 10\n",
    );

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "%!PS-Adobe-3.0 EPSF-3.0",
            "%%BoundingBox: 0 0 595 841",
            "0.50 0.50 0.50 setrgbcolor",
            "-5.000000 -5.000000 10 10 rectfill",
            "showpage",
        ]
    );
}

#[test]
fn json_output_to_file() {
    let dir = TempDir::new().unwrap();
    let config = empty_config(&dir);
    let program = dir.path().join("walk.txt");
    let out = dir.path().join("walk.jsonl");
    std::fs::write(&program, "W 10\n").unwrap();

    let output = run_with_stdin(
        &[
            program.to_str().unwrap(),
            "--config",
            config.to_str().unwrap(),
            "--format",
            "json",
            "--output",
            out.to_str().unwrap(),
        ],
        "",
    );
    assert!(output.status.success());

    let text = std::fs::read_to_string(&out).unwrap();
    let ops: Vec<String> = text
        .lines()
        .map(|l| {
            let v: Value = serde_json::from_str(l).expect("valid JSON line");
            v["op"].as_str().unwrap().to_string()
        })
        .collect();
    assert_eq!(ops, ["header", "line_to", "stroke", "show_page"]);
}

#[test]
fn malformed_command_still_succeeds() {
    let dir = TempDir::new().unwrap();
    let config = empty_config(&dir);
    let output = run_with_stdin(&["--config", config.to_str().unwrap()], "W abc\nS 2\n");

    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("'W' expects an integer"), "{stderr}");

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("-1.000000 -1.000000 2 2 rectfill"));
}

#[test]
fn check_mode_reports_and_fails() {
    let dir = TempDir::new().unwrap();
    let config = empty_config(&dir);
    let output = run_with_stdin(
        &["--config", config.to_str().unwrap(), "--check"],
        "G 1\n",
    );

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("1:1: 'G' expects a number for argument 2 of 2"), "{stderr}");
}

#[test]
fn check_mode_accepts_valid_program() {
    let dir = TempDir::new().unwrap();
    let config = empty_config(&dir);
    let output = run_with_stdin(
        &["--config", config.to_str().unwrap(), "--check"],
        "M 2 2 5\nP 6 10\n",
    );
    assert!(output.status.success());
}

#[test]
fn invalid_utf8_bytes_are_skipped() {
    let dir = TempDir::new().unwrap();
    let config = empty_config(&dir);
    let output = run_with_stdin(
        &["--config", config.to_str().unwrap()],
        b"\xe9 S 10\n\xff".as_slice(),
    );

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().skip(2).collect();
    assert_eq!(lines, ["-5.000000 -5.000000 10 10 rectfill", "showpage"]);
}
