//! Integration tests for the ds-figures binary.
//!
//! Each test runs the compiled binary against a scratch figures directory
//! and checks which files were written.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

fn run_binary(figures_dir: &Path, args: &[&str], stdin: Option<&str>) -> Output {
    let dir = format!("{}/", figures_dir.display());
    let mut child = Command::new(env!("CARGO_BIN_EXE_ds-figures"))
        .args(args)
        .args(["--figures-dir", &dir])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to run binary");
    match stdin {
        Some(input) => child
            .stdin
            .take()
            .unwrap()
            .write_all(input.as_bytes())
            .unwrap(),
        None => drop(child.stdin.take()),
    }
    child.wait_with_output().expect("Failed to wait for binary")
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "Binary exited with {:?}:\nstderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn test_list_writes_svg_and_pdf() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_binary(dir.path(), &["list", "[1, 2, 3]", "--name", "L1"], None);
    assert_success(&out);

    let svg = fs::read_to_string(dir.path().join("L1.svg")).unwrap();
    assert!(svg.contains(r#"width="600" height="60""#));
    assert!(svg.contains(">3</text>"));
    let pdf = fs::read(dir.path().join("L1.pdf")).unwrap();
    assert!(pdf.starts_with(b"%PDF"));

    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 2);
    assert!(stdout.lines().next().unwrap().ends_with("L1.svg"));
}

#[test]
fn test_bst_orders_numeric_keys() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_binary(dir.path(), &["bst", "10, 9, 100", "-n", "keys"], None);
    assert_success(&out);
    let svg = fs::read_to_string(dir.path().join("keys.svg")).unwrap();
    // 10 is the root with one child on each side: two levels, 80 + 10 tall
    assert!(svg.contains(r#"width="600" height="90""#));
}

#[test]
fn test_tree_from_stdin() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_binary(
        dir.path(),
        &["tree", "--name", "t1"],
        Some("[1, [2, []], [3, []]]\n"),
    );
    assert_success(&out);
    let svg = fs::read_to_string(dir.path().join("t1.svg")).unwrap();
    assert!(svg.contains(r#"width="600" height="90""#));
    assert_eq!(svg.matches("<circle").count(), 3);
}

#[test]
fn test_svg_only_and_width() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_binary(
        dir.path(),
        &["list", "[a]", "-n", "narrow", "--svg-only", "--width", "200"],
        None,
    );
    assert_success(&out);
    let svg = fs::read_to_string(dir.path().join("narrow.svg")).unwrap();
    assert!(svg.contains(r#"width="200" height="60""#));
    assert!(!dir.path().join("narrow.pdf").exists());
}

#[test]
fn test_malformed_literal_fails() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_binary(dir.path(), &["tree", "[1, [2", "-n", "bad"], None);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("error: malformed literal"), "stderr: {stderr}");
    assert!(!dir.path().join("bad.svg").exists());
}

#[test]
fn test_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope");
    let out = run_binary(&missing, &["list", "[1]", "-n", "x"], None);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("cannot write"));
}
