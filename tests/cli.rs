// End-to-end tests for the `validate` binary

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

const SHA1_123: &str = "7037807198c22a7d2b0807371d763779a84fdfcf";
const SHA1_124: &str = "ab7911513debc7015ad50429a8159771458b24ce";

fn validate(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_validate"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run validate")
}

fn write_fixture(dir: &Path) {
    fs::write(dir.join("a.bin"), [1u8, 2, 3]).unwrap();
    fs::write(dir.join("data_hashes.txt"), format!("{} a.bin\n", SHA1_123)).unwrap();
}

#[test]
fn test_success_is_silent() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path());

    let output = validate(&[dir.path().to_str().unwrap()]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(output.stderr.is_empty());
}

#[test]
fn test_mismatch_exits_non_zero() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path());
    fs::write(dir.path().join("a.bin"), [1u8, 2, 4]).unwrap();

    let output = validate(&[dir.path().to_str().unwrap()]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains(&format!(
        "Hash for a.bin is {}, which does not match the expected {}",
        SHA1_124, SHA1_123
    )));
}

#[test]
fn test_verbose_mismatch_reported_once() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path());
    fs::write(dir.path().join("a.bin"), [1u8, 2, 4]).unwrap();

    let output = validate(&["-v", dir.path().to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("Hash for a.bin is").count(), 1);
}

#[test]
fn test_missing_argument_prints_usage() {
    let output = validate(&[]);
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"));
}

#[test]
fn test_missing_manifest_message() {
    let dir = tempfile::tempdir().unwrap();

    let output = validate(&[dir.path().to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("No data_hashes.txt manifest found"));
}

#[test]
fn test_json_report() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path());
    fs::write(dir.path().join("b.bin"), b"b").unwrap();
    fs::write(
        dir.path().join("data_hashes.txt"),
        format!("{} a.bin\n{} b.bin\n", SHA1_123, SHA1_123),
    )
    .unwrap();

    let output = validate(&["--json", dir.path().to_str().unwrap()]);
    assert!(!output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["outcomes"][0]["status"], "passed");
    assert_eq!(json["outcomes"][1]["status"], "mismatch");
    assert_eq!(json["outcomes"][1]["path"], "b.bin");
}

#[cfg(target_os = "linux")]
#[test]
fn test_json_report_unserializable_path_fails() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let root = tempfile::tempdir().unwrap();
    let dir = root.path().join(OsStr::from_bytes(b"d\xff"));
    fs::create_dir(&dir).unwrap();
    write_fixture(&dir);

    let output = Command::new(env!("CARGO_BIN_EXE_validate"))
        .arg("--json")
        .arg(&dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run validate");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("error: Serialization error"));
}

#[test]
fn test_text_report_on_success() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path());

    let output = validate(&["--report", "--parallel", dir.path().to_str().unwrap()]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("OK          a.bin"));
    assert!(stdout.contains("1 of 1 files passed"));
}
