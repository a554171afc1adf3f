//! Integration tests for the shapekit CLI
//!
//! These tests run the actual binary and verify output.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Get the binary to test
#[allow(deprecated)]
fn shapekit_cmd() -> Command {
    Command::cargo_bin("shapekit").unwrap()
}

fn write(dir: &TempDir, name: &str, contents: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn test_help_flag() {
    shapekit_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("small data-shape toolkit"));
}

#[test]
fn test_json_compact() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "a.json", r#"{ "b": 1, "a": [true] }"#);

    shapekit_cmd()
        .args(["json", &file, "--compact"])
        .assert()
        .success()
        .stdout(predicate::str::diff("{\"b\":1,\"a\":[true]}\n"));
}

#[test]
fn test_json_to_array() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "a.json", r#"{"a": {"b": 2}}"#);

    shapekit_cmd()
        .args(["json", &file, "--to-array", "--compact"])
        .assert()
        .success()
        .stdout(predicate::str::diff("[[\"a\",[[\"b\",2]]]]\n"));
}

#[test]
fn test_json_to_array_rejects_scalar() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "n.json", "123");

    shapekit_cmd()
        .args(["json", &file, "--to-array"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("SK-040"))
        .stderr(predicate::str::contains("Fix:"));
}

#[test]
fn test_json_missing_file() {
    shapekit_cmd()
        .args(["json", "/nonexistent/file.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("SK-020"));
}

#[test]
fn test_json_invalid() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "bad.json", "{oops");

    shapekit_cmd()
        .args(["json", &file])
        .assert()
        .failure()
        .stderr(predicate::str::contains("SK-021"));
}

#[test]
fn test_json_unknown_encoding_rejected_by_parser() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "a.json", "{}");

    shapekit_cmd()
        .args(["json", &file, "--encoding", "utf16"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("utf16"));
}

#[test]
fn test_to_object_key_index() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "pairs.json", r#"[["a", 10], ["b", 20]]"#);

    shapekit_cmd()
        .args(["to-object", &file, "--key-index", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"10\": \"a\""))
        .stdout(predicate::str::contains("\"20\": \"b\""));
}

#[test]
fn test_to_object_out_of_bounds() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "pairs.json", r#"[["a", 10]]"#);

    shapekit_cmd()
        .args(["to-object", &file, "-k", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("SK-041"));
}

#[test]
fn test_to_object_negative_key_index() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "pairs.json", r#"[["a", 10]]"#);

    shapekit_cmd()
        .args(["to-object", &file, "-k", "-1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("SK-041"))
        .stderr(predicate::str::contains("Key index -1"));
}

#[test]
fn test_config_load_options_apply_to_filter() {
    let dir = TempDir::new().unwrap();
    let config = write(&dir, "shapekit.yaml", "load:\n  encoding: latin1\n");
    let file = dir.path().join("latin1.json");
    fs::write(&file, b"[\"caf\xe9\", 1]").unwrap();

    shapekit_cmd()
        .args(["filter", file.to_str().unwrap(), "--type", "string", "-c", &config])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"caf\u{e9}\""));
}

#[test]
fn test_json_encoding_flag_overrides_config() {
    let dir = TempDir::new().unwrap();
    let config = write(&dir, "shapekit.yaml", "load:\n  encoding: utf8\n");
    let file = dir.path().join("latin1.json");
    fs::write(&file, b"[\"caf\xe9\"]").unwrap();

    shapekit_cmd()
        .args(["--config", &config, "json", file.to_str().unwrap(), "--encoding", "latin1"])
        .args(["--compact"])
        .assert()
        .success()
        .stdout(predicate::str::diff("[\"caf\u{e9}\"]\n"));
}

#[test]
fn test_missing_config_file() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "a.json", "[1]");

    shapekit_cmd()
        .args(["dedup", &file, "-c", "/nonexistent/shapekit.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("SK-020"));
}

#[test]
fn test_filter_numbers() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "mixed.json", r#"[1, ["hello", 2, false], true, 3]"#);

    let output = shapekit_cmd()
        .args(["filter", &file, "--type", "number"])
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value, serde_json::json!([1, [2], 3]));
}

#[test]
fn test_filter_requires_type() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "mixed.json", "[1]");

    shapekit_cmd().args(["filter", &file]).assert().failure();
}

#[test]
fn test_dedup_with_except() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "dups.json", "[1, 2, 3, 1, 2, 3, 4, 5]");

    let output = shapekit_cmd()
        .args(["dedup", &file, "--except", "1", "--except", "2"])
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value, serde_json::json!([1, 2, 3, 1, 2, 4, 5]));
}

#[test]
fn test_dedup_rejects_object() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "obj.json", r#"{"a": 1}"#);

    shapekit_cmd()
        .args(["dedup", &file])
        .assert()
        .failure()
        .stderr(predicate::str::contains("SK-043"));
}

#[test]
fn test_wait_unknown_unit() {
    shapekit_cmd().args(["wait", "10", "bad"]).assert().success();
}

#[cfg(unix)]
#[test]
fn test_run_commands_in_argument_order() {
    let dir = TempDir::new().unwrap();
    let config = write(
        &dir,
        "shapekit.yaml",
        r#"
commands:
  - slow: sleep 0.2; echo first
  - fast: echo second
"#,
    );

    shapekit_cmd()
        .args(["run", "--config", &config, "slow", "fast"])
        .assert()
        .success()
        .stdout(predicate::str::diff("first\nsecond\n"));
}

#[cfg(unix)]
#[test]
fn test_run_failing_command() {
    let dir = TempDir::new().unwrap();
    let config = write(&dir, "shapekit.yaml", "commands:\n  - boom: echo bad >&2; exit 2\n");

    shapekit_cmd()
        .args(["run", "-c", &config, "boom"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("SK-031"))
        .stderr(predicate::str::contains("exit status 2"));
}

#[test]
fn test_run_unknown_command() {
    let dir = TempDir::new().unwrap();
    let config = write(&dir, "shapekit.yaml", "commands: []\n");

    shapekit_cmd()
        .args(["run", "-c", &config, "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("SK-032"));
}
