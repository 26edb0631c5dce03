use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::Value;

fn fixture(file: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(file)
}

fn block_ids(doc: &Value) -> Vec<&str> {
    doc["blocks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["id"].as_str().unwrap())
        .collect()
}

#[test]
fn apply_script_prints_updated_document() {
    let doc = fixture("lesson.json");
    let script = fixture("script.json");

    let mut cmd = cargo_bin_cmd!("lesson");
    cmd.args(["apply", doc.to_str().unwrap(), script.to_str().unwrap()]);

    let out = cmd.assert().success().code(0).get_output().stdout.clone();
    let out: Value = serde_json::from_slice(&out).expect("stdout is a document");

    assert_eq!(out["v"], 1);
    assert_eq!(block_ids(&out), ["riddle", "intro", "warmup", "check"]);
    assert_eq!(out["blocks"][1]["title"], "Hello");
    assert_eq!(out["blocks"][2]["points"], 0);
    assert_eq!(out["blocks"][2]["type"], "code");
}

#[test]
fn apply_min_is_single_line_canonical_json() {
    let doc = fixture("lesson.json");
    let script = fixture("script.json");

    let mut cmd = cargo_bin_cmd!("lesson");
    cmd.args(["apply", doc.to_str().unwrap(), script.to_str().unwrap(), "--min"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with(r#"{"blocks":[{"access":"premium","collapsed":false,"id":"riddle""#))
        .stdout(predicate::function(|s: &str| s.lines().count() == 1));
}

#[test]
fn apply_telemetry_goes_to_stderr() {
    let doc = fixture("lesson.json");
    let script = fixture("script.json");

    let mut cmd = cargo_bin_cmd!("lesson");
    cmd.args(["apply", doc.to_str().unwrap(), script.to_str().unwrap(), "--telemetry"]);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains(r#""patches":2"#))
        .stderr(predicate::str::contains(r#""edits":1"#))
        .stderr(predicate::str::contains(r#""removes":1"#))
        .stderr(predicate::str::contains(r#""moves":1"#));
}

#[test]
fn unknown_target_is_ignored_by_default() {
    let doc = fixture("lesson.json");
    let script = fixture("script.ghost.json");

    let mut cmd = cargo_bin_cmd!("lesson");
    cmd.args(["apply", doc.to_str().unwrap(), script.to_str().unwrap(), "--telemetry"]);

    let assert = cmd
        .assert()
        .success()
        .stderr(predicate::str::contains(r#""stale_targets":1"#));
    let out: Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(block_ids(&out).len(), 5);
}

#[test]
fn unknown_target_fails_with_strict_and_exits_2() {
    let doc = fixture("lesson.json");
    let script = fixture("script.ghost.json");

    let mut cmd = cargo_bin_cmd!("lesson");
    cmd.args(["apply", doc.to_str().unwrap(), script.to_str().unwrap(), "--strict"]);

    cmd.assert()
        .failure()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("ops[0] (remove) unknown block_id 'ghost'"));
}

#[test]
fn malformed_script_exits_1() {
    let doc = fixture("lesson.json");

    let mut cmd = cargo_bin_cmd!("lesson");
    cmd.args(["apply", doc.to_str().unwrap(), doc.to_str().unwrap()]);

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid script JSON"));
}
