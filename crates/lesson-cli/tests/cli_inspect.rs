use assert_cmd::cargo::cargo_bin_cmd;

fn fixture_path() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("lesson.json")
}

const HEADER: &str = "id\ttype\taccess\tcollapsed\ttitle\tpreview\n";

#[test]
fn cli_inspect_stdout_golden() {
    let input = fixture_path();

    let mut cmd = cargo_bin_cmd!("lesson");
    cmd.args(["inspect", input.to_str().unwrap()]);

    cmd.assert().success().stdout(format!(
        "{HEADER}\
intro\ttext\tfree\tfalse\tWelcome\tIn this lesson we build a tiny parser.\n\
clip\tvideo\tpremium\ttrue\tWalkthrough\t[url] https://videos.example.com/parser-walkthrough\n\
warmup\tcode\tfree\tfalse\tTokenize\tpython (25 pts)\n\
check\tquiz\tfree\tfalse\tCheckpoint\tWhich stage runs first? [3 options, 1 correct]\n\
riddle\tpuzzle\tpremium\tfalse\tBalance the brackets\tReorder the tokens so every bracket is closed.\n"
    ));
}

#[test]
fn cli_inspect_filters_work() {
    let input = fixture_path();

    // --kind by tag
    let mut cmd = cargo_bin_cmd!("lesson");
    cmd.args(["inspect", input.to_str().unwrap(), "--kind", "quiz"]);
    cmd.assert().success().stdout(format!(
        "{HEADER}check\tquiz\tfree\tfalse\tCheckpoint\tWhich stage runs first? [3 options, 1 correct]\n"
    ));

    // --kind by label, any case
    let mut cmd = cargo_bin_cmd!("lesson");
    cmd.args(["inspect", input.to_str().unwrap(), "--kind", "code CHALLENGE"]);
    cmd.assert()
        .success()
        .stdout(format!("{HEADER}warmup\tcode\tfree\tfalse\tTokenize\tpython (25 pts)\n"));

    // --id exact
    let mut cmd = cargo_bin_cmd!("lesson");
    cmd.args(["inspect", input.to_str().unwrap(), "--id", "riddle"]);
    cmd.assert().success().stdout(format!(
        "{HEADER}riddle\tpuzzle\tpremium\tfalse\tBalance the brackets\tReorder the tokens so every bracket is closed.\n"
    ));

    // --grep over title and content
    let mut cmd = cargo_bin_cmd!("lesson");
    cmd.args(["inspect", input.to_str().unwrap(), "--grep", "parser"]);
    cmd.assert().success().stdout(format!(
        "{HEADER}\
intro\ttext\tfree\tfalse\tWelcome\tIn this lesson we build a tiny parser.\n\
clip\tvideo\tpremium\ttrue\tWalkthrough\t[url] https://videos.example.com/parser-walkthrough\n"
    ));

    // no match still prints the header
    let mut cmd = cargo_bin_cmd!("lesson");
    cmd.args(["inspect", input.to_str().unwrap(), "--id", "nope"]);
    cmd.assert().success().stdout(HEADER);
}

#[test]
fn cli_inspect_unknown_kind_is_a_usage_error() {
    let input = fixture_path();

    let mut cmd = cargo_bin_cmd!("lesson");
    cmd.args(["inspect", input.to_str().unwrap(), "--kind", "slideshow"]);
    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("unknown block kind 'slideshow'"));
}

#[test]
fn cli_inspect_preview_is_bounded() {
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    let pid = std::process::id();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let path = std::env::temp_dir().join(format!("lesson_inspect_long_{pid}_{nanos}.json"));

    let long_text = "a".repeat(200);
    let doc_json = format!(
        r#"{{"v":1,"blocks":[{{"id":"x1","type":"text","title":"Long","body":{:?}}}]}}"#,
        long_text
    );
    fs::write(&path, doc_json).unwrap();

    let mut cmd = cargo_bin_cmd!("lesson");
    cmd.args(["inspect", path.to_str().unwrap()]);

    let out = cmd.assert().success().get_output().stdout.clone();
    let out = String::from_utf8(out).unwrap();
    let mut lines = out.lines();
    let _header = lines.next().unwrap();
    let row = lines.next().unwrap();
    let cols: Vec<&str> = row.split('\t').collect();
    assert_eq!(cols.len(), 6);
    let preview = cols[5];

    // 80-char bound, with ellipsis when truncated.
    assert!(preview.chars().count() <= 80);
    assert!(preview.ends_with('…'));

    let _ = fs::remove_file(&path);
}
