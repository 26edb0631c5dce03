mod util;

use lesson_builder::{apply_script, Builder, BuilderOptions, ScriptError, ScriptV1};
use lesson_core::{BlockBody, BlockKind, BlockList};
use serde_json::json;
use util::{abc, ids};

fn script(value: serde_json::Value) -> ScriptV1 {
    serde_json::from_value(value).expect("script must parse")
}

#[test]
fn script_builds_a_small_lesson() {
    let mut builder = Builder::new(BlockList::new());
    let s = script(json!({
        "v": 1,
        "ops": [
            { "op": "add", "kind": "text" },
            { "op": "add", "kind": "code" },
            { "op": "add", "kind": "quiz" },
            { "op": "edit", "block": "#1", "edit": { "kind": "text", "change": { "field": "body", "value": "Hello" } } },
            { "op": "edit", "block": "#2", "edit": { "kind": "code", "change": { "field": "points", "input": "abc" } } },
            { "op": "edit", "block": "#3", "edit": { "kind": "quiz", "change": { "field": "add_option" } } },
            { "op": "shell", "block": "#2", "event": { "event": "toggle_access" } },
            { "op": "shell", "block": "#1", "event": { "event": "set_title", "value": "Intro" } },
            { "op": "drop", "block": "#3", "onto": "#1" }
        ]
    }));

    apply_script(&mut builder, &s).unwrap();

    let kinds: Vec<BlockKind> = builder.blocks().iter().map(|b| b.kind()).collect();
    assert_eq!(kinds, [BlockKind::Quiz, BlockKind::Text, BlockKind::Code]);

    let list = builder.blocks().as_slice();
    assert_eq!(list[1].title, "Intro");
    let BlockBody::Code(c) = list[2].body() else { panic!("expected code") };
    assert_eq!(c.points, 0);
    assert_eq!(list[2].access.as_str(), "premium");
    let BlockBody::Quiz(q) = list[0].body() else { panic!("expected quiz") };
    assert_eq!(q.options().len(), 3);

    let t = builder.telemetry();
    assert_eq!(t.adds(), 3);
    assert_eq!(t.edits, 3);
    assert_eq!(t.patches, 5);
    assert_eq!(t.moves, 1);
}

#[test]
fn ids_and_positions_can_be_mixed() {
    let mut builder = Builder::new(abc());
    let s = script(json!({
        "v": 1,
        "ops": [
            { "op": "drop", "block": "a", "onto": "#3" },
            { "op": "remove", "block": "#1" }
        ]
    }));
    apply_script(&mut builder, &s).unwrap();
    assert_eq!(ids(builder.blocks()), ["c", "a"]);
}

#[test]
fn out_of_range_position_fails_fast() {
    let mut builder = Builder::new(abc());
    let s = script(json!({
        "v": 1,
        "ops": [
            { "op": "remove", "block": "#1" },
            { "op": "remove", "block": "#9" },
            { "op": "remove", "block": "#1" }
        ]
    }));
    let err = apply_script(&mut builder, &s).unwrap_err();
    assert!(matches!(err, ScriptError::UnresolvedRef { index: 1, op: "remove", .. }));
    assert_eq!(err.to_string(), "ops[1] (remove) references no block at '#9'");
    assert_eq!(ids(builder.blocks()), ["b", "c"]);
}

#[test]
fn strict_builder_rejects_unknown_ids() {
    let mut builder = Builder::with_options(
        abc(),
        BuilderOptions { strict_targets: true, ..BuilderOptions::default() },
    );
    let s = script(json!({ "v": 1, "ops": [ { "op": "remove", "block": "nope" } ] }));
    let err = apply_script(&mut builder, &s).unwrap_err();
    assert_eq!(err.to_string(), "ops[0] (remove) unknown block_id 'nope'");
}

#[test]
fn mismatched_edit_reports_op_index() {
    let mut builder = Builder::new(abc());
    let s = script(json!({
        "v": 1,
        "ops": [
            { "op": "edit", "block": "b", "edit": { "kind": "puzzle", "change": { "field": "instructions", "value": "x" } } }
        ]
    }));
    let err = apply_script(&mut builder, &s).unwrap_err();
    assert_eq!(
        err.to_string(),
        "ops[0] (edit) block 'b': puzzle edit cannot be applied to a text block"
    );
}

#[test]
fn unsupported_version_is_rejected() {
    let mut builder = Builder::new(abc());
    let s = script(json!({ "v": 2, "ops": [] }));
    assert_eq!(apply_script(&mut builder, &s), Err(ScriptError::UnsupportedVersion(2)));
}
