use lesson_builder::{check, DiagnosticCode};
use lesson_core::BlockList;
use serde_json::json;

fn codes(list: &BlockList) -> Vec<(String, DiagnosticCode)> {
    check(list)
        .into_iter()
        .map(|d| (d.block_id.to_string(), d.code))
        .collect()
}

#[test]
fn complete_lesson_is_clean() {
    let list: BlockList = serde_json::from_value(json!([
        { "id": "t", "type": "text", "title": "T", "body": "hello" },
        { "id": "v", "type": "video", "title": "V", "provider": "url", "url": "https://x" },
        { "id": "k", "type": "code", "title": "K", "language": "python", "starterCode": "", "points": 0 },
        { "id": "q", "type": "quiz", "title": "Q", "question": "?",
          "options": [ { "id": "1", "text": "a", "correct": true }, { "id": "2", "text": "b", "correct": true } ] },
        { "id": "p", "type": "puzzle", "title": "P", "instructions": "go" }
    ]))
    .unwrap();
    assert!(check(&list).is_empty(), "{:?}", check(&list));
}

#[test]
fn gaps_are_reported_in_list_order() {
    let list: BlockList = serde_json::from_value(json!([
        { "id": "t", "type": "text", "title": " ", "body": "" },
        { "id": "v", "type": "video", "title": "V", "url": "" },
        { "id": "q1", "type": "quiz", "title": "Q", "question": "", "options": [] },
        { "id": "q2", "type": "quiz", "title": "Q", "question": "?",
          "options": [ { "id": "1", "text": "a", "correct": false } ] },
        { "id": "p", "type": "puzzle", "title": "P", "instructions": "" }
    ]))
    .unwrap();

    assert_eq!(
        codes(&list),
        [
            ("t".to_string(), DiagnosticCode::EmptyTitle),
            ("t".to_string(), DiagnosticCode::EmptyBody),
            ("v".to_string(), DiagnosticCode::EmptyVideoUrl),
            ("q1".to_string(), DiagnosticCode::EmptyQuizQuestion),
            ("q1".to_string(), DiagnosticCode::QuizWithoutOptions),
            ("q2".to_string(), DiagnosticCode::QuizWithoutCorrectOption),
            ("p".to_string(), DiagnosticCode::EmptyBody),
        ]
    );

    let first = &check(&list)[0];
    assert_eq!(first.path, "blocks[0].title");
    assert_eq!(first.to_string(), "empty_title\tblocks[0].title\ttext block 't' has no title");
}
