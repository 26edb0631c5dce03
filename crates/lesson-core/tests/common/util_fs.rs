use lesson_core::LessonDocument;

pub fn read_fixture(name: &str) -> String {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);

    std::fs::read_to_string(&path).unwrap_or_else(|e| {
        panic!("failed to read fixture {} at {}: {e}", name, path.display())
    })
}

#[allow(dead_code)]
pub fn lesson_fixture() -> LessonDocument {
    serde_json::from_str(&read_fixture("lesson.json")).expect("lesson.json must parse")
}
