use lesson_core::{BlockId, BlockList};
use lesson_builder::{Droppable, Rect};
use serde_json::json;

/// Three text blocks with ids `a`, `b`, `c`.
#[allow(dead_code)]
pub fn abc() -> BlockList {
    serde_json::from_value(json!([
        { "id": "a", "type": "text", "title": "A", "body": "alpha" },
        { "id": "b", "type": "text", "title": "B", "body": "beta" },
        { "id": "c", "type": "text", "title": "C", "body": "gamma" }
    ]))
    .unwrap()
}

#[allow(dead_code)]
pub fn ids(list: &BlockList) -> Vec<String> {
    list.iter().map(|b| b.id().to_string()).collect()
}

#[allow(dead_code)]
pub fn id(s: &str) -> BlockId {
    BlockId::from(s)
}

/// Stacked 40px rows in list order.
#[allow(dead_code)]
pub fn column_layout(list: &BlockList) -> Vec<Droppable> {
    list.iter()
        .enumerate()
        .map(|(i, b)| Droppable {
            id: b.id().clone(),
            rect: Rect::new(0.0, 40.0 * i as f32, 320.0, 40.0),
        })
        .collect()
}
