use serde::{Deserialize, Serialize};

use crate::fingerprint::fingerprint;
use crate::list::BlockList;

/// Document envelope version.
pub const DOCUMENT_V: u8 = 1;

/// A lesson as handed to and returned from the builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonDocument {
    pub v: u8,
    /// Content fingerprint; recomputed, never trusted from input.
    #[serde(default)]
    pub fingerprint: String,
    pub blocks: BlockList,
}

impl LessonDocument {
    pub fn new(blocks: BlockList) -> Self {
        let mut doc = Self {
            v: DOCUMENT_V,
            fingerprint: String::new(),
            blocks,
        };
        doc.recompute_fingerprint();
        doc
    }

    pub fn recompute_fingerprint(&mut self) {
        self.fingerprint = fingerprint(&self.blocks);
    }
}
