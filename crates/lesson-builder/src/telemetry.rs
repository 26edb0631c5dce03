use lesson_core::BlockKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Deterministic, machine-readable counters for one builder session.
///
/// Notes:
/// - Contains *no* wall-clock timestamps (to preserve determinism).
/// - Counts only routed operations; rendering is not tracked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuilderTelemetry {
    /// Blocks added, grouped by kind tag.
    pub added_by_kind: BTreeMap<String, usize>,

    /// Patches that changed a block (title, access, collapse, field edits).
    pub patches: usize,

    /// The subset of `patches` that came from variant field edits.
    pub edits: usize,

    /// Field edits rejected by a variant editor.
    pub rejected_edits: usize,

    /// Blocks removed.
    pub removes: usize,

    /// Committed reorders.
    pub moves: usize,

    /// Drags that ended without a move.
    pub cancelled_drags: usize,

    /// Operations aimed at an id no longer in the list.
    pub stale_targets: usize,
}

impl BuilderTelemetry {
    pub fn record_add(&mut self, kind: BlockKind) {
        *self.added_by_kind.entry(kind.as_str().to_string()).or_insert(0) += 1;
    }

    pub fn adds(&self) -> usize {
        self.added_by_kind.values().sum()
    }

    /// Total operations that produced a new list.
    pub fn mutations(&self) -> usize {
        self.adds() + self.patches + self.removes + self.moves
    }
}
