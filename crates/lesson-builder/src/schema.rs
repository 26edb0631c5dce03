use std::fmt;
use std::str::FromStr;

use lesson_core::{BlockId, BlockKind, BlockList};
use lesson_editor::Edit;
use serde::{Deserialize, Serialize};

use crate::shell::ShellEvent;

/// Scripted builder session, version 1.
///
/// A script replays what an author would do in the editor, one op at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptV1 {
    pub v: u8,
    pub ops: Vec<ScriptOp>,
}

/// Reference to a block: its id, or `#N` for the N-th block (1-based) in the
/// list as it stands when the op runs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BlockRef {
    Id(BlockId),
    Position(usize),
}

impl BlockRef {
    /// Resolve against the current list.
    pub fn resolve(&self, blocks: &BlockList) -> Option<BlockId> {
        match self {
            BlockRef::Id(id) => Some(id.clone()),
            BlockRef::Position(n) => n
                .checked_sub(1)
                .and_then(|i| blocks.as_slice().get(i))
                .map(|b| b.id().clone()),
        }
    }
}

impl FromStr for BlockRef {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.strip_prefix('#').and_then(|n| n.parse::<usize>().ok()) {
            Some(n) => BlockRef::Position(n),
            None => BlockRef::Id(BlockId::from(s)),
        })
    }
}

impl fmt::Display for BlockRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockRef::Id(id) => write!(f, "{id}"),
            BlockRef::Position(n) => write!(f, "#{n}"),
        }
    }
}

impl Serialize for BlockRef {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BlockRef {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(s.parse::<BlockRef>().unwrap_or_else(|never| match never {}))
    }
}

/// One scripted operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ScriptOp {
    Add { kind: BlockKind },
    Edit { block: BlockRef, edit: Edit },
    Shell { block: BlockRef, event: ShellEvent },
    Remove { block: BlockRef },
    /// Drag `block` and release it over `onto`.
    Drop { block: BlockRef, onto: BlockRef },
}

impl ScriptOp {
    pub fn name(&self) -> &'static str {
        match self {
            ScriptOp::Add { .. } => "add",
            ScriptOp::Edit { .. } => "edit",
            ScriptOp::Shell { .. } => "shell",
            ScriptOp::Remove { .. } => "remove",
            ScriptOp::Drop { .. } => "drop",
        }
    }
}
