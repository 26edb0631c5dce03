//! The ordered block list.
//!
//! `BlockList` has value semantics: every operation returns a new snapshot and
//! leaves `self` untouched. The only way to obtain a list is from the factory
//! (`with_created`) or by validating a loaded `Vec<Block>`, so block ids are
//! unique and non-empty in every snapshot.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::factory::create_block;
use crate::ids::BlockId;
use crate::model::{Block, BlockBody, BlockKind, BlockMut};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Block>", into = "Vec<Block>")]
pub struct BlockList {
    blocks: Vec<Block>,
}

impl BlockList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    pub fn as_slice(&self) -> &[Block] {
        &self.blocks
    }

    pub fn get(&self, id: &BlockId) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id() == id)
    }

    pub fn position(&self, id: &BlockId) -> Option<usize> {
        self.blocks.iter().position(|b| b.id() == id)
    }

    pub fn ids(&self) -> Vec<BlockId> {
        self.blocks.iter().map(|b| b.id().clone()).collect()
    }

    /// Append a new block of `kind` at the tail.
    pub fn with_created(&self, kind: BlockKind) -> (Self, BlockId) {
        let block = create_block(kind);
        let id = block.id().clone();
        let mut blocks = self.blocks.clone();
        blocks.push(block);
        (Self { blocks }, id)
    }

    /// Apply `update` to the block with `id`. `None` when no such block exists.
    ///
    /// The updater writes to a copy; order and every other block are untouched.
    pub fn with_patched(
        &self,
        id: &BlockId,
        update: impl FnOnce(&mut BlockMut<'_>),
    ) -> Option<Self> {
        let idx = self.position(id)?;
        let mut blocks = self.blocks.clone();
        update(&mut BlockMut::new(&mut blocks[idx]));
        Some(Self { blocks })
    }

    /// Drop the block with `id`. `None` when no such block exists.
    pub fn without(&self, id: &BlockId) -> Option<Self> {
        let idx = self.position(id)?;
        let mut blocks = self.blocks.clone();
        blocks.remove(idx);
        Some(Self { blocks })
    }

    /// Move the block at `from` so it ends up at `to`, shifting the blocks in
    /// between by one. Relative order of all other blocks is preserved.
    pub fn with_moved(&self, from: usize, to: usize) -> Option<Self> {
        if from >= self.blocks.len() || to >= self.blocks.len() {
            return None;
        }
        let mut blocks = self.blocks.clone();
        let block = blocks.remove(from);
        blocks.insert(to, block);
        Some(Self { blocks })
    }
}

impl TryFrom<Vec<Block>> for BlockList {
    type Error = ModelError;

    fn try_from(blocks: Vec<Block>) -> Result<Self, Self::Error> {
        let mut seen = HashSet::with_capacity(blocks.len());
        for (i, b) in blocks.iter().enumerate() {
            if b.id().is_empty() {
                return Err(ModelError::EmptyBlockId(i));
            }
            if !seen.insert(b.id()) {
                return Err(ModelError::DuplicateBlockId(b.id().clone()));
            }
            if let BlockBody::Quiz(q) = b.body() {
                let mut options = HashSet::with_capacity(q.options().len());
                for o in q.options() {
                    if !options.insert(o.id()) {
                        return Err(ModelError::DuplicateOptionId {
                            block: b.id().clone(),
                            option: o.id().clone(),
                        });
                    }
                }
            }
        }
        Ok(Self { blocks })
    }
}

impl From<BlockList> for Vec<Block> {
    fn from(list: BlockList) -> Self {
        list.blocks
    }
}

impl<'a> IntoIterator for &'a BlockList {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}
