//! Errors raised when a block list would break its identity invariants.

use thiserror::Error;

use crate::ids::{BlockId, OptionId};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// Two blocks in one list share an id.
    #[error("duplicate block id '{0}'")]
    DuplicateBlockId(BlockId),

    /// A block id is the empty string.
    #[error("block at position {0} has an empty id")]
    EmptyBlockId(usize),

    /// Two options in one quiz share an id.
    #[error("quiz '{block}' has duplicate option id '{option}'")]
    DuplicateOptionId { block: BlockId, option: OptionId },
}
