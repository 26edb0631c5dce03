use lesson_core::BlockList;
use thiserror::Error;

use crate::orchestrator::{Builder, BuilderError};
use crate::schema::{BlockRef, ScriptOp, ScriptV1};

/// Script version understood by `apply_script`.
pub const SCRIPT_V: u8 = 1;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    #[error("unsupported script version {0}")]
    UnsupportedVersion(u8),

    #[error("ops[{index}] ({op}) references no block at '{block}'")]
    UnresolvedRef {
        index: usize,
        op: &'static str,
        block: BlockRef,
    },

    #[error("ops[{index}] ({op}) {source}")]
    Builder {
        index: usize,
        op: &'static str,
        #[source]
        source: BuilderError,
    },
}

/// Run every op of `script` against `builder`, in order. Fail-fast.
///
/// Semantics per op:
/// - add: append a new block of `kind`
/// - edit: apply a variant field edit
/// - shell: title / access / collapse / delete, as the item shell would
/// - remove: remove the block
/// - drop: drag `block` onto `onto`; a drop onto itself changes nothing
///
/// `#N` references that fall outside the current list are errors. Plain ids
/// follow the builder's own unknown-id policy.
pub fn apply_script(builder: &mut Builder, script: &ScriptV1) -> Result<(), ScriptError> {
    if script.v != SCRIPT_V {
        return Err(ScriptError::UnsupportedVersion(script.v));
    }

    for (index, op) in script.ops.iter().enumerate() {
        let name = op.name();
        let resolve = |r: &BlockRef, blocks: &BlockList| {
            r.resolve(blocks)
                .ok_or_else(|| ScriptError::UnresolvedRef {
                    index,
                    op: name,
                    block: r.clone(),
                })
        };
        let wrap = |source: BuilderError| ScriptError::Builder {
            index,
            op: name,
            source,
        };

        match op {
            ScriptOp::Add { kind } => {
                builder.add(*kind);
            }
            ScriptOp::Edit { block, edit } => {
                let id = resolve(block, builder.blocks())?;
                builder.edit(&id, edit).map_err(wrap)?;
            }
            ScriptOp::Shell { block, event } => {
                let id = resolve(block, builder.blocks())?;
                builder.shell(&id, event).map_err(wrap)?;
            }
            ScriptOp::Remove { block } => {
                let id = resolve(block, builder.blocks())?;
                builder.remove(&id).map_err(wrap)?;
            }
            ScriptOp::Drop { block, onto } => {
                let id = resolve(block, builder.blocks())?;
                let over = resolve(onto, builder.blocks())?;
                builder.drop_onto(&id, &over);
            }
        }
    }

    Ok(())
}
