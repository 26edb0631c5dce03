//! The builder: sole owner and writer of the block list.
//!
//! Every operation computes a new `BlockList` snapshot from the current one
//! and, if it differs, installs it and hands it to the change callback. Views
//! and controllers only ever read the current snapshot.

use lesson_core::{Block, BlockId, BlockKind, BlockList, BlockMut};
use lesson_editor::{apply_edit, Edit, EditError};
use lesson_palette::PaletteEntry;
use serde::Serialize;
use thiserror::Error;

use crate::reorder::{
    resolve_drop, DragConfig, DragOutcome, DragState, Droppable, Point, ReorderController,
};
use crate::shell::{render_shell, ShellAction, ShellEvent, ShellView};
use crate::telemetry::BuilderTelemetry;

/// Builder configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BuilderOptions {
    /// Treat operations on unknown block ids as errors instead of no-ops.
    ///
    /// Off by default: late callbacks from a block removed mid-interaction
    /// are expected and harmless.
    pub strict_targets: bool,

    pub drag: DragConfig,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuilderError {
    #[error("unknown block_id '{0}'")]
    UnknownBlock(BlockId),

    #[error("block '{block}': {source}")]
    Edit {
        block: BlockId,
        #[source]
        source: EditError,
    },
}

/// Receives each new snapshot after it is installed.
pub type ChangeCallback = Box<dyn FnMut(&BlockList)>;

/// Everything a front end needs to draw the builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuilderView {
    pub palette: &'static [PaletteEntry],
    pub items: Vec<ShellView>,
}

pub struct Builder {
    blocks: BlockList,
    on_change: Option<ChangeCallback>,
    options: BuilderOptions,
    reorder: ReorderController,
    telemetry: BuilderTelemetry,
}

impl Builder {
    pub fn new(blocks: BlockList) -> Self {
        Self::with_options(blocks, BuilderOptions::default())
    }

    pub fn with_options(blocks: BlockList, options: BuilderOptions) -> Self {
        Self {
            blocks,
            on_change: None,
            options,
            reorder: ReorderController::new(options.drag),
            telemetry: BuilderTelemetry::default(),
        }
    }

    /// Install the replacement callback.
    pub fn on_change(mut self, callback: impl FnMut(&BlockList) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    pub fn blocks(&self) -> &BlockList {
        &self.blocks
    }

    pub fn into_blocks(self) -> BlockList {
        self.blocks
    }

    pub fn options(&self) -> BuilderOptions {
        self.options
    }

    pub fn telemetry(&self) -> &BuilderTelemetry {
        &self.telemetry
    }

    /// Kinds offered by the "add block" palette.
    pub fn palette(&self) -> &'static [PaletteEntry] {
        lesson_palette::palette()
    }

    /// Append a new block of `kind` at the end of the list.
    pub fn add(&mut self, kind: BlockKind) -> BlockId {
        let (next, id) = self.blocks.with_created(kind);
        tracing::debug!(block = %id, %kind, "add");
        self.telemetry.record_add(kind);
        self.commit(next);
        id
    }

    /// Run `update` against the block with `id`.
    pub fn patch(
        &mut self,
        id: &BlockId,
        update: impl FnOnce(&mut BlockMut<'_>),
    ) -> Result<(), BuilderError> {
        let Some(next) = self.blocks.with_patched(id, update) else {
            return self.stale(id, "patch");
        };
        tracing::debug!(block = %id, "patch");
        if next != self.blocks {
            self.telemetry.patches += 1;
        }
        self.commit(next);
        Ok(())
    }

    /// Apply a variant field edit to the block with `id`.
    pub fn edit(&mut self, id: &BlockId, edit: &Edit) -> Result<(), BuilderError> {
        let mut outcome = Ok(());
        let Some(next) = self
            .blocks
            .with_patched(id, |b| outcome = apply_edit(b.body_mut(), edit))
        else {
            return self.stale(id, "edit");
        };
        if let Err(source) = outcome {
            self.telemetry.rejected_edits += 1;
            tracing::warn!(block = %id, "edit rejected: {source}");
            return Err(BuilderError::Edit {
                block: id.clone(),
                source,
            });
        }
        tracing::debug!(block = %id, kind = %edit.kind(), "edit");
        if next != self.blocks {
            self.telemetry.patches += 1;
            self.telemetry.edits += 1;
        }
        self.commit(next);
        Ok(())
    }

    /// Remove the block with `id`.
    pub fn remove(&mut self, id: &BlockId) -> Result<(), BuilderError> {
        let Some(next) = self.blocks.without(id) else {
            return self.stale(id, "remove");
        };
        tracing::debug!(block = %id, "remove");
        self.telemetry.removes += 1;
        self.commit(next);
        Ok(())
    }

    /// Route an item-shell event.
    pub fn shell(&mut self, id: &BlockId, event: &ShellEvent) -> Result<(), BuilderError> {
        match event.action() {
            ShellAction::Patch(p) => self.patch(id, |b| p.apply(b)),
            ShellAction::Remove => self.remove(id),
        }
    }

    /// Apply a drag outcome. Returns whether the list changed.
    pub fn apply_drag(&mut self, outcome: &DragOutcome) -> bool {
        match outcome {
            DragOutcome::Moved { id, from, to } => {
                // The outcome may be stale if the list changed since it was resolved.
                if self.blocks.position(id) != Some(*from) {
                    self.telemetry.cancelled_drags += 1;
                    return false;
                }
                match self.blocks.with_moved(*from, *to) {
                    Some(next) => {
                        tracing::debug!(block = %id, from, to, "move");
                        self.telemetry.moves += 1;
                        self.commit(next);
                        true
                    }
                    None => {
                        self.telemetry.cancelled_drags += 1;
                        false
                    }
                }
            }
            DragOutcome::Cancelled => {
                self.telemetry.cancelled_drags += 1;
                false
            }
            DragOutcome::Ignored => false,
        }
    }

    /// Commit a drop of `id` onto the position of `over` without pointer geometry.
    pub fn drop_onto(&mut self, id: &BlockId, over: &BlockId) -> DragOutcome {
        let outcome = resolve_drop(&self.blocks, id, Some(over));
        self.apply_drag(&outcome);
        outcome
    }

    pub fn drag_state(&self) -> &DragState {
        self.reorder.state()
    }

    pub fn pointer_down(&mut self, handle: &BlockId, at: Point) {
        if self.blocks.position(handle).is_some() {
            self.reorder.press(handle.clone(), at);
        }
    }

    pub fn pointer_move(&mut self, at: Point, layout: &[Droppable]) {
        self.reorder.move_to(at, layout);
    }

    pub fn pointer_up(&mut self, at: Point, layout: &[Droppable]) -> DragOutcome {
        let outcome = self.reorder.release(at, layout, &self.blocks);
        self.apply_drag(&outcome);
        outcome
    }

    pub fn pointer_cancel(&mut self) -> DragOutcome {
        let outcome = self.reorder.cancel();
        self.apply_drag(&outcome);
        outcome
    }

    pub fn view(&self) -> BuilderView {
        BuilderView {
            palette: self.palette(),
            items: self.blocks.iter().map(render_shell).collect(),
        }
    }

    pub fn block(&self, id: &BlockId) -> Option<&Block> {
        self.blocks.get(id)
    }

    fn commit(&mut self, next: BlockList) {
        if next == self.blocks {
            return;
        }
        self.blocks = next;
        if let Some(cb) = self.on_change.as_mut() {
            cb(&self.blocks);
        }
    }

    fn stale(&mut self, id: &BlockId, op: &'static str) -> Result<(), BuilderError> {
        self.telemetry.stale_targets += 1;
        if self.options.strict_targets {
            return Err(BuilderError::UnknownBlock(id.clone()));
        }
        tracing::warn!(block = %id, op, "ignoring operation on unknown block");
        Ok(())
    }
}
