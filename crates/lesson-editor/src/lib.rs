#![doc = r#"
⚠️ INTERNAL CRATE – NOT A STABLE API

This crate is an internal implementation detail of the lesson builder.

Do NOT depend on this crate directly.
Use `lesson-io` instead.
"#]

pub mod code;
pub mod points;
pub mod puzzle;
pub mod quiz;
pub mod text;
pub mod video;
pub mod view;

use lesson_core::{Block, BlockBody, BlockKind, BodyMut, OptionId, VideoProvider};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use code::CodeEdit;
pub use points::coerce_points;
pub use puzzle::PuzzleEdit;
pub use quiz::QuizEdit;
pub use text::TextEdit;
pub use video::VideoEdit;
pub use view::{ChecklistItem, Choice, Control, Field};

/// A change to one variant-specific field of a block.
///
/// Each variant only reaches the payload of the same block kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "change", rename_all = "lowercase")]
pub enum Edit {
    Text(TextEdit),
    Video(VideoEdit),
    Code(CodeEdit),
    Quiz(QuizEdit),
    Puzzle(PuzzleEdit),
}

impl Edit {
    /// The block kind this edit applies to.
    pub fn kind(&self) -> BlockKind {
        match self {
            Edit::Text(_) => BlockKind::Text,
            Edit::Video(_) => BlockKind::Video,
            Edit::Code(_) => BlockKind::Code,
            Edit::Quiz(_) => BlockKind::Quiz,
            Edit::Puzzle(_) => BlockKind::Puzzle,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    #[error("{edit} edit cannot be applied to a {block} block")]
    KindMismatch { block: BlockKind, edit: BlockKind },

    #[error("unknown quiz option '{0}'")]
    UnknownOption(OptionId),

    #[error("video provider '{0}' is not available")]
    ProviderUnavailable(VideoProvider),
}

/// Apply `edit` to a block payload.
///
/// On error the payload is left exactly as it was.
pub fn apply_edit(body: BodyMut<'_>, edit: &Edit) -> Result<(), EditError> {
    let kind = body.kind();
    let result = match (body, edit) {
        (BodyMut::Text(b), Edit::Text(e)) => text::apply(b, e),
        (BodyMut::Video(b), Edit::Video(e)) => video::apply(b, e),
        (BodyMut::Code(b), Edit::Code(e)) => code::apply(b, e),
        (BodyMut::Quiz(b), Edit::Quiz(e)) => quiz::apply(b, e),
        (BodyMut::Puzzle(b), Edit::Puzzle(e)) => puzzle::apply(b, e),
        _ => Err(EditError::KindMismatch {
            block: kind,
            edit: edit.kind(),
        }),
    };
    if let Err(e) = &result {
        tracing::debug!(%kind, "edit rejected: {e}");
    }
    result
}

/// Fields shown in the expanded body of `block`.
pub fn render_body(block: &Block) -> Vec<Field> {
    match block.body() {
        BlockBody::Text(b) => text::fields(b),
        BlockBody::Video(b) => video::fields(b),
        BlockBody::Code(b) => code::fields(b),
        BlockBody::Quiz(b) => quiz::fields(b),
        BlockBody::Puzzle(b) => puzzle::fields(b),
    }
}
