//! `lesson-io` is the single supported public entrypoint for the lesson content
//! builder: the block model, the builder itself, and the JSON helpers around
//! them.
//!
//! This crate contains no rendering toolkit and no persistence. It focuses on:
//! - stable wire types
//! - document parsing with actionable errors
//! - canonical JSON
//! - the builder, its scripts, and authoring checks

// -----------------------------------------------------------------------------
// Public API contract
// -----------------------------------------------------------------------------
//
// Consumers SHOULD import from `lesson_io::prelude::*`.
// Anything not re-exported via the prelude is considered internal and may change
// without notice.

// Re-export the block model.
#[doc(hidden)]
pub mod core {
    pub use lesson_core::fingerprint::{block_hash, fingerprint};
    pub use lesson_core::{
        Access, Block, BlockBody, BlockId, BlockKind, BlockList, BlockMut, BodyMut, CodeBody,
        CodeLanguage, LessonDocument, ModelError, OptionId, PuzzleBody, QuizBody, QuizOption,
        TextBody, VideoBody, VideoProvider, create_block,
    };
}

/// Deterministic JSON output.
pub mod canonical_json;

/// Lesson document parsing and printing.
pub mod document_json;

/// Version constants for wire formats and schemas.
pub mod version;

// Re-export palette metadata.
#[doc(hidden)]
pub mod palette {
    pub use lesson_palette::{KindCategory, PaletteEntry, lookup, palette};
}

// Re-export variant editing.
#[doc(hidden)]
pub mod editor {
    pub use lesson_editor::view::{ChecklistItem, Choice, Control, Field};
    pub use lesson_editor::{
        CodeEdit, Edit, EditError, PuzzleEdit, QuizEdit, TextEdit, VideoEdit, apply_edit,
        coerce_points, render_body,
    };
}

// Re-export the builder, reorder controller, and scripts.
#[doc(hidden)]
pub mod builder {
    pub use lesson_builder::{
        AccessBadge, BlockRef, Builder, BuilderError, BuilderOptions, BuilderTelemetry,
        BuilderView, ChangeCallback, Diagnostic, DiagnosticCode, DragConfig, DragOutcome,
        DragState, Droppable, Point, Rect, ReorderController, ScriptError, ScriptOp, ScriptV1,
        ShellEvent, ShellView, apply_script, check, closest_center, render_shell, resolve_drop,
    };
}

/// Convenience prelude for consumers.
///
/// This is the **only supported** import surface for external users.
pub mod prelude {
    pub use crate::builder::{
        BlockRef, Builder, BuilderError, BuilderOptions, BuilderTelemetry, BuilderView,
        Diagnostic, DiagnosticCode, DragConfig, DragOutcome, DragState, Droppable, Point, Rect,
        ScriptError, ScriptOp, ScriptV1, ShellEvent, ShellView, apply_script, check,
    };
    pub use crate::core::{
        Access, Block, BlockBody, BlockId, BlockKind, BlockList, CodeLanguage, LessonDocument,
        OptionId, VideoProvider,
    };
    pub use crate::document_json::{DocumentJsonError, parse_document_json_str};
    pub use crate::editor::{Control, Edit, EditError, Field};
    pub use crate::palette::{KindCategory, PaletteEntry};
    pub use crate::{canonical_json, document_json, version};
}
