pub mod apply;
pub mod diagnostics;
pub mod orchestrator;
pub mod reorder;
pub mod schema;
pub mod shell;
pub mod telemetry;

pub use apply::{apply_script, ScriptError, SCRIPT_V};
pub use diagnostics::{check, Diagnostic, DiagnosticCode};
pub use orchestrator::{Builder, BuilderError, BuilderOptions, BuilderView, ChangeCallback};
pub use reorder::{
    closest_center, resolve_drop, DragConfig, DragOutcome, DragState, Droppable, Point, Rect,
    ReorderController,
};
pub use schema::{BlockRef, ScriptOp, ScriptV1};
pub use shell::{render_shell, AccessBadge, ShellAction, ShellEvent, ShellPatch, ShellView};
pub use telemetry::BuilderTelemetry;
