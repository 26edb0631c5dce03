//! Item shell: the chrome around one block's editor.
//!
//! The shell shows a drag handle, the title input, an access badge, a delete
//! control and a collapse toggle. Collapsed shells show only that header row.
//! Title, access and collapse changes are ordinary patches; delete is a removal.

use lesson_core::{Access, Block, BlockId, BlockKind, BlockMut};
use lesson_editor::{render_body, Field};
use serde::{Deserialize, Serialize};

/// Intent emitted by a shell's controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ShellEvent {
    SetTitle { value: String },
    ToggleAccess,
    ToggleCollapsed,
    Delete,
}

/// How the builder carries out a shell event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellAction {
    Patch(ShellPatch),
    Remove,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellPatch {
    Title(String),
    ToggleAccess,
    ToggleCollapsed,
}

impl ShellPatch {
    pub fn apply(&self, block: &mut BlockMut<'_>) {
        match self {
            ShellPatch::Title(t) => block.set_title(t.clone()),
            ShellPatch::ToggleAccess => {
                let next = block.access.toggled();
                block.set_access(next);
            }
            ShellPatch::ToggleCollapsed => {
                let next = !block.collapsed;
                block.set_collapsed(next);
            }
        }
    }
}

impl ShellEvent {
    pub fn action(&self) -> ShellAction {
        match self {
            ShellEvent::SetTitle { value } => ShellAction::Patch(ShellPatch::Title(value.clone())),
            ShellEvent::ToggleAccess => ShellAction::Patch(ShellPatch::ToggleAccess),
            ShellEvent::ToggleCollapsed => ShellAction::Patch(ShellPatch::ToggleCollapsed),
            ShellEvent::Delete => ShellAction::Remove,
        }
    }
}

/// Two-state access label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AccessBadge {
    pub access: Access,
    pub label: &'static str,
}

impl AccessBadge {
    pub fn of(access: Access) -> Self {
        let label = match access {
            Access::Free => "Free",
            Access::Premium => "Premium",
        };
        Self { access, label }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShellView {
    pub id: BlockId,
    pub kind: BlockKind,
    pub kind_label: &'static str,
    pub title: String,
    pub badge: AccessBadge,
    pub collapsed: bool,
    /// Handle the pointer must press to start a drag.
    pub drag_handle: BlockId,
    /// Variant editor fields; `None` while collapsed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Vec<Field>>,
}

pub fn render_shell(block: &Block) -> ShellView {
    ShellView {
        id: block.id().clone(),
        kind: block.kind(),
        kind_label: lesson_palette::label(block.kind()),
        title: block.title.clone(),
        badge: AccessBadge::of(block.access),
        collapsed: block.collapsed,
        drag_handle: block.id().clone(),
        body: (!block.collapsed).then(|| render_body(block)),
    }
}
