//! Plain view models for editor fields.
//!
//! Editors describe what they show as data; a front end turns `Field`s into
//! widgets. Nothing here holds state.

use lesson_core::OptionId;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    /// Stable field name, matching the edit that changes it.
    pub name: &'static str,
    pub label: &'static str,
    pub control: Control,
}

impl Field {
    pub fn new(name: &'static str, label: &'static str, control: Control) -> Self {
        Self {
            name,
            label,
            control,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "control", rename_all = "snake_case")]
pub enum Control {
    Input {
        value: String,
        placeholder: &'static str,
    },
    TextArea {
        value: String,
        placeholder: &'static str,
        monospace: bool,
    },
    Select {
        value: &'static str,
        choices: Vec<Choice>,
    },
    Number {
        value: u32,
        min: u32,
    },
    Checklist {
        items: Vec<ChecklistItem>,
    },
    Action {
        action: &'static str,
        label: &'static str,
        enabled: bool,
    },
    Placeholder {
        text: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub value: &'static str,
    pub label: &'static str,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChecklistItem {
    pub id: OptionId,
    pub text: String,
    pub checked: bool,
}
