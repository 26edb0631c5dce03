use lesson_core::{CodeBody, CodeLanguage};
use serde::{Deserialize, Serialize};

use crate::points::coerce_points;
use crate::view::{Choice, Control, Field};
use crate::EditError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", rename_all = "snake_case")]
pub enum CodeEdit {
    Language { value: CodeLanguage },
    /// Raw text typed into the points input.
    Points { input: String },
    StarterCode { value: String },
}

pub fn apply(body: &mut CodeBody, edit: &CodeEdit) -> Result<(), EditError> {
    match edit {
        CodeEdit::Language { value } => body.language = *value,
        CodeEdit::Points { input } => body.points = coerce_points(input),
        CodeEdit::StarterCode { value } => body.starter_code = value.clone(),
    }
    Ok(())
}

pub fn fields(body: &CodeBody) -> Vec<Field> {
    let choices = CodeLanguage::ALL
        .iter()
        .map(|l| Choice {
            value: l.as_str(),
            label: l.label(),
            enabled: true,
        })
        .collect();

    vec![
        Field::new(
            "language",
            "Language",
            Control::Select {
                value: body.language.as_str(),
                choices,
            },
        ),
        Field::new(
            "points",
            "Points",
            Control::Number {
                value: body.points,
                min: 0,
            },
        ),
        Field::new(
            "starter_code",
            "Starter code",
            Control::TextArea {
                value: body.starter_code.clone(),
                placeholder: "",
                monospace: true,
            },
        ),
    ]
}
