use lesson_core::PuzzleBody;
use serde::{Deserialize, Serialize};

use crate::view::{Control, Field};
use crate::EditError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", rename_all = "snake_case")]
pub enum PuzzleEdit {
    Instructions { value: String },
}

pub fn apply(body: &mut PuzzleBody, edit: &PuzzleEdit) -> Result<(), EditError> {
    match edit {
        PuzzleEdit::Instructions { value } => body.instructions = value.clone(),
    }
    Ok(())
}

pub fn fields(body: &PuzzleBody) -> Vec<Field> {
    vec![Field::new(
        "instructions",
        "Instructions",
        Control::TextArea {
            value: body.instructions.clone(),
            placeholder: "Describe the puzzle…",
            monospace: false,
        },
    )]
}
