use lesson_core::TextBody;
use serde::{Deserialize, Serialize};

use crate::view::{Control, Field};
use crate::EditError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", rename_all = "snake_case")]
pub enum TextEdit {
    Body { value: String },
}

pub fn apply(body: &mut TextBody, edit: &TextEdit) -> Result<(), EditError> {
    match edit {
        TextEdit::Body { value } => body.body = value.clone(),
    }
    Ok(())
}

pub fn fields(body: &TextBody) -> Vec<Field> {
    vec![Field::new(
        "body",
        "Content",
        Control::TextArea {
            value: body.body.clone(),
            placeholder: "Write the lesson text…",
            monospace: false,
        },
    )]
}
