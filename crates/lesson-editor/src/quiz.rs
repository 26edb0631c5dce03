//! Quiz editor.
//!
//! Options are edited and toggled independently; more than one may be correct.
//! Options can be appended but not removed or reordered here.

use lesson_core::factory::NEW_OPTION_TEXT;
use lesson_core::{OptionId, QuizBody};
use serde::{Deserialize, Serialize};

use crate::view::{ChecklistItem, Control, Field};
use crate::EditError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", rename_all = "snake_case")]
pub enum QuizEdit {
    Question { value: String },
    OptionText { option: OptionId, value: String },
    OptionCorrect { option: OptionId, correct: bool },
    AddOption,
}

pub fn apply(body: &mut QuizBody, edit: &QuizEdit) -> Result<(), EditError> {
    match edit {
        QuizEdit::Question { value } => body.question = value.clone(),
        QuizEdit::OptionText { option, value } => {
            let o = body
                .option_mut(option)
                .ok_or_else(|| EditError::UnknownOption(option.clone()))?;
            o.text = value.clone();
        }
        QuizEdit::OptionCorrect { option, correct } => {
            let o = body
                .option_mut(option)
                .ok_or_else(|| EditError::UnknownOption(option.clone()))?;
            o.correct = *correct;
        }
        QuizEdit::AddOption => {
            body.push_option(NEW_OPTION_TEXT, false);
        }
    }
    Ok(())
}

pub fn fields(body: &QuizBody) -> Vec<Field> {
    let items = body
        .options()
        .iter()
        .map(|o| ChecklistItem {
            id: o.id().clone(),
            text: o.text.clone(),
            checked: o.correct,
        })
        .collect();

    vec![
        Field::new(
            "question",
            "Question",
            Control::Input {
                value: body.question.clone(),
                placeholder: "Ask something…",
            },
        ),
        Field::new("options", "Answer options", Control::Checklist { items }),
        Field::new(
            "add_option",
            "",
            Control::Action {
                action: "add_option",
                label: "Add option",
                enabled: true,
            },
        ),
    ]
}
