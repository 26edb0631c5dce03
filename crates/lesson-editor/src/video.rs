//! Video editor: provider selector, URL field and a preview placeholder.
//!
//! `upload` is listed but not selectable; it is reserved for a future upload
//! flow. No embedding happens here.

use lesson_core::{VideoBody, VideoProvider};
use serde::{Deserialize, Serialize};

use crate::view::{Choice, Control, Field};
use crate::EditError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", rename_all = "snake_case")]
pub enum VideoEdit {
    Provider { value: VideoProvider },
    Url { value: String },
}

pub fn apply(body: &mut VideoBody, edit: &VideoEdit) -> Result<(), EditError> {
    match edit {
        VideoEdit::Provider { value } => {
            if !value.is_available() {
                return Err(EditError::ProviderUnavailable(*value));
            }
            body.provider = *value;
        }
        VideoEdit::Url { value } => body.url = value.clone(),
    }
    Ok(())
}

fn provider_label(p: VideoProvider) -> &'static str {
    match p {
        VideoProvider::Url => "Video URL",
        VideoProvider::Upload => "Upload (coming soon)",
    }
}

pub fn fields(body: &VideoBody) -> Vec<Field> {
    let choices = VideoProvider::ALL
        .iter()
        .map(|p| Choice {
            value: p.as_str(),
            label: provider_label(*p),
            enabled: p.is_available(),
        })
        .collect();

    let preview = if body.url.trim().is_empty() {
        "Video preview appears here".to_string()
    } else {
        format!("Video preview: {}", body.url.trim())
    };

    vec![
        Field::new(
            "provider",
            "Source",
            Control::Select {
                value: body.provider.as_str(),
                choices,
            },
        ),
        Field::new(
            "url",
            "URL",
            Control::Input {
                value: body.url.clone(),
                placeholder: "https://",
            },
        ),
        Field::new("preview", "Preview", Control::Placeholder { text: preview }),
    ]
}
