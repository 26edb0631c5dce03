//! Authoring diagnostics.
//!
//! Advisory checks over a block list for the author's benefit. They never
//! block an operation and nothing is enforced server-side.

use lesson_core::{BlockBody, BlockId, BlockKind, BlockList};
use serde::{Deserialize, Serialize};

/// Stable, machine-readable diagnostic codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticCode {
    EmptyTitle,
    EmptyBody,
    EmptyVideoUrl,
    EmptyQuizQuestion,
    QuizWithoutOptions,
    /// Options exist but none is marked correct. Several correct ones is fine.
    QuizWithoutCorrectOption,
}

impl DiagnosticCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            DiagnosticCode::EmptyTitle => "empty_title",
            DiagnosticCode::EmptyBody => "empty_body",
            DiagnosticCode::EmptyVideoUrl => "empty_video_url",
            DiagnosticCode::EmptyQuizQuestion => "empty_quiz_question",
            DiagnosticCode::QuizWithoutOptions => "quiz_without_options",
            DiagnosticCode::QuizWithoutCorrectOption => "quiz_without_correct_option",
        }
    }
}

/// A single authoring diagnostic.
///
/// `code` and `path` are for tooling; `message` is for humans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub code: DiagnosticCode,
    pub block_id: BlockId,
    pub kind: BlockKind,
    /// JSON-ish path such as `blocks[3].options`.
    pub path: String,
    pub message: String,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\t{}\t{}", self.code.as_str(), self.path, self.message)
    }
}

/// Check every block, in list order.
pub fn check(list: &BlockList) -> Vec<Diagnostic> {
    let mut out = Vec::new();
    for (i, block) in list.iter().enumerate() {
        let mut push = |code: DiagnosticCode, field: &str, message: String| {
            out.push(Diagnostic {
                code,
                block_id: block.id().clone(),
                kind: block.kind(),
                path: format!("blocks[{i}].{field}"),
                message,
            });
        };

        if block.title.trim().is_empty() {
            push(
                DiagnosticCode::EmptyTitle,
                "title",
                format!("{} block '{}' has no title", block.kind(), block.id()),
            );
        }

        match block.body() {
            BlockBody::Text(t) => {
                if t.body.trim().is_empty() {
                    push(
                        DiagnosticCode::EmptyBody,
                        "body",
                        format!("text block '{}' is empty", block.id()),
                    );
                }
            }
            BlockBody::Video(v) => {
                if v.url.trim().is_empty() {
                    push(
                        DiagnosticCode::EmptyVideoUrl,
                        "url",
                        format!("video block '{}' has no URL", block.id()),
                    );
                }
            }
            BlockBody::Code(_) => {}
            BlockBody::Quiz(q) => {
                if q.question.trim().is_empty() {
                    push(
                        DiagnosticCode::EmptyQuizQuestion,
                        "question",
                        format!("quiz '{}' has no question", block.id()),
                    );
                }
                if q.options().is_empty() {
                    push(
                        DiagnosticCode::QuizWithoutOptions,
                        "options",
                        format!("quiz '{}' has no answer options", block.id()),
                    );
                } else if !q.options().iter().any(|o| o.correct) {
                    push(
                        DiagnosticCode::QuizWithoutCorrectOption,
                        "options",
                        format!("quiz '{}' has no option marked correct", block.id()),
                    );
                }
            }
            BlockBody::Puzzle(p) => {
                if p.instructions.trim().is_empty() {
                    push(
                        DiagnosticCode::EmptyBody,
                        "instructions",
                        format!("puzzle '{}' has no instructions", block.id()),
                    );
                }
            }
        }
    }
    out
}
