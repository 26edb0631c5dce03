#![doc = r#"
⚠️ INTERNAL CRATE – NOT A STABLE API

This crate is an internal implementation detail of the lesson builder.

Do NOT depend on this crate directly.
Use `lesson-io` instead.
"#]

pub mod document;
pub mod error;
pub mod factory;
pub mod fingerprint;
pub mod ids;
pub mod list;
pub mod model;

pub use document::{DOCUMENT_V, LessonDocument};
pub use error::ModelError;
pub use factory::create_block;
pub use ids::{BlockId, OptionId};
pub use list::BlockList;
pub use model::{
    Access, Block, BlockBody, BlockKind, BlockMut, BodyMut, CodeBody, CodeLanguage, PuzzleBody, QuizBody,
    QuizOption, TextBody, VideoBody, VideoProvider,
};
