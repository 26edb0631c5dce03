//! Construction of new blocks.
//!
//! This is the only place blocks come into existence (apart from loading a
//! document). Every block starts `free`, expanded, with a fresh id.

use crate::ids::BlockId;
use crate::model::{
    Block, BlockBody, BlockKind, CodeBody, CodeLanguage, PuzzleBody, QuizBody, QuizOption,
    TextBody, VideoBody, VideoProvider,
};

/// Starter code placed in a new code challenge.
pub const STARTER_CODE_PLACEHOLDER: &str = "# Write your solution here";

/// Points awarded by a new code challenge.
pub const DEFAULT_CODE_POINTS: u32 = 10;

/// Text of an option appended by the quiz editor.
pub const NEW_OPTION_TEXT: &str = "New option";

/// Create a block of `kind` with defaults and a fresh id.
pub fn create_block(kind: BlockKind) -> Block {
    Block::assemble(BlockId::fresh(), kind.default_title().to_string(), default_body(kind))
}

fn default_body(kind: BlockKind) -> BlockBody {
    match kind {
        BlockKind::Text => BlockBody::Text(TextBody::default()),
        BlockKind::Video => BlockBody::Video(VideoBody {
            provider: VideoProvider::Url,
            url: String::new(),
        }),
        BlockKind::Code => BlockBody::Code(CodeBody {
            language: CodeLanguage::Python,
            starter_code: STARTER_CODE_PLACEHOLDER.to_string(),
            points: DEFAULT_CODE_POINTS,
        }),
        BlockKind::Quiz => BlockBody::Quiz(QuizBody::with_options(
            String::new(),
            vec![
                QuizOption::fresh("Option A", true),
                QuizOption::fresh("Option B", false),
            ],
        )),
        BlockKind::Puzzle => BlockBody::Puzzle(PuzzleBody::default()),
    }
}
