use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};
use strum::EnumString;

use crate::ids::{BlockId, OptionId};

/// What a block *is*. Fixed at creation; never changes afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum BlockKind {
    Text,
    Video,
    Code,
    Quiz,
    Puzzle,
}

impl BlockKind {
    /// All kinds, in palette order.
    pub const ALL: [BlockKind; 5] = [
        BlockKind::Text,
        BlockKind::Video,
        BlockKind::Code,
        BlockKind::Quiz,
        BlockKind::Puzzle,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            BlockKind::Text => "text",
            BlockKind::Video => "video",
            BlockKind::Code => "code",
            BlockKind::Quiz => "quiz",
            BlockKind::Puzzle => "puzzle",
        }
    }

    /// Title given to a freshly created block of this kind.
    pub const fn default_title(self) -> &'static str {
        match self {
            BlockKind::Text => "New text block",
            BlockKind::Video => "New video",
            BlockKind::Code => "New code challenge",
            BlockKind::Quiz => "New quiz",
            BlockKind::Puzzle => "New puzzle",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Access tier label. Display-only; carries no enforcement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Access {
    #[default]
    Free,
    Premium,
}

impl Access {
    pub const fn as_str(self) -> &'static str {
        match self {
            Access::Free => "free",
            Access::Premium => "premium",
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            Access::Free => Access::Premium,
            Access::Premium => Access::Free,
        }
    }
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a video comes from. Only `Url` is selectable today; `Upload` is reserved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum VideoProvider {
    #[default]
    Url,
    Upload,
}

impl VideoProvider {
    pub const ALL: [VideoProvider; 2] = [VideoProvider::Url, VideoProvider::Upload];

    pub const fn as_str(self) -> &'static str {
        match self {
            VideoProvider::Url => "url",
            VideoProvider::Upload => "upload",
        }
    }

    /// Whether authors may currently select this provider.
    pub const fn is_available(self) -> bool {
        matches!(self, VideoProvider::Url)
    }
}

impl fmt::Display for VideoProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Language of a code challenge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum CodeLanguage {
    #[default]
    Python,
    Javascript,
    Typescript,
}

impl CodeLanguage {
    pub const ALL: [CodeLanguage; 3] = [
        CodeLanguage::Python,
        CodeLanguage::Javascript,
        CodeLanguage::Typescript,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            CodeLanguage::Python => "python",
            CodeLanguage::Javascript => "javascript",
            CodeLanguage::Typescript => "typescript",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            CodeLanguage::Python => "Python",
            CodeLanguage::Javascript => "JavaScript",
            CodeLanguage::Typescript => "TypeScript",
        }
    }
}

impl fmt::Display for CodeLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBody {
    #[serde(default)]
    pub body: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoBody {
    #[serde(default)]
    pub provider: VideoProvider,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeBody {
    #[serde(default)]
    pub language: CodeLanguage,
    #[serde(default)]
    pub starter_code: String,
    #[serde(default)]
    pub points: u32,
}

/// One answer option of a quiz. Several options may be correct at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOption {
    id: OptionId,
    pub text: String,
    #[serde(default)]
    pub correct: bool,
}

impl QuizOption {
    /// A new option with a fresh id.
    pub fn fresh(text: impl Into<String>, correct: bool) -> Self {
        Self {
            id: OptionId::fresh(),
            text: text.into(),
            correct,
        }
    }

    pub fn id(&self) -> &OptionId {
        &self.id
    }
}

/// Quiz payload. `options` order is display order.
///
/// Options are append-only from outside this crate and every appended option
/// gets a fresh id, so option ids stay unique within a quiz.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizBody {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    options: Vec<QuizOption>,
}

impl QuizBody {
    pub(crate) fn with_options(question: String, options: Vec<QuizOption>) -> Self {
        Self { question, options }
    }

    pub fn options(&self) -> &[QuizOption] {
        &self.options
    }

    pub fn option_mut(&mut self, id: &OptionId) -> Option<&mut QuizOption> {
        self.options.iter_mut().find(|o| &o.id == id)
    }

    /// Append an option with a fresh id and return that id.
    pub fn push_option(&mut self, text: impl Into<String>, correct: bool) -> &OptionId {
        self.options.push(QuizOption::fresh(text, correct));
        let last = self.options.len() - 1;
        &self.options[last].id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleBody {
    #[serde(default)]
    pub instructions: String,
}

/// Variant payload, discriminated by `type` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BlockBody {
    Text(TextBody),
    Video(VideoBody),
    Code(CodeBody),
    Quiz(QuizBody),
    Puzzle(PuzzleBody),
}

impl BlockBody {
    pub fn kind(&self) -> BlockKind {
        match self {
            BlockBody::Text(_) => BlockKind::Text,
            BlockBody::Video(_) => BlockKind::Video,
            BlockBody::Code(_) => BlockKind::Code,
            BlockBody::Quiz(_) => BlockKind::Quiz,
            BlockBody::Puzzle(_) => BlockKind::Puzzle,
        }
    }
}

/// Mutable access to a block's payload.
///
/// Hands out a reference to the inner payload only, so callers can edit fields
/// but can never swap one variant for another.
#[derive(Debug)]
pub enum BodyMut<'a> {
    Text(&'a mut TextBody),
    Video(&'a mut VideoBody),
    Code(&'a mut CodeBody),
    Quiz(&'a mut QuizBody),
    Puzzle(&'a mut PuzzleBody),
}

impl BodyMut<'_> {
    pub fn kind(&self) -> BlockKind {
        match self {
            BodyMut::Text(_) => BlockKind::Text,
            BodyMut::Video(_) => BlockKind::Video,
            BodyMut::Code(_) => BlockKind::Code,
            BodyMut::Quiz(_) => BlockKind::Quiz,
            BodyMut::Puzzle(_) => BlockKind::Puzzle,
        }
    }
}

/// A single content module in a lesson.
///
/// `id` and the variant are fixed at creation; `title`, `access`, `collapsed`
/// and the payload fields are editable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    id: BlockId,
    pub title: String,
    #[serde(default)]
    pub access: Access,
    /// View state only.
    #[serde(default)]
    pub collapsed: bool,
    #[serde(flatten)]
    body: BlockBody,
}

impl Block {
    pub(crate) fn assemble(id: BlockId, title: String, body: BlockBody) -> Self {
        Self {
            id,
            title,
            access: Access::Free,
            collapsed: false,
            body,
        }
    }

    pub fn id(&self) -> &BlockId {
        &self.id
    }

    pub fn kind(&self) -> BlockKind {
        self.body.kind()
    }

    pub fn body(&self) -> &BlockBody {
        &self.body
    }

    pub fn body_mut(&mut self) -> BodyMut<'_> {
        match &mut self.body {
            BlockBody::Text(b) => BodyMut::Text(b),
            BlockBody::Video(b) => BodyMut::Video(b),
            BlockBody::Code(b) => BodyMut::Code(b),
            BlockBody::Quiz(b) => BodyMut::Quiz(b),
            BlockBody::Puzzle(b) => BodyMut::Puzzle(b),
        }
    }

    /// Short single-line summary of the payload, for listings.
    pub fn summary(&self) -> String {
        match &self.body {
            BlockBody::Text(t) => t.body.clone(),
            BlockBody::Video(v) => format!("[{}] {}", v.provider, v.url),
            BlockBody::Code(c) => format!("{} ({} pts)", c.language, c.points),
            BlockBody::Quiz(q) => {
                let correct = q.options.iter().filter(|o| o.correct).count();
                format!("{} [{} options, {} correct]", q.question, q.options.len(), correct)
            }
            BlockBody::Puzzle(p) => p.instructions.clone(),
        }
    }
}

/// Write handle to a block that lives inside a list.
///
/// Reads go through `Deref<Target = Block>`. Writes are limited to `title`,
/// `access`, `collapsed` and payload fields; the block cannot be replaced
/// wholesale, so its id and variant survive every patch.
#[derive(Debug)]
pub struct BlockMut<'a>(&'a mut Block);

impl<'a> BlockMut<'a> {
    pub(crate) fn new(block: &'a mut Block) -> Self {
        Self(block)
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.0.title = title.into();
    }

    pub fn set_access(&mut self, access: Access) {
        self.0.access = access;
    }

    pub fn set_collapsed(&mut self, collapsed: bool) {
        self.0.collapsed = collapsed;
    }

    pub fn body_mut(&mut self) -> BodyMut<'_> {
        self.0.body_mut()
    }
}

impl Deref for BlockMut<'_> {
    type Target = Block;

    fn deref(&self) -> &Block {
        &*self.0
    }
}
