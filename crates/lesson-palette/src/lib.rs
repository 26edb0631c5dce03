//! Palette of addable block kinds: labels, descriptions and categories.

use core::fmt;

use lesson_core::BlockKind;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KindCategory {
    /// Material the learner reads or watches.
    Content,
    /// Something the learner solves or answers.
    Assessment,
}

impl KindCategory {
    pub const fn as_str(self) -> &'static str {
        match self {
            KindCategory::Content => "content",
            KindCategory::Assessment => "assessment",
        }
    }
}

impl fmt::Display for KindCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).as_str())
    }
}

/// One button in the builder's "add block" palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaletteEntry {
    pub kind: BlockKind,
    pub label: &'static str,
    pub description: &'static str,
    pub category: KindCategory,
}

pub const PALETTE: [PaletteEntry; 5] = [
    PaletteEntry {
        kind: BlockKind::Text,
        label: "Text",
        description: "Free-form reading material",
        category: KindCategory::Content,
    },
    PaletteEntry {
        kind: BlockKind::Video,
        label: "Video",
        description: "Embedded video from a URL",
        category: KindCategory::Content,
    },
    PaletteEntry {
        kind: BlockKind::Code,
        label: "Code challenge",
        description: "Graded exercise with starter code",
        category: KindCategory::Assessment,
    },
    PaletteEntry {
        kind: BlockKind::Quiz,
        label: "Quiz",
        description: "Question with checkable answer options",
        category: KindCategory::Assessment,
    },
    PaletteEntry {
        kind: BlockKind::Puzzle,
        label: "Puzzle",
        description: "Open-ended problem with instructions",
        category: KindCategory::Assessment,
    },
];

/// The palette, in display order.
pub fn palette() -> &'static [PaletteEntry] {
    &PALETTE
}

pub fn entry(kind: BlockKind) -> &'static PaletteEntry {
    match kind {
        BlockKind::Text => &PALETTE[0],
        BlockKind::Video => &PALETTE[1],
        BlockKind::Code => &PALETTE[2],
        BlockKind::Quiz => &PALETTE[3],
        BlockKind::Puzzle => &PALETTE[4],
    }
}

pub fn label(kind: BlockKind) -> &'static str {
    entry(kind).label
}

pub fn description(kind: BlockKind) -> &'static str {
    entry(kind).description
}

pub fn category(kind: BlockKind) -> KindCategory {
    entry(kind).category
}

pub fn is_assessment(kind: BlockKind) -> bool {
    matches!(category(kind), KindCategory::Assessment)
}

/// Resolve a kind by tag (`quiz`) or palette label (`Code challenge`), ignoring case.
pub fn lookup(name: &str) -> Option<BlockKind> {
    let name = name.trim();
    name.parse::<BlockKind>().ok().or_else(|| {
        PALETTE
            .iter()
            .find(|e| e.label.eq_ignore_ascii_case(name))
            .map(|e| e.kind)
    })
}
