//! `inspect` rows.

use lesson_io::prelude::*;

/// Preview column bound, in chars, including the ellipsis.
const PREVIEW_CHARS: usize = 80;

const HEADER: &str = "id\ttype\taccess\tcollapsed\ttitle\tpreview\n";

#[derive(Debug, Default)]
pub struct RowFilter {
    pub kind: Option<BlockKind>,
    pub id: Option<String>,
    pub grep: Option<String>,
}

impl RowFilter {
    fn accepts(&self, block: &Block) -> bool {
        if self.kind.is_some_and(|k| k != block.kind()) {
            return false;
        }
        if self.id.as_deref().is_some_and(|id| block.id() != id) {
            return false;
        }
        if let Some(needle) = self.grep.as_deref() {
            return block.title.contains(needle) || block.summary().contains(needle);
        }
        true
    }
}

/// Tab-separated table, one row per matching block, in list order.
pub fn inspect(blocks: &BlockList, filter: &RowFilter) -> String {
    let mut out = String::from(HEADER);
    for b in blocks.iter().filter(|b| filter.accepts(b)) {
        out.push_str(&format!(
            "{}\t{}\t{}\t{}\t{}\t{}\n",
            b.id(),
            b.kind(),
            b.access,
            b.collapsed,
            one_line(&b.title),
            preview(&b.summary()),
        ));
    }
    out
}

fn one_line(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn preview(s: &str) -> String {
    let flat = one_line(s);
    if flat.chars().count() <= PREVIEW_CHARS {
        return flat;
    }
    let mut cut: String = flat.chars().take(PREVIEW_CHARS - 1).collect();
    cut.push('…');
    cut
}
