//! Plain-text rendering of the builder view.

use lesson_io::prelude::*;

const INDENT: &str = "    ";
const CONTENT_INDENT: &str = "      ";

pub fn render_view(view: &BuilderView) -> String {
    let labels: Vec<&str> = view.palette.iter().map(|e| e.label).collect();
    let mut out = format!("Add block: {}\n", labels.join(" | "));

    if view.items.is_empty() {
        out.push_str("(no blocks yet)\n");
    }
    for (i, item) in view.items.iter().enumerate() {
        render_item(&mut out, i + 1, item);
    }
    out
}

fn render_item(out: &mut String, n: usize, item: &ShellView) {
    let title = if item.title.trim().is_empty() {
        "(untitled)"
    } else {
        item.title.as_str()
    };
    out.push_str(&format!("{n}. [{}] {title} ({})", item.kind_label, item.badge.label));
    if item.collapsed {
        out.push_str(" [collapsed]");
    }
    out.push('\n');

    for field in item.body.iter().flatten() {
        render_field(out, field);
    }
}

fn render_field(out: &mut String, field: &Field) {
    match &field.control {
        Control::Input { value, placeholder } => {
            let shown = if value.is_empty() {
                format!("<{placeholder}>")
            } else {
                value.clone()
            };
            out.push_str(&format!("{INDENT}{}: {shown}\n", field.label));
        }
        Control::TextArea {
            value, placeholder, ..
        } => {
            if value.is_empty() {
                let hint = if placeholder.is_empty() { "empty" } else { *placeholder };
                out.push_str(&format!("{INDENT}{}: <{hint}>\n", field.label));
            } else {
                out.push_str(&format!("{INDENT}{}:\n", field.label));
                for line in value.lines() {
                    out.push_str(&format!("{CONTENT_INDENT}{line}\n"));
                }
            }
        }
        Control::Select { value, choices } => {
            let shown = choices
                .iter()
                .find(|c| c.value == *value)
                .map_or(*value, |c| c.label);
            out.push_str(&format!("{INDENT}{}: {shown}\n", field.label));
        }
        Control::Number { value, .. } => {
            out.push_str(&format!("{INDENT}{}: {value}\n", field.label));
        }
        Control::Checklist { items } => {
            out.push_str(&format!("{INDENT}{}:\n", field.label));
            if items.is_empty() {
                out.push_str(&format!("{CONTENT_INDENT}(none)\n"));
            }
            for item in items {
                let mark = if item.checked { 'x' } else { ' ' };
                out.push_str(&format!("{CONTENT_INDENT}[{mark}] {}\n", item.text));
            }
        }
        Control::Action { label, enabled, .. } => {
            let suffix = if *enabled { "" } else { " (disabled)" };
            out.push_str(&format!("{INDENT}[{label}]{suffix}\n"));
        }
        Control::Placeholder { text } => {
            out.push_str(&format!("{INDENT}{}: {text}\n", field.label));
        }
    }
}
