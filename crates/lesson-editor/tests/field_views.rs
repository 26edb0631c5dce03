use lesson_core::{create_block, BlockKind};
use lesson_editor::{render_body, Control};

fn names(kind: BlockKind) -> Vec<&'static str> {
    render_body(&create_block(kind)).iter().map(|f| f.name).collect()
}

#[test]
fn each_variant_renders_its_own_fields() {
    assert_eq!(names(BlockKind::Text), ["body"]);
    assert_eq!(names(BlockKind::Video), ["provider", "url", "preview"]);
    assert_eq!(names(BlockKind::Code), ["language", "points", "starter_code"]);
    assert_eq!(names(BlockKind::Quiz), ["question", "options", "add_option"]);
    assert_eq!(names(BlockKind::Puzzle), ["instructions"]);
}

#[test]
fn upload_choice_is_visible_but_disabled() {
    let fields = render_body(&create_block(BlockKind::Video));
    let Control::Select { value, choices } = &fields[0].control else {
        panic!("provider should be a select");
    };
    assert_eq!(*value, "url");
    let flags: Vec<(&str, bool)> = choices.iter().map(|c| (c.value, c.enabled)).collect();
    assert_eq!(flags, [("url", true), ("upload", false)]);
}

#[test]
fn quiz_checklist_mirrors_options() {
    let fields = render_body(&create_block(BlockKind::Quiz));
    let Control::Checklist { items } = &fields[1].control else {
        panic!("options should be a checklist");
    };
    assert_eq!(items.len(), 2);
    assert!(items[0].checked);
    assert!(!items[1].checked);
}

#[test]
fn starter_code_is_monospace() {
    let fields = render_body(&create_block(BlockKind::Code));
    assert!(matches!(
        fields[2].control,
        Control::TextArea { monospace: true, .. }
    ));
    assert!(matches!(fields[1].control, Control::Number { value: 10, min: 0 }));
}
