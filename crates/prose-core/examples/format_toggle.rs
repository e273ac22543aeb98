use prose_core::{Selection, apply_format, format_action};

fn main() {
    let bold = format_action("bold", None).unwrap();

    // Wrap the selection.
    let out = apply_format("Hello world", Selection::new(0, 5, "Hello"), &bold);
    assert_eq!(out.content, "**Hello** world");

    // Re-applying on the re-centered selection unwraps it again.
    let sel = Selection::new(out.selection.start, out.selection.end, "Hello");
    let back = apply_format(&out.content, sel, &bold);
    assert_eq!(back.content, "Hello world");

    // Line prefixes toggle the same way.
    let quote = format_action("blockquote", None).unwrap();
    let quoted = apply_format("a line", Selection::caret(3), &quote);
    assert_eq!(quoted.content, "> a line");
}
