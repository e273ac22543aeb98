use prose_core::ParagraphEngine;

fn main() {
    let engine = ParagraphEngine::new("Once upon a time.\n\nThe middle.\n\nThe end.");

    // Jump to the next paragraph and select it whole.
    let next = engine.next_paragraph_position(0).unwrap();
    let span = engine.select_paragraph(next).unwrap();
    assert_eq!((span.start, span.end), (19, 30));

    // Move it to the top; the buffer comes back rejoined with single blank lines.
    let edit = engine.move_paragraph_up(next).unwrap();
    assert_eq!(edit.content, "The middle.\n\nOnce upon a time.\n\nThe end.");
    assert_eq!(edit.position, 0);

    // Split the first paragraph right after "The".
    let engine = ParagraphEngine::new(edit.content);
    assert_eq!(
        engine.split_paragraph(3),
        "The\n\n middle.\n\nOnce upon a time.\n\nThe end."
    );
}
