//! Selection-based formatting.
//!
//! [`apply_format`] applies one [`FormatAction`] to a buffer given the host's current
//! selection, returning a new buffer plus the selection the host should restore. All
//! offsets are **char offsets** (not byte offsets).
//!
//! Wrap and prefix actions toggle: applying the same action to an already-formatted
//! selection removes the markers again. Replace and insert are unconditional.

use crate::span::Span;
use crate::text::CharIndex;
use prose_core_markdown::FormatAction;

/// The host's current selection: a char offset range plus the substring it denotes.
///
/// `text` must equal the buffer slice at `[start, end)`; the engine trusts the caller
/// on this and does not re-slice. A collapsed selection (caret) has `start == end` and
/// an empty `text`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection<'a> {
    /// Inclusive start char offset.
    pub start: usize,
    /// Exclusive end char offset.
    pub end: usize,
    /// The selected substring.
    pub text: &'a str,
}

impl<'a> Selection<'a> {
    /// Create a selection from offsets and the substring they denote.
    pub fn new(start: usize, end: usize, text: &'a str) -> Self {
        Self { start, end, text }
    }

    /// A collapsed selection (caret) at `offset`.
    pub fn caret(offset: usize) -> Selection<'static> {
        Selection {
            start: offset,
            end: offset,
            text: "",
        }
    }
}

/// The result of a formatting operation: the full replacement buffer and the
/// selection to restore in the host widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOutcome {
    /// The new buffer content.
    pub content: String,
    /// The new selection, consistent with `content`.
    pub selection: Span,
}

/// Apply one formatting action to `content` at `selection`.
///
/// Selection offsets are caller-guaranteed to be in range with `start <= end`;
/// this is a programmer-error contract, checked only by debug assertions.
///
/// # Example
///
/// ```rust
/// use prose_core::{apply_format, FormatAction, Selection};
///
/// let out = apply_format("Hello world", Selection::new(0, 5, "Hello"), &FormatAction::wrap("**", "**"));
/// assert_eq!(out.content, "**Hello** world");
/// assert_eq!((out.selection.start, out.selection.end), (2, 7));
/// ```
pub fn apply_format(content: &str, selection: Selection<'_>, action: &FormatAction) -> FormatOutcome {
    debug_assert!(selection.start <= selection.end);

    let index = CharIndex::new(content);
    debug_assert!(selection.end <= index.char_count());

    match action {
        FormatAction::Wrap { before, after } => {
            wrap_selection(content, &index, &selection, before, after)
        }
        FormatAction::Prefix { before } => toggle_prefix(content, &index, &selection, before),
        FormatAction::Replace { replacement } => {
            replace_selection(content, &index, &selection, replacement)
        }
        FormatAction::Insert { text } => insert_at_start(content, &index, &selection, text),
    }
}

/// Toggle symmetric markers around the selection.
///
/// The "already wrapped" check requires both markers to lie inside the buffer. A
/// selection flush against the buffer start or end is therefore never detected as
/// wrapped and the markers are added again; hosts that want boundary unwrapping
/// must widen the selection to include the markers first.
fn wrap_selection(
    content: &str,
    index: &CharIndex,
    selection: &Selection<'_>,
    before: &str,
    after: &str,
) -> FormatOutcome {
    let before_len = before.chars().count();
    let after_len = after.chars().count();
    let text_len = selection.text.chars().count();

    if selection.start >= before_len && selection.end + after_len <= index.char_count() {
        let outer_start = selection.start - before_len;
        let outer_end = selection.end + after_len;
        let lead = &content[index.byte_of(outer_start)..index.byte_of(selection.start)];
        let trail = &content[index.byte_of(selection.end)..index.byte_of(outer_end)];

        if lead == before && trail == after {
            let mut out = String::with_capacity(content.len());
            out.push_str(&content[..index.byte_of(outer_start)]);
            out.push_str(selection.text);
            out.push_str(&content[index.byte_of(outer_end)..]);
            return FormatOutcome {
                content: out,
                selection: Span::new(outer_start, outer_start + text_len),
            };
        }
    }

    let mut out = String::with_capacity(content.len() + before.len() + after.len());
    out.push_str(&content[..index.byte_of(selection.start)]);
    out.push_str(before);
    out.push_str(selection.text);
    out.push_str(after);
    out.push_str(&content[index.byte_of(selection.end)..]);
    FormatOutcome {
        content: out,
        selection: Span::new(
            selection.start + before_len,
            selection.start + before_len + text_len,
        ),
    }
}

/// Toggle a line-leading marker on the line containing the selection.
///
/// The line runs from the char after the last `\n` before the selection start to the
/// next `\n` after the selection end. When the marker is stripped, the shifted
/// selection is clamped so it cannot move before the line start.
fn toggle_prefix(
    content: &str,
    index: &CharIndex,
    selection: &Selection<'_>,
    prefix: &str,
) -> FormatOutcome {
    let prefix_len = prefix.chars().count();
    let start_byte = index.byte_of(selection.start);
    let end_byte = index.byte_of(selection.end);

    let line_start_byte = content[..start_byte]
        .rfind('\n')
        .map(|at| at + 1)
        .unwrap_or(0);
    let line_end_byte = content[end_byte..]
        .find('\n')
        .map(|at| end_byte + at)
        .unwrap_or(content.len());
    let line = &content[line_start_byte..line_end_byte];
    let line_start = index.char_of(line_start_byte);

    let mut out = String::with_capacity(content.len() + prefix.len());
    out.push_str(&content[..line_start_byte]);

    if let Some(stripped) = line.strip_prefix(prefix) {
        out.push_str(stripped);
        out.push_str(&content[line_end_byte..]);
        FormatOutcome {
            content: out,
            selection: Span::new(
                selection.start.saturating_sub(prefix_len).max(line_start),
                selection.end.saturating_sub(prefix_len).max(line_start),
            ),
        }
    } else {
        out.push_str(prefix);
        out.push_str(line);
        out.push_str(&content[line_end_byte..]);
        FormatOutcome {
            content: out,
            selection: Span::new(selection.start + prefix_len, selection.end + prefix_len),
        }
    }
}

/// Replace the selected range, collapsing the caret after the replacement.
fn replace_selection(
    content: &str,
    index: &CharIndex,
    selection: &Selection<'_>,
    replacement: &str,
) -> FormatOutcome {
    let mut out = String::with_capacity(content.len() + replacement.len());
    out.push_str(&content[..index.byte_of(selection.start)]);
    out.push_str(replacement);
    out.push_str(&content[index.byte_of(selection.end)..]);
    FormatOutcome {
        content: out,
        selection: Span::caret(selection.start + replacement.chars().count()),
    }
}

/// Insert at the selection start (the selection end is ignored), collapsing the caret
/// after the inserted text.
fn insert_at_start(
    content: &str,
    index: &CharIndex,
    selection: &Selection<'_>,
    text: &str,
) -> FormatOutcome {
    let at = index.byte_of(selection.start);
    let mut out = String::with_capacity(content.len() + text.len());
    out.push_str(&content[..at]);
    out.push_str(text);
    out.push_str(&content[at..]);
    FormatOutcome {
        content: out,
        selection: Span::caret(selection.start + text.chars().count()),
    }
}
