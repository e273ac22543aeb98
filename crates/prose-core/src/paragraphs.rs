//! Paragraph segmentation and manipulation.
//!
//! # Overview
//!
//! [`ParagraphEngine`] treats a buffer as a sequence of paragraphs: maximal non-blank
//! runs of text separated by blank lines (runs of whitespace containing at least one
//! empty line). Paragraph views are recomputed from the buffer on every query; there is
//! no persistent paragraph identity, and any returned offsets are invalidated by the
//! next buffer change.
//!
//! Operations take a caret position (char offset) and resolve the containing paragraph
//! first. Unmatched positions degrade to no-ops: content-returning operations echo the
//! buffer unchanged, the rest return `None`.
//!
//! # Span location
//!
//! Paragraph extents are recovered by scanning the buffer forward and taking the first
//! occurrence of each paragraph's text after the previous one. When the same text also
//! occurs earlier (inside another paragraph, or as a repeated paragraph), the first
//! occurrence wins, which can mislocate a span in documents with duplicated passages.
//! The scan is confined to [`ParagraphEngine::paragraph_views`] so the ambiguity stays
//! in one place.
//!
//! # Example
//!
//! ```rust
//! use prose_core::ParagraphEngine;
//!
//! let engine = ParagraphEngine::new("First.\n\nSecond.");
//! assert_eq!(engine.paragraphs(), vec!["First.", "Second."]);
//! assert_eq!(engine.next_paragraph_position(0), Some(8));
//! ```

use crate::search::{self, SearchError, SearchOptions};
use crate::span::Span;
use crate::text::{CharIndex, paragraph_segments};

/// A transient view of one paragraph.
///
/// Offsets are char offsets into the buffer the view was computed from; `end` is one
/// past the last char. Containment checks are inclusive of both ends, so a caret
/// sitting just past a paragraph's last char still belongs to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paragraph<'a> {
    /// The paragraph text, exactly as it appears in the buffer.
    pub text: &'a str,
    /// Char offset of the paragraph's first char.
    pub start: usize,
    /// Char offset one past the paragraph's last char.
    pub end: usize,
    /// 0-based ordinal among the buffer's paragraphs.
    pub index: usize,
}

impl Paragraph<'_> {
    fn contains(&self, position: usize) -> bool {
        self.start <= position && position <= self.end
    }
}

/// A buffer edit produced by a paragraph operation: the full replacement content and
/// the caret position to restore.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParagraphEdit {
    /// The new buffer content.
    pub content: String,
    /// The new caret position (char offset), consistent with `content`.
    pub position: usize,
}

/// Aggregate word-count statistics over a buffer's paragraphs.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ParagraphStats {
    /// Number of paragraphs.
    pub total_paragraphs: usize,
    /// Mean words per paragraph; 0.0 when there are no paragraphs.
    pub average_words_per_paragraph: f64,
    /// Word count of the shortest paragraph; 0 when there are no paragraphs.
    pub shortest_paragraph: usize,
    /// Word count of the longest paragraph; 0 when there are no paragraphs.
    pub longest_paragraph: usize,
}

/// Paragraph-level editing over a cached buffer.
///
/// The engine holds a copy of the last buffer passed in, purely to avoid re-deriving
/// the char index between queries against the same content. It never mutates the
/// buffer in place; every editing operation returns a full replacement string.
#[derive(Debug, Clone)]
pub struct ParagraphEngine {
    content: String,
    index: CharIndex,
}

impl ParagraphEngine {
    /// Create an engine over `content`.
    pub fn new(content: impl Into<String>) -> Self {
        let content = content.into();
        let index = CharIndex::new(&content);
        Self { content, index }
    }

    /// Replace the cached buffer. Cheap when the content is unchanged.
    pub fn update_content(&mut self, content: &str) {
        if self.content != content {
            self.content = content.to_string();
            self.index = CharIndex::new(&self.content);
        }
    }

    /// The cached buffer.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// All paragraph texts, in buffer order.
    pub fn paragraphs(&self) -> Vec<&str> {
        paragraph_segments(&self.content)
    }

    /// All paragraphs with their extents, in buffer order.
    ///
    /// This is the single place spans are located (see the module docs for the
    /// first-occurrence caveat).
    pub fn paragraph_views(&self) -> Vec<Paragraph<'_>> {
        let mut views = Vec::new();
        let mut cursor = 0usize;

        for (ordinal, text) in paragraph_segments(&self.content).into_iter().enumerate() {
            let Some(found) = self.content[cursor..].find(text) else {
                break;
            };
            let start_byte = cursor + found;
            let end_byte = start_byte + text.len();
            views.push(Paragraph {
                text,
                start: self.index.char_of(start_byte),
                end: self.index.char_of(end_byte),
                index: ordinal,
            });
            // The byte after a paragraph is the `\n` opening its separator, so +1
            // stays on a char boundary.
            cursor = (end_byte + 1).min(self.content.len());
        }

        views
    }

    /// The paragraph containing `position`, if any.
    pub fn paragraph_at(&self, position: usize) -> Option<Paragraph<'_>> {
        self.paragraph_views()
            .into_iter()
            .find(|paragraph| paragraph.contains(position))
    }

    /// Start offset of the paragraph after the one containing `position`.
    ///
    /// `None` when the position is unmatched or already in the last paragraph.
    pub fn next_paragraph_position(&self, position: usize) -> Option<usize> {
        let views = self.paragraph_views();
        let current = views.iter().find(|p| p.contains(position))?;
        views.get(current.index + 1).map(|next| next.start)
    }

    /// Start offset of the paragraph before the one containing `position`.
    ///
    /// `None` when the position is unmatched or already in the first paragraph.
    /// The result is the *first occurrence* of the previous paragraph's text in the
    /// buffer, consistent with the span-location rule.
    pub fn previous_paragraph_position(&self, position: usize) -> Option<usize> {
        let views = self.paragraph_views();
        let current = views.iter().find(|p| p.contains(position))?;
        if current.index == 0 {
            return None;
        }

        let previous_text = views[current.index - 1].text;
        self.content
            .find(previous_text)
            .map(|byte| self.index.char_of(byte))
    }

    /// The extent of the paragraph containing `position`, for select-paragraph.
    pub fn select_paragraph(&self, position: usize) -> Option<Span> {
        self.paragraph_at(position)
            .map(|paragraph| Span::new(paragraph.start, paragraph.end))
    }

    /// Remove the paragraph containing `position`, together with all contiguous
    /// whitespace around it. Echoes the buffer unchanged for unmatched positions.
    pub fn delete_paragraph(&self, position: usize) -> String {
        let Some(paragraph) = self.paragraph_at(position) else {
            return self.content.clone();
        };

        let mut start = paragraph.start;
        let mut end = paragraph.end;
        while start > 0
            && self
                .index
                .char_at(&self.content, start - 1)
                .is_some_and(char::is_whitespace)
        {
            start -= 1;
        }
        while self
            .index
            .char_at(&self.content, end)
            .is_some_and(char::is_whitespace)
        {
            end += 1;
        }

        let mut out = String::with_capacity(self.content.len());
        out.push_str(&self.content[..self.index.byte_of(start)]);
        out.push_str(&self.content[self.index.byte_of(end)..]);
        out
    }

    /// Split the paragraph containing `position` into two, inserting a blank line at
    /// the caret. Echoes the buffer unchanged for unmatched positions.
    pub fn split_paragraph(&self, position: usize) -> String {
        let Some(paragraph) = self.paragraph_at(position) else {
            return self.content.clone();
        };

        let relative = position - paragraph.start;
        let split_byte = paragraph
            .text
            .char_indices()
            .nth(relative)
            .map(|(byte, _)| byte)
            .unwrap_or(paragraph.text.len());

        let mut out = String::with_capacity(self.content.len() + 2);
        out.push_str(&self.content[..self.index.byte_of(paragraph.start)]);
        out.push_str(&paragraph.text[..split_byte]);
        out.push_str("\n\n");
        out.push_str(&paragraph.text[split_byte..]);
        out.push_str(&self.content[self.index.byte_of(paragraph.end)..]);
        out
    }

    /// Join the paragraph containing `position` with the next one, separated by a
    /// single space. Echoes the buffer unchanged when there is no next paragraph or
    /// the position is unmatched.
    pub fn join_with_next(&self, position: usize) -> String {
        let views = self.paragraph_views();
        let Some(current) = views.iter().find(|p| p.contains(position)) else {
            return self.content.clone();
        };
        let Some(next) = views.get(current.index + 1) else {
            return self.content.clone();
        };

        let mut out = String::with_capacity(self.content.len());
        out.push_str(&self.content[..self.index.byte_of(current.start)]);
        out.push_str(current.text);
        out.push(' ');
        out.push_str(next.text);
        out.push_str(&self.content[self.index.byte_of(next.end)..]);
        out
    }

    /// Swap the paragraph containing `position` with the previous one.
    ///
    /// Rebuilds the buffer by rejoining *all* paragraphs with one blank line, so
    /// inter-paragraph spacing is normalized buffer-wide as a side effect. The
    /// returned position is the moved paragraph's first occurrence in the new buffer.
    /// `None` when the paragraph is already first or the position is unmatched.
    pub fn move_paragraph_up(&self, position: usize) -> Option<ParagraphEdit> {
        let views = self.paragraph_views();
        let current = views.iter().find(|p| p.contains(position))?;
        if current.index == 0 {
            return None;
        }

        let mut texts: Vec<&str> = views.iter().map(|p| p.text).collect();
        texts.swap(current.index - 1, current.index);
        Some(rejoin_and_locate(&texts, current.text))
    }

    /// Swap the paragraph containing `position` with the next one.
    ///
    /// Same rejoin-and-normalize behavior as [`ParagraphEngine::move_paragraph_up`].
    /// `None` when the paragraph is already last or the position is unmatched.
    pub fn move_paragraph_down(&self, position: usize) -> Option<ParagraphEdit> {
        let views = self.paragraph_views();
        let current = views.iter().find(|p| p.contains(position))?;
        if current.index + 1 >= views.len() {
            return None;
        }

        let mut texts: Vec<&str> = views.iter().map(|p| p.text).collect();
        texts.swap(current.index, current.index + 1);
        Some(rejoin_and_locate(&texts, current.text))
    }

    /// Insert a copy of the paragraph containing `position` right after it, separated
    /// by a blank line. The returned position is the start of the copy. `None` for
    /// unmatched positions.
    pub fn duplicate_paragraph(&self, position: usize) -> Option<ParagraphEdit> {
        let paragraph = self.paragraph_at(position)?;

        let mut out = String::with_capacity(self.content.len() + paragraph.text.len() + 2);
        out.push_str(&self.content[..self.index.byte_of(paragraph.start)]);
        out.push_str(paragraph.text);
        out.push_str("\n\n");
        out.push_str(paragraph.text);
        out.push_str(&self.content[self.index.byte_of(paragraph.end)..]);

        Some(ParagraphEdit {
            content: out,
            position: paragraph.start + paragraph.text.chars().count() + 2,
        })
    }

    /// Word-count statistics over all paragraphs. All fields are zero for a buffer
    /// with no paragraphs.
    pub fn paragraph_stats(&self) -> ParagraphStats {
        let word_counts: Vec<usize> = self
            .paragraphs()
            .iter()
            .map(|p| p.split_whitespace().count())
            .collect();

        if word_counts.is_empty() {
            return ParagraphStats::default();
        }

        ParagraphStats {
            total_paragraphs: word_counts.len(),
            average_words_per_paragraph: word_counts.iter().sum::<usize>() as f64
                / word_counts.len() as f64,
            shortest_paragraph: word_counts.iter().copied().min().unwrap_or(0),
            longest_paragraph: word_counts.iter().copied().max().unwrap_or(0),
        }
    }

    /// Replace every occurrence of `query` in the buffer. See [`crate::search`] for
    /// how [`SearchOptions`] shape the query.
    pub fn find_and_replace(
        &self,
        query: &str,
        replacement: &str,
        options: SearchOptions,
    ) -> Result<String, SearchError> {
        search::replace_all(&self.content, query, replacement, options)
    }

    /// Trim every paragraph and rejoin with exactly one blank line, dropping
    /// paragraphs that trim to nothing. A buffer-wide normalization pass.
    pub fn format_paragraphs(&self) -> String {
        let trimmed: Vec<&str> = self
            .paragraphs()
            .iter()
            .map(|p| p.trim())
            .filter(|p| !p.is_empty())
            .collect();
        trimmed.join("\n\n")
    }

    /// The buffer rejoined with each paragraph prefixed by its 1-based number.
    pub fn content_with_numbers(&self) -> String {
        let numbered: Vec<String> = self
            .paragraphs()
            .iter()
            .enumerate()
            .map(|(i, p)| format!("[{}] {}", i + 1, p))
            .collect();
        numbered.join("\n\n")
    }
}

/// Rejoin swapped paragraph texts and find the moved paragraph's new caret position
/// (first occurrence of its text in the rebuilt buffer).
fn rejoin_and_locate(texts: &[&str], moved: &str) -> ParagraphEdit {
    let content = texts.join("\n\n");
    let position = content
        .find(moved)
        .map(|byte| content[..byte].chars().count())
        .unwrap_or(0);
    ParagraphEdit { content, position }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_views_extents() {
        let engine = ParagraphEngine::new("One.\n\nTwo two.\n\n\nThree.");
        let views = engine.paragraph_views();
        assert_eq!(views.len(), 3);
        assert_eq!((views[0].start, views[0].end), (0, 4));
        assert_eq!((views[1].start, views[1].end), (6, 14));
        assert_eq!(views[2].text, "Three.");
        assert_eq!(views[2].index, 2);
    }

    #[test]
    fn test_paragraph_at_is_inclusive_of_both_ends() {
        let engine = ParagraphEngine::new("One.\n\nTwo.");
        // Position 4 is just past "One." but still belongs to it.
        assert_eq!(engine.paragraph_at(4).map(|p| p.index), Some(0));
        assert_eq!(engine.paragraph_at(6).map(|p| p.index), Some(1));
        // Position 5 sits between the two separators' newlines: matched by neither.
        assert_eq!(engine.paragraph_at(5).map(|p| p.index), None);
    }

    #[test]
    fn test_unmatched_position_is_total() {
        let engine = ParagraphEngine::new("One.\n\n\n\nTwo.");
        // Position 6 is in the middle of the separator whitespace.
        assert_eq!(engine.select_paragraph(6), None);
        assert_eq!(engine.delete_paragraph(6), engine.content());
        assert_eq!(engine.split_paragraph(6), engine.content());
        assert_eq!(engine.join_with_next(6), engine.content());
        assert_eq!(engine.duplicate_paragraph(6), None);
    }

    #[test]
    fn test_navigation() {
        let engine = ParagraphEngine::new("Para one.\n\nPara two.");
        assert_eq!(engine.next_paragraph_position(0), Some(11));
        assert_eq!(engine.previous_paragraph_position(11), Some(0));
        assert_eq!(engine.next_paragraph_position(11), None);
        assert_eq!(engine.previous_paragraph_position(0), None);
    }

    #[test]
    fn test_previous_position_takes_first_occurrence_of_duplicate_text() {
        // The paragraph before the caret reads "A." - which also appears as the very
        // first paragraph, and the earlier occurrence wins.
        let engine = ParagraphEngine::new("A.\n\nB.\n\nA.\n\nC.");
        assert_eq!(engine.previous_paragraph_position(12), Some(0));
    }

    #[test]
    fn test_delete_paragraph_swallows_surrounding_whitespace() {
        let engine = ParagraphEngine::new("One.\n\nTwo.\n\nThree.");
        assert_eq!(engine.delete_paragraph(7), "One.Three.");

        let engine = ParagraphEngine::new("One.\n\nTwo.");
        assert_eq!(engine.delete_paragraph(0), "Two.");
    }

    #[test]
    fn test_split_paragraph_at_caret() {
        let engine = ParagraphEngine::new("One two.\n\nThree.");
        assert_eq!(engine.split_paragraph(4), "One \n\ntwo.\n\nThree.");
    }

    #[test]
    fn test_split_then_join_restores_paragraph_text() {
        let engine = ParagraphEngine::new("One two.");
        let split = engine.split_paragraph(4);
        assert_eq!(split, "One \n\ntwo.");

        let engine = ParagraphEngine::new(split);
        let joined = engine.join_with_next(0);
        assert_eq!(joined, "One  two.");
        // The rejoined text differs only in separating whitespace.
        let before: Vec<&str> = "One two.".split_whitespace().collect();
        let after: Vec<&str> = joined.split_whitespace().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_join_with_next() {
        let engine = ParagraphEngine::new("One.\n\nTwo.\n\nThree.");
        assert_eq!(engine.join_with_next(0), "One. Two.\n\nThree.");
        // Last paragraph has nothing to join with.
        assert_eq!(engine.join_with_next(13), engine.content());
    }

    #[test]
    fn test_move_up_and_down() {
        let engine = ParagraphEngine::new("One.\n\nTwo.\n\nThree.");

        let up = engine.move_paragraph_up(7).unwrap();
        assert_eq!(up.content, "Two.\n\nOne.\n\nThree.");
        assert_eq!(up.position, 0);

        let down = engine.move_paragraph_down(0).unwrap();
        assert_eq!(down.content, "Two.\n\nOne.\n\nThree.");
        assert_eq!(down.position, 6);

        assert_eq!(engine.move_paragraph_up(0), None);
        assert_eq!(engine.move_paragraph_down(13), None);
    }

    #[test]
    fn test_move_normalizes_spacing_everywhere() {
        // The wide separator between Two and Three collapses to one blank line even
        // though the move only touches One and Two.
        let engine = ParagraphEngine::new("One.\n\nTwo.\n\n\n\nThree.");
        let up = engine.move_paragraph_up(7).unwrap();
        assert_eq!(up.content, "Two.\n\nOne.\n\nThree.");
    }

    #[test]
    fn test_duplicate_paragraph() {
        let engine = ParagraphEngine::new("A.\n\nB.");
        let edit = engine.duplicate_paragraph(0).unwrap();
        assert_eq!(edit.content, "A.\n\nA.\n\nB.");
        assert_eq!(edit.position, 4);
    }

    #[test]
    fn test_paragraph_stats() {
        let engine = ParagraphEngine::new("one two three\n\nfour\n\nfive six");
        let stats = engine.paragraph_stats();
        assert_eq!(stats.total_paragraphs, 3);
        assert_eq!(stats.shortest_paragraph, 1);
        assert_eq!(stats.longest_paragraph, 3);
        assert!((stats.average_words_per_paragraph - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_paragraph_stats_empty_buffer_is_all_zero() {
        let engine = ParagraphEngine::new("");
        assert_eq!(engine.paragraph_stats(), ParagraphStats::default());

        let engine = ParagraphEngine::new("\n\n  \n\n");
        assert_eq!(engine.paragraph_stats(), ParagraphStats::default());
    }

    #[test]
    fn test_format_paragraphs_normalizes() {
        let engine = ParagraphEngine::new("  One.  \n\n\n\n  Two.\n\n   \n\nThree.");
        assert_eq!(engine.format_paragraphs(), "One.\n\nTwo.\n\nThree.");
    }

    #[test]
    fn test_content_with_numbers() {
        let engine = ParagraphEngine::new("A.\n\nB.");
        assert_eq!(engine.content_with_numbers(), "[1] A.\n\n[2] B.");
        let engine = ParagraphEngine::new("");
        assert_eq!(engine.content_with_numbers(), "");
    }

    #[test]
    fn test_update_content_invalidates_cache() {
        let mut engine = ParagraphEngine::new("Old.");
        engine.update_content("New one.\n\nNew two.");
        assert_eq!(engine.paragraphs().len(), 2);
        assert_eq!(engine.next_paragraph_position(0), Some(10));
    }
}
