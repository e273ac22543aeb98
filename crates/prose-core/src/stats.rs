//! Buffer statistics.
//!
//! Derived, throwaway counters a host shows in a status bar or a session summary.
//! Everything is recomputed from the full buffer on each call.

use crate::text::paragraph_segments;

/// Reading speed assumed when estimating reading time, in words per minute.
pub const WORDS_PER_MINUTE: usize = 200;

/// Aggregate counters for one buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStats {
    /// Whitespace-separated word count.
    pub words: usize,
    /// Total char count, whitespace included.
    pub characters: usize,
    /// Char count with all whitespace removed.
    pub characters_no_spaces: usize,
    /// Number of non-blank paragraphs (blank-line separated).
    pub paragraphs: usize,
    /// Number of `\n`-delimited line segments (a trailing newline counts an empty line).
    pub lines: usize,
    /// Estimated reading time in whole minutes, rounded up; 0 for an empty buffer.
    pub reading_time: usize,
}

/// Compute [`TextStats`] for a buffer.
///
/// ```rust
/// use prose_core::text_stats;
///
/// let stats = text_stats("one two three");
/// assert_eq!(stats.words, 3);
/// assert_eq!(stats.characters, 13);
/// assert_eq!(stats.reading_time, 1);
/// ```
pub fn text_stats(content: &str) -> TextStats {
    let words = content.split_whitespace().count();

    TextStats {
        words,
        characters: content.chars().count(),
        characters_no_spaces: content.chars().filter(|c| !c.is_whitespace()).count(),
        paragraphs: paragraph_segments(content).len(),
        lines: content.split('\n').count(),
        reading_time: words.div_ceil(WORDS_PER_MINUTE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_sentence() {
        let stats = text_stats("one two three");
        assert_eq!(stats, TextStats {
            words: 3,
            characters: 13,
            characters_no_spaces: 11,
            paragraphs: 1,
            lines: 1,
            reading_time: 1,
        });
    }

    #[test]
    fn test_empty_buffer_is_all_zero_except_lines() {
        let stats = text_stats("");
        assert_eq!(stats.words, 0);
        assert_eq!(stats.characters, 0);
        assert_eq!(stats.characters_no_spaces, 0);
        assert_eq!(stats.paragraphs, 0);
        assert_eq!(stats.reading_time, 0);
        // Splitting the empty buffer still yields one (empty) line segment.
        assert_eq!(stats.lines, 1);
    }

    #[test]
    fn test_paragraph_and_line_counts() {
        let stats = text_stats("A one.\n\nB two.\nstill B.\n");
        assert_eq!(stats.paragraphs, 2);
        assert_eq!(stats.lines, 5);
        assert_eq!(stats.words, 6);
    }

    #[test]
    fn test_reading_time_rounds_up() {
        let two_hundred_one = "word ".repeat(201);
        assert_eq!(text_stats(&two_hundred_one).reading_time, 2);
        assert_eq!(text_stats("word").reading_time, 1);
    }

    #[test]
    fn test_multibyte_characters_count_once() {
        let stats = text_stats("héllo wörld");
        assert_eq!(stats.characters, 11);
        assert_eq!(stats.characters_no_spaces, 10);
        assert_eq!(stats.words, 2);
    }
}
