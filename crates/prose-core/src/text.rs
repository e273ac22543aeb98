//! Internal text utilities.
//!
//! Public APIs in this crate use **character offsets** (Unicode scalar values), while
//! `&str` slicing is byte-based. [`CharIndex`] converts between the two. The paragraph
//! boundary pattern shared by the engine and the statistics module also lives here.

use regex::Regex;
use std::sync::LazyLock;

/// Runs of whitespace containing at least one blank line separate paragraphs.
static PARAGRAPH_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("hard-coded pattern compiles"));

/// Split `content` into paragraph segments, discarding blank ones.
///
/// Segments are returned as found: leading/trailing spaces within a segment are kept,
/// only segments that are entirely whitespace are dropped.
pub(crate) fn paragraph_segments(content: &str) -> Vec<&str> {
    PARAGRAPH_BOUNDARY
        .split(content)
        .filter(|segment| !segment.trim().is_empty())
        .collect()
}

/// Char offset ↔ byte offset conversion table for one buffer.
#[derive(Debug, Clone)]
pub(crate) struct CharIndex {
    /// Byte offset where each char starts, with a trailing entry for the buffer length.
    char_starts: Vec<usize>,
}

impl CharIndex {
    pub(crate) fn new(text: &str) -> Self {
        let mut char_starts: Vec<usize> = text.char_indices().map(|(byte, _)| byte).collect();
        char_starts.push(text.len());
        Self { char_starts }
    }

    pub(crate) fn char_count(&self) -> usize {
        self.char_starts.len() - 1
    }

    fn byte_len(&self) -> usize {
        self.char_starts[self.char_count()]
    }

    /// Byte offset of the char at `char_offset`, clamped to the buffer length.
    pub(crate) fn byte_of(&self, char_offset: usize) -> usize {
        self.char_starts[char_offset.min(self.char_count())]
    }

    /// Char offset for a byte offset lying on a char boundary.
    ///
    /// Offsets inside a multi-byte char round up to the next boundary.
    pub(crate) fn char_of(&self, byte_offset: usize) -> usize {
        let clamped = byte_offset.min(self.byte_len());
        match self.char_starts.binary_search(&clamped) {
            Ok(idx) | Err(idx) => idx,
        }
    }

    /// The char at `char_offset`, if any.
    pub(crate) fn char_at(&self, text: &str, char_offset: usize) -> Option<char> {
        if char_offset >= self.char_count() {
            return None;
        }
        text[self.char_starts[char_offset]..].chars().next()
    }
}
