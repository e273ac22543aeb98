#![warn(missing_docs)]
//! Prose Core - Headless Prose Editing Engine
//!
//! # Overview
//!
//! `prose-core` is a headless editing engine for plain-text prose (chapters, notes,
//! long-form drafts). It operates purely on character offsets and blank-line paragraph
//! boundaries: the host hands in the complete buffer plus the current selection, and
//! every operation returns a full replacement buffer together with the selection or
//! caret to restore. There is no document model, no undo stack, and no I/O - the host
//! owns the authoritative buffer and cursor, the engine is a set of pure computations
//! between keystrokes.
//!
//! # Core Features
//!
//! - **Toggle Formatting**: markdown-style wrap/prefix markers with selection tracking
//! - **Paragraph Operations**: navigate, select, split, join, move, duplicate, delete
//! - **Find/Replace**: literal or regex queries with case and whole-word control
//! - **Statistics**: word/char/paragraph/line counts and reading time
//!
//! # Quick Start
//!
//! ```rust
//! use prose_core::{apply_format, format_action, ParagraphEngine, Selection};
//!
//! // Toggle bold on a selection.
//! let action = format_action("bold", None).unwrap();
//! let out = apply_format("Hello world", Selection::new(0, 5, "Hello"), &action);
//! assert_eq!(out.content, "**Hello** world");
//!
//! // Duplicate the first paragraph.
//! let engine = ParagraphEngine::new("A.\n\nB.");
//! let edit = engine.duplicate_paragraph(0).unwrap();
//! assert_eq!(edit.content, "A.\n\nA.\n\nB.");
//! assert_eq!(edit.position, 4);
//! ```
//!
//! # Offsets
//!
//! All public inputs and outputs use **character offsets** (Unicode scalar values),
//! not byte offsets. Conversion to byte offsets for slicing happens internally.
//!
//! # Module Description
//!
//! - [`formatter`] - selection-based formatting (wrap/prefix/replace/insert)
//! - [`paragraphs`] - paragraph segmentation and manipulation
//! - [`search`] - find/replace query compilation and application
//! - [`stats`] - buffer statistics
//! - [`line_ending`] - CRLF normalization for hosts
//!
//! Named format and insert actions (bold, heading, scene break, ...) live in the
//! companion crate `prose-core-markdown` and are re-exported here.

pub mod formatter;
pub mod line_ending;
pub mod paragraphs;
pub mod search;
mod span;
pub mod stats;
mod text;

pub use formatter::{FormatOutcome, Selection, apply_format};
pub use line_ending::{LineEnding, normalize_to_lf};
pub use paragraphs::{Paragraph, ParagraphEdit, ParagraphEngine, ParagraphStats};
pub use prose_core_markdown::{FormatAction, format_action, insert_action, insert_action_on};
pub use search::{SearchError, SearchOptions, find_all, replace_all};
pub use span::Span;
pub use stats::{TextStats, WORDS_PER_MINUTE, text_stats};
