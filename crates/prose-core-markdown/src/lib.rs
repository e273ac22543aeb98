#![warn(missing_docs)]
//! `prose-core-markdown` - data-driven markdown action definitions for `prose-core`.
//!
//! This crate intentionally stays lightweight and does **not** depend on the editing
//! engine. It defines the [`FormatAction`] value type plus the named catalogs that
//! host toolbars and shortcut maps dispatch through. The engine crate consumes
//! [`FormatAction`] values; hosts are free to build their own actions without going
//! through the catalogs.

use chrono::{Local, NaiveDate};

/// One formatting operation over a text buffer, described as pure data.
///
/// Applying an action (and toggling it off again) is the engine's job; this type
/// only says *what* to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatAction {
    /// Symmetric inline markers around the selection (e.g. `**`/`**`).
    Wrap {
        /// Marker placed before the selection.
        before: String,
        /// Marker placed after the selection.
        after: String,
    },
    /// A line-leading marker (e.g. `# `, `> `).
    Prefix {
        /// Marker prepended to the current line.
        before: String,
    },
    /// Unconditional substitution of the selected range.
    Replace {
        /// Text that replaces the selection.
        replacement: String,
    },
    /// Insertion at the selection start (the selection end is ignored).
    Insert {
        /// Text to insert.
        text: String,
    },
}

impl FormatAction {
    /// Create a symmetric wrap action.
    pub fn wrap(before: impl Into<String>, after: impl Into<String>) -> Self {
        Self::Wrap {
            before: before.into(),
            after: after.into(),
        }
    }

    /// Create a line-prefix action.
    pub fn prefix(before: impl Into<String>) -> Self {
        Self::Prefix {
            before: before.into(),
        }
    }

    /// Create a replacement action.
    pub fn replace(replacement: impl Into<String>) -> Self {
        Self::Replace {
            replacement: replacement.into(),
        }
    }

    /// Create a point-insertion action.
    pub fn insert(text: impl Into<String>) -> Self {
        Self::Insert { text: text.into() }
    }
}

/// Look up a named formatting action.
///
/// `value` carries an optional argument for parameterized actions; today only
/// `"heading"` uses it (the heading level, default 1, clamped to 1..=6).
/// Unknown names return `None` so hosts can treat unbound toolbar ids as no-ops.
pub fn format_action(name: &str, value: Option<&str>) -> Option<FormatAction> {
    match name {
        "bold" => Some(FormatAction::wrap("**", "**")),
        "italic" => Some(FormatAction::wrap("*", "*")),
        "underline" => Some(FormatAction::wrap("<u>", "</u>")),
        "strikethrough" => Some(FormatAction::wrap("~~", "~~")),
        "heading" => {
            let level = value
                .and_then(|v| v.parse::<usize>().ok())
                .unwrap_or(1)
                .clamp(1, 6);
            Some(FormatAction::prefix(format!("{} ", "#".repeat(level))))
        }
        "blockquote" => Some(FormatAction::prefix("> ")),
        "bulletList" => Some(FormatAction::prefix("- ")),
        "numberedList" => Some(FormatAction::prefix("1. ")),
        _ => None,
    }
}

/// Look up a named insertion, using today's local date for `"date"`.
pub fn insert_action(name: &str) -> Option<FormatAction> {
    insert_action_on(name, Local::now().date_naive())
}

/// Look up a named insertion with an explicit date for `"date"`.
///
/// The date is rendered as `m/d/yyyy`. Taking the date as a parameter keeps the
/// catalog deterministic for callers that need it (and for tests).
pub fn insert_action_on(name: &str, today: NaiveDate) -> Option<FormatAction> {
    match name {
        "paragraph" => Some(FormatAction::insert("\n\n")),
        "sceneBreak" => Some(FormatAction::insert("\n\n* * *\n\n")),
        "chapterBreak" => Some(FormatAction::insert("\n\n---\n\n")),
        "date" => Some(FormatAction::insert(
            today.format("%-m/%-d/%Y").to_string(),
        )),
        "note" => Some(FormatAction::insert("\n\n[Note: ]")),
        _ => None,
    }
}
