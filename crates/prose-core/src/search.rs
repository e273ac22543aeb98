//! Find/replace over a whole buffer.
//!
//! Queries are either literal (escaped before compilation) or raw regex patterns,
//! controlled by [`SearchOptions`]. Match spans use **char offsets**. The only
//! fallible path is compiling a user-supplied regex pattern.

use crate::span::Span;
use crate::text::CharIndex;
use regex::{Regex, RegexBuilder};

/// Options that control how a query is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// If `true`, performs a case-sensitive search. Defaults to `false`: find/replace
    /// in prose is case-insensitive unless the caller asks otherwise.
    pub case_sensitive: bool,
    /// If `true`, a literal query matches only at word boundaries. Ignored for raw
    /// regex queries, which manage their own anchors.
    pub whole_word: bool,
    /// If `true`, treats the query as a regex pattern instead of a literal.
    pub regex: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            whole_word: false,
            regex: false,
        }
    }
}

/// Search errors.
#[derive(Debug)]
pub enum SearchError {
    /// The provided regex pattern failed to compile.
    InvalidRegex(regex::Error),
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRegex(err) => write!(f, "invalid regex: {}", err),
        }
    }
}

impl std::error::Error for SearchError {}

fn compile_query(query: &str, options: SearchOptions) -> Result<Regex, SearchError> {
    let pattern = if options.regex {
        query.to_string()
    } else {
        let escaped = regex::escape(query);
        if options.whole_word {
            format!(r"\b{escaped}\b")
        } else {
            escaped
        }
    };

    RegexBuilder::new(&pattern)
        .case_insensitive(!options.case_sensitive)
        .multi_line(true)
        .build()
        .map_err(SearchError::InvalidRegex)
}

/// Replace every occurrence of `query` in `text`.
///
/// - An empty query returns the text unchanged.
/// - With `options.regex`, the replacement may reference capture groups (`$1`, `$name`).
pub fn replace_all(
    text: &str,
    query: &str,
    replacement: &str,
    options: SearchOptions,
) -> Result<String, SearchError> {
    if query.is_empty() {
        return Ok(text.to_string());
    }

    let re = compile_query(query, options)?;
    Ok(re.replace_all(text, replacement).into_owned())
}

/// Find every occurrence of `query` in `text`, as half-open char offset spans.
///
/// Empty queries and empty matches yield nothing; hosts use this to highlight
/// matches before replacing.
pub fn find_all(text: &str, query: &str, options: SearchOptions) -> Result<Vec<Span>, SearchError> {
    if query.is_empty() {
        return Ok(Vec::new());
    }

    let re = compile_query(query, options)?;
    let index = CharIndex::new(text);
    Ok(re
        .find_iter(text)
        .filter(|m| m.start() < m.end())
        .map(|m| Span::new(index.char_of(m.start()), index.char_of(m.end())))
        .collect())
}
