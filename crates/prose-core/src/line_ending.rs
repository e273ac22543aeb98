//! Line ending helpers.
//!
//! The engine assumes LF (`'\n'`) newlines: the paragraph boundary pattern keys on
//! them. Chapter text pasted from other platforms may carry CRLF (`"\r\n"`), so hosts
//! normalize on the way in and can restore the preferred ending on export.

/// The preferred newline sequence when exporting a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    /// Unix-style LF (`'\n'`).
    Lf,
    /// Windows-style CRLF (`"\r\n"`).
    Crlf,
}

impl LineEnding {
    /// Detect the dominant line ending: any CRLF in the input means
    /// [`LineEnding::Crlf`], otherwise [`LineEnding::Lf`].
    pub fn detect(text: &str) -> Self {
        if text.contains("\r\n") {
            Self::Crlf
        } else {
            Self::Lf
        }
    }

    /// Convert an LF-normalized buffer to this line ending for export.
    pub fn apply_to(self, text: &str) -> String {
        match self {
            Self::Lf => text.to_string(),
            Self::Crlf => text.replace('\n', "\r\n"),
        }
    }
}

/// Normalize CRLF to LF before handing a buffer to the engine.
pub fn normalize_to_lf(text: &str) -> String {
    text.replace("\r\n", "\n")
}
