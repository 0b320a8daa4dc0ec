// crates/core/src/classifier.rs
//! # Line Classifier
//!
//! Decides, for a single line, whether it carries a substantive comment, is
//! blank (including bare comment delimiters), or is code.
//!
//! The rules are purely lexical and line-local: no state is carried from one
//! line to the next, so a line inside a `/* ... */` block that does not start
//! with `*` is counted as code, and a code line that starts with `*` is
//! counted as a comment.
//!
//! ## Rules
//!
//! | Trimmed line | Kind |
//! |--------------|------|
//! | `""`, `/*`, `*/`, `*` | `Blank` |
//! | `// text` | `Comment` |
//! | `//` | `Code` |
//! | `/* text`, `/** text` | `Comment` |
//! | `text */` | `Comment` |
//! | `* text` | `Comment` |
//! | anything else | `Code` |
//!
//! ## Usage Example
//!
//! ```rust
//! use comment_rate_core::classifier::{LineKind, classify_line};
//!
//! assert_eq!(classify_line("   // hello"), LineKind::Comment);
//! assert_eq!(classify_line(" */ "), LineKind::Blank);
//! assert_eq!(classify_line("int x = 1;"), LineKind::Code);
//! ```

use serde::{Deserialize, Serialize};

const LINE_COMMENT: &str = "//";
const BLOCK_OPEN: &str = "/*";
const BLOCK_CLOSE: &str = "*/";
const CONTINUATION: &str = "*";

/// 行の分類結果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    /// No informational content: empty, or a bare `/*`, `*/` or `*`.
    Blank,
    /// Comment markup followed (or preceded, for `*/`) by text.
    Comment,
    /// Everything else.
    Code,
}

/// Classify a raw line. Surrounding whitespace is trimmed first.
///
/// Only ASCII control characters and space (`<= U+0020`) count as
/// whitespace; `U+00A0` or `U+3000` are content.
#[must_use]
pub fn classify_line(line: &str) -> LineKind {
    let trimmed = trim_line(line);
    if is_blank_line(trimmed) {
        LineKind::Blank
    } else if is_comment_line(trimmed) {
        LineKind::Comment
    } else {
        LineKind::Code
    }
}

/// Returns `true` for an already-trimmed line with no informational content.
#[must_use]
pub fn is_blank_line(trimmed: &str) -> bool {
    matches!(trimmed, "" | BLOCK_OPEN | BLOCK_CLOSE | CONTINUATION)
}

/// Returns `true` when an already-trimmed line is a substantive comment.
///
/// Prefix checks run in a fixed order and the first matching prefix decides
/// the outcome; a bare `//` is therefore not a comment and does not fall
/// through to the later checks.
#[must_use]
pub fn is_comment_line(trimmed: &str) -> bool {
    if let Some(rest) = trimmed.strip_prefix(LINE_COMMENT) {
        return has_text(rest);
    }

    if trimmed == BLOCK_OPEN || trimmed == BLOCK_CLOSE {
        return false;
    }

    if let Some(rest) = trimmed.strip_prefix(BLOCK_OPEN) {
        return has_text(rest);
    }

    if let Some(rest) = trimmed.strip_suffix(BLOCK_CLOSE) {
        return has_text(rest);
    }

    if let Some(rest) = trimmed.strip_prefix(CONTINUATION) {
        return has_text(rest);
    }

    false
}

/// Strip leading and trailing characters up to and including space.
#[must_use]
pub fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c <= ' ')
}

#[inline]
fn has_text(s: &str) -> bool {
    !trim_line(s).is_empty()
}
