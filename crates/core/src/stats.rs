// crates/core/src/stats.rs
use serde::{Deserialize, Serialize};

use crate::grade::Grade;

/// Pure analysis result for one snapshot of one file.
///
/// Fields are private so a constructed result cannot drift from the counts
/// it was derived from; use [`crate::analyze`] to build one.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    total_lines: usize,
    effective_code_lines: usize,
    comment_lines: usize,
    comment_rate: f64,
    method_comments: usize,
    class_comments: usize,
}

impl AnalysisResult {
    /// Build a result from raw counts, deriving the effective line count and
    /// the rate.
    pub(crate) fn from_counts(
        total_lines: usize,
        blank_lines: usize,
        comment_lines: usize,
        method_comments: usize,
        class_comments: usize,
    ) -> Self {
        let effective_code_lines = total_lines.saturating_sub(blank_lines);
        Self {
            total_lines,
            effective_code_lines,
            comment_lines,
            comment_rate: comment_rate(comment_lines, effective_code_lines),
            method_comments,
            class_comments,
        }
    }

    /// Number of lines in the input.
    #[must_use]
    pub const fn total_lines(&self) -> usize {
        self.total_lines
    }

    /// Total lines minus blank lines; the denominator of the rate.
    #[must_use]
    pub const fn effective_code_lines(&self) -> usize {
        self.effective_code_lines
    }

    /// Number of substantive comment lines.
    #[must_use]
    pub const fn comment_lines(&self) -> usize {
        self.comment_lines
    }

    /// Comment lines as a percentage of effective code lines, unrounded.
    #[must_use]
    pub const fn comment_rate(&self) -> f64 {
        self.comment_rate
    }

    #[must_use]
    pub const fn method_comments(&self) -> usize {
        self.method_comments
    }

    #[must_use]
    pub const fn class_comments(&self) -> usize {
        self.class_comments
    }

    /// Number of lines classified as blank.
    #[must_use]
    pub const fn blank_lines(&self) -> usize {
        self.total_lines - self.effective_code_lines
    }

    #[must_use]
    pub fn grade(&self) -> Grade {
        Grade::from_rate(self.comment_rate)
    }
}

#[allow(clippy::cast_precision_loss)]
fn comment_rate(comment_lines: usize, effective_code_lines: usize) -> f64 {
    if effective_code_lines > 0 {
        comment_lines as f64 * 100.0 / effective_code_lines as f64
    } else {
        0.0
    }
}
