// crates/core/src/aggregate.rs
//! # Rate Aggregator
//!
//! Single pass over a file's lines producing an [`AnalysisResult`].
//!
//! ```rust
//! use comment_rate_core::{AttachmentKind, DocAttachment, Grade, analyze};
//!
//! let lines = ["// header", "", "int x = 1;", "/** doc */", "* note", "*/"];
//! let docs = [DocAttachment::new(AttachmentKind::Method)];
//! let result = analyze(lines, &docs);
//!
//! assert_eq!(result.total_lines(), 6);
//! assert_eq!(result.effective_code_lines(), 4);
//! assert_eq!(result.comment_lines(), 3);
//! assert_eq!(result.comment_rate(), 75.0);
//! assert_eq!(result.method_comments(), 1);
//! assert_eq!(result.grade(), Grade::Excellent);
//! ```

use crate::attachment::{AttachmentKind, DocAttachment, DocAttachmentExtractor};
use crate::classifier::{LineKind, classify_line};
use crate::stats::AnalysisResult;

/// Split file text into lines.
///
/// Trailing empty lines are dropped, however many there are, `\r\n` endings
/// are stripped, and empty text yields no lines. Empty lines followed by
/// content are kept.
pub fn split_lines(text: &str) -> core::str::Lines<'_> {
    text.trim_end_matches(['\n', '\r']).lines()
}

/// Classify every line and count doc attachments by kind.
#[must_use]
pub fn analyze<'a, I>(lines: I, attachments: &[DocAttachment]) -> AnalysisResult
where
    I: IntoIterator<Item = &'a str>,
{
    let mut total = 0;
    let mut blank = 0;
    let mut comments = 0;

    for line in lines {
        total += 1;
        match classify_line(line) {
            LineKind::Blank => blank += 1,
            LineKind::Comment => comments += 1,
            LineKind::Code => {}
        }
    }

    let (methods, classes) = count_attachments(attachments);

    AnalysisResult::from_counts(total, blank, comments, methods, classes)
}

/// Analyze whole file text, asking `extractor` for its doc attachments.
#[must_use]
pub fn analyze_text<E>(text: &str, extractor: &E) -> AnalysisResult
where
    E: DocAttachmentExtractor + ?Sized,
{
    let attachments = extractor.extract(text);
    analyze(split_lines(text), &attachments)
}

fn count_attachments(attachments: &[DocAttachment]) -> (usize, usize) {
    attachments
        .iter()
        .fold((0, 0), |(methods, classes), doc| match doc.kind {
            AttachmentKind::Method => (methods + 1, classes),
            AttachmentKind::Class => (methods, classes + 1),
            AttachmentKind::Other => (methods, classes),
        })
}
