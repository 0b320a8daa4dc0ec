// crates/core/src/attachment.rs
//! Documentation blocks and the construct they document.
//!
//! Locating doc blocks needs a parser for the analyzed language, which lives
//! outside this crate. Parsers plug in through [`DocAttachmentExtractor`].

use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// ドキュメントコメントが付与された構文要素の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttachmentKind {
    /// Method or constructor.
    Method,
    /// Class, interface, enum or record.
    Class,
    /// Anything else (fields, packages, dangling blocks). Not counted.
    Other,
}

/// A documentation comment located by an external parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocAttachment {
    pub kind: AttachmentKind,
    /// 1-based line where the doc block starts, when known.
    pub line: Option<usize>,
}

impl DocAttachment {
    #[must_use]
    pub const fn new(kind: AttachmentKind) -> Self {
        Self { kind, line: None }
    }

    #[must_use]
    pub const fn at_line(kind: AttachmentKind, line: usize) -> Self {
        Self {
            kind,
            line: Some(line),
        }
    }
}

impl From<AttachmentKind> for DocAttachment {
    fn from(kind: AttachmentKind) -> Self {
        Self::new(kind)
    }
}

/// Source of doc attachments for a file's text.
///
/// Implementations must be pure with respect to `text`: the same input yields
/// the same attachments.
pub trait DocAttachmentExtractor: Send + Sync {
    fn extract(&self, text: &str) -> Vec<DocAttachment>;
}

impl<T: DocAttachmentExtractor + ?Sized> DocAttachmentExtractor for &T {
    fn extract(&self, text: &str) -> Vec<DocAttachment> {
        (**self).extract(text)
    }
}

impl<T: DocAttachmentExtractor + ?Sized> DocAttachmentExtractor for alloc::boxed::Box<T> {
    fn extract(&self, text: &str) -> Vec<DocAttachment> {
        (**self).extract(text)
    }
}

/// Extractor that never finds anything. Used when no parser is available.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDocAttachments;

impl DocAttachmentExtractor for NoDocAttachments {
    fn extract(&self, _text: &str) -> Vec<DocAttachment> {
        Vec::new()
    }
}
