#![no_std]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

extern crate alloc;

pub mod aggregate;
pub mod attachment;
pub mod classifier;
pub mod grade;
pub mod stats;

pub use aggregate::{analyze, analyze_text, split_lines};
pub use attachment::{AttachmentKind, DocAttachment, DocAttachmentExtractor, NoDocAttachments};
pub use classifier::{LineKind, classify_line};
pub use grade::Grade;
pub use stats::AnalysisResult;
