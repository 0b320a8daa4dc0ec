// crates/engine/src/javadoc.rs
//! # Javadoc Attachment Scanner
//!
//! Lexical stand-in for a Java parser: finds every `/** ... */` block and
//! tags it by the declaration that follows it.
//!
//! ## Rules
//!
//! After the block closes, blank lines, further comments and annotations
//! (including multi-line annotation arguments) are skipped. The first
//! remaining text is the declaration:
//!
//! | Declaration | Kind |
//! |-------------|------|
//! | `class`, `interface`, `enum`, `record`, `@interface` | `Class` |
//! | `<modifiers/type> name(` | `Method` |
//! | anything else, or end of file | `Other` |
//!
//! Constructors without any modifier (`Foo(int x) {`) are indistinguishable
//! from enum constants with arguments at this level and are tagged `Other`.
//!
//! ## Usage Example
//!
//! ```rust
//! use comment_rate_core::{AttachmentKind, DocAttachmentExtractor};
//! use comment_rate_engine::javadoc::JavaDocExtractor;
//!
//! let text = "/** A widget. */\npublic class Widget {\n    /** Size. */\n    public int size() { return 1; }\n}\n";
//! let kinds: Vec<_> = JavaDocExtractor.extract(text).into_iter().map(|d| d.kind).collect();
//! assert_eq!(kinds, vec![AttachmentKind::Class, AttachmentKind::Method]);
//! ```

use comment_rate_core::{AttachmentKind, DocAttachment, DocAttachmentExtractor};
use regex::Regex;
use std::str::CharIndices;
use std::sync::OnceLock;

const DOC_OPEN: &str = "/**";
const BLOCK_OPEN: &str = "/*";
const BLOCK_CLOSE: &str = "*/";

const CONTROL_KEYWORDS: &[&str] = &[
    "if",
    "for",
    "while",
    "switch",
    "catch",
    "synchronized",
    "return",
    "new",
    "throw",
];

/// Javadoc 用の字句スキャナ
#[derive(Debug, Default, Clone, Copy)]
pub struct JavaDocExtractor;

impl DocAttachmentExtractor for JavaDocExtractor {
    fn extract(&self, text: &str) -> Vec<DocAttachment> {
        let lines: Vec<&str> = text.lines().collect();
        let mut attachments = Vec::new();
        let mut idx = 0;

        while idx < lines.len() {
            let Some(open) = find_doc_open(lines[idx]) else {
                idx += 1;
                continue;
            };
            let start_line = idx + 1;

            let Some((end_idx, rest)) = find_block_end(&lines, idx, open + DOC_OPEN.len()) else {
                // unterminated doc block swallows the rest of the file
                attachments.push(DocAttachment::at_line(AttachmentKind::Other, start_line));
                break;
            };

            let kind = match next_declaration(&lines, end_idx, rest) {
                Some(decl) => classify_declaration(&decl),
                None => AttachmentKind::Other,
            };
            log::trace!("doc block at line {start_line} attached to {kind:?}");
            attachments.push(DocAttachment::at_line(kind, start_line));

            idx = end_idx + 1;
        }

        attachments
    }
}

/// Byte offset of a `/**` opener that is not the empty block `/**/`.
fn find_doc_open(line: &str) -> Option<usize> {
    let trimmed = line.trim_start();
    if trimmed.starts_with("//") {
        return None;
    }
    let pos = line.find(DOC_OPEN)?;
    if line[pos + DOC_OPEN.len()..].starts_with('/') {
        return None;
    }
    Some(pos)
}

/// Locate the `*/` closing a block whose body starts at `from` on line `idx`.
/// Returns the closing line index and the text after the delimiter.
fn find_block_end<'a>(lines: &[&'a str], idx: usize, from: usize) -> Option<(usize, &'a str)> {
    if let Some(pos) = lines[idx][from..].find(BLOCK_CLOSE) {
        let end = from + pos + BLOCK_CLOSE.len();
        return Some((idx, &lines[idx][end..]));
    }
    find_close_from(lines, idx + 1)
}

fn find_close_from<'a>(lines: &[&'a str], start: usize) -> Option<(usize, &'a str)> {
    lines
        .iter()
        .enumerate()
        .skip(start)
        .find_map(|(i, line)| {
            line.find(BLOCK_CLOSE)
                .map(|pos| (i, &line[pos + BLOCK_CLOSE.len()..]))
        })
}

/// First declaration text after a doc block closing on line `end_idx`.
fn next_declaration(lines: &[&str], end_idx: usize, rest: &str) -> Option<String> {
    let mut pending: Option<&str> = Some(rest);
    let mut idx = end_idx;
    let mut annotation_depth: u32 = 0;

    loop {
        let current = match pending.take() {
            Some(text) => text,
            None => {
                idx += 1;
                *lines.get(idx)?
            }
        };
        let text = current.trim();

        if annotation_depth > 0 {
            match close_parens(text, annotation_depth) {
                Parens::Closed(end) => {
                    annotation_depth = 0;
                    pending = Some(&text[end..]);
                }
                Parens::Open(depth) => annotation_depth = depth,
            }
            continue;
        }

        if text.is_empty() || text.starts_with("//") {
            continue;
        }

        if let Some(after_open) = text.strip_prefix(BLOCK_OPEN) {
            if let Some(pos) = after_open.find(BLOCK_CLOSE) {
                pending = Some(&after_open[pos + BLOCK_CLOSE.len()..]);
            } else {
                let (close_idx, after) = find_close_from(lines, idx + 1)?;
                idx = close_idx;
                pending = Some(after);
            }
            continue;
        }

        match strip_annotations(text) {
            Annotations::Open(depth) => annotation_depth = depth,
            Annotations::Rest(decl) if decl.len() != text.len() => pending = Some(decl),
            Annotations::Rest(decl) => return Some(decl.to_string()),
        }
    }
}

/// Outcome of scanning an argument list for its balancing `)`.
#[derive(Debug, PartialEq, Eq)]
enum Parens {
    /// Byte offset just past the balancing `)`.
    Closed(usize),
    /// Still open at the end of the text, this many levels deep.
    Open(u32),
}

/// Scan `text`, which starts `depth` parentheses deep, for the `)` that
/// brings the depth to zero. Parentheses inside string and char literals
/// are ignored.
fn close_parens(text: &str, mut depth: u32) -> Parens {
    let mut chars = text.char_indices();
    while let Some((i, c)) = chars.next() {
        match c {
            '"' | '\'' => skip_literal(&mut chars, c),
            '(' => depth += 1,
            ')' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Parens::Closed(i + 1);
                }
            }
            _ => {}
        }
    }
    Parens::Open(depth)
}

fn skip_literal(chars: &mut CharIndices<'_>, quote: char) {
    while let Some((_, c)) = chars.next() {
        if c == '\\' {
            chars.next();
        } else if c == quote {
            return;
        }
    }
}

/// Leading annotations of a declaration line.
#[derive(Debug, PartialEq, Eq)]
enum Annotations<'a> {
    /// Text after the annotations (the whole line when there are none).
    Rest(&'a str),
    /// An argument list runs past the end of the line.
    Open(u32),
}

/// Strip leading annotations other than `@interface`.
fn strip_annotations(text: &str) -> Annotations<'_> {
    static NAME_RE: OnceLock<Regex> = OnceLock::new();
    let name_re = NAME_RE.get_or_init(|| {
        Regex::new(r"^@[A-Za-z_$][\w$.]*\s*").expect("annotation pattern is valid")
    });

    let mut rest = text;
    loop {
        if rest.starts_with("@interface") {
            return Annotations::Rest(rest);
        }
        let Some(name) = name_re.find(rest) else {
            return Annotations::Rest(rest);
        };
        rest = &rest[name.end()..];

        if let Some(args) = rest.strip_prefix('(') {
            match close_parens(args, 1) {
                Parens::Closed(end) => rest = args[end..].trim_start(),
                Parens::Open(depth) => return Annotations::Open(depth),
            }
        }
    }
}

fn classify_declaration(decl: &str) -> AttachmentKind {
    static CLASS_RE: OnceLock<Regex> = OnceLock::new();
    static METHOD_RE: OnceLock<Regex> = OnceLock::new();

    let class_re = CLASS_RE.get_or_init(|| {
        Regex::new(r"(?:^|\s)(?:class|interface|enum|record|@interface)\s+[A-Za-z_$]")
            .expect("class pattern is valid")
    });
    if class_re.is_match(decl) {
        return AttachmentKind::Class;
    }

    let method_re = METHOD_RE.get_or_init(|| {
        Regex::new(r"^((?:[\w$<>\[\]?,.&]+\s+)+)([A-Za-z_$][\w$]*)\s*\(")
            .expect("method pattern is valid")
    });
    let Some(caps) = method_re.captures(decl) else {
        return AttachmentKind::Other;
    };

    let prefix = caps.get(1).map_or("", |m| m.as_str());
    let name = caps.get(2).map_or("", |m| m.as_str());
    let is_control = |word: &str| CONTROL_KEYWORDS.contains(&word);

    if is_control(name) || prefix.split_whitespace().any(is_control) {
        return AttachmentKind::Other;
    }
    AttachmentKind::Method
}
