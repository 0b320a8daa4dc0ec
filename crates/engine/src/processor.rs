use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::javadoc::JavaDocExtractor;
use crate::options::DocScan;
use crate::stats::FileReport;
use chrono::Local;
use comment_rate_core::{DocAttachmentExtractor, NoDocAttachments, analyze_text};
use std::path::Path;

/// Bytes inspected for NUL when detecting binary content.
const BINARY_SNIFF_LEN: usize = 8 * 1024;

/// Whether `path` passes the configured extension filter.
#[must_use]
pub fn is_supported(path: &Path, config: &Config) -> bool {
    check_extension(path, config).is_ok()
}

fn check_extension(path: &Path, config: &Config) -> Result<()> {
    if config.allow_ext.is_empty() {
        return Ok(());
    }
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .ok_or(EngineError::NoExtension)?;
    if config
        .allow_ext
        .iter()
        .any(|allowed| allowed.trim_start_matches('.').eq_ignore_ascii_case(ext))
    {
        Ok(())
    } else {
        Err(EngineError::ExtensionNotAllowed(ext.to_string()))
    }
}

/// 抽出器の選択
#[must_use]
pub fn extractor_for(scan: DocScan) -> Box<dyn DocAttachmentExtractor> {
    match scan {
        DocScan::Java => Box::new(JavaDocExtractor),
        DocScan::Disabled => Box::new(NoDocAttachments),
    }
}

/// Read and analyze a single file.
///
/// # Errors
///
/// Returns an error if the path is not a regular file, its extension is not
/// allowed, it cannot be read, or it contains binary content.
pub fn analyze_file(path: &Path, config: &Config) -> Result<FileReport> {
    let meta = std::fs::metadata(path).map_err(|e| EngineError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    if !meta.is_file() {
        return Err(EngineError::NotAFile(path.to_path_buf()));
    }
    check_extension(path, config)?;

    let bytes = std::fs::read(path).map_err(|e| EngineError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    if is_binary(&bytes) {
        return Err(EngineError::Binary(path.to_path_buf()));
    }

    log::debug!("analyzing {} ({} bytes)", path.display(), bytes.len());

    let text = String::from_utf8_lossy(&bytes);
    let extractor = extractor_for(config.doc_scan);
    let result = analyze_text(&text, &extractor);

    log::debug!(
        "{}: {} lines, {} comment lines, rate {:.2}%",
        path.display(),
        result.total_lines(),
        result.comment_lines(),
        result.comment_rate()
    );

    let mut report = FileReport::new(path.to_path_buf(), result);
    report.mtime = meta.modified().ok().map(chrono::DateTime::<Local>::from);
    Ok(report)
}

fn is_binary(input: &[u8]) -> bool {
    let len = input.len().min(BINARY_SNIFF_LEN);
    input[..len].contains(&0)
}
