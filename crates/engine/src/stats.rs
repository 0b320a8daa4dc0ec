use chrono::{DateTime, Local};
use comment_rate_core::{AnalysisResult, Grade};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Analysis of one file together with the file metadata it was read from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub name: String,
    pub ext: String,
    pub mtime: Option<DateTime<Local>>,
    pub result: AnalysisResult,
}

impl FileReport {
    pub fn new(path: PathBuf, result: AnalysisResult) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_string())
            .unwrap_or_default();

        Self {
            path,
            name,
            ext,
            mtime: None,
            result,
        }
    }

    #[must_use]
    pub fn grade(&self) -> Grade {
        self.result.grade()
    }

    /// `true` when a `--fail-under` threshold is set and the rate is below it.
    #[must_use]
    pub fn below_threshold(&self, threshold: Option<f64>) -> bool {
        threshold.is_some_and(|t| self.result.comment_rate() < t)
    }
}
