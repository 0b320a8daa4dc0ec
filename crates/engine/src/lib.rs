// crates/engine/src/lib.rs
pub mod config;
pub mod error;
pub mod javadoc;
pub mod options;
pub mod processor;
pub mod stats;

use crate::config::Config;
use crate::error::Result;
use crate::stats::FileReport;

/// Analyze the file named by `config.path`.
///
/// # Errors
///
/// Returns an error if the file is rejected or cannot be read; see
/// [`processor::analyze_file`].
pub fn run(config: &Config) -> Result<FileReport> {
    processor::analyze_file(&config.path, config)
}
