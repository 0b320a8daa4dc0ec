// crates/engine/src/config.rs
use crate::error::{EngineError, Result};
use crate::options::{DocScan, OutputFormat};
use derive_builder::Builder;
use std::path::PathBuf;

/// Extensions analyzed when none are configured explicitly.
pub const DEFAULT_EXTENSIONS: &[&str] = &["java"];

#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct Config {
    #[builder(default)]
    pub path: PathBuf,
    /// Allowed extensions, compared case-insensitively. Empty allows every file.
    #[builder(default = "default_extensions()")]
    pub allow_ext: Vec<String>,
    #[builder(default)]
    pub doc_scan: DocScan,

    #[builder(default = "OutputFormat::Table")]
    pub format: OutputFormat,
    /// Fail the run when the comment rate is below this percentage.
    #[builder(default)]
    pub fail_under: Option<f64>,
}

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|e| (*e).to_string()).collect()
}

impl ConfigBuilder {
    fn validate(&self) -> std::result::Result<(), String> {
        if let Some(Some(threshold)) = self.fail_under
            && !(0.0..=100.0).contains(&threshold)
        {
            return Err(format!(
                "fail-under must be between 0 and 100, got {threshold}"
            ));
        }
        Ok(())
    }
}

impl Config {
    /// Build a config through the builder, mapping builder errors into
    /// [`EngineError::Config`].
    ///
    /// # Errors
    ///
    /// Returns an error if the builder rejects the supplied values.
    pub fn try_from_builder(builder: &ConfigBuilder) -> Result<Self> {
        builder
            .build()
            .map_err(|e| EngineError::Config(e.to_string()))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: PathBuf::new(),
            allow_ext: default_extensions(),
            doc_scan: DocScan::default(),
            format: OutputFormat::Table,
            fail_under: None,
        }
    }
}
