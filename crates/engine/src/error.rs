// crates/engine/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Not a regular file: {}", .0.display())]
    NotAFile(PathBuf),

    #[error("Extension '{0}' is not allowed")]
    ExtensionNotAllowed(String),

    #[error("No extension found")]
    NoExtension,

    #[error("Binary content detected in '{}'", .0.display())]
    Binary(PathBuf),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
