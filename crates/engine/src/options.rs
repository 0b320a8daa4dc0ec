use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
    Md,
}

/// Which doc attachment extractor to run over the file text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocScan {
    /// Lexical Javadoc scanner.
    #[default]
    Java,
    /// Skip doc attachment extraction; method and class counts stay at zero.
    Disabled,
}
