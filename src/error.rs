//! Error types for tyre page generation

use thiserror::Error;

/// Result type for page generation
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Input matched none of the recognised size grammars
    #[error("{}", crate::spec::validation_message())]
    InvalidSizeFormat { input: String },

    /// Bulk input yielded an empty canonical size set
    #[error("No valid tyre sizes found")]
    NoValidSizes,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration file could not be parsed
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),
}
