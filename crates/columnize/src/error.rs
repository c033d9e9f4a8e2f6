//! Error types for loading, importing and exporting tables.
//!
//! Rendering itself never fails; these errors come from the I/O, parsing and
//! text-encoding layers around it.

use std::path::PathBuf;

/// Error type for everything outside the renderer.
#[derive(Debug, thiserror::Error)]
pub enum ColumnizeError {
    /// I/O error while reading a config or data file.
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing or writing failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON parsing or serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing or serialization failed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Input bytes were not valid in the named encoding.
    #[error("input is not valid {encoding}")]
    Decode { encoding: &'static str },

    /// Text contains characters the named encoding cannot represent.
    #[error("text cannot be represented in {encoding}")]
    Encode { encoding: &'static str },

    /// Template rendering failed.
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
}

impl ColumnizeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ColumnizeError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<csv::IntoInnerError<csv::Writer<Vec<u8>>>> for ColumnizeError {
    fn from(err: csv::IntoInnerError<csv::Writer<Vec<u8>>>) -> Self {
        ColumnizeError::Csv(csv::Error::from(err.into_error()))
    }
}
