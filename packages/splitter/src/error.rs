//! Error types for the splitter.
//!
//! A single `SplitterError` covers every failure a library consumer can see.
//! Per-document conditions (`InvalidName`, `MissingSource`) are recoverable:
//! the pipeline records them and moves on to the next document.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the splitter library.
#[derive(Debug, Error)]
pub enum SplitterError {
    /// Document name contains characters outside `[a-zA-Z0-9_-]`.
    #[error("Invalid document name: '{0}'. Only alphanumeric characters, underscore and hyphen are allowed")]
    InvalidName(String),

    /// Source Markdown for a document has not been fetched yet.
    #[error("Source file not found: {}. Run the update command first", .0.display())]
    MissingSource(PathBuf),

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a status the fetcher does not handle.
    #[error("Unexpected HTTP status {status} for {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// All retry attempts exhausted.
    #[error("Request failed after {attempts} attempts: {message}")]
    RetriesExhausted { attempts: u32, message: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Sources file could not be parsed.
    #[error("YAML parsing failed: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// Sources file parsed but its content is unusable.
    #[error("Invalid sources file: {0}")]
    InvalidSources(String),

    /// Template does not contain the sidebar marker.
    #[error("Template {} does not contain marker '{marker}'", .path.display())]
    TemplateMarkerMissing { path: PathBuf, marker: String },
}

/// Result type alias for splitter operations.
pub type Result<T> = std::result::Result<T, SplitterError>;
