//! Error types for catalog ingestion.

use std::path::PathBuf;

use iia_model::MalformedRecordError;
use thiserror::Error;

/// Errors that can occur while loading a catalog.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IngestError {
    // === File System Errors ===
    /// Catalog directory not found.
    #[error("catalog directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Catalog file not found.
    #[error("catalog file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Parsing Errors ===
    /// Failed to read a CSV record.
    #[error("failed to read CSV {file}: {source}")]
    CsvRead {
        file: String,
        #[source]
        source: csv::Error,
    },

    /// Rule book is not valid TOML or does not match the expected shape.
    #[error("failed to parse rule book {file}: {source}")]
    RuleBook {
        file: String,
        #[source]
        source: toml::de::Error,
    },

    // === Catalog Errors ===
    /// A record was rejected by the catalog.
    #[error("malformed record in {file}: {source}")]
    Malformed {
        file: String,
        #[source]
        source: MalformedRecordError,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
