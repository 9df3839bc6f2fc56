//! Error types for drawing set ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading drawing folders and documents.
///
/// Filenames and index lines that do not parse are not errors; they are
/// reported as rejections by the decoders.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Directory not found or not readable.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Input file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Text Extraction Errors ===
    /// No extractor handles this document type.
    #[error("unsupported document type '{extension}': {path}")]
    UnsupportedDocument { path: PathBuf, extension: String },

    /// External extraction tool is not installed or not on PATH.
    #[error("{tool} is required to extract text from {path}")]
    ToolUnavailable {
        tool: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// External extraction tool ran but failed.
    #[error("{tool} failed on {path}: {message}")]
    ExtractionFailed {
        tool: &'static str,
        path: PathBuf,
        message: String,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
