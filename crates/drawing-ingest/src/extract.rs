//! Raw text extraction from index documents.
//!
//! Extraction itself is delegated to external tools: `pdftotext` (poppler)
//! for PDFs and `tesseract` for scanned images. Only the first page is
//! read. Plain text documents are passed through unchanged.

use std::path::Path;
use std::process::Command;

use tracing::{debug, info};

use crate::error::{IngestError, Result};

/// Extensions read as plain text.
pub const TEXT_EXTENSIONS: &[&str] = &["txt", "csv"];

/// Extensions sent through OCR.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "tif", "tiff"];

/// Source of raw index text for a document.
pub trait TextExtractor {
    /// Returns the raw text of the first page of `path`.
    fn extract_text(&self, path: &Path) -> Result<String>;
}

/// Extractor backed by the filesystem and command-line tools.
#[derive(Debug, Clone)]
pub struct SystemExtractor {
    pdftotext: String,
    tesseract: String,
}

impl Default for SystemExtractor {
    fn default() -> Self {
        Self {
            pdftotext: "pdftotext".to_string(),
            tesseract: "tesseract".to_string(),
        }
    }
}

impl SystemExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the `pdftotext` executable.
    #[must_use]
    pub fn with_pdftotext(mut self, program: impl Into<String>) -> Self {
        self.pdftotext = program.into();
        self
    }

    /// Override the `tesseract` executable.
    #[must_use]
    pub fn with_tesseract(mut self, program: impl Into<String>) -> Self {
        self.tesseract = program.into();
        self
    }

    fn read_text(path: &Path) -> Result<String> {
        std::fs::read_to_string(path).map_err(|e| IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })
    }

    fn run_pdftotext(&self, path: &Path) -> Result<String> {
        let mut command = Command::new(&self.pdftotext);
        command
            .args(["-f", "1", "-l", "1", "-layout"])
            .arg(path)
            .arg("-");
        run_tool(command, "pdftotext", path)
    }

    fn run_tesseract(&self, path: &Path) -> Result<String> {
        let mut command = Command::new(&self.tesseract);
        command.arg(path).arg("stdout");
        run_tool(command, "tesseract", path)
    }
}

impl TextExtractor for SystemExtractor {
    fn extract_text(&self, path: &Path) -> Result<String> {
        if !path.is_file() {
            return Err(IngestError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();

        let text = if TEXT_EXTENSIONS.contains(&extension.as_str()) {
            Self::read_text(path)?
        } else if extension == "pdf" {
            self.run_pdftotext(path)?
        } else if IMAGE_EXTENSIONS.contains(&extension.as_str()) {
            self.run_tesseract(path)?
        } else {
            return Err(IngestError::UnsupportedDocument {
                path: path.to_path_buf(),
                extension,
            });
        };

        info!(path = %path.display(), chars = text.chars().count(), "extracted index text");
        Ok(text)
    }
}

fn run_tool(mut command: Command, tool: &'static str, path: &Path) -> Result<String> {
    debug!(tool, path = %path.display(), "running extraction tool");
    let output = command.output().map_err(|e| IngestError::ToolUnavailable {
        tool,
        path: path.to_path_buf(),
        source: e,
    })?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(IngestError::ExtractionFailed {
            tool,
            path: path.to_path_buf(),
            message: stderr.trim().to_string(),
        });
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_text_documents_pass_through() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("index.TXT");
        std::fs::write(&path, "A-1.01   Floor Plan\n").unwrap();

        let text = SystemExtractor::new().extract_text(&path).unwrap();
        assert_eq!(text, "A-1.01   Floor Plan\n");
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("index.docx");
        std::fs::write(&path, "binary").unwrap();

        let err = SystemExtractor::new().extract_text(&path).unwrap_err();
        assert!(matches!(err, IngestError::UnsupportedDocument { .. }));
    }

    #[test]
    fn test_missing_tool_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("index.pdf");
        std::fs::write(&path, "%PDF-1.4").unwrap();

        let extractor = SystemExtractor::new().with_pdftotext("definitely-not-a-real-pdftotext");
        let err = extractor.extract_text(&path).unwrap_err();
        assert!(matches!(
            err,
            IngestError::ToolUnavailable {
                tool: "pdftotext",
                ..
            }
        ));
    }

    #[test]
    fn test_images_go_through_ocr() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("index.PNG");
        std::fs::write(&path, "not really a png").unwrap();

        let extractor = SystemExtractor::new().with_tesseract("definitely-not-a-real-tesseract");
        let err = extractor.extract_text(&path).unwrap_err();
        assert!(matches!(
            err,
            IngestError::ToolUnavailable {
                tool: "tesseract",
                ..
            }
        ));
    }

    #[test]
    fn test_missing_document() {
        let dir = TempDir::new().unwrap();
        let err = SystemExtractor::new()
            .extract_text(&dir.path().join("nope.txt"))
            .unwrap_err();
        assert!(matches!(err, IngestError::FileNotFound { .. }));
    }
}
