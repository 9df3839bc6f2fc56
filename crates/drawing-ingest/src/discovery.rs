//! Drawing file discovery.

use std::path::Path;

use drawing_model::DecodedFilename;
use tracing::{debug, info};

use crate::error::{IngestError, Result};
use crate::filename::decode_filename;

/// Extensions of files considered drawing pages during a folder scan.
pub const DRAWING_EXTENSIONS: &[&str] = &["pdf"];

/// Print order of the page that usually carries the drawing index
/// (cover sheet first, index second).
pub const DEFAULT_INDEX_PAGE: u64 = 2;

/// Files found in a folder or file list, split by whether they decode.
#[derive(Debug, Clone, Default)]
pub struct FolderScan {
    /// Decoded files, ascending by numeric print order.
    pub recognized: Vec<DecodedFilename>,
    /// Names that did not decode, in listing order.
    pub unrecognized: Vec<String>,
}

impl FolderScan {
    pub fn is_empty(&self) -> bool {
        self.recognized.is_empty()
    }
}

/// Scans a directory for drawing pages.
///
/// Only regular files with a drawing extension (case-insensitive) are
/// considered; everything else is ignored entirely. Files are listed by
/// filename, decoded, and recognized files are then stably sorted by
/// numeric print order.
pub fn scan_folder(dir: &Path) -> Result<FolderScan> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut names = Vec::new();

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();

        // Skip directories
        if !path.is_file() {
            continue;
        }

        let is_drawing = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                DRAWING_EXTENSIONS
                    .iter()
                    .any(|allowed| ext.eq_ignore_ascii_case(allowed))
            })
            .unwrap_or(false);
        if !is_drawing {
            continue;
        }

        match path.file_name().and_then(|name| name.to_str()) {
            Some(name) => names.push(name.to_string()),
            None => debug!(path = %path.display(), "skipping non UTF-8 filename"),
        }
    }

    names.sort();

    let scan = decode_file_list(&names);
    info!(
        dir = %dir.display(),
        recognized = scan.recognized.len(),
        unrecognized = scan.unrecognized.len(),
        "scanned drawing folder"
    );
    Ok(scan)
}

/// Decodes an in-memory list of filenames.
///
/// Unlike [`scan_folder`] no extension filter is applied; the list is
/// assumed to name drawing pages already.
pub fn decode_file_list<S: AsRef<str>>(names: &[S]) -> FolderScan {
    let mut scan = FolderScan::default();
    for name in names {
        let name = name.as_ref();
        match decode_filename(name) {
            Some(decoded) => scan.recognized.push(decoded),
            None => scan.unrecognized.push(name.to_string()),
        }
    }
    scan.recognized.sort_by_key(|file| file.print_order_value);
    scan
}

/// Decodes an in-memory list of filenames, keeping list order.
///
/// Each recognized name is paired with its zero-based position in `names`.
/// Names that do not decode are dropped but still use up their position.
pub fn decode_list_positions<S: AsRef<str>>(names: &[S]) -> Vec<(u64, DecodedFilename)> {
    names
        .iter()
        .enumerate()
        .filter_map(|(position, name)| {
            decode_filename(name.as_ref()).map(|decoded| (position as u64, decoded))
        })
        .collect()
}

/// Parses a filename list document: one name per line, blank lines and
/// `#` comments skipped.
pub fn parse_file_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Reads and parses a filename list document.
pub fn read_file_list(path: &Path) -> Result<Vec<String>> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let text = std::fs::read_to_string(path).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(parse_file_list(&text))
}

/// Finds the file whose numeric print order is `page`.
pub fn find_index_page(files: &[DecodedFilename], page: u64) -> Option<&DecodedFilename> {
    files.iter().find(|file| file.print_order_value == page)
}
