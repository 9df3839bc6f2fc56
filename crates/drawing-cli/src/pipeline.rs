//! Pipeline stages shared by the CLI commands.
//!
//! Each stage is a plain function over the library crates so it can be
//! driven from tests with a fake [`TextExtractor`].

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{info, info_span, warn};

use drawing_ingest::{
    FolderScan, TextExtractor, decode_file_list, decode_list_positions, find_index_page,
    parse_index_text, read_file_list, scan_folder,
};
use drawing_map::{build_mappings_keyed, build_mappings_with, detect_offset_for};
use drawing_model::{AlignmentPolicy, DecodedFilename, IndexEntry, ReconcileResponse};

use crate::types::{FolderResult, OffsetSource};

/// Inputs for processing one drawing folder.
#[derive(Debug, Clone)]
pub struct FolderRequest {
    pub folder: PathBuf,
    pub index_page: u64,
    pub index_file: Option<PathBuf>,
    pub first_drawing: Option<u64>,
    pub policy: AlignmentPolicy,
}

/// Scans a folder, reads its index and computes the mappings.
///
/// A missing or unreadable index is not an error: every file then keeps
/// its original name.
pub fn run_folder(request: &FolderRequest, extractor: &impl TextExtractor) -> Result<FolderResult> {
    let span = info_span!("folder", folder = %request.folder.display());
    let _guard = span.enter();

    let scan = scan_folder(&request.folder)
        .with_context(|| format!("scan {}", request.folder.display()))?;
    if scan.is_empty() {
        bail!(
            "no drawing files matching {{locnum}}_{{drawset}}_{{sequence}}.pdf in {}",
            request.folder.display()
        );
    }
    let FolderScan {
        recognized,
        unrecognized,
    } = scan;
    for name in &unrecognized {
        warn!(file = %name, "filename does not match the drawing pattern");
    }

    let index_source = index_source(request, &recognized);
    let index_text = index_source
        .as_deref()
        .and_then(|path| read_index_text(path, extractor));
    let index_entries = index_text
        .as_deref()
        .map(parse_index_text)
        .unwrap_or_default();
    info!(entries = index_entries.len(), "parsed index");

    let (offset, offset_source) = resolve_offset(
        request.first_drawing,
        request.policy,
        &recognized,
        &index_entries,
    );
    let mappings = build_mappings_with(&recognized, &index_entries, offset, request.policy);

    Ok(FolderResult {
        folder: request.folder.clone(),
        recognized,
        unrecognized,
        index_source,
        index_text,
        index_entries,
        policy: request.policy,
        offset,
        offset_source,
        mappings,
    })
}

fn index_source(request: &FolderRequest, files: &[DecodedFilename]) -> Option<PathBuf> {
    if let Some(path) = &request.index_file {
        return Some(path.clone());
    }
    match find_index_page(files, request.index_page) {
        Some(file) => Some(request.folder.join(&file.original_name)),
        None => {
            warn!(page = request.index_page, "no file with the index page print order");
            None
        }
    }
}

fn read_index_text(path: &Path, extractor: &impl TextExtractor) -> Option<String> {
    match extractor.extract_text(path) {
        Ok(text) => Some(text),
        Err(error) => {
            warn!(path = %path.display(), %error, "could not extract index text");
            None
        }
    }
}

/// Picks the manual offset when given, otherwise the detected one.
pub fn resolve_offset(
    manual: Option<u64>,
    policy: AlignmentPolicy,
    files: &[DecodedFilename],
    entries: &[IndexEntry],
) -> (Option<u64>, OffsetSource) {
    if let Some(offset) = manual {
        return (Some(offset), OffsetSource::Manual);
    }
    match detect_offset_for(policy, files, entries) {
        Some(offset) => (Some(offset), OffsetSource::Detected),
        None => {
            if !entries.is_empty() {
                warn!(
                    files = files.len(),
                    entries = entries.len(),
                    "could not auto-detect the first drawing; pass --first-drawing"
                );
            }
            (None, OffsetSource::Undetermined)
        }
    }
}

/// Reconciles a filename list document against an index document.
///
/// Under [`AlignmentPolicy::Position`] a file's key is its line in the list
/// as given: names that do not decode still take a slot and the list is not
/// reordered. Under [`AlignmentPolicy::PrintOrder`] files are sorted by
/// print order.
pub fn reconcile_documents(
    index: &Path,
    files: &Path,
    first_drawing: u64,
    policy: AlignmentPolicy,
    extractor: &impl TextExtractor,
) -> Result<ReconcileResponse> {
    let span = info_span!("reconcile", index = %index.display(), files = %files.display());
    let _guard = span.enter();

    let text = extractor
        .extract_text(index)
        .with_context(|| format!("read {}", index.display()))?;
    if text.trim().is_empty() {
        bail!("could not extract text from drawing list");
    }
    let index_entries = parse_index_text(&text);
    if index_entries.is_empty() {
        bail!("could not parse any sheet entries from drawing list");
    }

    let names = read_file_list(files).with_context(|| format!("read {}", files.display()))?;
    let scan = decode_file_list(&names);
    for name in &scan.unrecognized {
        warn!(file = %name, "filename does not match the drawing pattern");
    }
    if scan.is_empty() {
        bail!("could not parse any filenames from file list");
    }

    let offset = Some(first_drawing);
    let mappings = match policy {
        AlignmentPolicy::Position => {
            build_mappings_keyed(&decode_list_positions(&names), &index_entries, offset)
        }
        AlignmentPolicy::PrintOrder => {
            build_mappings_with(&scan.recognized, &index_entries, offset, policy)
        }
    };
    Ok(ReconcileResponse {
        success: true,
        file_list_count: names.len(),
        index_entries_count: index_entries.len(),
        mappings,
        index_entries,
    })
}
