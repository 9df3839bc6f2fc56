use std::path::PathBuf;

use serde::Serialize;

use drawing_model::{AlignmentPolicy, DecodedFilename, IndexEntry, Mapping};

/// How the alignment offset was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum OffsetSource {
    /// Given on the command line.
    Manual,
    /// Found by the leading-page search.
    Detected,
    /// No offset: no entries, or the search failed.
    Undetermined,
}

/// Everything computed for one drawing folder.
#[derive(Debug, Serialize)]
pub struct FolderResult {
    pub folder: PathBuf,
    pub recognized: Vec<DecodedFilename>,
    pub unrecognized: Vec<String>,
    /// Document the index text came from, if any.
    pub index_source: Option<PathBuf>,
    #[serde(skip)]
    pub index_text: Option<String>,
    pub index_entries: Vec<IndexEntry>,
    pub policy: AlignmentPolicy,
    pub offset: Option<u64>,
    pub offset_source: OffsetSource,
    pub mappings: Vec<Mapping>,
}

impl FolderResult {
    pub fn rename_count(&self) -> usize {
        self.mappings.iter().filter(|m| m.is_renamed()).count()
    }
}
