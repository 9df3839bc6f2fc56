use serde::{Deserialize, Serialize};

use crate::drawing::{IndexEntry, Mapping};

/// Result of reconciling an uploaded filename list against an index
/// document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconcileResponse {
    pub success: bool,
    pub mappings: Vec<Mapping>,
    pub index_entries: Vec<IndexEntry>,
    /// Number of filenames read from the list, recognized or not.
    pub file_list_count: usize,
    pub index_entries_count: usize,
}
