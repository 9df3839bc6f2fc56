//! Core records that flow through a reconciliation run.
//!
//! A run starts from raw filenames and raw index text and ends with one
//! [`Mapping`] per recognized file. All records are plain values; nothing
//! here performs I/O.

use serde::{Deserialize, Serialize};

/// One physical drawing file, identified by its locator fields.
///
/// Only the filename decoder constructs these, so the digit fields always
/// hold three or more ASCII digits and `print_order_value` always agrees
/// with `print_order`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedFilename {
    /// Location (building) number, zero padding preserved.
    pub location_number: String,
    /// Drawing set number, zero padding preserved.
    pub drawing_set_number: String,
    /// Position of the page within the set, zero padding preserved.
    pub print_order: String,
    /// Numeric value of `print_order`, used as the sequencing key.
    pub print_order_value: u64,
    /// Extension including the leading dot, case preserved. Empty when the
    /// filename has none.
    pub extension: String,
    /// The untouched input filename.
    pub original_name: String,
}

/// One parsed line of a drawing index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndexEntry {
    /// Discipline letters joined to the raw number text, e.g. `A1.01`.
    /// Not normalized.
    pub sheet_number: String,
    /// Title-cased sheet title.
    pub sheet_title: String,
}

impl IndexEntry {
    pub fn new(sheet_number: impl Into<String>, sheet_title: impl Into<String>) -> Self {
        Self {
            sheet_number: sheet_number.into(),
            sheet_title: sheet_title.into(),
        }
    }
}

/// Output record for one file.
///
/// `new_name == file.original_name` exactly when no index entry matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mapping {
    #[serde(flatten)]
    pub file: DecodedFilename,
    /// Raw sheet number of the matched entry.
    pub sheet_number: Option<String>,
    /// Title of the matched entry.
    pub sheet_title: Option<String>,
    pub new_name: String,
}

impl Mapping {
    /// A mapping for a file with no matching index entry.
    pub fn unmatched(file: DecodedFilename) -> Self {
        let new_name = file.original_name.clone();
        Self {
            file,
            sheet_number: None,
            sheet_title: None,
            new_name,
        }
    }

    /// A mapping for a file matched to `entry` under `new_name`.
    pub fn matched(file: DecodedFilename, entry: &IndexEntry, new_name: String) -> Self {
        Self {
            file,
            sheet_number: Some(entry.sheet_number.clone()),
            sheet_title: Some(entry.sheet_title.clone()),
            new_name,
        }
    }

    pub fn original_name(&self) -> &str {
        &self.file.original_name
    }

    /// Returns true if the file would be renamed.
    pub fn is_renamed(&self) -> bool {
        self.new_name != self.file.original_name
    }
}
