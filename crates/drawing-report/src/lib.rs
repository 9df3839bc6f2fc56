//! Drawing set output generation.
//!
//! - **CSV**: rows for import into the drawings database table
//! - **Renames**: applying computed filenames inside the drawing folder

mod csv_export;
mod rename;

pub use csv_export::{
    CONTRACT_NUMBER_MAX_CHARS, DrawRecord, ExportMetadata, NOTES_MAX_CHARS, build_records,
    write_csv, write_csv_to,
};
pub use rename::{RenameReport, apply_renames};
