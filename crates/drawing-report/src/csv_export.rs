//! CSV export for the drawings database table.
//!
//! Column order and naming follow the `draw` table so the file can be
//! imported directly:
//!
//! | column           | source                                   |
//! |------------------|------------------------------------------|
//! | `NewName`        | mapping new name                         |
//! | `LocationNumber` | location number as an integer            |
//! | `DrawingNumber`  | drawing set number as a float (`101.0`)  |
//! | `ProjectTitle`   | run metadata                             |
//! | `DrawingDate`    | run metadata (year)                      |
//! | `SheetTitle`     | matched index entry                      |
//! | `Keywords`       | run metadata                             |
//! | `SheetNumber`    | matched index entry, not normalized      |
//! | `Discipline`     | discipline name of the sheet number      |
//! | `Notes`          | run metadata, max 500 chars              |
//! | `ContractNumber` | run metadata, max 30 chars               |

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use drawing_model::{Mapping, classify_discipline};

/// Maximum length of the `Notes` column.
pub const NOTES_MAX_CHARS: usize = 500;

/// Maximum length of the `ContractNumber` column.
pub const CONTRACT_NUMBER_MAX_CHARS: usize = 30;

/// Per-run values repeated on every exported row.
#[derive(Debug, Clone, Default)]
pub struct ExportMetadata {
    pub project_title: String,
    pub drawing_date: String,
    pub keywords: String,
    pub notes: String,
    pub contract_number: String,
}

/// One exported row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DrawRecord {
    pub new_name: String,
    pub location_number: String,
    pub drawing_number: String,
    pub project_title: String,
    pub drawing_date: String,
    pub sheet_title: String,
    pub keywords: String,
    pub sheet_number: String,
    pub discipline: String,
    pub notes: String,
    pub contract_number: String,
}

impl DrawRecord {
    pub fn from_mapping(mapping: &Mapping, metadata: &ExportMetadata) -> Self {
        let sheet_number = mapping.sheet_number.clone().unwrap_or_default();
        let discipline = classify_discipline(&sheet_number).name;
        Self {
            new_name: mapping.new_name.clone(),
            location_number: integer_column(&mapping.file.location_number),
            drawing_number: float_column(&mapping.file.drawing_set_number),
            project_title: metadata.project_title.clone(),
            drawing_date: metadata.drawing_date.clone(),
            sheet_title: mapping.sheet_title.clone().unwrap_or_default(),
            keywords: metadata.keywords.clone(),
            sheet_number,
            discipline,
            notes: truncate_chars(&metadata.notes, NOTES_MAX_CHARS),
            contract_number: truncate_chars(&metadata.contract_number, CONTRACT_NUMBER_MAX_CHARS),
        }
    }
}

/// Builds export rows, one per mapping, in mapping order.
pub fn build_records(mappings: &[Mapping], metadata: &ExportMetadata) -> Vec<DrawRecord> {
    mappings
        .iter()
        .map(|mapping| DrawRecord::from_mapping(mapping, metadata))
        .collect()
}

/// Writes the CSV (header included) to any writer.
pub fn write_csv_to<W: Write>(
    writer: W,
    mappings: &[Mapping],
    metadata: &ExportMetadata,
) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in build_records(mappings, metadata) {
        csv_writer
            .serialize(&record)
            .with_context(|| format!("write CSV row for {}", record.new_name))?;
    }
    csv_writer.flush().context("flush CSV output")?;
    Ok(())
}

/// Writes the CSV to `path`, replacing any existing file.
pub fn write_csv(path: &Path, mappings: &[Mapping], metadata: &ExportMetadata) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    write_csv_to(file, mappings, metadata)?;
    info!(path = %path.display(), rows = mappings.len(), "wrote CSV export");
    Ok(())
}

fn integer_column(digits: &str) -> String {
    digits
        .parse::<u64>()
        .map(|value| value.to_string())
        .unwrap_or_else(|_| digits.to_string())
}

fn float_column(digits: &str) -> String {
    match digits.parse::<f64>() {
        Ok(value) if value.is_finite() && value.fract() == 0.0 => format!("{value:.1}"),
        Ok(value) => value.to_string(),
        Err(_) => digits.to_string(),
    }
}

fn truncate_chars(value: &str, max: usize) -> String {
    value.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_column_drops_padding() {
        assert_eq!(integer_column("525"), "525");
        assert_eq!(integer_column("003"), "3");
    }

    #[test]
    fn test_float_column() {
        assert_eq!(float_column("101"), "101.0");
        assert_eq!(float_column("042"), "42.0");
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("C-99887", 30), "C-99887");
        assert_eq!(truncate_chars(&"x".repeat(40), 30).len(), 30);
        assert_eq!(truncate_chars("ééé", 2), "éé");
    }
}
