//! Discipline lookup for sheet numbers.
//!
//! A sheet number's discipline is encoded by its leading letters
//! (`A` Architectural, `FP` Fire Protection, ...). Multi-letter codes are
//! whole entries in the table, not combinations of single letters.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// Name reported for codes missing from the table and for sheet numbers
/// without leading letters.
pub const UNKNOWN_DISCIPLINE: &str = "Unknown";

/// Known discipline codes and their display names.
pub static DISCIPLINES: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    BTreeMap::from([
        ("A", "Architectural"),
        ("AD", "Architectural Demo"),
        ("C", "Civil"),
        ("D", "Demolition"),
        ("E", "Electrical"),
        ("EL", "Electrical"),
        ("F", "Fire Protection"),
        ("FP", "Fire Protection"),
        ("G", "General"),
        ("H", "Hazardous Materials"),
        ("I", "Interiors"),
        ("ID", "Interior Design"),
        ("IR", "Irrigation"),
        ("L", "Landscape"),
        ("M", "Mechanical"),
        ("P", "Plumbing"),
        ("S", "Structural"),
        ("T", "Telecommunications"),
        ("X", "Other"),
    ])
});

/// Discipline code and name derived from a sheet number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discipline {
    /// Upper-cased leading letters; empty when there are none.
    pub code: String,
    pub name: String,
}

impl Discipline {
    pub fn is_known(&self) -> bool {
        self.name != UNKNOWN_DISCIPLINE
    }
}

/// Classifies a sheet number by its leading run of ASCII letters.
///
/// Letters after the first non-letter are ignored. Codes not in
/// [`DISCIPLINES`] keep their code and are named [`UNKNOWN_DISCIPLINE`].
pub fn classify_discipline(sheet_number: &str) -> Discipline {
    let code: String = sheet_number
        .chars()
        .take_while(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect();
    let name = DISCIPLINES
        .get(code.as_str())
        .copied()
        .unwrap_or(UNKNOWN_DISCIPLINE)
        .to_string();
    Discipline { code, name }
}
