//! Mapping builder.

use drawing_model::{AlignmentPolicy, DecodedFilename, IndexEntry, Mapping};
use tracing::{debug, info};

use crate::normalize::normalize_sheet_number;

/// Builds the standardized filename for a file and its sheet number.
///
/// `525_101_006.pdf` with sheet `A3.5` becomes `525_101_006_A_3_5.pdf`.
pub fn build_new_filename(file: &DecodedFilename, sheet_number: &str) -> String {
    format!(
        "{}_{}_{}_{}{}",
        file.location_number,
        file.drawing_set_number,
        file.print_order,
        normalize_sheet_number(sheet_number),
        file.extension
    )
}

/// Pairs files with index entries using the print-order rule.
///
/// `first_drawing` is the print order of the file that corresponds to the
/// first entry. See [`build_mappings_with`].
pub fn build_mappings(
    files: &[DecodedFilename],
    entries: &[IndexEntry],
    first_drawing: Option<u64>,
) -> Vec<Mapping> {
    build_mappings_with(files, entries, first_drawing, AlignmentPolicy::PrintOrder)
}

/// Pairs files with index entries.
///
/// Each file gets a key under `policy` (its print order, or its position in
/// `files`) and matches `entries[key - offset]` when the offset is known,
/// `key >= offset`, and the index is in range. Unmatched files keep their
/// original name. Returns exactly one mapping per file, in input order.
pub fn build_mappings_with(
    files: &[DecodedFilename],
    entries: &[IndexEntry],
    offset: Option<u64>,
    policy: AlignmentPolicy,
) -> Vec<Mapping> {
    let keyed = files.iter().enumerate().map(|(position, file)| {
        let key = match policy {
            AlignmentPolicy::PrintOrder => file.print_order_value,
            AlignmentPolicy::Position => position as u64,
        };
        (key, file)
    });
    debug!(policy = %policy, "keying files");
    map_keyed(keyed, entries, offset)
}

/// Pairs files whose keys are already known with index entries.
///
/// Used when positions come from a list that also held names which did not
/// decode: those names still occupy a slot. Mappings follow the input order.
pub fn build_mappings_keyed(
    keyed: &[(u64, DecodedFilename)],
    entries: &[IndexEntry],
    offset: Option<u64>,
) -> Vec<Mapping> {
    map_keyed(keyed.iter().map(|(key, file)| (*key, file)), entries, offset)
}

fn map_keyed<'a>(
    keyed: impl Iterator<Item = (u64, &'a DecodedFilename)>,
    entries: &[IndexEntry],
    offset: Option<u64>,
) -> Vec<Mapping> {
    let mappings: Vec<Mapping> = keyed
        .map(|(key, file)| match entry_for(key, offset, entries) {
            Some(entry) => {
                let new_name = build_new_filename(file, &entry.sheet_number);
                debug!(from = %file.original_name, to = %new_name, "matched index entry");
                Mapping::matched(file.clone(), entry, new_name)
            }
            None => Mapping::unmatched(file.clone()),
        })
        .collect();

    let summary = MappingSummary::from_mappings(&mappings);
    info!(
        offset = ?offset,
        renamed = summary.renamed,
        unchanged = summary.unchanged,
        "built mappings"
    );
    mappings
}

fn entry_for(key: u64, offset: Option<u64>, entries: &[IndexEntry]) -> Option<&IndexEntry> {
    let offset = offset?;
    let index = key.checked_sub(offset)?;
    let index = usize::try_from(index).ok()?;
    entries.get(index)
}

/// Rename counts for a set of mappings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MappingSummary {
    pub total: usize,
    pub renamed: usize,
    pub unchanged: usize,
}

impl MappingSummary {
    pub fn from_mappings(mappings: &[Mapping]) -> Self {
        let renamed = mappings.iter().filter(|m| m.is_renamed()).count();
        Self {
            total: mappings.len(),
            renamed,
            unchanged: mappings.len() - renamed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(order: u64) -> DecodedFilename {
        DecodedFilename {
            location_number: "525".to_string(),
            drawing_set_number: "101".to_string(),
            print_order: format!("{order:03}"),
            print_order_value: order,
            extension: ".pdf".to_string(),
            original_name: format!("525_101_{order:03}.pdf"),
        }
    }

    #[test]
    fn test_build_new_filename() {
        let mut f = file(6);
        assert_eq!(build_new_filename(&f, "A3.5"), "525_101_006_A_3_5.pdf");

        f.location_number = "235".to_string();
        f.drawing_set_number = "108".to_string();
        f.print_order = "074".to_string();
        assert_eq!(build_new_filename(&f, "L2"), "235_108_074_L_2.pdf");
    }

    #[test]
    fn test_entry_for_bounds() {
        let entries = vec![IndexEntry::new("A1", "Plan"), IndexEntry::new("A2", "Plan")];
        assert!(entry_for(5, None, &entries).is_none());
        assert!(entry_for(2, Some(3), &entries).is_none());
        assert_eq!(entry_for(3, Some(3), &entries), Some(&entries[0]));
        assert_eq!(entry_for(4, Some(3), &entries), Some(&entries[1]));
        assert!(entry_for(5, Some(3), &entries).is_none());
    }

    #[test]
    fn test_keyed_mappings_keep_input_order() {
        let entries = vec![IndexEntry::new("A1", "Plan"), IndexEntry::new("A2", "Plan")];
        let keyed = vec![(1, file(3)), (2, file(2)), (4, file(7))];
        let names: Vec<String> = build_mappings_keyed(&keyed, &entries, Some(1))
            .into_iter()
            .map(|m| m.new_name)
            .collect();
        assert_eq!(
            names,
            vec!["525_101_003_A_1.pdf", "525_101_002_A_2.pdf", "525_101_007.pdf"]
        );
    }

    #[test]
    fn test_summary_counts() {
        let entries = vec![IndexEntry::new("A1", "Plan")];
        let mappings = build_mappings(&[file(1), file(2), file(3)], &entries, Some(2));
        assert_eq!(
            MappingSummary::from_mappings(&mappings),
            MappingSummary {
                total: 3,
                renamed: 1,
                unchanged: 2,
            }
        );
    }
}
