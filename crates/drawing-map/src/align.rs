//! Alignment of the file sequence with the index sequence.
//!
//! A drawing set usually opens with a few pages that are not drawings
//! (cover sheet, the index page itself, a legend). Their count is inferred
//! by one rule: the smallest leading count `k` in `0..MAX_LEADING_PAGES`
//! such that the files left after skipping `k` pages are exactly as many
//! as the index entries. No other evidence is weighed.

use drawing_model::{AlignmentPolicy, DecodedFilename, IndexEntry};
use tracing::debug;

/// Number of leading non-drawing pages tried (`k = 0..=5`).
pub const MAX_LEADING_PAGES: usize = 6;

/// Finds the number of leading non-drawing files.
///
/// `files` must be ascending by print order. Returns `None` when there are
/// no entries or no `k` below [`MAX_LEADING_PAGES`] (and below the file
/// count) balances the two sequences.
pub fn detect_leading_count(files: &[DecodedFilename], entries: &[IndexEntry]) -> Option<usize> {
    if entries.is_empty() {
        return None;
    }
    let limit = MAX_LEADING_PAGES.min(files.len());
    let found = (0..limit).find(|&k| files.len() - k == entries.len());
    debug!(
        files = files.len(),
        entries = entries.len(),
        leading = ?found,
        "alignment search"
    );
    found
}

/// Print order of the first file that corresponds to the first index entry.
///
/// With 10 files printed `001..=010` and 8 entries this is `3`.
pub fn detect_alignment_offset(files: &[DecodedFilename], entries: &[IndexEntry]) -> Option<u64> {
    detect_leading_count(files, entries).map(|k| files[k].print_order_value)
}

/// Detected offset expressed in the key space of `policy`: a print order
/// for [`AlignmentPolicy::PrintOrder`], a list position for
/// [`AlignmentPolicy::Position`].
pub fn detect_offset_for(
    policy: AlignmentPolicy,
    files: &[DecodedFilename],
    entries: &[IndexEntry],
) -> Option<u64> {
    match policy {
        AlignmentPolicy::PrintOrder => detect_alignment_offset(files, entries),
        AlignmentPolicy::Position => detect_leading_count(files, entries).map(|k| k as u64),
    }
}
