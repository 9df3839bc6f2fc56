//! Filename decoding.
//!
//! Drawing pages are named `{location}_{drawing set}_{print order}.{ext}`,
//! each locator being three or more digits:
//!
//! - `525_101_006.pdf` -> location `525`, set `101`, print order `006`
//! - `1234_101_006.PDF` -> location `1234`, extension `.PDF`
//!
//! Anything else (cover notes, renamed pages, stray files) is rejected with
//! `None`. Rejection is the normal outcome for non-drawing files.

use drawing_model::DecodedFilename;
use tracing::debug;

const MIN_GROUP_DIGITS: usize = 3;

/// Decodes a filename into its locator fields.
///
/// Returns `None` when the stem is not exactly three underscore-separated
/// groups of at least three ASCII digits, or when the print order does not
/// fit in a `u64`.
pub fn decode_filename(name: &str) -> Option<DecodedFilename> {
    let (stem, extension) = split_extension(name);

    let mut groups = stem.split('_');
    let (Some(location), Some(drawing_set), Some(print_order), None) =
        (groups.next(), groups.next(), groups.next(), groups.next())
    else {
        debug!(filename = name, "rejected: expected three locator groups");
        return None;
    };

    if ![location, drawing_set, print_order]
        .iter()
        .all(|group| is_locator_group(group))
    {
        debug!(filename = name, "rejected: locator groups must be 3+ digits");
        return None;
    }

    let Ok(print_order_value) = print_order.parse::<u64>() else {
        debug!(filename = name, "rejected: print order out of range");
        return None;
    };

    Some(DecodedFilename {
        location_number: location.to_string(),
        drawing_set_number: drawing_set.to_string(),
        print_order: print_order.to_string(),
        print_order_value,
        extension: extension.to_string(),
        original_name: name.to_string(),
    })
}

fn is_locator_group(group: &str) -> bool {
    group.len() >= MIN_GROUP_DIGITS && group.bytes().all(|b| b.is_ascii_digit())
}

/// Splits a filename at its last dot.
///
/// The extension keeps its leading dot. A leading dot (hidden file) or a
/// trailing dot does not start an extension.
fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(dot) if dot > 0 && dot + 1 < name.len() => name.split_at(dot),
        _ => (name, ""),
    }
}
