//! Sheet-number normalization.
//!
//! Consultants write the same sheet many ways (`A3.5`, `A-3.5`, `a 3_5`).
//! The canonical form splits the designator into letter runs and digit runs
//! and joins them with underscores:
//!
//! | input    | canonical |
//! |----------|-----------|
//! | `A3.5`   | `A_3_5`   |
//! | `A-2.05` | `A_2_05`  |
//! | `L2`     | `L_2`     |
//! | `FP1.01` | `FP_1_01` |
//! | `A 2_5`  | `A_2_5`   |

/// Splits a sheet designator into maximal ASCII letter runs and digit runs.
///
/// Every other character is a boundary and is discarded. Letter runs are
/// upper-cased; digit runs are kept as written, leading zeros included.
pub fn sheet_number_tokens(raw: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut current_is_alpha = false;

    for c in raw.chars() {
        let is_alpha = c.is_ascii_alphabetic();
        if !is_alpha && !c.is_ascii_digit() {
            if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
            continue;
        }
        if !current.is_empty() && is_alpha != current_is_alpha {
            tokens.push(std::mem::take(&mut current));
        }
        current_is_alpha = is_alpha;
        current.push(c.to_ascii_uppercase());
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

/// Canonicalizes a sheet designator into underscore-joined tokens.
///
/// Total: input without letters or digits normalizes to an empty string.
pub fn normalize_sheet_number(raw: &str) -> String {
    sheet_number_tokens(raw).join("_")
}
