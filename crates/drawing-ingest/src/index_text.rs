//! Drawing index text parsing.
//!
//! Index sheets come from different consultants and reach us through PDF
//! text extraction or OCR, so the text is noisy. Each line is either noise
//! (headers, legends, rules), an entry, or something unrecognizable:
//!
//! ```text
//! DRAWING INDEX                  <- noise phrase
//! SHEET NO.    SHEET TITLE       <- noise phrase
//! A-1.01       First Floor Plan  <- entry ("A1.01", "First Floor Plan")
//! A 2.5        Reflected Ceiling <- entry ("A2.5", "Reflected Ceiling")
//! C1.1 Site Plan                 <- dropped, needs a 2+ whitespace column gap
//! ```
//!
//! Entry order is significant: the n-th entry describes the n-th drawing
//! after the alignment offset.

use drawing_model::IndexEntry;
use tracing::{debug, trace};

/// Case-insensitive substrings that mark a line as header, legend or rule.
pub const NOISE_PHRASES: &[&str] = &[
    "drawing index",
    "sheet no",
    "sheet title",
    "abbreviat",
    "symbol",
    "legend",
    "---",
    "===",
    "table of contents",
];

const MAX_DISCIPLINE_LETTERS: usize = 3;
const MIN_COLUMN_GAP: usize = 2;

/// Parses raw index text into ordered entries.
///
/// Blank lines, noise lines and lines that do not fit the entry grammar are
/// skipped. Never fails; text with no entries yields an empty list.
pub fn parse_index_text(text: &str) -> Vec<IndexEntry> {
    let mut entries = Vec::new();
    let mut dropped = 0usize;

    for raw_line in text.split('\n') {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }
        if is_noise_line(line) {
            trace!(line, "skipping noise line");
            continue;
        }
        match parse_index_line(line) {
            Some(entry) => entries.push(entry),
            None => {
                trace!(line, "line does not match entry grammar");
                dropped += 1;
            }
        }
    }

    debug!(entries = entries.len(), dropped, "parsed index text");
    entries
}

fn is_noise_line(line: &str) -> bool {
    let lower = line.to_lowercase();
    NOISE_PHRASES.iter().any(|phrase| lower.contains(phrase))
}

/// Matches a single trimmed line against the entry grammar.
///
/// Grammar: 1-3 ASCII letters, any run of separators from
/// `{whitespace, '-', '.'}`, a number group (digits, optionally followed by
/// repeated `{'.', '-', '_', whitespace}` + digits), a column gap of two or
/// more whitespace characters, then a non-empty title.
///
/// The sheet number is the letters joined directly to the number group;
/// separators between them are dropped, separators inside the number group
/// are kept.
pub fn parse_index_line(line: &str) -> Option<IndexEntry> {
    let line = line.trim_start();

    let letters_end = line
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(line.len());
    if letters_end == 0 || letters_end > MAX_DISCIPLINE_LETTERS {
        return None;
    }
    let (letters, rest) = line.split_at(letters_end);

    let rest = rest.trim_start_matches(|c: char| c.is_whitespace() || c == '-' || c == '.');

    let number_len = number_group_len(rest)?;
    let (numbers, rest) = rest.split_at(number_len);

    let gap = rest.chars().take_while(|c| c.is_whitespace()).count();
    if gap < MIN_COLUMN_GAP {
        return None;
    }
    let title = rest.trim();
    if title.is_empty() {
        return None;
    }

    Some(IndexEntry {
        sheet_number: format!("{letters}{numbers}"),
        sheet_title: title_case(title),
    })
}

/// Byte length of the number group at the start of `text`, or `None` if
/// `text` does not start with a digit.
///
/// A separator only extends the group when a digit follows it, so the
/// group never ends on a separator.
fn number_group_len(text: &str) -> Option<usize> {
    let mut end = digit_run_len(text);
    if end == 0 {
        return None;
    }
    loop {
        let mut chars = text[end..].chars();
        let Some(separator) = chars.next() else {
            break;
        };
        if !is_number_separator(separator) {
            break;
        }
        let after = end + separator.len_utf8();
        let digits = digit_run_len(&text[after..]);
        if digits == 0 {
            break;
        }
        end = after + digits;
    }
    Some(end)
}

fn digit_run_len(text: &str) -> usize {
    text.bytes().take_while(u8::is_ascii_digit).count()
}

fn is_number_separator(c: char) -> bool {
    matches!(c, '.' | '-' | '_') || c.is_whitespace()
}

/// Title-cases text: the first letter of every run of letters is upper-cased
/// and the remaining letters lower-cased, whatever the input casing.
///
/// `"FIRST FLOOR PLAN"` and `"first floor plan"` both become
/// `"First Floor Plan"`.
///
/// Word boundaries are any non-alphabetic character. Uncased alphabetic
/// scripts (CJK, for one) therefore continue a word here.
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            result.push(c);
            in_word = false;
        }
    }
    result
}
