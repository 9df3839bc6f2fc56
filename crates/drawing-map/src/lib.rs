//! Reconciliation of drawing files against a parsed drawing index.
//!
//! The pieces run in order: [`detect_alignment_offset`] finds where the
//! drawings start in the file sequence, then [`build_mappings`] pairs each
//! file with its index entry and derives the new filename using
//! [`normalize_sheet_number`]. Everything here is a pure function.

#![deny(unsafe_code)]

pub mod align;
pub mod engine;
pub mod normalize;

pub use align::{
    MAX_LEADING_PAGES, detect_alignment_offset, detect_leading_count, detect_offset_for,
};
pub use engine::{
    MappingSummary, build_mappings, build_mappings_keyed, build_mappings_with, build_new_filename,
};
pub use normalize::{normalize_sheet_number, sheet_number_tokens};
