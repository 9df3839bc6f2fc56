pub mod alignment;
pub mod discipline;
pub mod drawing;
pub mod error;
pub mod processing;

pub use alignment::AlignmentPolicy;
pub use discipline::{DISCIPLINES, Discipline, UNKNOWN_DISCIPLINE, classify_discipline};
pub use drawing::{DecodedFilename, IndexEntry, Mapping};
pub use error::ModelError;
pub use processing::ReconcileResponse;
