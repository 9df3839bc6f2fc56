use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown alignment policy: {0}")]
    UnknownAlignmentPolicy(String),
}
