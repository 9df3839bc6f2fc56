//! Indexing rules that map a file onto an index entry.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// How a file's index position is derived from the alignment offset.
///
/// Both rules agree when print orders are contiguous; they disagree when the
/// print-order sequence has gaps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlignmentPolicy {
    /// Position = numeric print order minus the first drawing's print order.
    /// Tolerates gaps: a missing page leaves its index entry unused.
    #[default]
    PrintOrder,
    /// Position = position in the file list minus the number of leading
    /// non-drawing files.
    Position,
}

impl AlignmentPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlignmentPolicy::PrintOrder => "print-order",
            AlignmentPolicy::Position => "position",
        }
    }
}

impl fmt::Display for AlignmentPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AlignmentPolicy {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");

        match normalized.as_str() {
            "print-order" | "printorder" => Ok(AlignmentPolicy::PrintOrder),
            "position" => Ok(AlignmentPolicy::Position),
            _ => Err(ModelError::UnknownAlignmentPolicy(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_from_str() {
        assert_eq!(
            "print-order".parse::<AlignmentPolicy>().unwrap(),
            AlignmentPolicy::PrintOrder
        );
        assert_eq!(
            "PRINT_ORDER".parse::<AlignmentPolicy>().unwrap(),
            AlignmentPolicy::PrintOrder
        );
        assert_eq!(
            " Position ".parse::<AlignmentPolicy>().unwrap(),
            AlignmentPolicy::Position
        );
        assert_eq!(
            "offset".parse::<AlignmentPolicy>(),
            Err(ModelError::UnknownAlignmentPolicy("offset".to_string()))
        );
    }

    #[test]
    fn test_default_is_print_order() {
        assert_eq!(AlignmentPolicy::default(), AlignmentPolicy::PrintOrder);
        assert_eq!(AlignmentPolicy::default().to_string(), "print-order");
    }
}
