//! Diagnostic classification labels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// WHO bone-density category derived from a T-score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    Normal,
    Osteopenia,
    Osteoporosis,
}

impl Classification {
    /// All categories, in order of increasing severity.
    pub const ALL: [Classification; 3] = [
        Classification::Normal,
        Classification::Osteopenia,
        Classification::Osteoporosis,
    ];

    /// Returns the label used for storage and statistics buckets.
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Normal => "Normal",
            Classification::Osteopenia => "Osteopenia",
            Classification::Osteoporosis => "Osteoporosis",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Classification {
    type Err = String;

    /// Parses a label case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "Normal" => Ok(Classification::Normal),
            "Osteopenia" => Ok(Classification::Osteopenia),
            "Osteoporosis" => Ok(Classification::Osteoporosis),
            _ => Err(format!(
                "Invalid classification: {}. Must be one of: Normal, Osteopenia, Osteoporosis",
                s
            )),
        }
    }
}

/// Title-cases a classification label: first letter upper, rest lower.
///
/// Used as the bucket key when tallying, so "osteoporosis" and
/// "OSTEOPOROSIS" land in the same bucket. Unrecognised labels are kept
/// (normalised) rather than dropped.
pub fn normalize_label(label: &str) -> String {
    let trimmed = label.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
