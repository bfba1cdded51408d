//! Valence labels - the polarity of a statement.

use serde::{Deserialize, Serialize};

/// Polarity label attached to every row.
///
/// Matching is exact and case-sensitive: only the literal `Positive` parses as
/// [`Valence::Positive`]; `positive` or `Positive ` land in [`Valence::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Valence {
    Positive,
    Negative,
    /// Any label the knowledgebase uses besides the two above (e.g. "Neutral").
    Other(String),
}

impl Valence {
    pub const POSITIVE: &'static str = "Positive";
    pub const NEGATIVE: &'static str = "Negative";

    /// Parse a raw `Valence` cell.
    pub fn parse(raw: &str) -> Self {
        match raw {
            Self::POSITIVE => Valence::Positive,
            Self::NEGATIVE => Valence::Negative,
            other => Valence::Other(other.to_string()),
        }
    }

    /// The label as it appears in the CSV.
    pub fn as_str(&self) -> &str {
        match self {
            Valence::Positive => Self::POSITIVE,
            Valence::Negative => Self::NEGATIVE,
            Valence::Other(s) => s,
        }
    }
}

impl std::fmt::Display for Valence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
