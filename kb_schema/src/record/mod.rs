//! Row definitions - one record of the knowledgebase CSV.

mod valence;

pub use valence::*;

use serde::{Deserialize, Serialize};

/// Column holding the free-text statement; the grouping key for duplicates.
pub const STATEMENT: &str = "Statement";
/// Column holding the category label.
pub const CATEGORY: &str = "Category";
/// Column holding the emotion label.
pub const EMOTION: &str = "Emotion";
/// Column holding the valence label.
pub const VALENCE: &str = "Valence";

/// Columns every knowledgebase must provide, in their canonical order.
pub const REQUIRED_COLUMNS: [&str; 4] = [STATEMENT, CATEGORY, EMOTION, VALENCE];

/// A single knowledgebase row.
///
/// Values are stored exactly as read; nothing is trimmed or normalized, so a
/// row written back out matches its source cell for cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub statement: String,
    pub category: String,
    pub emotion: String,

    /// Raw valence label. Use [`Row::valence`] for the parsed form.
    pub valence: String,

    /// Columns beyond the required four, in header order.
    pub extra: Vec<(String, String)>,
}

impl Row {
    /// Create a row from the four required fields.
    pub fn new(
        statement: impl Into<String>,
        category: impl Into<String>,
        emotion: impl Into<String>,
        valence: impl Into<String>,
    ) -> Self {
        Self {
            statement: statement.into(),
            category: category.into(),
            emotion: emotion.into(),
            valence: valence.into(),
            extra: Vec::new(),
        }
    }

    /// Add an extra column value. A repeated column replaces the earlier value.
    pub fn with_extra(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(column.into(), value.into());
        self
    }

    /// Parsed valence label.
    pub fn valence(&self) -> Valence {
        Valence::parse(&self.valence)
    }

    /// Look up a value by its CSV column name.
    pub fn get(&self, column: &str) -> Option<&str> {
        match column {
            STATEMENT => Some(&self.statement),
            CATEGORY => Some(&self.category),
            EMOTION => Some(&self.emotion),
            VALENCE => Some(&self.valence),
            _ => self
                .extra
                .iter()
                .find(|(name, _)| name == column)
                .map(|(_, value)| value.as_str()),
        }
    }

    /// Set a value by its CSV column name.
    pub fn set(&mut self, column: String, value: String) {
        match column.as_str() {
            STATEMENT => self.statement = value,
            CATEGORY => self.category = value,
            EMOTION => self.emotion = value,
            VALENCE => self.valence = value,
            _ => {
                if let Some(existing) = self.extra.iter_mut().find(|(name, _)| *name == column) {
                    existing.1 = value;
                } else {
                    self.extra.push((column, value));
                }
            }
        }
    }
}
