//! Duplicate Checker - groups rows by statement text and reports statements
//! that appear more than once.
//!
//! Rows sharing a statement may legitimately carry different emotions, but
//! they are expected to share one category. A group whose categories are not
//! all equal to the first one recorded is reported as a mismatch.

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

use kb_schema::Row;

use crate::export::to_spaced_json;

/// Every category and emotion recorded for one statement, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementGroup {
    pub statement: String,
    pub categories: Vec<String>,
    pub emotions: Vec<String>,
}

impl StatementGroup {
    fn new(statement: impl Into<String>) -> Self {
        Self {
            statement: statement.into(),
            categories: Vec::new(),
            emotions: Vec::new(),
        }
    }

    fn record(&mut self, row: &Row) {
        self.categories.push(row.category.clone());
        self.emotions.push(row.emotion.clone());
    }

    /// Number of rows carrying this statement.
    pub fn occurrences(&self) -> usize {
        self.emotions.len()
    }

    pub fn is_duplicate(&self) -> bool {
        self.occurrences() > 1
    }

    /// Whether any recorded category differs from the first one.
    pub fn has_category_mismatch(&self) -> bool {
        match self.categories.split_first() {
            Some((first, rest)) => rest.iter().any(|category| category != first),
            None => false,
        }
    }
}

/// Index from statement text to its [`StatementGroup`].
///
/// Groups keep the order in which their statement first appeared.
#[derive(Debug, Clone, Default)]
pub struct DuplicateIndex {
    groups: Vec<StatementGroup>,
    by_statement: HashMap<String, usize>,
}

impl DuplicateIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the index in a single pass over `rows`.
    pub fn build<'a>(rows: impl IntoIterator<Item = &'a Row>) -> Self {
        let mut index = Self::new();
        for row in rows {
            index.insert(row);
        }
        index
    }

    /// Append a row's category and emotion to its statement's group.
    pub fn insert(&mut self, row: &Row) {
        let slot = match self.by_statement.get(&row.statement) {
            Some(&slot) => slot,
            None => {
                let slot = self.groups.len();
                self.groups.push(StatementGroup::new(row.statement.clone()));
                self.by_statement.insert(row.statement.clone(), slot);
                slot
            }
        };
        self.groups[slot].record(row);
    }

    /// Group for a statement, if any row carried it.
    pub fn get(&self, statement: &str) -> Option<&StatementGroup> {
        self.by_statement.get(statement).map(|&slot| &self.groups[slot])
    }

    /// All groups, duplicates or not.
    pub fn groups(&self) -> &[StatementGroup] {
        &self.groups
    }

    /// Groups with more than one row.
    pub fn duplicates(&self) -> impl Iterator<Item = &StatementGroup> {
        self.groups.iter().filter(|group| group.is_duplicate())
    }

    /// Summarize the duplicate groups.
    pub fn report(&self) -> DuplicateReport {
        let entries = self
            .duplicates()
            .map(|group| DuplicateEntry {
                statement: group.statement.clone(),
                emotions: group.emotions.clone(),
                mismatched_categories: group
                    .has_category_mismatch()
                    .then(|| group.categories.clone()),
            })
            .collect();

        DuplicateReport { entries }
    }
}

/// One reported duplicate statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateEntry {
    pub statement: String,
    pub emotions: Vec<String>,

    /// Full category list, present only when the categories disagree.
    pub mismatched_categories: Option<Vec<String>>,
}

/// Result of a duplicate check.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DuplicateReport {
    pub entries: Vec<DuplicateEntry>,
}

impl DuplicateReport {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries whose categories disagree.
    pub fn mismatches(&self) -> impl Iterator<Item = &DuplicateEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.mismatched_categories.is_some())
    }
}

/// One line per duplicate: the statement followed by its emotions. A second
/// line with the full category list follows when the categories disagree.
impl fmt::Display for DuplicateReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{} {}", entry.statement, list(&entry.emotions))?;
            if let Some(categories) = &entry.mismatched_categories {
                writeln!(f, "{}", list(categories))?;
            }
        }
        Ok(())
    }
}

fn list(values: &[String]) -> String {
    // Serializing a slice of strings cannot fail.
    to_spaced_json(values).unwrap_or_default()
}
