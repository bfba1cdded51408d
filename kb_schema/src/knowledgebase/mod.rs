//! Knowledgebase - the ordered set of rows read from a CSV file.

mod json;

pub use json::*;

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use crate::error::KbError;
use crate::record::{Row, REQUIRED_COLUMNS};

/// Rows of a knowledgebase together with the header they were read under.
///
/// Row order is input order and rows are never mutated after loading.
#[derive(Debug, Clone, Default)]
pub struct Knowledgebase {
    /// Column names in header order.
    columns: Vec<String>,

    rows: Vec<Row>,
}

impl Knowledgebase {
    /// Create an empty knowledgebase with the given header.
    ///
    /// Fails if a required column is absent or a column name repeats.
    pub fn with_columns(columns: Vec<String>) -> Result<Self, KbError> {
        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.as_str()) {
                return Err(KbError::DuplicateColumn(column.clone()));
            }
        }

        for required in REQUIRED_COLUMNS {
            if !seen.contains(required) {
                return Err(KbError::MissingColumn(required));
            }
        }

        Ok(Self {
            columns,
            rows: Vec::new(),
        })
    }

    /// Build a knowledgebase from rows constructed in code.
    ///
    /// The header is the four required columns followed by every extra column
    /// in order of first appearance.
    pub fn from_rows(rows: impl IntoIterator<Item = Row>) -> Self {
        let rows: Vec<Row> = rows.into_iter().collect();
        let mut columns: Vec<String> = REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect();

        for row in &rows {
            for (name, _) in &row.extra {
                if !columns.contains(name) {
                    columns.push(name.clone());
                }
            }
        }

        Self { columns, rows }
    }

    /// Load a knowledgebase from a CSV file with a header row.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, KbError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| KbError::read(path, e))?;
        let kb = Self::from_reader(BufReader::new(file))?;

        debug!(path = %path.display(), rows = kb.len(), "loaded knowledgebase");
        Ok(kb)
    }

    /// Parse CSV content from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, KbError> {
        let mut reader = ReaderBuilder::new().has_headers(true).from_reader(reader);

        let headers = reader.headers()?.clone();
        let mut kb = Self::with_columns(headers.iter().map(str::to_string).collect())?;

        for result in reader.records() {
            let record = result?;
            let row = kb.row_from_record(&record);
            kb.rows.push(row);
        }

        Ok(kb)
    }

    /// Parse CSV content from a string.
    pub fn from_csv_str(content: &str) -> Result<Self, KbError> {
        Self::from_reader(content.as_bytes())
    }

    fn row_from_record(&self, record: &StringRecord) -> Row {
        let mut row = Row::new("", "", "", "");
        for (column, value) in self.columns.iter().zip(record.iter()) {
            row.set(column.clone(), value.to_string());
        }
        row
    }

    /// Column names in header order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// All rows in input order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// JSON view of a single row, keyed by column name in header order.
    pub fn row_json<'a>(&'a self, row: &'a Row) -> RowJson<'a> {
        RowJson::new(&self.columns, row)
    }

    /// JSON view of every row, as one array.
    pub fn rows_json(&self) -> RowsJson<'_> {
        RowsJson::new(&self.columns, &self.rows)
    }
}
