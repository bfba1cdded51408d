//! JSON views over rows that keep the CSV header order.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::record::Row;

/// A row serialized as a JSON object keyed by column name.
///
/// Keys follow the header order; values are the raw strings. Columns the row
/// has no value for are left out.
#[derive(Debug, Clone, Copy)]
pub struct RowJson<'a> {
    columns: &'a [String],
    row: &'a Row,
}

impl<'a> RowJson<'a> {
    pub fn new(columns: &'a [String], row: &'a Row) -> Self {
        Self { columns, row }
    }
}

impl Serialize for RowJson<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for column in self.columns {
            if let Some(value) = self.row.get(column) {
                map.serialize_entry(column, value)?;
            }
        }
        map.end()
    }
}

/// A sequence of rows serialized as a JSON array of [`RowJson`] objects.
#[derive(Debug, Clone, Copy)]
pub struct RowsJson<'a> {
    columns: &'a [String],
    rows: &'a [Row],
}

impl<'a> RowsJson<'a> {
    pub fn new(columns: &'a [String], rows: &'a [Row]) -> Self {
        Self { columns, rows }
    }
}

impl Serialize for RowsJson<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.rows.len()))?;
        for row in self.rows {
            seq.serialize_element(&RowJson::new(self.columns, row))?;
        }
        seq.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Knowledgebase;

    #[test]
    fn test_row_json_follows_header_order() {
        let kb = Knowledgebase::from_csv_str(
            "Emotion,Statement,Valence,Category\nGrief,I feel sad,Negative,Sadness\n",
        )
        .unwrap();

        let json = serde_json::to_string(&kb.row_json(&kb.rows()[0])).unwrap();
        assert_eq!(
            json,
            r#"{"Emotion":"Grief","Statement":"I feel sad","Valence":"Negative","Category":"Sadness"}"#
        );
    }

    #[test]
    fn test_rows_json_is_array() {
        let kb = Knowledgebase::from_rows(vec![
            Row::new("a", "b", "c", "d"),
            Row::new("e", "f", "g", "h"),
        ]);

        let value = serde_json::to_value(kb.rows_json()).unwrap();
        let array = value.as_array().unwrap();
        assert_eq!(array.len(), 2);
        assert_eq!(array[1]["Statement"], "e");
    }

    #[test]
    fn test_row_json_skips_absent_extra() {
        let kb = Knowledgebase::from_rows(vec![
            Row::new("a", "b", "c", "d").with_extra("Source", "x"),
            Row::new("e", "f", "g", "h"),
        ]);

        let value = serde_json::to_value(kb.row_json(&kb.rows()[1])).unwrap();
        assert!(value.get("Source").is_none());
        assert_eq!(value.as_object().unwrap().len(), 4);
    }
}
