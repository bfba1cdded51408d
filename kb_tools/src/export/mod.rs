//! Converters - write the knowledgebase out as JS or JSON.
//!
//! - [`JsArrayExporter`] drops rows with the excluded valence and writes the
//!   rest as a JS array literal assigned to a global variable.
//! - [`JsonDumpExporter`] writes every row as a single JSON array.
//!
//! Both overwrite their output file, keep input row order and escape non-ASCII
//! text so the output is plain ASCII.

mod format;

pub use format::*;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::{debug, info};

use kb_schema::{KbConfig, KbError, Knowledgebase, Row, Valence};

/// Counts from one export run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExportSummary {
    pub written: usize,
    pub skipped: usize,
}

/// Writes the filtered rows as `var NAME = [ {...}, {...} ]`.
#[derive(Debug, Clone)]
pub struct JsArrayExporter {
    variable: String,
    excluded_valence: Valence,
    header_comment: Option<String>,
}

impl Default for JsArrayExporter {
    fn default() -> Self {
        Self::from_config(&KbConfig::default())
    }
}

impl JsArrayExporter {
    /// Exporter assigning to `variable` and excluding `Positive` rows.
    pub fn new(variable: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
            excluded_valence: Valence::Positive,
            header_comment: None,
        }
    }

    pub fn from_config(config: &KbConfig) -> Self {
        Self::new(config.js_variable.clone())
            .with_excluded_valence(&config.excluded_valence)
            .with_header_comment(config.js_header_comment.clone())
    }

    /// Rows whose `Valence` equals `valence` exactly are skipped.
    pub fn with_excluded_valence(mut self, valence: impl AsRef<str>) -> Self {
        self.excluded_valence = Valence::parse(valence.as_ref());
        self
    }

    /// Line comment above the assignment. `None` or an empty string omits it.
    pub fn with_header_comment(mut self, comment: Option<String>) -> Self {
        self.header_comment = comment.filter(|c| !c.is_empty());
        self
    }

    /// Whether a row makes it into the array.
    pub fn keeps(&self, row: &Row) -> bool {
        row.valence() != self.excluded_valence
    }

    /// Write the JS source for `kb` into `writer`.
    pub fn write<W: Write>(&self, kb: &Knowledgebase, mut writer: W) -> io::Result<ExportSummary> {
        let mut summary = ExportSummary::default();

        if let Some(comment) = &self.header_comment {
            writeln!(writer, "// {}", comment)?;
        }
        writeln!(writer, "{}[", js_assignment_prefix(&self.variable))?;

        for row in kb.rows() {
            if !self.keeps(row) {
                summary.skipped += 1;
                continue;
            }

            // Separator goes before every element except the first.
            if summary.written > 0 {
                writer.write_all(b",\n")?;
            }
            write_ascii_json(&mut writer, &kb.row_json(row))?;
            summary.written += 1;
        }

        writer.write_all(b"]\n")?;
        writer.flush()?;

        debug!(
            written = summary.written,
            skipped = summary.skipped,
            "wrote JS array"
        );
        Ok(summary)
    }

    /// Write the JS source to `path`, replacing any existing content.
    pub fn write_to_path(
        &self,
        kb: &Knowledgebase,
        path: impl AsRef<Path>,
    ) -> Result<ExportSummary, KbError> {
        let path = path.as_ref();
        let summary = File::create(path)
            .and_then(|file| self.write(kb, BufWriter::new(file)))
            .map_err(|e| KbError::write(path, e))?;

        info!(path = %path.display(), rows = summary.written, "wrote {}", self.variable);
        Ok(summary)
    }
}

/// Writes every row as one JSON array.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDumpExporter;

impl JsonDumpExporter {
    pub fn new() -> Self {
        Self
    }

    /// Write the JSON array for `kb` into `writer`, followed by a newline.
    pub fn write<W: Write>(&self, kb: &Knowledgebase, mut writer: W) -> io::Result<ExportSummary> {
        write_ascii_json(&mut writer, &kb.rows_json())?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        Ok(ExportSummary {
            written: kb.len(),
            skipped: 0,
        })
    }

    /// Write the JSON array to `path`, replacing any existing content.
    pub fn write_to_path(
        &self,
        kb: &Knowledgebase,
        path: impl AsRef<Path>,
    ) -> Result<ExportSummary, KbError> {
        let path = path.as_ref();
        let summary = File::create(path)
            .and_then(|file| self.write(kb, BufWriter::new(file)))
            .map_err(|e| KbError::write(path, e))?;

        info!(path = %path.display(), rows = summary.written, "wrote JSON dump");
        Ok(summary)
    }
}

/// The `var NAME = ` prefix of a JS export.
pub fn js_assignment_prefix(variable: &str) -> String {
    format!("var {} = ", variable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn sample() -> Knowledgebase {
        Knowledgebase::from_csv_str(
            "Statement,Category,Emotion,Valence\n\
             I feel sad,Sadness,Grief,Negative\n\
             I feel joy,Happiness,Joy,Positive\n\
             I feel calm,Calm,Peace,Neutral\n",
        )
        .unwrap()
    }

    fn js_string(exporter: &JsArrayExporter, kb: &Knowledgebase) -> String {
        let mut buffer = Vec::new();
        exporter.write(kb, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    /// Strip the comment and assignment wrapper, leaving the JSON array.
    fn strip_js(source: &str) -> Value {
        let start = source.find('[').unwrap();
        serde_json::from_str(&source[start..]).unwrap()
    }

    #[test]
    fn test_js_layout() {
        let js = js_string(&JsArrayExporter::default(), &sample());

        assert_eq!(
            js,
            "// global data structure\n\
             var KNOWLEDGEBASE_DATA = [\n\
             {\"Statement\": \"I feel sad\", \"Category\": \"Sadness\", \"Emotion\": \"Grief\", \"Valence\": \"Negative\"},\n\
             {\"Statement\": \"I feel calm\", \"Category\": \"Calm\", \"Emotion\": \"Peace\", \"Valence\": \"Neutral\"}]\n"
        );
    }

    #[test]
    fn test_js_excludes_positive_rows() {
        let kb = sample();
        let mut buffer = Vec::new();
        let summary = JsArrayExporter::default().write(&kb, &mut buffer).unwrap();

        assert_eq!(summary, ExportSummary { written: 2, skipped: 1 });

        let array = strip_js(&String::from_utf8(buffer).unwrap());
        let rows = array.as_array().unwrap();
        let expected = kb.rows().iter().filter(|r| r.valence != "Positive").count();
        assert_eq!(rows.len(), expected);
        assert!(rows.iter().all(|r| r["Valence"] != "Positive"));
    }

    #[test]
    fn test_js_filter_is_case_sensitive() {
        let kb = Knowledgebase::from_rows(vec![
            Row::new("a", "c", "e", "positive"),
            Row::new("b", "c", "e", "Positive"),
        ]);
        let array = strip_js(&js_string(&JsArrayExporter::default(), &kb));

        assert_eq!(array.as_array().unwrap().len(), 1);
        assert_eq!(array[0]["Valence"], "positive");
    }

    #[test]
    fn test_js_all_filtered_is_empty_array() {
        let kb = Knowledgebase::from_rows(vec![Row::new("a", "c", "e", "Positive")]);
        let exporter = JsArrayExporter::new("DATA");

        assert_eq!(js_string(&exporter, &kb), "var DATA = [\n]\n");
    }

    #[test]
    fn test_js_custom_settings() {
        let kb = sample();
        let exporter = JsArrayExporter::new("STATEMENTS")
            .with_excluded_valence("Negative")
            .with_header_comment(Some(String::new()));
        let js = js_string(&exporter, &kb);

        assert!(js.starts_with("var STATEMENTS = [\n"));
        assert_eq!(strip_js(&js).as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_js_assignment_prefix_matches_written_line() {
        let js = js_string(&JsArrayExporter::new("X"), &sample());

        assert_eq!(js_assignment_prefix("X"), "var X = ");
        assert!(js.starts_with(&format!("{}[\n", js_assignment_prefix("X"))));
    }

    #[test]
    fn test_js_escapes_non_ascii() {
        let kb = Knowledgebase::from_rows(vec![Row::new(
            "I\u{2019}m sad \u{2014} tr\u{e8}s \u{1F622}",
            "Sadness",
            "Grief",
            "Negative",
        )]);
        let js = js_string(&JsArrayExporter::default(), &kb);

        assert!(js.is_ascii());
        assert!(js.contains(r#""I\u2019m sad \u2014 tr\u00e8s \ud83d\ude22""#));
        assert_eq!(strip_js(&js)[0]["Statement"], kb.rows()[0].statement);
    }

    #[test]
    fn test_json_dump_escapes_non_ascii() {
        let kb = Knowledgebase::from_rows(vec![Row::new(
            "caf\u{e9}",
            "Calm",
            "Peace",
            "Positive",
        )]);
        let mut buffer = Vec::new();
        JsonDumpExporter::new().write(&kb, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.is_ascii());
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value[0]["Statement"], "caf\u{e9}");
    }

    struct BrokenWriter;

    impl Write for BrokenWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_to_writer_returns_io_error() {
        let err = JsArrayExporter::default()
            .write(&sample(), BrokenWriter)
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);

        let err = JsonDumpExporter::new()
            .write(&sample(), BrokenWriter)
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn test_json_dump_keeps_every_row() {
        let kb = sample();
        let mut buffer = Vec::new();
        let summary = JsonDumpExporter::new().write(&kb, &mut buffer).unwrap();
        assert_eq!(summary.written, 3);

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.ends_with("]\n"));

        let value: Value = serde_json::from_str(&text).unwrap();
        let rows = value.as_array().unwrap();
        assert_eq!(rows.len(), kb.len());
        assert_eq!(rows[1]["Valence"], "Positive");
    }

    #[test]
    fn test_json_dump_objects_reproduce_rows() {
        let kb = Knowledgebase::from_csv_str(
            "Emotion,Statement,Note,Valence,Category\n\
             Grief,\"I feel sad, really\",\"quoted \"\"note\"\"\",Negative,Sadness\n",
        )
        .unwrap();
        let mut buffer = Vec::new();
        JsonDumpExporter::new().write(&kb, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        let row = to_spaced_json(&kb.row_json(&kb.rows()[0])).unwrap();
        assert_eq!(text, format!("[{}]\n", row));
        assert!(text.starts_with(
            r#"[{"Emotion": "Grief", "Statement": "I feel sad, really", "Note": "quoted \"note\"""#
        ));
    }

    #[test]
    fn test_write_to_path_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("knowledgebase.json");
        std::fs::write(&path, "stale content that is longer than the new output").unwrap();

        let kb = Knowledgebase::from_rows(vec![Row::new("a", "b", "c", "d")]);
        JsonDumpExporter::new().write_to_path(&kb, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "[{\"Statement\": \"a\", \"Category\": \"b\", \"Emotion\": \"c\", \"Valence\": \"d\"}]\n"
        );
    }

    #[test]
    fn test_write_to_unwritable_path_is_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("knowledgebase.js");

        let err = JsArrayExporter::default()
            .write_to_path(&sample(), &path)
            .unwrap_err();
        assert!(matches!(err, KbError::Write { path: p, .. } if p == path));
    }
}
