//! Error type for loading, configuring and writing knowledgebases.

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while reading or writing knowledgebase files.
#[derive(Debug, Error)]
pub enum KbError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("knowledgebase is missing required column `{0}`")]
    MissingColumn(&'static str),

    #[error("knowledgebase header repeats column `{0}`")]
    DuplicateColumn(String),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Config {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl KbError {
    /// Attach the output path to an I/O error raised while writing.
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        KbError::Write {
            path: path.into(),
            source,
        }
    }

    /// Attach the input path to an I/O error raised while reading.
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        KbError::Read {
            path: path.into(),
            source,
        }
    }
}
