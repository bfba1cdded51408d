//! Tool configuration - file locations and export options.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::KbError;
use crate::record::Valence;

/// Default input file, read from the working directory.
pub const DEFAULT_INPUT: &str = "knowledgebase.csv";
/// Default output of the JS array converter.
pub const DEFAULT_JS_OUTPUT: &str = "knowledgebase.js";
/// Default output of the full JSON dump.
pub const DEFAULT_JSON_OUTPUT: &str = "knowledgebase.json";
/// Global variable the JS array is assigned to.
pub const DEFAULT_JS_VARIABLE: &str = "KNOWLEDGEBASE_DATA";

/// Configuration shared by the knowledgebase tools.
///
/// Every field has a default, so an empty TOML document (or no file at all)
/// gives the fixed file names the tools have always used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KbConfig {
    /// CSV knowledgebase to read.
    pub input: PathBuf,

    /// Where the filtered JS array is written.
    pub js_output: PathBuf,

    /// Where the unfiltered JSON dump is written.
    pub json_output: PathBuf,

    /// Variable name in the `var NAME = [...]` assignment.
    pub js_variable: String,

    /// Rows whose `Valence` equals this label exactly are left out of the JS array.
    pub excluded_valence: String,

    /// Line comment written above the JS assignment, without the `//`.
    pub js_header_comment: Option<String>,
}

impl Default for KbConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            js_output: PathBuf::from(DEFAULT_JS_OUTPUT),
            json_output: PathBuf::from(DEFAULT_JSON_OUTPUT),
            js_variable: DEFAULT_JS_VARIABLE.to_string(),
            excluded_valence: Valence::POSITIVE.to_string(),
            js_header_comment: Some("global data structure".to_string()),
        }
    }
}

impl KbConfig {
    /// Parse a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, KbError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| KbError::read(path, e))?;

        Self::from_toml_str(&content).map_err(|source| KbError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from `path` if given, otherwise use the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, KbError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
