//! # Knowledgebase Schema
//!
//! The data model shared by every knowledgebase tool. A knowledgebase is a CSV
//! file of emotional statements; each record carries at least a `Statement`,
//! a `Category`, an `Emotion` and a `Valence`.
//!
//! ## Core Components
//!
//! - **record**: a single parsed row and its valence label
//! - **knowledgebase**: the ordered row set, CSV loading and JSON views
//! - **config**: file locations and export options, loadable from TOML
//! - **error**: the error type returned by every fallible operation

pub mod config;
pub mod error;
pub mod knowledgebase;
pub mod record;

pub use config::*;
pub use error::*;
pub use knowledgebase::*;
pub use record::*;
