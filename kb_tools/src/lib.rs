//! # Knowledgebase Tools
//!
//! Three independent utilities over the same CSV knowledgebase:
//!
//! - **duplicates**: finds statements recorded more than once and flags
//!   duplicates whose categories disagree
//! - **export**: writes the filtered JS array and the unfiltered JSON dump
//! - **logging**: stderr tracing setup shared by the binaries
//!
//! Each binary performs one read, one pass over the rows and at most one write.

pub mod duplicates;
pub mod export;
pub mod logging;

pub use duplicates::*;
pub use export::*;
