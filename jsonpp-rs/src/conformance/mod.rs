//! Conformance corpus support.
//!
//! A corpus is a JSON file of test vectors, each pairing a document with
//! the tree it must produce (in compact rendering) or the error code it must
//! be rejected with. The same runner backs the `corpus` CLI command and the
//! integration tests.
//!
//! # Requirements
//!
//! - Load and decode a corpus file
//! - Execute every vector and compare expected vs actual outcome
//! - Report pass/fail/skip/error counts with details

pub mod corpus;

use std::path::PathBuf;

use thiserror::Error;

pub use corpus::{Corpus, CorpusManifest, CorpusResults, CorpusRunner, TestResult, TestVector};

/// Result type for conformance operations.
pub type ConformanceResult<T> = Result<T, ConformanceError>;

/// Errors that stop a corpus from being run at all.
#[derive(Debug, Error)]
pub enum ConformanceError {
    /// The corpus file could not be read.
    #[error("failed to read corpus file {}: {source}", .path.display())]
    Io {
        /// Corpus path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The corpus file is not a valid corpus document.
    #[error("failed to decode corpus: {0}")]
    Decode(#[from] serde_json::Error),
}
