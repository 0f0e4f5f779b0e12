//! Error types for seqstats.
//!
//! This module provides exhaustive, strongly-typed errors for all operations
//! in the library, enabling precise error handling and informative messages.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in seqstats operations.
#[derive(Debug, Error)]
pub enum SeqStatsError {
    /// The input contained no parseable FASTA records.
    #[error("no DNA sequences found: please ensure the input is in FASTA format")]
    NoSequences,

    /// Sequence data appeared before any FASTA header.
    #[error("line {line}: sequence data found before any FASTA header")]
    DataBeforeHeader { line: usize },

    /// The same sequence identifier appeared in more than one header.
    #[error("duplicate sequence identifier '{id}'")]
    DuplicateHeader { id: String },

    /// Reading frame is outside the valid range {1, 2, 3}.
    #[error("invalid reading frame {frame}: must be 1, 2, or 3")]
    InvalidReadingFrame { frame: u8 },

    /// Repeat length must be a positive integer.
    #[error("invalid repeat length {n}: must be at least 1")]
    InvalidRepeatLength { n: usize },

    /// A per-sequence query named an identifier not present in the input.
    #[error("unknown sequence identifier '{id}'")]
    UnknownSequenceId { id: String },

    /// Failed to read a sequence file.
    #[error("failed to read sequence file '{path}': {source}")]
    SequenceRead {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },

    /// Failed to read from an input stream (stdin).
    #[error("failed to read input stream: {source}")]
    StreamRead {
        #[source]
        source: std::io::Error,
    },

    /// Failed to write output.
    #[error("failed to write output: {source}")]
    WriteError {
        #[from]
        source: std::io::Error,
    },

    /// Failed to serialize JSON output.
    #[error("failed to serialize JSON: {source}")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },
}
