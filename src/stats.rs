//! The sequence statistics engine.
//!
//! [`SeqStats`] borrows a parsed [`SequenceCollection`] and eagerly computes
//! the length index and both length extremes at construction. ORF and repeat
//! scans are computed on demand and returned as explicit per-call results;
//! the engine itself never mutates, so statistics for several reading frames
//! or window lengths can coexist if the caller keeps them.

use crate::{
    error::SeqStatsError,
    fasta::SequenceCollection,
    orf::{OrfScan, ReadingFrame, UnterminatedOrfs},
    repeat::RepeatScan,
};
use serde::Serialize;

/// An extreme length value and every identifier achieving it.
///
/// Ties are not broken; all tied identifiers are retained in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtremeSet {
    pub length: usize,
    pub ids: Vec<String>,
}

/// Descriptive statistics over a sequence collection.
#[derive(Debug)]
pub struct SeqStats<'a> {
    sequences: &'a SequenceCollection,
    lengths: Vec<(&'a str, usize)>,
    longest: ExtremeSet,
    shortest: ExtremeSet,
}

impl<'a> SeqStats<'a> {
    /// Builds the engine, computing the length index and extremes.
    #[must_use]
    pub fn new(sequences: &'a SequenceCollection) -> Self {
        let lengths: Vec<(&str, usize)> =
            sequences.iter().map(|(id, seq)| (id, seq.len())).collect();

        let longest = extreme(&lengths, lengths.iter().map(|&(_, len)| len).max());
        let shortest = extreme(&lengths, lengths.iter().map(|&(_, len)| len).min());

        Self {
            sequences,
            lengths,
            longest,
            shortest,
        }
    }

    /// Number of sequence records.
    #[must_use]
    pub fn num_records(&self) -> usize {
        self.sequences.len()
    }

    /// Iterates `(identifier, length)` pairs in input order.
    pub fn lengths(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.lengths.iter().copied()
    }

    /// Length of one sequence by identifier.
    #[must_use]
    pub fn length_of(&self, id: &str) -> Option<usize> {
        self.sequences.get(id).map(str::len)
    }

    /// The longest sequence length and all identifiers achieving it.
    #[must_use]
    pub const fn longest(&self) -> &ExtremeSet {
        &self.longest
    }

    /// The shortest sequence length and all identifiers achieving it.
    #[must_use]
    pub const fn shortest(&self) -> &ExtremeSet {
        &self.shortest
    }

    /// Scans every sequence for ORFs in the given reading frame, discarding
    /// unterminated accumulations.
    #[must_use]
    pub fn find_orfs(&self, frame: ReadingFrame) -> OrfScan<'a> {
        self.find_orfs_with(frame, UnterminatedOrfs::Discard)
    }

    /// ORF scan with an explicit policy for starts that never meet a stop.
    #[must_use]
    pub fn find_orfs_with(&self, frame: ReadingFrame, policy: UnterminatedOrfs) -> OrfScan<'a> {
        OrfScan::scan(self.sequences, frame, policy)
    }

    /// Counts all overlapping windows of length `n` across the collection
    /// and derives the repeat and peak tables.
    ///
    /// # Errors
    ///
    /// Returns [`SeqStatsError::InvalidRepeatLength`] if `n` is zero.
    pub fn repeats(&self, n: usize) -> Result<RepeatScan, SeqStatsError> {
        if n == 0 {
            return Err(SeqStatsError::InvalidRepeatLength { n });
        }
        Ok(RepeatScan::count(self.sequences, n))
    }
}

fn extreme(lengths: &[(&str, usize)], value: Option<usize>) -> ExtremeSet {
    let length = value.unwrap_or(0);
    let ids = lengths
        .iter()
        .filter(|&&(_, len)| len == length)
        .map(|&(id, _)| id.to_string())
        .collect();
    ExtremeSet { length, ids }
}
