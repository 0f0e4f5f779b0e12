//! Open reading frame detection.
//!
//! An ORF is a codon-aligned substring beginning with the start codon `ATG`
//! and ending with the first subsequent in-frame stop codon, inclusive.
//! Scanning walks non-overlapping 3-character windows from the frame offset;
//! after a stop codon is matched the scan resumes strictly past it, so the
//! ORFs reported for one sequence never share a codon position.

use crate::{error::SeqStatsError, fasta::SequenceCollection};
use tracing::warn;

/// The start codon.
pub const START_CODON: &[u8; 3] = b"ATG";

/// The three stop codons.
pub const STOP_CODONS: [&[u8; 3]; 3] = [b"TAA", b"TAG", b"TGA"];

/// Width of a codon window.
pub const CODON_LEN: usize = 3;

/// A validated reading frame in `{1, 2, 3}`.
///
/// Exposed to users as 1-based; [`ReadingFrame::offset`] gives the 0-based
/// scan offset. Construction is the only validation point, so the scanner
/// itself never sees an out-of-range frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadingFrame(u8);

impl ReadingFrame {
    /// Creates a reading frame from its 1-based user representation.
    ///
    /// # Errors
    ///
    /// Returns [`SeqStatsError::InvalidReadingFrame`] for any value outside
    /// `{1, 2, 3}`.
    pub fn new(frame: u8) -> Result<Self, SeqStatsError> {
        match frame {
            1..=3 => Ok(Self(frame)),
            _ => Err(SeqStatsError::InvalidReadingFrame { frame }),
        }
    }

    /// The 1-based frame number.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// The 0-based offset at which codon windows begin.
    #[must_use]
    pub const fn offset(self) -> usize {
        (self.0 - 1) as usize
    }
}

impl TryFrom<u8> for ReadingFrame {
    type Error = SeqStatsError;

    fn try_from(frame: u8) -> Result<Self, Self::Error> {
        Self::new(frame)
    }
}

impl std::fmt::Display for ReadingFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What to do with a start codon that never meets a stop codon before the
/// codon-aligned end of the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnterminatedOrfs {
    /// Drop the partial accumulation (the classical definition).
    #[default]
    Discard,
    /// Report the accumulation from the start codon through the last full
    /// codon in frame.
    Keep,
}

/// Scans one sequence for ORFs in the given frame.
pub(crate) fn scan_sequence(
    seq: &[u8],
    frame: ReadingFrame,
    policy: UnterminatedOrfs,
) -> Vec<String> {
    let mut orfs = Vec::new();
    let mut i = frame.offset();

    while i + CODON_LEN <= seq.len() {
        if &seq[i..i + CODON_LEN] != START_CODON {
            i += CODON_LEN;
            continue;
        }

        // Accumulate codons from the start codon until a stop codon or the
        // codon-aligned end of the sequence.
        let mut j = i + CODON_LEN;
        let mut terminated = false;
        while j + CODON_LEN <= seq.len() {
            let codon: &[u8] = &seq[j..j + CODON_LEN];
            j += CODON_LEN;
            if STOP_CODONS.iter().any(|stop| *stop == codon) {
                terminated = true;
                break;
            }
        }

        if terminated || policy == UnterminatedOrfs::Keep {
            orfs.push(String::from_utf8_lossy(&seq[i..j]).into_owned());
        }

        // Resume past everything already consumed; codons inside a reported
        // ORF are not re-scanned for nested starts.
        i = j;
    }

    orfs
}

/// The longest ORF across a whole file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LongestOrf {
    /// Identifier of the sequence the ORF was found in.
    pub id: String,
    /// The ORF itself, start codon through stop codon.
    pub orf: String,
}

impl LongestOrf {
    /// Length of the ORF in characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.orf.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orf.is_empty()
    }
}

/// The longest ORF within one requested sequence, with its 1-based start
/// position in the full sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LongestOrfInSeq {
    pub id: String,
    pub orf: String,
    /// 1-based character position of the ORF's first occurrence in the full
    /// sequence; `None` if relocation failed (reported as a diagnostic).
    pub start: Option<usize>,
}

impl LongestOrfInSeq {
    #[must_use]
    pub fn len(&self) -> usize {
        self.orf.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orf.is_empty()
    }
}

/// The result of one ORF scan: per-sequence ORF lists for a single reading
/// frame, plus the file-wide longest ORF.
///
/// Each scan yields a fresh `OrfScan`; the caller decides whether to keep
/// results across frames.
#[derive(Debug)]
pub struct OrfScan<'a> {
    frame: ReadingFrame,
    sequences: &'a SequenceCollection,
    table: Vec<(&'a str, Vec<String>)>,
    longest: Option<LongestOrf>,
}

impl<'a> OrfScan<'a> {
    /// Runs the scan over every sequence in the collection.
    pub(crate) fn scan(
        sequences: &'a SequenceCollection,
        frame: ReadingFrame,
        policy: UnterminatedOrfs,
    ) -> Self {
        let table: Vec<(&str, Vec<String>)> = sequences
            .iter()
            .map(|(id, seq)| (id, scan_sequence(seq.as_bytes(), frame, policy)))
            .collect();

        // File-wide longest: strict "greater than", so the first-encountered
        // ORF among equal-length ties wins.
        let mut longest: Option<LongestOrf> = None;
        for (id, orfs) in &table {
            for orf in orfs {
                if orf.len() > longest.as_ref().map_or(0, LongestOrf::len) {
                    longest = Some(LongestOrf {
                        id: (*id).to_string(),
                        orf: orf.clone(),
                    });
                }
            }
        }

        Self {
            frame,
            sequences,
            table,
            longest,
        }
    }

    /// The reading frame this scan was computed for.
    #[must_use]
    pub const fn frame(&self) -> ReadingFrame {
        self.frame
    }

    /// The ORF list for one sequence, in scan order.
    #[must_use]
    pub fn orfs(&self, id: &str) -> Option<&[String]> {
        self.table
            .iter()
            .find(|(entry_id, _)| *entry_id == id)
            .map(|(_, orfs)| orfs.as_slice())
    }

    /// Iterates `(identifier, orf list)` pairs in input order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.table.iter().map(|(id, orfs)| (*id, orfs.as_slice()))
    }

    /// Total number of ORFs found across all sequences.
    #[must_use]
    pub fn total(&self) -> usize {
        self.table.iter().map(|(_, orfs)| orfs.len()).sum()
    }

    /// The longest ORF in the file, if any sequence yielded one.
    #[must_use]
    pub const fn longest(&self) -> Option<&LongestOrf> {
        self.longest.as_ref()
    }

    /// The longest ORF within one sequence, with its 1-based start position
    /// located by first occurrence in the full sequence.
    ///
    /// Returns `Ok(None)` if the sequence yielded no ORFs in this frame. A
    /// relocation miss (unreachable when the ORF was derived from the same
    /// sequence) emits a warning and leaves `start` unset rather than
    /// failing.
    ///
    /// # Errors
    ///
    /// Returns [`SeqStatsError::UnknownSequenceId`] if `id` is not in the
    /// collection.
    pub fn longest_in(&self, id: &str) -> Result<Option<LongestOrfInSeq>, SeqStatsError> {
        let full_seq = self
            .sequences
            .get(id)
            .ok_or_else(|| SeqStatsError::UnknownSequenceId { id: id.to_string() })?;
        let orfs = self.orfs(id).unwrap_or(&[]);

        let mut record: Option<LongestOrfInSeq> = None;
        for orf in orfs {
            if orf.len() > record.as_ref().map_or(0, LongestOrfInSeq::len) {
                let start = subseq_start(full_seq.as_bytes(), orf.as_bytes());
                if start.is_none() {
                    warn!(id, orf = %orf, "ORF not relocatable within its source sequence");
                }
                record = Some(LongestOrfInSeq {
                    id: id.to_string(),
                    orf: orf.clone(),
                    start,
                });
            }
        }
        Ok(record)
    }
}

/// 1-based position of the first occurrence of `needle` in `hay`.
fn subseq_start(hay: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || needle.len() > hay.len() {
        return None;
    }
    hay.windows(needle.len())
        .position(|window| window == needle)
        .map(|at| at + 1)
}
