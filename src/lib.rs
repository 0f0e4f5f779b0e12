//! # seqstats
//!
//! Descriptive statistics for DNA sequences in multi-FASTA files: sequence
//! length distributions, open reading frame (ORF) detection under a chosen
//! reading frame, and fixed-length repeat frequency analysis.
//!
//! The library splits into a leaf [`fasta`] parser producing a
//! [`SequenceCollection`], and a statistics engine ([`SeqStats`]) that
//! computes length extremes eagerly and ORF/repeat scans on demand. Scans
//! return explicit result values per call; the engine holds no mutable
//! state.
//!
//! ```no_run
//! use seqstats::{ReadingFrame, SeqStats, SequenceCollection};
//!
//! # fn main() -> Result<(), seqstats::SeqStatsError> {
//! let sequences = SequenceCollection::from_path("genome.fa")?;
//! let stats = SeqStats::new(&sequences);
//!
//! let orfs = stats.find_orfs(ReadingFrame::new(1)?);
//! if let Some(longest) = orfs.longest() {
//!     println!("longest ORF ({} chars) in {}", longest.len(), longest.id);
//! }
//!
//! let repeats = stats.repeats(4)?;
//! println!("{} distinct repeats of length 4", repeats.counts().len());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod error;
pub mod fasta;
pub mod orf;
pub mod repeat;
pub mod report;
pub mod run;
pub mod stats;

pub use error::SeqStatsError;
pub use fasta::SequenceCollection;
pub use orf::{OrfScan, ReadingFrame, UnterminatedOrfs};
pub use repeat::RepeatScan;
pub use stats::{ExtremeSet, SeqStats};
