//! Report assembly and rendering.
//!
//! The report carries the contract values (counts, lengths, extreme sets,
//! ORF records, repeat tables) as plain serializable data; the text and JSON
//! renderings are presentation only.

use crate::{
    orf::{LongestOrf, LongestOrfInSeq, OrfScan},
    repeat::RepeatScan,
    stats::{ExtremeSet, SeqStats},
};
use serde::Serialize;
use std::{collections::BTreeMap, io::Write};

/// Length statistics for the whole file.
#[derive(Debug, Serialize)]
pub struct SequenceReport {
    pub num_records: usize,
    pub lengths: BTreeMap<String, usize>,
    pub longest: ExtremeSet,
    pub shortest: ExtremeSet,
}

impl SequenceReport {
    #[must_use]
    pub fn from_stats(stats: &SeqStats<'_>) -> Self {
        Self {
            num_records: stats.num_records(),
            lengths: stats
                .lengths()
                .map(|(id, len)| (id.to_string(), len))
                .collect(),
            longest: stats.longest().clone(),
            shortest: stats.shortest().clone(),
        }
    }
}

/// The file-wide longest ORF, as reported.
#[derive(Debug, Serialize)]
pub struct LongestOrfEntry {
    pub id: String,
    pub length: usize,
    pub orf: String,
}

impl From<&LongestOrf> for LongestOrfEntry {
    fn from(longest: &LongestOrf) -> Self {
        Self {
            id: longest.id.clone(),
            length: longest.len(),
            orf: longest.orf.clone(),
        }
    }
}

/// The longest ORF within one requested sequence, as reported.
#[derive(Debug, Serialize)]
pub struct LongestOrfInSeqEntry {
    pub id: String,
    pub length: usize,
    pub orf: String,
    pub start: Option<usize>,
}

impl From<&LongestOrfInSeq> for LongestOrfInSeqEntry {
    fn from(record: &LongestOrfInSeq) -> Self {
        Self {
            id: record.id.clone(),
            length: record.len(),
            orf: record.orf.clone(),
            start: record.start,
        }
    }
}

/// ORF statistics for one reading frame.
#[derive(Debug, Serialize)]
pub struct OrfReport {
    pub frame: u8,
    pub total_orfs: usize,
    pub orfs_per_sequence: BTreeMap<String, usize>,
    pub longest: Option<LongestOrfEntry>,
    pub per_sequence: Option<LongestOrfInSeqEntry>,
}

impl OrfReport {
    #[must_use]
    pub fn from_scan(scan: &OrfScan<'_>, per_sequence: Option<&LongestOrfInSeq>) -> Self {
        Self {
            frame: scan.frame().get(),
            total_orfs: scan.total(),
            orfs_per_sequence: scan
                .iter()
                .map(|(id, orfs)| (id.to_string(), orfs.len()))
                .collect(),
            longest: scan.longest().map(LongestOrfEntry::from),
            per_sequence: per_sequence.map(LongestOrfInSeqEntry::from),
        }
    }
}

/// Repeat statistics for one window length.
#[derive(Debug, Serialize)]
pub struct RepeatReport {
    pub n: usize,
    pub repeats: BTreeMap<String, u32>,
    pub peak: BTreeMap<String, u32>,
}

impl RepeatReport {
    #[must_use]
    pub fn from_scan(scan: &RepeatScan) -> Self {
        Self {
            n: scan.n(),
            repeats: scan
                .sorted()
                .into_iter()
                .map(|(window, count)| (window.to_string(), count))
                .collect(),
            peak: scan
                .peak()
                .into_iter()
                .map(|(window, count)| (window.to_string(), count))
                .collect(),
        }
    }
}

/// The full report for one invocation.
#[derive(Debug, Serialize)]
pub struct Report {
    pub sequences: SequenceReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orfs: Option<OrfReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repeats: Option<RepeatReport>,
}

impl Report {
    /// Renders the report as human-readable text.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from the writer.
    pub fn write_text<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        let seqs = &self.sequences;
        writeln!(out, "Number of records: {}", seqs.num_records)?;
        writeln!(out, "Sequence lengths:")?;
        for (id, len) in &seqs.lengths {
            writeln!(out, "  {id}: {len}")?;
        }
        writeln!(out, "Longest sequence length: {}", seqs.longest.length)?;
        writeln!(
            out,
            "Total sequences of longest length: {}",
            seqs.longest.ids.len()
        )?;
        writeln!(out, "Longest sequences: {}", seqs.longest.ids.join(", "))?;
        writeln!(out, "Shortest sequence length: {}", seqs.shortest.length)?;
        writeln!(
            out,
            "Total sequences of shortest length: {}",
            seqs.shortest.ids.len()
        )?;
        writeln!(out, "Shortest sequences: {}", seqs.shortest.ids.join(", "))?;

        if let Some(orfs) = &self.orfs {
            writeln!(out)?;
            writeln!(
                out,
                "ORFs in reading frame {}: {}",
                orfs.frame, orfs.total_orfs
            )?;
            match &orfs.longest {
                Some(longest) => {
                    writeln!(out, "Longest ORF in file: {} characters", longest.length)?;
                    writeln!(out, "Longest ORF sequence in file: {}", longest.orf)?;
                    writeln!(out, "Sequence ID of longest ORF: {}", longest.id)?;
                }
                None => writeln!(out, "Longest ORF in file: none found")?,
            }
            if let Some(record) = &orfs.per_sequence {
                writeln!(
                    out,
                    "Longest ORF in sequence {}: {} characters",
                    record.id, record.length
                )?;
                writeln!(out, "Longest ORF in sequence {}: {}", record.id, record.orf)?;
                match record.start {
                    Some(start) => writeln!(
                        out,
                        "Longest ORF starting position in sequence {}: {start}",
                        record.id
                    )?,
                    None => writeln!(
                        out,
                        "Longest ORF starting position in sequence {}: not found",
                        record.id
                    )?,
                }
            }
        }

        if let Some(repeats) = &self.repeats {
            writeln!(out)?;
            writeln!(out, "Repeats of length {}:", repeats.n)?;
            for (window, count) in &repeats.repeats {
                writeln!(out, "  {window}: {count}")?;
            }
            writeln!(out, "Highest repeat frequencies:")?;
            for (window, count) in &repeats.peak {
                writeln!(out, "  {window}: {count}")?;
            }
        }

        Ok(())
    }

    /// Renders the report as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns a serialization error, or any I/O error from the writer.
    pub fn write_json<W: Write>(&self, out: &mut W) -> Result<(), crate::error::SeqStatsError> {
        serde_json::to_writer_pretty(&mut *out, self)?;
        writeln!(out)?;
        Ok(())
    }
}
