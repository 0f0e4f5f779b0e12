//! Command-line interface definition.

use crate::orf::ReadingFrame;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Descriptive statistics for DNA sequences in multi-FASTA files.
#[derive(Parser, Debug)]
#[command(name = "seqstats")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to a FASTA file ('-' or omitted reads stdin)
    pub path: Option<PathBuf>,

    /// Reading frame for the ORF scan (1-3)
    #[arg(short = 'r', long, value_parser = parse_frame)]
    pub frame: ReadingFrame,

    /// Sequence identifier for a per-sequence longest-ORF report
    #[arg(short = 's', long = "orf-id")]
    pub orf_id: Option<String>,

    /// Repeat length n for the repeat frequency report
    #[arg(short = 'n', long = "repeat-len", value_parser = parse_repeat_len)]
    pub repeat_len: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Suppress informational output (only print the report)
    #[arg(short, long)]
    pub quiet: bool,
}

/// Output format for the statistics report.
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text report
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

fn parse_frame(s: &str) -> Result<ReadingFrame, String> {
    let frame: u8 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;
    ReadingFrame::new(frame).map_err(|e| e.to_string())
}

fn parse_repeat_len(s: &str) -> Result<usize, String> {
    let n: usize = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;
    if n == 0 {
        return Err("repeat length must be at least 1".to_string());
    }
    Ok(n)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn parse_frame_accepts_valid_range() {
        for s in ["1", "2", "3"] {
            assert!(parse_frame(s).is_ok());
        }
    }

    #[test]
    fn parse_frame_rejects_invalid() {
        assert!(parse_frame("0").is_err());
        assert!(parse_frame("4").is_err());
        assert!(parse_frame("abc").is_err());
    }

    #[test]
    fn parse_repeat_len_rejects_zero() {
        assert!(parse_repeat_len("0").is_err());
        assert_eq!(parse_repeat_len("7").unwrap(), 7);
    }

    #[test]
    fn args_verify() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
