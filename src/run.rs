//! Pipeline glue: parse input, build the engine, run the requested scans,
//! render the report.

use crate::{
    cli::{Args, OutputFormat},
    error::SeqStatsError,
    fasta::SequenceCollection,
    report::{OrfReport, RepeatReport, Report, SequenceReport},
    stats::SeqStats,
};
use std::{
    io::{stdout, BufWriter, Write},
    path::Path,
};
use tracing::info;

/// Runs one full invocation against parsed CLI arguments.
///
/// # Errors
///
/// Propagates parse (fatal), lookup, and output errors; see
/// [`SeqStatsError`] for the taxonomy.
pub fn run(args: &Args) -> Result<(), SeqStatsError> {
    let sequences = load(args.path.as_deref())?;
    info!(records = sequences.len(), "parsed FASTA input");

    let stats = SeqStats::new(&sequences);

    let orf_scan = stats.find_orfs(args.frame);
    info!(
        frame = args.frame.get(),
        orfs = orf_scan.total(),
        "ORF scan complete"
    );
    let per_sequence = match args.orf_id.as_deref() {
        Some(id) => orf_scan.longest_in(id)?,
        None => None,
    };

    let repeat_scan = match args.repeat_len {
        Some(n) => {
            let scan = stats.repeats(n)?;
            info!(n, repeats = scan.counts().len(), "repeat scan complete");
            Some(scan)
        }
        None => None,
    };

    let report = Report {
        sequences: SequenceReport::from_stats(&stats),
        orfs: Some(OrfReport::from_scan(&orf_scan, per_sequence.as_ref())),
        repeats: repeat_scan.as_ref().map(RepeatReport::from_scan),
    };

    let mut out = BufWriter::new(stdout());
    match args.format {
        OutputFormat::Text => report.write_text(&mut out)?,
        OutputFormat::Json => report.write_json(&mut out)?,
    }

    out.flush()?;
    Ok(())
}

fn load(path: Option<&Path>) -> Result<SequenceCollection, SeqStatsError> {
    match path {
        Some(path) => SequenceCollection::from_path(path),
        None => SequenceCollection::from_reader(std::io::stdin().lock()),
    }
}
