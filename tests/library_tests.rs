//! Direct library API tests.
//!
//! These tests call the library functions directly without going through the
//! CLI, enabling more precise assertions about behavior and return values.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use seqstats::{
    ReadingFrame, SeqStats, SeqStatsError, SequenceCollection, UnterminatedOrfs,
};
use std::io::Write;
use tempfile::NamedTempFile;

/// Creates a temporary FASTA file with the given content and returns it.
fn temp_fasta(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write temp file");
    file.flush().expect("Failed to flush temp file");
    file
}

fn frame(n: u8) -> ReadingFrame {
    ReadingFrame::new(n).unwrap()
}

#[test]
fn parse_from_file() {
    let fasta = temp_fasta(">seq1\nACGT\nACGT\n>seq2\nGATTACA\n");
    let sequences = SequenceCollection::from_path(fasta.path()).unwrap();

    assert_eq!(sequences.len(), 2);
    assert_eq!(sequences.get("seq1"), Some("ACGTACGT"));
    assert_eq!(sequences.get("seq2"), Some("GATTACA"));
}

#[test]
fn parse_missing_file_is_read_error() {
    let err = SequenceCollection::from_path("/nonexistent/path/to/file.fa").unwrap_err();
    assert!(matches!(err, SeqStatsError::SequenceRead { .. }));
}

#[test]
fn parse_fixture_identifiers_match_headers() {
    let sequences = SequenceCollection::from_path("tests/fixtures/simple.fa").unwrap();
    let ids: Vec<&str> = sequences.iter().map(|(id, _)| id).collect();
    // Header description text after the identifier token is ignored.
    assert_eq!(ids, ["seq1", "seq2", "seq3"]);
}

#[test]
fn parse_empty_file_is_no_sequences() {
    let fasta = temp_fasta("");
    let err = SequenceCollection::from_path(fasta.path()).unwrap_err();
    assert!(matches!(err, SeqStatsError::NoSequences));
}

#[test]
fn parse_duplicate_header_fixture_fails() {
    let err = SequenceCollection::from_path("tests/fixtures/duplicate.fa").unwrap_err();
    assert!(matches!(err, SeqStatsError::DuplicateHeader { .. }));
}

#[test]
fn parse_headerless_fixture_fails() {
    let err = SequenceCollection::from_path("tests/fixtures/headerless.fa").unwrap_err();
    assert!(matches!(err, SeqStatsError::DataBeforeHeader { line: 1 }));
}

#[test]
fn length_statistics_over_fixture() {
    let sequences = SequenceCollection::from_path("tests/fixtures/simple.fa").unwrap();
    let stats = SeqStats::new(&sequences);

    assert_eq!(stats.num_records(), 3);
    assert_eq!(stats.length_of("seq1"), Some(21));
    assert_eq!(stats.length_of("seq2"), Some(3));
    assert_eq!(stats.length_of("seq3"), Some(11));
    assert_eq!(stats.longest().length, 21);
    assert_eq!(stats.longest().ids, ["seq1"]);
    assert_eq!(stats.shortest().length, 3);
    assert_eq!(stats.shortest().ids, ["seq2"]);
}

#[test]
fn orf_scan_frame_one_over_fixture() {
    let sequences = SequenceCollection::from_path("tests/fixtures/simple.fa").unwrap();
    let stats = SeqStats::new(&sequences);
    let scan = stats.find_orfs(frame(1));

    // seq1 holds two back-to-back ORFs; seq2 has a bare start codon; seq3
    // has no in-frame start in frame 1.
    assert_eq!(scan.orfs("seq1").unwrap(), ["ATGAAATAG", "ATGCCCTGA"]);
    assert!(scan.orfs("seq2").unwrap().is_empty());
    assert!(scan.orfs("seq3").unwrap().is_empty());
    assert_eq!(scan.total(), 2);

    // Equal-length tie within seq1: first-seen wins.
    let longest = scan.longest().unwrap();
    assert_eq!(longest.id, "seq1");
    assert_eq!(longest.orf, "ATGAAATAG");
}

#[test]
fn orf_scan_frame_three_finds_offset_orf() {
    let sequences = SequenceCollection::from_path("tests/fixtures/simple.fa").unwrap();
    let stats = SeqStats::new(&sequences);
    let scan = stats.find_orfs(frame(3));

    assert_eq!(scan.orfs("seq3").unwrap(), ["ATGAAATAG"]);

    let record = scan.longest_in("seq3").unwrap().unwrap();
    assert_eq!(record.orf, "ATGAAATAG");
    assert_eq!(record.start, Some(3));
}

#[test]
fn orf_scans_for_two_frames_coexist() {
    // Each scan is an independent result; computing frame 3 does not
    // invalidate the frame 1 scan.
    let sequences = SequenceCollection::from_path("tests/fixtures/simple.fa").unwrap();
    let stats = SeqStats::new(&sequences);

    let first = stats.find_orfs(frame(1));
    let third = stats.find_orfs(frame(3));

    assert_eq!(first.total(), 2);
    assert_eq!(third.orfs("seq3").unwrap().len(), 1);
    assert_eq!(first.orfs("seq1").unwrap().len(), 2);
}

#[test]
fn unterminated_policy_keep_vs_discard() {
    let fasta = temp_fasta(">s\nATGAAACCC\n");
    let sequences = SequenceCollection::from_path(fasta.path()).unwrap();
    let stats = SeqStats::new(&sequences);

    let discarded = stats.find_orfs_with(frame(1), UnterminatedOrfs::Discard);
    assert!(discarded.orfs("s").unwrap().is_empty());

    let kept = stats.find_orfs_with(frame(1), UnterminatedOrfs::Keep);
    assert_eq!(kept.orfs("s").unwrap(), ["ATGAAACCC"]);
}

#[test]
fn repeat_scan_matches_literal_enumeration() {
    let sequences = SequenceCollection::from_path("tests/fixtures/repeats.fa").unwrap();
    let stats = SeqStats::new(&sequences);
    let scan = stats.repeats(3).unwrap();

    // ATGCGTATGCGT: sliding 3-windows at starts 0..=9.
    // ATG @ 0,6; TGC @ 1,7; GCG @ 2,8; CGT @ 3,9; GTA @ 4; TAT @ 5.
    assert_eq!(scan.counts().get("ATG"), Some(&2));
    assert_eq!(scan.counts().get("TGC"), Some(&2));
    assert_eq!(scan.counts().get("GCG"), Some(&2));
    assert_eq!(scan.counts().get("CGT"), Some(&2));
    assert_eq!(scan.counts().len(), 4);
    assert_eq!(scan.max_count(), 2);
    assert_eq!(scan.peak().len(), 4);
}

#[test]
fn repeat_scans_for_two_lengths_coexist() {
    let sequences = SequenceCollection::from_path("tests/fixtures/repeats.fa").unwrap();
    let stats = SeqStats::new(&sequences);

    let three = stats.repeats(3).unwrap();
    let six = stats.repeats(6).unwrap();

    assert_eq!(three.n(), 3);
    assert_eq!(six.n(), 6);
    // ATGCGT occurs at starts 0 and 6.
    assert_eq!(six.counts().get("ATGCGT"), Some(&2));
    assert_eq!(three.counts().get("ATG"), Some(&2));
}

#[test]
fn repeat_length_longer_than_all_sequences_yields_empty() {
    let sequences = SequenceCollection::from_path("tests/fixtures/repeats.fa").unwrap();
    let stats = SeqStats::new(&sequences);
    let scan = stats.repeats(100).unwrap();
    assert!(scan.counts().is_empty());
}
