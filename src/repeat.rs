//! Repeat (k-mer) frequency analysis.
//!
//! Counts every overlapping window of a fixed length across all sequences
//! combined, then keeps only the windows seen more than once. The peak table
//! retains the entries sharing the maximum count.

use crate::fasta::SequenceCollection;
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;

/// The result of one repeat scan for a fixed window length `n`.
///
/// Counts are exact window-start counts, including the final window at
/// `len - n`; a sequence shorter than `n` contributes no windows. Each scan
/// yields a fresh table; the caller decides whether to keep results across
/// different `n` values.
#[derive(Debug, Clone)]
pub struct RepeatScan {
    n: usize,
    counts: FxHashMap<String, u32>,
    max_count: u32,
}

impl RepeatScan {
    /// Counts all length-`n` windows over the collection. `n` must be
    /// positive (validated by the engine).
    pub(crate) fn count(sequences: &SequenceCollection, n: usize) -> Self {
        let mut windows: FxHashMap<&[u8], u32> = FxHashMap::default();
        for (_, seq) in sequences.iter() {
            let bytes = seq.as_bytes();
            if bytes.len() < n {
                continue;
            }
            for window in bytes.windows(n) {
                *windows.entry(window).or_insert(0) += 1;
            }
        }

        // A window seen once is not a repeat.
        let counts: FxHashMap<String, u32> = windows
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(window, count)| (String::from_utf8_lossy(window).into_owned(), count))
            .collect();
        let max_count = counts.values().copied().max().unwrap_or(0);

        Self {
            n,
            counts,
            max_count,
        }
    }

    /// The window length this scan was computed for.
    #[must_use]
    pub const fn n(&self) -> usize {
        self.n
    }

    /// All repeats (count > 1) and their occurrence counts.
    #[must_use]
    pub const fn counts(&self) -> &FxHashMap<String, u32> {
        &self.counts
    }

    /// The highest occurrence count, or 0 if there are no repeats.
    #[must_use]
    pub const fn max_count(&self) -> u32 {
        self.max_count
    }

    /// The repeats sharing the maximum count, sorted for stable output.
    #[must_use]
    pub fn peak(&self) -> BTreeMap<&str, u32> {
        self.counts
            .iter()
            .filter(|(_, &count)| count == self.max_count)
            .map(|(window, &count)| (window.as_str(), count))
            .collect()
    }

    /// All repeats sorted by window, for stable output.
    #[must_use]
    pub fn sorted(&self) -> BTreeMap<&str, u32> {
        self.counts
            .iter()
            .map(|(window, &count)| (window.as_str(), count))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn collection(records: &[(&str, &str)]) -> SequenceCollection {
        let mut lines = Vec::new();
        for (id, seq) in records {
            lines.push(format!(">{id}"));
            lines.push((*seq).to_string());
        }
        SequenceCollection::parse_lines(lines.iter().map(String::as_str)).unwrap()
    }

    #[test]
    fn counts_overlapping_windows() {
        // AAAA with n=2: windows AA, AA, AA.
        let scan = RepeatScan::count(&collection(&[("s", "AAAA")]), 2);
        assert_eq!(scan.counts().get("AA"), Some(&3));
    }

    #[test]
    fn singletons_are_dropped() {
        let scan = RepeatScan::count(&collection(&[("s", "ATGCGTATGCGT")]), 3);

        // ATG at starts 0 and 6; TGC at 1 and 7; GCG at 2 and 8; CGT at 3
        // and 9; GTA and TAT only once each.
        assert_eq!(scan.counts().get("ATG"), Some(&2));
        assert_eq!(scan.counts().get("CGT"), Some(&2));
        assert_eq!(scan.counts().get("GTA"), None);
        assert_eq!(scan.counts().get("TAT"), None);
    }

    #[test]
    fn final_window_is_counted() {
        // CGTACG with n=3: the window at start 3 is "ACG"... and "CG" with
        // n=2 occurs at starts 0 and 4, the latter being the final window.
        let scan = RepeatScan::count(&collection(&[("s", "CGTACG")]), 2);
        assert_eq!(scan.counts().get("CG"), Some(&2));
    }

    #[test]
    fn counts_span_all_sequences() {
        let scan = RepeatScan::count(&collection(&[("a", "ATG"), ("b", "ATG")]), 3);
        assert_eq!(scan.counts().get("ATG"), Some(&2));
    }

    #[test]
    fn short_sequences_contribute_no_windows() {
        let scan = RepeatScan::count(&collection(&[("a", "AT"), ("b", "ATGATG")]), 3);
        assert_eq!(scan.counts().get("ATG"), Some(&2));
        assert_eq!(scan.counts().len(), 1);
    }

    #[test]
    fn peak_retains_all_ties_at_max() {
        // AA: 3 occurrences (AAAA), CC: 3 occurrences (CCCC), GG: 2.
        let scan = RepeatScan::count(&collection(&[("s", "AAAA"), ("t", "CCCC"), ("u", "GGG")]), 2);
        assert_eq!(scan.max_count(), 3);

        let peak = scan.peak();
        assert_eq!(peak.get("AA"), Some(&3));
        assert_eq!(peak.get("CC"), Some(&3));
        assert_eq!(peak.get("GG"), None);
    }

    #[test]
    fn no_repeats_means_empty_tables() {
        let scan = RepeatScan::count(&collection(&[("s", "ACGT")]), 3);
        assert!(scan.counts().is_empty());
        assert_eq!(scan.max_count(), 0);
        assert!(scan.peak().is_empty());
    }
}
