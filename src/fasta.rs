//! Multi-FASTA parsing.
//!
//! Consumes line-oriented FASTA text and produces a [`SequenceCollection`]:
//! an ordered, immutable mapping from sequence identifier to concatenated
//! nucleotide string. The identifier is the first whitespace-delimited token
//! of the header line with the `>` marker stripped; everything else on the
//! header line is ignored.

use crate::error::SeqStatsError;
use rustc_hash::FxHashMap;
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

/// First byte of a FASTA header line.
pub const HEADER_MARKER: char = '>';

/// A single FASTA record: identifier plus concatenated sequence data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: String,
    pub seq: String,
}

/// An ordered collection of parsed FASTA records.
///
/// Records keep their input order; identifiers are unique (a duplicate
/// header is a parse error). The collection is immutable once built.
#[derive(Debug, Clone, Default)]
pub struct SequenceCollection {
    records: Vec<Record>,
    index: FxHashMap<String, usize>,
}

impl SequenceCollection {
    /// Parses a FASTA file at `path`. A path of `-` reads stdin instead.
    ///
    /// # Errors
    ///
    /// Returns [`SeqStatsError::SequenceRead`] if the file cannot be opened
    /// or read, or a format error from [`Self::parse_lines`].
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, SeqStatsError> {
        let path = path.as_ref();
        if path.as_os_str() == "-" {
            return Self::from_reader(std::io::stdin().lock());
        }
        let file = File::open(path).map_err(|source| SeqStatsError::SequenceRead {
            source,
            path: path.to_path_buf(),
        })?;
        let lines: Vec<String> = BufReader::new(file)
            .lines()
            .collect::<Result<_, _>>()
            .map_err(|source| SeqStatsError::SequenceRead {
                source,
                path: path.to_path_buf(),
            })?;
        Self::parse_lines(lines.iter().map(String::as_str))
    }

    /// Parses FASTA text from any buffered reader (stdin, pipes, tests).
    ///
    /// # Errors
    ///
    /// Returns [`SeqStatsError::StreamRead`] on I/O failure, or a format
    /// error from [`Self::parse_lines`].
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, SeqStatsError> {
        let lines: Vec<String> = reader
            .lines()
            .collect::<Result<_, _>>()
            .map_err(|source| SeqStatsError::StreamRead { source })?;
        Self::parse_lines(lines.iter().map(String::as_str))
    }

    /// Parses FASTA records from lines already stripped of their newlines.
    ///
    /// A line starting with `>` opens a record named by the first
    /// whitespace-delimited token (marker stripped); any other line is
    /// appended verbatim to the record under construction. Blank lines are
    /// zero-length appends.
    ///
    /// # Errors
    ///
    /// - [`SeqStatsError::DataBeforeHeader`] if a non-header line precedes
    ///   any header.
    /// - [`SeqStatsError::DuplicateHeader`] if an identifier repeats.
    /// - [`SeqStatsError::NoSequences`] if no records were found.
    pub fn parse_lines<'a, I>(lines: I) -> Result<Self, SeqStatsError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut collection = Self::default();
        let mut current: Option<usize> = None;

        for (lineno, line) in lines.into_iter().enumerate() {
            if line.starts_with(HEADER_MARKER) {
                let token = line.split_whitespace().next().unwrap_or(line);
                let id = &token[HEADER_MARKER.len_utf8()..];
                if collection.index.contains_key(id) {
                    return Err(SeqStatsError::DuplicateHeader { id: id.to_string() });
                }
                collection.index.insert(id.to_string(), collection.records.len());
                collection.records.push(Record {
                    id: id.to_string(),
                    seq: String::new(),
                });
                current = Some(collection.records.len() - 1);
            } else {
                let Some(at) = current else {
                    return Err(SeqStatsError::DataBeforeHeader { line: lineno + 1 });
                };
                collection.records[at].seq.push_str(line);
            }
        }

        if collection.records.is_empty() {
            return Err(SeqStatsError::NoSequences);
        }
        Ok(collection)
    }

    /// Number of records in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Looks up a sequence by identifier.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&str> {
        self.index.get(id).map(|&at| self.records[at].seq.as_str())
    }

    /// Iterates `(identifier, sequence)` pairs in input order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.records.iter().map(|r| (r.id.as_str(), r.seq.as_str()))
    }
}
