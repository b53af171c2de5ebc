use std::fmt;
use std::path::PathBuf;
use std::process::ExitStatus;

use bio::bio_types::strand::Strand;
use thiserror::Error;

/// A single predicted gene on one sequence, as listed in the feature table.
///
/// Coordinates are 1-based and inclusive on both ends, exactly as the gene
/// caller writes them.
///
/// # Examples
///
/// ```rust
/// use orfcall_core::types::GeneInterval;
/// use bio::bio_types::strand::Strand;
///
/// let gene = GeneInterval {
///     seq_id: "contig_7".to_string(),
///     index: 2,
///     start: 337,
///     end: 2799,
///     strand: Some(Strand::Forward),
/// };
/// assert_eq!(gene.gene_id(), "contig_7_2");
/// assert_eq!(gene.length(), 2463);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GeneInterval {
    /// Identifier of the sequence the gene was called on (GFF column 1)
    pub seq_id: String,
    /// Zero-based position of this gene among the genes of its sequence
    pub index: usize,
    /// First base of the gene (inclusive)
    pub start: u64,
    /// Last base of the gene (inclusive)
    pub end: u64,
    /// Strand from GFF column 7, `None` when absent or not `+`/`-`.
    ///
    /// `Strand::Unknown` never equals itself, so it is not stored here.
    pub strand: Option<Strand>,
}

impl GeneInterval {
    /// Composite identifier `seqId_index`, unique across the whole feature table.
    #[must_use]
    pub fn gene_id(&self) -> String {
        format!("{}_{}", self.seq_id, self.index)
    }

    /// Number of bases covered by the gene.
    #[must_use]
    pub const fn length(&self) -> u64 {
        self.end - self.start + 1
    }

    /// Whether `position` lies inside the gene.
    #[must_use]
    pub const fn contains(&self, position: u64) -> bool {
        self.start <= position && position <= self.end
    }
}

/// Start and end coordinates recovered from a protein FASTA header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenePosition {
    pub start: u64,
    pub end: u64,
}

impl From<(u64, u64)> for GenePosition {
    fn from((start, end): (u64, u64)) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for GenePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Error types raised while calling genes or reading the caller's output
#[derive(Error, Debug)]
pub enum OrfCallError {
    /// An expected input file does not exist
    #[error("Input file does not exist: {}", .0.display())]
    MissingInputFile(PathBuf),
    /// A line does not have the token layout the gene caller emits
    #[error("Malformed line {line} in {}: {reason}", .file.display())]
    MalformedLine {
        file: PathBuf,
        line: usize,
        reason: String,
    },
    /// File I/O operation failed
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    /// Error parsing FASTA input
    #[error("Parse error: {0}")]
    ParseError(String),
    /// Translation table is not one the gene caller supports
    #[error("Invalid translation table: {0}")]
    InvalidTranslationTable(u8),
    /// Gene caller executable could not be found on PATH
    #[error("Gene caller '{0}' not found, make sure it is on your system path")]
    ProgramNotFound(String),
    /// Gene caller ran but exited unsuccessfully
    #[error("Gene caller failed ({status}): {stderr}")]
    CallerFailed { status: ExitStatus, stderr: String },
}
