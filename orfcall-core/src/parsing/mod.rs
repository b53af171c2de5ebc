//! Readers for the files the gene caller leaves behind.
//!
//! - [`headers`]: gene coordinates from protein FASTA description lines
//! - [`features`]: per-sequence gene intervals from the GFF feature table
//!
//! Both readers check that their input exists before opening it and report
//! any line that does not match the caller's layout as
//! [`OrfCallError::MalformedLine`] with the file name and 1-based line number.

pub mod features;
pub mod headers;

use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::types::OrfCallError;

pub use features::GeneFeatureParser;
pub use headers::gene_positions;

/// Fail with [`OrfCallError::MissingInputFile`] unless `path` is an existing file
pub(crate) fn check_file_exists(path: &Path) -> Result<(), OrfCallError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(OrfCallError::MissingInputFile(path.to_path_buf()))
    }
}

/// Tokens of one input line, with enough context to report a bad field.
pub(crate) struct LineTokens<'a> {
    file: &'a Path,
    line: usize,
    tokens: Vec<&'a str>,
}

impl<'a> LineTokens<'a> {
    pub(crate) fn new(file: &'a Path, line: usize, tokens: Vec<&'a str>) -> Self {
        Self { file, line, tokens }
    }

    /// Error out unless there are at least `min` tokens
    pub(crate) fn require(self, min: usize, what: &str) -> Result<Self, OrfCallError> {
        if self.tokens.len() < min {
            return Err(self.malformed(format!(
                "expected at least {min} {what}, found {}",
                self.tokens.len()
            )));
        }
        Ok(self)
    }

    /// Raw token at `index`; callers must [`require`](Self::require) first
    pub(crate) fn get(&self, index: usize) -> &'a str {
        self.tokens[index]
    }

    /// Token at `index` parsed as `T`
    pub(crate) fn parse<T: FromStr>(&self, index: usize, name: &str) -> Result<T, OrfCallError> {
        let raw = self.get(index).trim();
        raw.parse()
            .map_err(|_| self.malformed(format!("{name} '{raw}' is not a valid number")))
    }

    /// Optional token at `index`
    pub(crate) fn optional(&self, index: usize) -> Option<&'a str> {
        self.tokens.get(index).copied()
    }

    pub(crate) fn malformed(&self, reason: String) -> OrfCallError {
        OrfCallError::MalformedLine {
            file: PathBuf::from(self.file),
            line: self.line,
            reason,
        }
    }
}
