use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use bio::bio_types::strand::Strand;
use log::debug;
use rayon::prelude::*;

use crate::constants::{FEATURE_COMMENT_PREFIX, MAX_SEQUENCE_LENGTH, MIN_FEATURE_COLUMNS};
use crate::mask::CodingBaseMask;
use crate::parsing::{LineTokens, check_file_exists};
use crate::types::{GeneInterval, OrfCallError};

/// Genes read from the gene caller's GFF feature table, with a coding-base
/// mask for every sequence that has at least one gene.
///
/// Each non-comment line contributes one [`GeneInterval`]: column 1 is the
/// sequence id, columns 4 and 5 the inclusive start and end. Genes are
/// numbered per sequence in file order, so interleaved input such as
/// `A, A, B, A` yields `A_0, A_1, B_0, A_2`.
///
/// # Examples
///
/// ```rust,no_run
/// use orfcall_core::parsing::GeneFeatureParser;
///
/// let parser = GeneFeatureParser::from_path("bins/bin_1/genes.gff")?;
/// for seq_id in parser.sequence_ids() {
///     println!("{seq_id}: {} coding bases", parser.coding_bases(seq_id, 0, None));
/// }
/// # Ok::<(), orfcall_core::types::OrfCallError>(())
/// ```
#[derive(Debug, Default)]
pub struct GeneFeatureParser {
    /// Genes per sequence in discovery order
    genes: HashMap<String, Vec<GeneInterval>>,
    /// Largest gene end seen per sequence
    last_coding_base: HashMap<String, u64>,
    /// Sequence ids in order of first appearance
    sequence_ids: Vec<String>,
    masks: HashMap<String, CodingBaseMask>,
}

impl GeneFeatureParser {
    /// Parse the feature table at `path` and build all coding-base masks.
    ///
    /// # Errors
    ///
    /// - [`OrfCallError::MissingInputFile`] if `path` does not exist
    /// - [`OrfCallError::MalformedLine`] for a line with fewer than five
    ///   columns, non-numeric coordinates, a start past its end, or an end
    ///   beyond [`MAX_SEQUENCE_LENGTH`]
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, OrfCallError> {
        let path = path.as_ref();
        check_file_exists(path)?;
        let reader = BufReader::new(File::open(path)?);
        Self::from_reader(path, reader)
    }

    /// Parse a feature table from any buffered reader.
    ///
    /// `source` names the input in error messages.
    pub fn from_reader<R: BufRead>(source: &Path, reader: R) -> Result<Self, OrfCallError> {
        let mut parser = Self::default();

        for (line_index, line) in reader.lines().enumerate() {
            let line = line?;
            if line.starts_with(FEATURE_COMMENT_PREFIX) || line.trim().is_empty() {
                continue;
            }
            let tokens = LineTokens::new(source, line_index + 1, line.split('\t').collect())
                .require(MIN_FEATURE_COLUMNS, "columns")?;
            parser.add_gene(&tokens)?;
        }

        parser.build_masks();
        debug!(
            "Read {} genes on {} sequences from {}",
            parser.gene_count(),
            parser.sequence_ids.len(),
            source.display()
        );
        Ok(parser)
    }

    fn add_gene(&mut self, tokens: &LineTokens<'_>) -> Result<(), OrfCallError> {
        let seq_id = tokens.get(0);
        let start = tokens.parse::<u64>(3, "start")?;
        let end = tokens.parse::<u64>(4, "end")?;
        if start > end {
            return Err(tokens.malformed(format!("start {start} is past end {end}")));
        }
        if end > MAX_SEQUENCE_LENGTH {
            return Err(tokens.malformed(format!(
                "end {end} exceeds the maximum sequence length {MAX_SEQUENCE_LENGTH}"
            )));
        }
        let strand = match tokens.optional(6).map(str::trim) {
            Some("+") => Some(Strand::Forward),
            Some("-") => Some(Strand::Reverse),
            _ => None,
        };

        if !self.genes.contains_key(seq_id) {
            self.sequence_ids.push(seq_id.to_string());
        }
        let genes = self.genes.entry(seq_id.to_string()).or_default();
        genes.push(GeneInterval {
            seq_id: seq_id.to_string(),
            index: genes.len(),
            start,
            end,
            strand,
        });

        let last = self.last_coding_base.entry(seq_id.to_string()).or_insert(0);
        *last = (*last).max(end);
        Ok(())
    }

    fn build_masks(&mut self) {
        let last_coding_base = &self.last_coding_base;
        self.masks = self
            .genes
            .par_iter()
            .map(|(seq_id, genes)| {
                let mask = CodingBaseMask::build(genes, last_coding_base[seq_id]);
                (seq_id.clone(), mask)
            })
            .collect();
    }

    /// Coding bases of `seq_id` in `start..end` (end exclusive).
    ///
    /// `end` defaults to the sequence's last coding base, so the default range
    /// stops one short of that base. Sequences without genes have no coding
    /// bases.
    pub fn coding_bases(&self, seq_id: &str, start: u64, end: Option<u64>) -> u64 {
        let (Some(mask), Some(&last)) = (self.masks.get(seq_id), self.last_coding_base.get(seq_id))
        else {
            return 0;
        };
        mask.count(start, end.unwrap_or(last))
    }

    /// Sum of [`coding_bases`](Self::coding_bases) over every sequence with default range
    pub fn total_coding_bases(&self) -> u64 {
        self.sequence_ids
            .iter()
            .map(|seq_id| self.coding_bases(seq_id, 0, None))
            .sum()
    }

    /// Genes of `seq_id` in file order
    pub fn genes(&self, seq_id: &str) -> Option<&[GeneInterval]> {
        self.genes.get(seq_id).map(Vec::as_slice)
    }

    /// Largest gene end on `seq_id`
    pub fn last_coding_base(&self, seq_id: &str) -> Option<u64> {
        self.last_coding_base.get(seq_id).copied()
    }

    pub fn mask(&self, seq_id: &str) -> Option<&CodingBaseMask> {
        self.masks.get(seq_id)
    }

    /// Sequence ids with at least one gene, in order of first appearance
    pub fn sequence_ids(&self) -> impl Iterator<Item = &str> {
        self.sequence_ids.iter().map(String::as_str)
    }

    pub fn gene_count(&self) -> usize {
        self.genes.values().map(Vec::len).sum()
    }

    /// All genes, grouped by sequence in order of first appearance
    pub fn iter_genes(&self) -> impl Iterator<Item = &GeneInterval> {
        self.sequence_ids
            .iter()
            .filter_map(|seq_id| self.genes.get(seq_id))
            .flatten()
    }
}
