use crate::bitmap::{bytes_for_bits, count_range, set_range, test_bit};
use crate::types::GeneInterval;

/// Dense per-base coverage of one sequence by its called genes.
///
/// Bit `p` is set when at least one gene covers base `p` (1-based caller
/// coordinates are used directly as indices, so bit 0 is never set by real
/// caller output). Overlapping genes are merged: coverage is a union.
///
/// # Examples
///
/// ```rust
/// use orfcall_core::mask::CodingBaseMask;
/// use orfcall_core::types::GeneInterval;
///
/// let genes = [(2, 5), (4, 8)].map(|(start, end)| GeneInterval {
///     seq_id: "s".to_string(),
///     index: 0,
///     start,
///     end,
///     strand: None,
/// });
/// let mask = CodingBaseMask::build(&genes, 8);
///
/// assert_eq!(mask.len(), 9);
/// assert_eq!(mask.count(2, 9), 7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodingBaseMask {
    bits: Vec<u8>,
    len: usize,
}

impl CodingBaseMask {
    /// Build the mask for `genes`, sized to cover positions `0..=last_coding_base`.
    ///
    /// Runs in time proportional to the total gene length. Memory is one bit
    /// per position, so callers bound `last_coding_base` first (the feature
    /// parser rejects ends past [`MAX_SEQUENCE_LENGTH`](crate::constants::MAX_SEQUENCE_LENGTH)).
    pub fn build(genes: &[GeneInterval], last_coding_base: u64) -> Self {
        let len = to_index(last_coding_base).saturating_add(1);
        let mut bits = vec![0u8; bytes_for_bits(len)];

        for gene in genes {
            let end = to_index(gene.end).saturating_add(1).min(len);
            set_range(&mut bits, to_index(gene.start), end);
        }

        Self { bits, len }
    }

    /// Number of positions in the mask (`last_coding_base + 1`)
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether base `position` is covered by a gene; positions past the mask are not
    pub fn is_coding(&self, position: u64) -> bool {
        let position = to_index(position);
        position < self.len && test_bit(&self.bits, position)
    }

    /// Coding bases in `start..end`, with `end` exclusive and clamped to the mask
    pub fn count(&self, start: u64, end: u64) -> u64 {
        let end = to_index(end).min(self.len);
        let start = to_index(start);
        count_range(&self.bits, start, end) as u64
    }

    /// Coding bases over the whole mask
    pub fn count_ones(&self) -> u64 {
        self.count(0, self.len as u64)
    }
}

/// Coordinate as a bit index, saturating on targets where `usize` is narrower
fn to_index(coordinate: u64) -> usize {
    usize::try_from(coordinate).unwrap_or(usize::MAX)
}
