// =============================================================================
// Gene caller
// =============================================================================

/// Executable invoked by the runner when no other program is configured
pub const DEFAULT_PROGRAM: &str = "prodigal";

/// Bacterial/archaeal genetic code
pub const DEFAULT_TRANSLATION_TABLE: u8 = 11;

/// Inputs with fewer bases than this cannot train an ORF model, so the
/// caller is run with preset (meta) parameters instead
pub const META_MODE_THRESHOLD: u64 = 100_000;

// =============================================================================
// Output files
// =============================================================================

/// Protein translations of called genes
pub const PROTEIN_GENE_FILE: &str = "genes.faa";

/// Nucleotide sequences of called genes
pub const NUCLEOTIDE_GENE_FILE: &str = "genes.fna";

/// Feature table of called genes
pub const FEATURE_FILE: &str = "genes.gff";

// =============================================================================
// Parsing
// =============================================================================

/// Marks a FASTA description line
pub const FASTA_HEADER_PREFIX: char = '>';

/// Marks a comment or directive line in the feature table
pub const FEATURE_COMMENT_PREFIX: char = '#';

/// Minimum whitespace tokens in a header: id, '#', start, '#', end
pub const MIN_HEADER_TOKENS: usize = 5;

/// Minimum tab-separated columns in a feature line: seqid .. end
pub const MIN_FEATURE_COLUMNS: usize = 5;

/// Longest sequence the gene caller accepts; larger coordinates are rejected
/// before a mask is sized from them
pub const MAX_SEQUENCE_LENGTH: u64 = 32_000_000;
