use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::constants::{FASTA_HEADER_PREFIX, MIN_HEADER_TOKENS};
use crate::parsing::{LineTokens, check_file_exists};
use crate::types::{GenePosition, OrfCallError};

/// Read gene coordinates from the description lines of a protein FASTA file.
///
/// The gene caller writes headers of the form
/// `>contig_1_1 # 337 # 2799 # 1 # ID=1_1;partial=00;...`, i.e. whitespace
/// tokens where token 0 is the gene id, token 2 the start and token 4 the end.
/// Sequence lines are ignored. A gene id seen twice keeps the later coordinates.
///
/// # Errors
///
/// - [`OrfCallError::MissingInputFile`] if `path` does not exist
/// - [`OrfCallError::MalformedLine`] for a header with fewer than five tokens or
///   non-numeric coordinates
///
/// # Examples
///
/// ```rust,no_run
/// use orfcall_core::parsing::gene_positions;
///
/// let positions = gene_positions("bins/bin_1/genes.faa")?;
/// if let Some(pos) = positions.get("contig_1_1") {
///     println!("contig_1_1 spans {pos}");
/// }
/// # Ok::<(), orfcall_core::types::OrfCallError>(())
/// ```
pub fn gene_positions<P: AsRef<Path>>(
    path: P,
) -> Result<HashMap<String, GenePosition>, OrfCallError> {
    let path = path.as_ref();
    check_file_exists(path)?;

    let reader = BufReader::new(File::open(path)?);
    let mut positions = HashMap::new();

    for (line_index, line) in reader.lines().enumerate() {
        let line = line?;
        let Some(header) = line.strip_prefix(FASTA_HEADER_PREFIX) else {
            continue;
        };

        let tokens = LineTokens::new(path, line_index + 1, header.split_whitespace().collect())
            .require(MIN_HEADER_TOKENS, "header tokens")?;
        let start = tokens.parse::<u64>(2, "start")?;
        let end = tokens.parse::<u64>(4, "end")?;

        positions.insert(tokens.get(0).to_string(), GenePosition { start, end });
    }

    debug!("Read {} gene positions from {}", positions.len(), path.display());
    Ok(positions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_fasta(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_single_header() {
        let file = write_fasta(">gene1 # 10 # 50 # 1 # note\nMKV*\n");
        let positions = gene_positions(file.path()).unwrap();

        assert_eq!(positions.len(), 1);
        assert_eq!(positions["gene1"], GenePosition { start: 10, end: 50 });
    }

    #[test]
    fn test_caller_style_headers() {
        let content = "\
>NC_000913.3_1 # 337 # 2799 # 1 # ID=1_1;partial=00;start_type=ATG;rbs_motif=AGGAG;rbs_spacer=5-10bp;gc_cont=0.531
MRVLKFGGTSVANAERFLRVADILESNARQ*
>NC_000913.3_2 # 2801 # 3733 # 1 # ID=1_2;partial=00;start_type=ATG;rbs_motif=GGAG/GAGG;rbs_spacer=5-10bp;gc_cont=0.563
MVKVYAPASSANMSVGFDVLGAAVTPVDGA*
>NC_000913.3_3 # 5683 # 6459 # -1 # ID=1_3;partial=00;start_type=ATG;rbs_motif=None;rbs_spacer=None;gc_cont=0.533
MLILISPAKTLDYQSPLTTTRYTLPELLDN*
";
        let file = write_fasta(content);
        let positions = gene_positions(file.path()).unwrap();

        assert_eq!(positions.len(), 3);
        assert_eq!(positions["NC_000913.3_1"], GenePosition::from((337, 2799)));
        assert_eq!(positions["NC_000913.3_2"], GenePosition::from((2801, 3733)));
        assert_eq!(positions["NC_000913.3_3"], GenePosition::from((5683, 6459)));
    }

    #[test]
    fn test_duplicate_gene_id_last_write_wins() {
        let file = write_fasta(">g # 1 # 9 # 1 # x\nM*\n>g # 20 # 30 # -1 # y\nM*\n");
        let positions = gene_positions(file.path()).unwrap();

        assert_eq!(positions.len(), 1);
        assert_eq!(positions["g"], GenePosition::from((20, 30)));
    }

    #[test]
    fn test_empty_file() {
        let file = write_fasta("");
        assert!(gene_positions(file.path()).unwrap().is_empty());
    }

    #[test]
    fn test_missing_file() {
        let result = gene_positions("no_such_dir/genes.faa");
        assert!(matches!(result, Err(OrfCallError::MissingInputFile(_))));
    }

    #[test]
    fn test_too_few_tokens() {
        let file = write_fasta(">ok # 1 # 9 # 1 # x\nM*\n>short # 5\nM*\n");
        match gene_positions(file.path()) {
            Err(OrfCallError::MalformedLine { file: name, line, reason }) => {
                assert_eq!(name, file.path());
                assert_eq!(line, 3);
                assert!(reason.contains("found 3"), "{reason}");
            }
            other => panic!("Expected MalformedLine, got {other:?}"),
        }
    }

    #[test]
    fn test_non_numeric_coordinate() {
        let file = write_fasta(">gene1 # ten # 50 # 1 # note\n");
        match gene_positions(file.path()) {
            Err(OrfCallError::MalformedLine { line, reason, .. }) => {
                assert_eq!(line, 1);
                assert!(reason.starts_with("start 'ten'"), "{reason}");
            }
            other => panic!("Expected MalformedLine, got {other:?}"),
        }
    }
}
