use std::fs::File;
use std::path::Path;

use bio::io::fasta;

use crate::parsing::check_file_exists;
use crate::types::OrfCallError;

/// Total number of bases over every record of a nucleotide FASTA file
pub fn count_fasta_bases<P: AsRef<Path>>(path: P) -> Result<u64, OrfCallError> {
    let path = path.as_ref();
    check_file_exists(path)?;

    let reader = fasta::Reader::new(File::open(path)?);
    let mut total = 0u64;

    for result in reader.records() {
        let record = result.map_err(|e| OrfCallError::ParseError(e.to_string()))?;
        total += record.seq().len() as u64;
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_count_fasta_bases_multiline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bin.fna");
        fs::write(&path, ">contig_1 len=8\nATCG\nGCTA\n>contig_2\nTTAA\n").unwrap();

        assert_eq!(count_fasta_bases(&path).unwrap(), 12);
    }

    #[test]
    fn test_count_fasta_bases_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.fna");
        fs::write(&path, "").unwrap();

        assert_eq!(count_fasta_bases(&path).unwrap(), 0);
    }

    #[test]
    fn test_count_fasta_bases_file_not_found() {
        match count_fasta_bases("nonexistent_file.fa") {
            Err(OrfCallError::MissingInputFile(_)) => {}
            other => panic!("Expected MissingInputFile, got {other:?}"),
        }
    }

    #[test]
    fn test_count_fasta_bases_invalid_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("invalid.fa");
        fs::write(&path, "ATCG\n").unwrap();

        assert!(matches!(
            count_fasta_bases(&path),
            Err(OrfCallError::ParseError(_))
        ));
    }
}
