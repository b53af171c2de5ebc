#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Header block the gene caller writes before the first feature line
pub const GFF_PREAMBLE: &str = "##gff-version  3\n\
# Sequence Data: seqnum=1;seqlen=9000;seqhdr=\"contig_1\"\n\
# Model Data: version=Prodigal.v2.6.3;run_type=Metagenomic;model=\"13|Escherichia_coli_K12|B|50.8|11|1\";gc_cont=50.80;transl_table=11;uses_sd=1\n";

/// One CDS line in the caller's GFF layout
pub fn gff_line(seq_id: &str, start: u64, end: u64, strand: char) -> String {
    format!(
        "{seq_id}\tProdigal_v2.6.3\tCDS\t{start}\t{end}\t52.3\t{strand}\t0\tID=1_1;partial=00;start_type=ATG;\n"
    )
}

/// One protein FASTA record in the caller's header layout
pub fn faa_record(gene_id: &str, start: u64, end: u64, strand: i8) -> String {
    format!(">{gene_id} # {start} # {end} # {strand} # ID=1_1;partial=00\nMKLV*\n")
}

/// Temporary directory holding fixture files
pub struct Fixture {
    dir: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}
