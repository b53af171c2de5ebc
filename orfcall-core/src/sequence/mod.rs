//! Nucleotide input handling for the gene caller.

pub mod io;

pub use io::count_fasta_bases;
