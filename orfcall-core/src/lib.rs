//! # orfcall - gene caller output parsing
//!
//! Runs an external prokaryotic gene caller (Prodigal) on a nucleotide FASTA
//! file and reads what it leaves behind into positional data that outer
//! pipelines can query cheaply.
//!
//! ## Overview
//!
//! The gene caller writes a protein FASTA whose headers carry each gene's
//! coordinates and a GFF feature table with one line per gene. This crate
//! offers:
//!
//! - **Gene positions**: gene id to `(start, end)` from the FASTA headers
//! - **Gene features**: per-sequence gene intervals from the feature table
//! - **Coding-base masks**: per-base coverage of each sequence by its genes,
//!   answering "how many coding bases lie in this range?" queries
//! - **Runner**: invokes the caller, switching to preset (meta) parameters for
//!   inputs below 100 kb
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use orfcall_core::parsing::{GeneFeatureParser, gene_positions};
//!
//! let features = GeneFeatureParser::from_path("out/genes.gff")?;
//! let coding = features.coding_bases("contig_1", 0, Some(10_000));
//! println!("{coding} coding bases in the first 10 kb of contig_1");
//!
//! let positions = gene_positions("out/genes.faa")?;
//! println!("{} genes called", positions.len());
//! # Ok::<(), orfcall_core::types::OrfCallError>(())
//! ```
//!
//! ## Coordinates
//!
//! Gene intervals are stored exactly as the caller emits them: 1-based and
//! inclusive. Range queries use half-open `start..end` over those same
//! coordinates, and the default query end is the last coding base of the
//! sequence, which is therefore not counted.
//!
//! ## Module Organization
//!
//! - [`config`]: Gene caller configuration and mode selection
//! - [`runner`]: Gene caller invocation
//! - [`parsing`]: FASTA header and feature table readers
//! - [`mask`]: Coding-base masks
//! - [`bitmap`]: Packed bit operations backing the masks
//! - [`sequence`]: Nucleotide FASTA utilities
//! - [`types`]: Core data types and the crate error
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T, OrfCallError>`](types::OrfCallError),
//! distinguishing missing input files, malformed lines (with file and line
//! number) and gene caller failures. Querying a sequence without genes is not
//! an error and reports zero coding bases.
//!
//! ## Logging
//!
//! Progress is reported through the [`log`] facade; install any logger in the
//! calling application to see it.

pub mod bitmap;
pub mod config;
pub mod constants;
pub mod mask;
pub mod parsing;
pub mod runner;
pub mod sequence;
pub mod types;

pub use mask::CodingBaseMask;
pub use parsing::{GeneFeatureParser, gene_positions};
pub use runner::GeneCallerRunner;
pub use types::OrfCallError;
