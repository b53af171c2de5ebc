use std::collections::HashMap;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use log::{info, warn};

use crate::config::{CallMode, GeneCallerConfig};
use crate::constants::{FEATURE_FILE, NUCLEOTIDE_GENE_FILE, PROTEIN_GENE_FILE};
use crate::parsing::{GeneFeatureParser, gene_positions};
use crate::sequence::count_fasta_bases;
use crate::types::{GenePosition, OrfCallError};

/// Runs the external gene caller for one input and locates its output files.
///
/// All three outputs land in the directory given at construction:
/// protein translations (`genes.faa`), nucleotide genes (`genes.fna`) and the
/// GFF feature table (`genes.gff`).
///
/// # Examples
///
/// ```rust,no_run
/// use orfcall_core::config::GeneCallerConfig;
/// use orfcall_core::runner::GeneCallerRunner;
///
/// let runner = GeneCallerRunner::new("out/bin_1", GeneCallerConfig::default())?;
/// runner.run("bins/bin_1.fna")?;
///
/// if runner.are_orfs_called() {
///     let features = runner.feature_parser()?;
///     println!("{} coding bases", features.total_coding_bases());
/// }
/// # Ok::<(), orfcall_core::types::OrfCallError>(())
/// ```
#[derive(Debug, Clone)]
pub struct GeneCallerRunner {
    config: GeneCallerConfig,
    protein_gene_file: PathBuf,
    nucleotide_gene_file: PathBuf,
    feature_file: PathBuf,
}

impl GeneCallerRunner {
    /// Prepare a runner writing into `output_dir`.
    ///
    /// # Errors
    ///
    /// - [`OrfCallError::InvalidTranslationTable`] if the configuration is invalid
    /// - [`OrfCallError::ProgramNotFound`] if the gene caller cannot be started
    /// - [`OrfCallError::IoError`] if `output_dir` cannot be created
    pub fn new<P: AsRef<Path>>(output_dir: P, config: GeneCallerConfig) -> Result<Self, OrfCallError> {
        config.validate()?;
        check_program_available(&config.program)?;
        fs::create_dir_all(output_dir.as_ref())?;
        Ok(Self::with_output_dir(output_dir.as_ref(), config))
    }

    fn with_output_dir(output_dir: &Path, config: GeneCallerConfig) -> Self {
        Self {
            config,
            protein_gene_file: output_dir.join(PROTEIN_GENE_FILE),
            nucleotide_gene_file: output_dir.join(NUCLEOTIDE_GENE_FILE),
            feature_file: output_dir.join(FEATURE_FILE),
        }
    }

    /// Command-line arguments for calling genes on `query` in `mode`
    pub fn arguments(&self, query: &Path, mode: CallMode) -> Vec<OsString> {
        let mut args: Vec<OsString> = Vec::new();
        if mode == CallMode::Meta {
            args.extend(["-p", "meta"].map(OsString::from));
        }
        if self.config.quiet {
            args.push("-q".into());
        }
        if self.config.closed_ends {
            args.push("-c".into());
        }
        if self.config.mask_n_runs {
            args.push("-m".into());
        }
        args.extend(["-f", "gff", "-g"].map(OsString::from));
        args.push(self.config.translation_table.to_string().into());
        args.push("-a".into());
        args.push(self.protein_gene_file.clone().into());
        args.push("-d".into());
        args.push(self.nucleotide_gene_file.clone().into());
        args.push("-i".into());
        args.push(query.into());
        args
    }

    /// Call genes on the nucleotide FASTA at `query`.
    ///
    /// Inputs shorter than the configured threshold are called with preset
    /// parameters. The feature table is captured from the caller's stdout.
    /// Gene files from an earlier run are removed first, so after a failed run
    /// [`are_orfs_called`](Self::are_orfs_called) reports `false`.
    ///
    /// # Errors
    ///
    /// - [`OrfCallError::MissingInputFile`] or [`OrfCallError::ParseError`] if
    ///   `query` cannot be read as FASTA
    /// - [`OrfCallError::CallerFailed`] if the caller exits unsuccessfully
    pub fn run<P: AsRef<Path>>(&self, query: P) -> Result<CallMode, OrfCallError> {
        let query = query.as_ref();
        let base_count = count_fasta_bases(query)?;
        let mode = CallMode::for_base_count(base_count, self.config.meta_threshold);
        info!(
            "Calling genes on {} ({} bases, {:?} mode, table {})",
            query.display(),
            base_count,
            mode,
            self.config.translation_table
        );

        for stale in [&self.protein_gene_file, &self.nucleotide_gene_file] {
            remove_if_exists(stale)?;
        }

        let output = Command::new(&self.config.program)
            .args(self.arguments(query, mode))
            .stdin(Stdio::null())
            .stdout(File::create(&self.feature_file)?)
            .stderr(Stdio::piped())
            .output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            warn!("{} failed on {}: {}", self.config.program, query.display(), stderr);
            return Err(OrfCallError::CallerFailed {
                status: output.status,
                stderr,
            });
        }
        Ok(mode)
    }

    /// Whether a previous run left a protein FASTA behind
    pub fn are_orfs_called(&self) -> bool {
        self.protein_gene_file.exists()
    }

    /// Parse the feature table written by [`run`](Self::run)
    pub fn feature_parser(&self) -> Result<GeneFeatureParser, OrfCallError> {
        GeneFeatureParser::from_path(&self.feature_file)
    }

    /// Gene coordinates from the protein FASTA written by [`run`](Self::run)
    pub fn gene_positions(&self) -> Result<HashMap<String, GenePosition>, OrfCallError> {
        gene_positions(&self.protein_gene_file)
    }

    pub fn protein_gene_file(&self) -> &Path {
        &self.protein_gene_file
    }

    pub fn nucleotide_gene_file(&self) -> &Path {
        &self.nucleotide_gene_file
    }

    pub fn feature_file(&self) -> &Path {
        &self.feature_file
    }

    pub fn config(&self) -> &GeneCallerConfig {
        &self.config
    }
}

fn remove_if_exists(path: &Path) -> Result<(), OrfCallError> {
    match fs::remove_file(path) {
        Err(e) if e.kind() != ErrorKind::NotFound => Err(e.into()),
        _ => Ok(()),
    }
}

/// Fail with [`OrfCallError::ProgramNotFound`] unless `program -h` can be spawned.
///
/// The exit code is ignored; some builds of the caller return non-zero for `-h`.
pub fn check_program_available(program: &str) -> Result<(), OrfCallError> {
    match Command::new(program)
        .arg("-h")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
    {
        Ok(_) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            Err(OrfCallError::ProgramNotFound(program.to_string()))
        }
        Err(e) => Err(e.into()),
    }
}
