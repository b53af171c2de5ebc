use crate::constants::{DEFAULT_PROGRAM, DEFAULT_TRANSLATION_TABLE, META_MODE_THRESHOLD};
use crate::types::OrfCallError;

/// How the gene caller should model the input.
///
/// # Examples
///
/// ```rust
/// use orfcall_core::config::CallMode;
///
/// assert_eq!(CallMode::for_base_count(42_000, 100_000), CallMode::Meta);
/// assert_eq!(CallMode::for_base_count(4_641_652, 100_000), CallMode::Single);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallMode {
    /// Train an ORF model on the input itself.
    Single,

    /// Use preset parameters (`-p meta`).
    ///
    /// Required when the input is too small to learn model parameters from.
    Meta,
}

impl CallMode {
    /// Pick the mode for an input of `base_count` bases; below `threshold` the
    /// caller falls back to preset parameters.
    #[must_use]
    pub const fn for_base_count(base_count: u64, threshold: u64) -> Self {
        if base_count < threshold {
            Self::Meta
        } else {
            Self::Single
        }
    }
}

/// Configuration for invoking the external gene caller.
///
/// # Examples
///
/// ## Default configuration
///
/// ```rust
/// use orfcall_core::config::GeneCallerConfig;
///
/// let config = GeneCallerConfig::default();
/// assert_eq!(config.translation_table, 11);
/// ```
///
/// ## Mycoplasma genetic code
///
/// ```rust
/// use orfcall_core::config::GeneCallerConfig;
///
/// let config = GeneCallerConfig {
///     translation_table: 4,
///     ..Default::default()
/// };
/// config.validate()?;
/// # Ok::<(), orfcall_core::types::OrfCallError>(())
/// ```
#[derive(Debug, Clone)]
pub struct GeneCallerConfig {
    /// Executable name or path of the gene caller.
    ///
    /// **Default**: `"prodigal"`
    pub program: String,

    /// Genetic code translation table number (1-25).
    ///
    /// - `11`: Bacterial/Archaeal (most common, default)
    /// - `4`: Mycoplasma/Spiroplasma
    ///
    /// Tables 7, 8 and 17-20 are not defined by NCBI and are rejected.
    ///
    /// **Default**: `11`
    pub translation_table: u8,

    /// Inputs with fewer bases than this are called in [`CallMode::Meta`].
    ///
    /// **Default**: `100_000`
    pub meta_threshold: u64,

    /// Do not allow genes to run off sequence edges (`-c`).
    ///
    /// **Default**: `true`
    pub closed_ends: bool,

    /// Treat runs of N as gaps genes may not span (`-m`).
    ///
    /// **Default**: `true`
    pub mask_n_runs: bool,

    /// Suppress the caller's own stderr chatter (`-q`).
    ///
    /// **Default**: `true`
    pub quiet: bool,
}

impl Default for GeneCallerConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            translation_table: DEFAULT_TRANSLATION_TABLE,
            meta_threshold: META_MODE_THRESHOLD,
            closed_ends: true,
            mask_n_runs: true,
            quiet: true,
        }
    }
}

impl GeneCallerConfig {
    /// Check the settings are ones the gene caller accepts
    ///
    /// # Errors
    ///
    /// Returns [`OrfCallError::InvalidTranslationTable`] for an undefined table.
    pub fn validate(&self) -> Result<(), OrfCallError> {
        let tt = self.translation_table;
        if !(1..=25).contains(&tt) || tt == 7 || tt == 8 || (17..=20).contains(&tt) {
            return Err(OrfCallError::InvalidTranslationTable(tt));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_mode_threshold_is_exclusive() {
        assert_eq!(CallMode::for_base_count(0, 100_000), CallMode::Meta);
        assert_eq!(CallMode::for_base_count(99_999, 100_000), CallMode::Meta);
        assert_eq!(CallMode::for_base_count(100_000, 100_000), CallMode::Single);
    }

    #[test]
    fn test_default_config() {
        let config = GeneCallerConfig::default();
        assert_eq!(config.program, "prodigal");
        assert_eq!(config.translation_table, 11);
        assert_eq!(config.meta_threshold, 100_000);
        assert!(config.closed_ends && config.mask_n_runs && config.quiet);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_translation_table_validation() {
        for tt in [1, 4, 11, 25] {
            let config = GeneCallerConfig {
                translation_table: tt,
                ..Default::default()
            };
            assert!(config.validate().is_ok(), "table {tt}");
        }
        for tt in [0, 7, 8, 17, 20, 26] {
            let config = GeneCallerConfig {
                translation_table: tt,
                ..Default::default()
            };
            assert!(
                matches!(config.validate(), Err(OrfCallError::InvalidTranslationTable(t)) if t == tt),
                "table {tt}"
            );
        }
    }
}
