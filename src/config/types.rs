//! Typed configuration structures.

use super::defaults;
use crate::error::{GlycanToolsError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Catalog dataset and on-disk data layout
    pub catalog: CatalogConfig,
    /// Search thresholds and limits
    pub search: SearchConfig,
    /// External format-conversion client
    pub conversion: ConversionConfig,
    /// Duplicate-submission filesystem probe
    pub probe: ProbeConfig,
}

impl AppConfig {
    /// Validate all sections.
    pub fn validate(&self) -> Result<()> {
        self.search.validate()?;
        self.conversion.validate()?;
        Ok(())
    }
}

/// Catalog dataset location and per-entry file layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Directory holding the dataset file and per-entry structure files
    pub database_dir: PathBuf,
    /// Root of raw simulation data folders, one per submitted glycan
    pub rawdata_dir: Option<PathBuf>,
    /// Root of uploaded data folders
    pub upload_dir: Option<PathBuf>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            database_dir: PathBuf::from("."),
            rawdata_dir: None,
            upload_dir: None,
        }
    }
}

impl CatalogConfig {
    /// Path of the catalog dataset file.
    #[must_use]
    pub fn dataset_file(&self) -> PathBuf {
        self.database_dir.join(defaults::DATASET_FILE_NAME)
    }

    /// Presence-probe roots that are actually configured.
    #[must_use]
    pub fn probe_roots(&self) -> Vec<PathBuf> {
        [self.rawdata_dir.clone(), self.upload_dir.clone()]
            .into_iter()
            .flatten()
            .collect()
    }
}

/// Search thresholds and result limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Minimum total score for a free-text hit to be kept
    pub text_score_threshold: f64,
    /// Flat bonus for an exact substring hit in the search blob
    pub substring_bonus: f64,
    /// Result cap for structural similarity search
    pub structural_result_limit: usize,
    /// Result cap for free-text search
    pub text_result_limit: usize,
    /// Bonus when residue or linkage counts match exactly
    pub count_match_bonus: f64,
    /// Penalty per unit of residue/linkage count difference
    pub count_mismatch_penalty: f64,
    /// Penalty per unit of unique-residue count difference
    pub unique_residue_penalty: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            text_score_threshold: defaults::DEFAULT_TEXT_SCORE_THRESHOLD,
            substring_bonus: defaults::DEFAULT_SUBSTRING_BONUS,
            structural_result_limit: defaults::DEFAULT_STRUCTURAL_RESULT_LIMIT,
            text_result_limit: defaults::DEFAULT_TEXT_RESULT_LIMIT,
            count_match_bonus: defaults::DEFAULT_COUNT_MATCH_BONUS,
            count_mismatch_penalty: defaults::DEFAULT_COUNT_MISMATCH_PENALTY,
            unique_residue_penalty: defaults::DEFAULT_UNIQUE_RESIDUE_PENALTY,
        }
    }
}

impl SearchConfig {
    /// Validate thresholds and limits.
    pub fn validate(&self) -> Result<()> {
        if self.structural_result_limit == 0 || self.text_result_limit == 0 {
            return Err(GlycanToolsError::config(
                "search result limits must be greater than zero",
            ));
        }
        if !(0.0..=600.0).contains(&self.text_score_threshold) {
            return Err(GlycanToolsError::config(format!(
                "text_score_threshold out of range: {}",
                self.text_score_threshold
            )));
        }
        Ok(())
    }
}

/// External conversion client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionConfig {
    /// Whether to call the external converter at all
    pub enabled: bool,
    /// GlyCosmos API base URL
    pub api_base: String,
    /// Converter version path segment
    pub converter_version: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Maximum retries for failed requests
    pub max_retries: u8,
    /// Path to the MolWURCS jar for the SMILES fallback, if installed
    pub molwurcs_jar: Option<PathBuf>,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            api_base: defaults::DEFAULT_CONVERSION_API_BASE.to_string(),
            converter_version: defaults::DEFAULT_CONVERTER_VERSION.to_string(),
            timeout_secs: defaults::DEFAULT_CONVERSION_TIMEOUT_SECS,
            max_retries: defaults::DEFAULT_CONVERSION_MAX_RETRIES,
            molwurcs_jar: None,
        }
    }
}

impl ConversionConfig {
    /// Validate client settings.
    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            return Err(GlycanToolsError::config("timeout_secs must be nonzero"));
        }
        if self.enabled && self.api_base.is_empty() {
            return Err(GlycanToolsError::config(
                "api_base must be set when conversion is enabled",
            ));
        }
        Ok(())
    }
}

/// Duplicate-submission probe settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Trailing window within which two folder names count as the same glycan
    pub similar_suffix_window: usize,
    /// Identifiers at or below this length skip the similar-name heuristic
    pub min_similar_name_len: usize,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            similar_suffix_window: defaults::DEFAULT_SIMILAR_SUFFIX_WINDOW,
            min_similar_name_len: defaults::DEFAULT_MIN_SIMILAR_NAME_LEN,
        }
    }
}
