//! Default values for glycan-tools configuration.
//!
//! Several of these are empirically chosen thresholds inherited from the
//! production service. They are deliberately exposed as configuration rather
//! than re-derived; tests pin them as current behavior, not as optimal
//! values.

// ============================================================================
// Search thresholds and limits
// ============================================================================

/// Minimum total score for a free-text hit to be kept.
pub const DEFAULT_TEXT_SCORE_THRESHOLD: f64 = 50.0;

/// Flat bonus added when a query term appears as an exact substring of a
/// record's search blob.
pub const DEFAULT_SUBSTRING_BONUS: f64 = 30.0;

/// Maximum results returned by the structural WURCS similarity search.
pub const DEFAULT_STRUCTURAL_RESULT_LIMIT: usize = 10;

/// Maximum results returned by the free-text fuzzy search.
pub const DEFAULT_TEXT_RESULT_LIMIT: usize = 20;

/// Bonus when residue or linkage counts match exactly.
pub const DEFAULT_COUNT_MATCH_BONUS: f64 = 50.0;

/// Penalty per unit of residue/linkage count difference.
pub const DEFAULT_COUNT_MISMATCH_PENALTY: f64 = 10.0;

/// Penalty per unit of unique-residue count difference.
pub const DEFAULT_UNIQUE_RESIDUE_PENALTY: f64 = 5.0;

// ============================================================================
// Duplicate-submission probe
// ============================================================================

/// How many trailing characters two folder names may differ by and still be
/// treated as the same glycan with a different reducing-end suffix.
pub const DEFAULT_SIMILAR_SUFFIX_WINDOW: usize = 5;

/// Identifiers this short are never run through the similar-name heuristic.
pub const DEFAULT_MIN_SIMILAR_NAME_LEN: usize = 5;

// ============================================================================
// Conversion client
// ============================================================================

/// Default GlyCosmos API base URL.
pub const DEFAULT_CONVERSION_API_BASE: &str = "https://api.glycosmos.org";

/// Default glycanformatconverter version path segment.
pub const DEFAULT_CONVERTER_VERSION: &str = "2.10.0";

/// Default conversion request timeout in seconds.
pub const DEFAULT_CONVERSION_TIMEOUT_SECS: u64 = 30;

/// Default maximum retries for conversion requests.
pub const DEFAULT_CONVERSION_MAX_RETRIES: u8 = 3;

// ============================================================================
// Dataset layout
// ============================================================================

/// Catalog dataset file name inside the database directory.
pub const DATASET_FILE_NAME: &str = "GLYCOSHAPE.json";
