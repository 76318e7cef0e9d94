//! Configuration for glycan-tools.
//!
//! Type-safe configuration sections with serde defaults, YAML file discovery
//! and the pinned threshold constants the search and resolution code reads.
//!
//! # Configuration File
//!
//! Place a `.glycan-tools.yaml` in the working directory or
//! `~/.config/glycan-tools/`:
//!
//! ```yaml
//! catalog:
//!   database_dir: /data/glycoshape
//!   rawdata_dir: /data/glycoshape_raw
//! search:
//!   text_score_threshold: 50
//! conversion:
//!   enabled: true
//! ```

pub mod defaults;
pub mod file;
mod types;

pub use defaults::{
    DEFAULT_SIMILAR_SUFFIX_WINDOW, DEFAULT_STRUCTURAL_RESULT_LIMIT, DEFAULT_SUBSTRING_BONUS,
    DEFAULT_TEXT_RESULT_LIMIT, DEFAULT_TEXT_SCORE_THRESHOLD,
};
pub use file::{discover_config_file, load_config_file, load_or_default};
pub use types::{AppConfig, CatalogConfig, ConversionConfig, ProbeConfig, SearchConfig};
