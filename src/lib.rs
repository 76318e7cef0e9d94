//! **Glycan identifier resolution, format interconversion and catalog search.**
//!
//! `glycan-tools` serves a static database of glycan records and reconciles
//! the naming conventions used across glycobiology: GLYCAM linear names,
//! IUPAC-condensed strings, WURCS and GlyTouCan accessions. It powers a
//! command-line interface and is usable as a library.
//!
//! ## Key Features
//!
//! - **Notation grammars**: GLYCAM → IUPAC-condensed conversion, WURCS
//!   structural parsing and alpha/beta anomer derivation, with a permissive
//!   notation classifier for raw identifiers.
//! - **Identifier resolution**: one precedence ladder answers "does X exist"
//!   and "fetch the record for X" across every identifier namespace, with
//!   the matching channel reported for observability.
//! - **Search and ranking**: WURCS structural similarity, free-text fuzzy
//!   search, glycan-class filters and end-residue suffix search.
//! - **Graceful degradation**: external conversion failures are expected
//!   outcomes; resolution falls back to raw-identifier matching instead of
//!   erroring out.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: [`GlycanRecord`] and the immutable [`GlycanCatalog`]
//!   snapshot, loaded once at startup and shared read-only.
//! - **[`grammar`]**: the notation grammars; a leaf module with no catalog
//!   or network dependencies.
//! - **[`convert`]**: external conversion collaborators behind traits, with
//!   null-object implementations for offline use.
//! - **[`resolve`]**: the identifier normalizer and the resolution service.
//! - **[`search`]**: the ranking engine over the catalog snapshot.
//!
//! ## Getting Started: Resolving an Identifier
//!
//! ```no_run
//! use glycan_tools::convert::NoOpConverter;
//! use glycan_tools::model::GlycanCatalog;
//! use glycan_tools::resolve::{NoPresenceProbe, ResolutionService};
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let catalog = GlycanCatalog::from_path(Path::new("GLYCOSHAPE.json"))?;
//!     let service = ResolutionService::new(&catalog, &NoOpConverter, &NoPresenceProbe);
//!
//!     let outcome = service.exists("G00028MO");
//!     println!("found={} via {}", outcome.found, outcome.reason);
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `conversion` (default): enables the GlyCosmos HTTP client. Without it
//!   the crate still builds and resolves offline through the raw-identifier
//!   channels.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Scores and counts move between usize and f64 in the ranking math —
    // all values are bounded in practice
    clippy::cast_precision_loss,
    // # Errors / # Panics sections are aspirational for the public surface
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod cli;
pub mod config;
pub mod convert;
pub mod error;
pub mod grammar;
pub mod model;
pub mod resolve;
pub mod search;

// Re-export main types for convenience
pub use config::{AppConfig, CatalogConfig, ConversionConfig, SearchConfig};
pub use convert::{IupacConversion, IupacConverter, NoOpConverter, SmilesConverter};
pub use error::{GlycanToolsError, Result};
pub use grammar::{NotationKind, WurcsBreakdown};
pub use model::{Anomer, GlycanCatalog, GlycanRecord, Variant};
pub use resolve::{
    Existence, MatchChannel, NormalizedIdentifier, ResolutionService, ResolvedEntry,
};
pub use search::{GlycanClass, SearchEngine, SearchHit};
