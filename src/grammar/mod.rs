//! Format grammars for the glycan notations the catalog speaks.
//!
//! Leaf module: GLYCAM linear names, WURCS structural parsing and anomer
//! derivation, and the notation classifier. No catalog or network
//! dependencies live here.

pub mod detection;
pub mod glycam;
pub mod wurcs;

pub use detection::{classify, is_glytoucan_shaped, NotationKind};
pub use glycam::{rewrite_modifiers, tidy, to_iupac, DEFAULT_STEREOCHEMISTRY, MODIFIER_REWRITES};
pub use wurcs::{anomer_variants, split as wurcs_split, WurcsBreakdown};
