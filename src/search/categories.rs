//! Glycan class membership filters.
//!
//! Each class is a fixed pattern test over a record's archetype IUPAC string:
//! suffix checks for the reducing-end cores, substring checks for branch
//! motifs, occurrence counts for mannose content. These are classifiers, not
//! a structure parser; unusual branching the motif list does not anticipate
//! yields false negatives, which is accepted behavior.

use serde::{Deserialize, Serialize};
use std::fmt;

/// N-glycan core suffixes, with and without core fucosylation.
const N_GLYCAN_CORES: &[&str] = &[
    "Man(b1-4)GlcNAc(b1-4)GlcNAc",
    "Man(b1-4)GlcNAc(b1-4)[Fuc(a1-6)]GlcNAc",
    "Man(b1-4)GlcNAc(b1-4)[Fuc(a1-3)]GlcNAc",
];

/// Reducing-end residues characteristic of O-linked glycans.
const O_GLYCAN_ENDINGS: &[&str] = &["GalNAc", "Gal", "Fuc", "Man", "Xyl", "Glc"];

/// Motifs found in glycosaminoglycan chains and their linker tetrasaccharide.
const GAG_MOTIFS: &[&str] = &[
    "GlcA(b1-3)",
    "GlcA(b1-4)GlcNAc",
    "IdoA",
    "GlcNS",
    "Gal(b1-3)Gal(b1-4)Xyl",
];

/// Branch motifs that rule a structure out of the oligomannose class.
const OLIGOMANNOSE_EXCLUSIONS: &[&str] = &[
    "GlcNAc(b1-2)",
    "GlcNAc(b1-6)",
    "[GlcNAc(b1-4)]Man",
    "Gal(",
    "Neu5Ac",
    "Neu5Gc",
];

/// GlcNAc attachment motifs for the two core mannose arms.
const ARM_3_MOTIF: &str = "GlcNAc(b1-2)Man(a1-3)";
const ARM_6_MOTIF: &str = "GlcNAc(b1-2)Man(a1-6)";

/// A searchable glycan class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GlycanClass {
    NGlycans,
    OGlycans,
    Gags,
    Oligomannose,
    Complex,
    Hybrid,
}

impl GlycanClass {
    /// Display name, as exposed in search filters.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::NGlycans => "N-Glycans",
            Self::OGlycans => "O-Glycans",
            Self::Gags => "GAGs",
            Self::Oligomannose => "Oligomannose",
            Self::Complex => "Complex",
            Self::Hybrid => "Hybrid",
        }
    }

    /// Parse a class from a filter name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "n-glycans" | "n-glycan" | "n" => Some(Self::NGlycans),
            "o-glycans" | "o-glycan" | "o" => Some(Self::OGlycans),
            "gags" | "gag" => Some(Self::Gags),
            "oligomannose" | "high-mannose" => Some(Self::Oligomannose),
            "complex" => Some(Self::Complex),
            "hybrid" => Some(Self::Hybrid),
            _ => None,
        }
    }

    /// All classes.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::NGlycans,
            Self::OGlycans,
            Self::Gags,
            Self::Oligomannose,
            Self::Complex,
            Self::Hybrid,
        ]
    }

    /// Test class membership for an archetype IUPAC string.
    #[must_use]
    pub fn matches(&self, iupac: &str) -> bool {
        match self {
            Self::NGlycans => is_n_glycan(iupac),
            Self::OGlycans => is_o_glycan(iupac),
            Self::Gags => GAG_MOTIFS.iter().any(|motif| iupac.contains(motif)),
            Self::Oligomannose => is_oligomannose(iupac),
            Self::Complex => is_complex(iupac),
            Self::Hybrid => is_hybrid(iupac),
        }
    }
}

impl fmt::Display for GlycanClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

fn is_n_glycan(iupac: &str) -> bool {
    N_GLYCAN_CORES.iter().any(|core| iupac.ends_with(core))
}

fn is_o_glycan(iupac: &str) -> bool {
    !is_n_glycan(iupac) && O_GLYCAN_ENDINGS.iter().any(|ending| iupac.ends_with(ending))
}

fn mannose_count(iupac: &str) -> usize {
    iupac.matches("Man").count()
}

fn is_oligomannose(iupac: &str) -> bool {
    is_n_glycan(iupac)
        && mannose_count(iupac) >= 3
        && !OLIGOMANNOSE_EXCLUSIONS
            .iter()
            .any(|motif| iupac.contains(motif))
}

fn is_complex(iupac: &str) -> bool {
    is_n_glycan(iupac) && iupac.contains(ARM_3_MOTIF) && iupac.contains(ARM_6_MOTIF)
}

fn is_hybrid(iupac: &str) -> bool {
    if !is_n_glycan(iupac) {
        return false;
    }
    let arm_3 = iupac.contains(ARM_3_MOTIF);
    let arm_6 = iupac.contains(ARM_6_MOTIF);
    // GlcNAc on exactly one arm, with mannose beyond the trimannosyl core
    (arm_3 ^ arm_6) && mannose_count(iupac) > 3
}
