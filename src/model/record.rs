//! Catalog record model.
//!
//! One `GlycanRecord` describes one physical glycan entity with up to three
//! anomeric variants: the anomer-unspecified archetype plus optional alpha
//! and beta forms. Records are deserialized once from the catalog dataset and
//! never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Anomeric form of a glycan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Anomer {
    /// Anomer-unspecified canonical form
    Archetype,
    /// Alpha configuration at the reducing end
    Alpha,
    /// Beta configuration at the reducing end
    Beta,
}

impl Anomer {
    /// Lowercase label used in file layouts (`cluster0_alpha.PDB.pdb`).
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Archetype => "archetype",
            Self::Alpha => "alpha",
            Self::Beta => "beta",
        }
    }

    /// Capitalized label used in match-channel reporting.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Archetype => "Archetype",
            Self::Alpha => "Alpha",
            Self::Beta => "Beta",
        }
    }

    /// All anomers in catalog probing order.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Archetype, Self::Alpha, Self::Beta]
    }
}

impl fmt::Display for Anomer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One anomeric form of a catalog glycan.
///
/// `iupac` and `wurcs` may independently be null: absence means the value was
/// not computed for this variant, not an error. Equality semantics differ per
/// field — GlyTouCan accessions compare case-sensitively, IUPAC and WURCS
/// case-insensitively; the catalog index implements that.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Variant {
    /// Owning record's internal ID
    #[serde(rename = "ID", default)]
    pub id: Option<String>,
    /// GlyTouCan accession, unique across the catalog when present
    #[serde(default)]
    pub glytoucan: Option<String>,
    /// Condensed IUPAC notation
    #[serde(default)]
    pub iupac: Option<String>,
    /// WURCS notation
    #[serde(default)]
    pub wurcs: Option<String>,
    /// GLYCAM linear name (archetype only, by convention)
    #[serde(default)]
    pub glycam: Option<String>,
    /// Molecular mass, the default sort key in search results
    #[serde(default)]
    pub mass: Option<f64>,
}

/// One glycan entity with its anomeric variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlycanRecord {
    pub archetype: Variant,
    #[serde(default)]
    pub alpha: Option<Variant>,
    #[serde(default)]
    pub beta: Option<Variant>,
}

impl GlycanRecord {
    /// Get the variant for an anomer, if present.
    #[must_use]
    pub fn variant(&self, anomer: Anomer) -> Option<&Variant> {
        match anomer {
            Anomer::Archetype => Some(&self.archetype),
            Anomer::Alpha => self.alpha.as_ref(),
            Anomer::Beta => self.beta.as_ref(),
        }
    }

    /// Iterate the variants that exist, in archetype → alpha → beta order.
    pub fn variants(&self) -> impl Iterator<Item = (Anomer, &Variant)> {
        Anomer::all()
            .into_iter()
            .filter_map(move |anomer| self.variant(anomer).map(|variant| (anomer, variant)))
    }

    /// Archetype mass, used for mass-sorted listings.
    #[must_use]
    pub fn mass(&self) -> Option<f64> {
        self.archetype.mass
    }
}
