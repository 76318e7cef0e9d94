//! Notation detection for incoming glycan identifiers.
//!
//! Users hand the resolver GlyTouCan accessions, IUPAC-condensed strings,
//! GLYCAM names, raw WURCS and plain words interchangeably. The classifier
//! here decides once, up front, which grammar an identifier belongs to; the
//! decision is carried through the pipeline as data instead of being
//! re-derived at every call site.
//!
//! The heuristics are deliberately permissive and can misclassify edge cases
//! (a GLYCAM name using parentheses for a rare modifier would read as IUPAC).
//! That imprecision is part of the pinned behavior.

use super::glycam::DEFAULT_STEREOCHEMISTRY;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// The notation family an identifier appears to belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NotationKind {
    /// Raw WURCS string (`WURCS=` prefix)
    Wurcs,
    /// GlyTouCan accession (8 characters, `G` + 5 digits + 2 uppercase letters)
    GlyTouCan,
    /// IUPAC-condensed (parenthesized linkages)
    Iupac,
    /// GLYCAM linear name (bracketed modifiers, known monosaccharide codes)
    Glycam,
    /// Anything else; handled by free-text fuzzy search
    FreeText,
}

impl NotationKind {
    /// Human-readable name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Wurcs => "WURCS",
            Self::GlyTouCan => "GlyTouCan",
            Self::Iupac => "IUPAC",
            Self::Glycam => "GLYCAM",
            Self::FreeText => "free text",
        }
    }
}

impl fmt::Display for NotationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

static GLYTOUCAN_ACCESSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^G\d{5}[A-Z]{2}$").expect("static regex"));

/// Check whether an identifier has the GlyTouCan accession shape.
#[must_use]
pub fn is_glytoucan_shaped(identifier: &str) -> bool {
    identifier.len() == 8 && GLYTOUCAN_ACCESSION.is_match(identifier)
}

/// Classify an identifier into a [`NotationKind`].
///
/// Ordered heuristics, first match wins:
/// 1. `WURCS=` prefix
/// 2. 8-character accession shape
/// 3. contains `(` (parenthesized linkages are IUPAC's signature)
/// 4. contains `[`/`]` plus a known monosaccharide code and no parentheses
/// 5. everything else is free text
#[must_use]
pub fn classify(identifier: &str) -> NotationKind {
    let trimmed = identifier.trim();

    if trimmed.starts_with("WURCS=") {
        return NotationKind::Wurcs;
    }
    if is_glytoucan_shaped(trimmed) {
        return NotationKind::GlyTouCan;
    }
    if trimmed.contains('(') {
        return NotationKind::Iupac;
    }
    if trimmed.contains('[')
        && trimmed.contains(']')
        && !trimmed.contains(')')
        && contains_monosaccharide_code(trimmed)
    {
        return NotationKind::Glycam;
    }
    NotationKind::FreeText
}

/// True if the identifier contains any code from the fixed monosaccharide
/// vocabulary (the stereochemistry table's key set).
#[must_use]
pub fn contains_monosaccharide_code(identifier: &str) -> bool {
    DEFAULT_STEREOCHEMISTRY
        .iter()
        .any(|(sugar, _)| identifier.contains(sugar))
}
