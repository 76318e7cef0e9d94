//! Identifier normalization toward a canonical WURCS candidate.
//!
//! Every incoming identifier is classified once, then steered toward a WURCS
//! string that the catalog can be probed with. Conversion failures are never
//! fatal: the pipeline simply proceeds without a candidate and matching falls
//! back to the raw identifier channels.

use crate::convert::IupacConverter;
use crate::grammar::{self, NotationKind};

/// A canonical WURCS candidate with its derived anomer variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WurcsCandidate {
    /// The candidate WURCS as derived (anomer possibly underdetermined)
    pub canonical: String,
    /// Alpha variant (`x` → `a`)
    pub alpha: String,
    /// Beta variant (`x` → `b`)
    pub beta: String,
}

impl WurcsCandidate {
    /// Build a candidate and its anomer variants from a WURCS string.
    #[must_use]
    pub fn derive(wurcs: &str) -> Self {
        let (alpha, beta) = grammar::anomer_variants(wurcs);
        Self {
            canonical: wurcs.to_string(),
            alpha,
            beta,
        }
    }
}

/// An identifier after notation classification and WURCS derivation.
#[derive(Debug, Clone)]
pub struct NormalizedIdentifier {
    /// The identifier as supplied
    pub raw: String,
    /// Detected notation family
    pub kind: NotationKind,
    /// Canonical WURCS candidate, when one could be derived
    pub wurcs: Option<WurcsCandidate>,
}

/// Normalize an identifier, deriving a canonical WURCS candidate where the
/// notation allows one.
///
/// - WURCS input is its own candidate.
/// - IUPAC goes through the external converter.
/// - GLYCAM is tidied, converted to IUPAC, then through the converter.
/// - GlyTouCan accessions and free text yield no candidate; matching
///   proceeds on the raw identifier only.
pub fn normalize(raw: &str, converter: &dyn IupacConverter) -> NormalizedIdentifier {
    let kind = grammar::classify(raw);

    let wurcs = match kind {
        NotationKind::Wurcs => Some(WurcsCandidate::derive(raw.trim())),
        NotationKind::Iupac => convert_iupac(raw, converter),
        NotationKind::Glycam => {
            let iupac = grammar::to_iupac(grammar::tidy(raw));
            convert_iupac(&iupac, converter)
        }
        NotationKind::GlyTouCan | NotationKind::FreeText => None,
    };

    NormalizedIdentifier {
        raw: raw.to_string(),
        kind,
        wurcs,
    }
}

fn convert_iupac(iupac: &str, converter: &dyn IupacConverter) -> Option<WurcsCandidate> {
    match converter.iupac_to_wurcs(iupac) {
        Ok(conversion) => conversion
            .wurcs
            .as_deref()
            .map(WurcsCandidate::derive),
        Err(e) => {
            tracing::debug!(
                converter = converter.name(),
                iupac,
                error = %e,
                "conversion unavailable, proceeding without WURCS candidate"
            );
            None
        }
    }
}
