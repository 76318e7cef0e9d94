//! Search and ranking over the catalog snapshot.
//!
//! Four query shapes share one engine: structural WURCS similarity, free-text
//! fuzzy search, glycan-class filters and end-residue suffix search. All of
//! them are pure functions of the query and the immutable catalog.

pub mod categories;
pub mod similarity;
pub mod structural;
pub mod text;

pub use categories::GlycanClass;
pub use similarity::{partial_ratio, ratio};
pub use structural::{rank as rank_structural, score_pair, ScoredRecord};

use crate::config::SearchConfig;
use crate::error::Result;
use crate::model::{GlycanCatalog, GlycanRecord};
use serde::Serialize;

/// One search result row.
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    /// Internal ID of the matched record
    pub id: String,
    /// Archetype GlyTouCan accession
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glytoucan: Option<String>,
    /// Archetype IUPAC string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iupac: Option<String>,
    /// Archetype mass
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mass: Option<f64>,
    /// Similarity score, for the ranked search modes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl SearchHit {
    fn from_record(id: &str, record: &GlycanRecord, score: Option<f64>) -> Self {
        Self {
            id: id.to_string(),
            glytoucan: record.archetype.glytoucan.clone(),
            iupac: record.archetype.iupac.clone(),
            mass: record.archetype.mass,
            score,
        }
    }
}

/// Search engine over a catalog snapshot.
pub struct SearchEngine<'a> {
    catalog: &'a GlycanCatalog,
    config: SearchConfig,
}

impl<'a> SearchEngine<'a> {
    /// Create an engine with the given configuration.
    #[must_use]
    pub fn new(catalog: &'a GlycanCatalog, config: SearchConfig) -> Self {
        Self { catalog, config }
    }

    /// Structural WURCS similarity search, best matches first.
    pub fn structural(&self, query_wurcs: &str) -> Result<Vec<SearchHit>> {
        let ranked = structural::rank(self.catalog, query_wurcs, &self.config)?;
        Ok(self.shape_hits(ranked))
    }

    /// Free-text fuzzy search, best matches first.
    #[must_use]
    pub fn text(&self, query: &str) -> Vec<SearchHit> {
        let scored = text::search(self.catalog, query, &self.config);
        self.shape_hits(scored)
    }

    /// All records in a glycan class, lightest first.
    #[must_use]
    pub fn category(&self, class: GlycanClass) -> Vec<SearchHit> {
        let mut hits: Vec<SearchHit> = self
            .catalog
            .records()
            .filter(|(_, record)| {
                record
                    .archetype
                    .iupac
                    .as_deref()
                    .is_some_and(|iupac| class.matches(iupac))
            })
            .map(|(id, record)| SearchHit::from_record(id, record, None))
            .collect();
        sort_by_mass(&mut hits);
        hits
    }

    /// Records whose archetype IUPAC ends with the given residue string,
    /// lightest first.
    #[must_use]
    pub fn end_residue(&self, residue: &str) -> Vec<SearchHit> {
        let mut hits: Vec<SearchHit> = self
            .catalog
            .records()
            .filter(|(_, record)| {
                record
                    .archetype
                    .iupac
                    .as_deref()
                    .is_some_and(|iupac| iupac.ends_with(residue))
            })
            .map(|(id, record)| SearchHit::from_record(id, record, None))
            .collect();
        sort_by_mass(&mut hits);
        hits
    }

    fn shape_hits(&self, scored: Vec<ScoredRecord>) -> Vec<SearchHit> {
        scored
            .into_iter()
            .filter_map(|entry| {
                self.catalog
                    .get(&entry.id)
                    .map(|record| SearchHit::from_record(&entry.id, record, Some(entry.score)))
            })
            .collect()
    }
}

fn sort_by_mass(hits: &mut [SearchHit]) {
    hits.sort_by(|a, b| {
        let ma = a.mass.unwrap_or(f64::INFINITY);
        let mb = b.mass.unwrap_or(f64::INFINITY);
        ma.partial_cmp(&mb).unwrap_or(std::cmp::Ordering::Equal)
    });
}
