//! Free-text fuzzy search over the catalog.
//!
//! The fallback when no structured notation is detected. Each record is
//! represented by a precomputed lowercase blob of its identifiers; every
//! whitespace-separated query term scores against the blob and exact
//! substring hits earn a flat bonus on top.

use super::similarity::partial_ratio;
use super::structural::ScoredRecord;
use crate::config::SearchConfig;
use crate::model::GlycanCatalog;

/// Score one record blob against the query terms.
#[must_use]
pub fn score_blob(blob: &str, terms: &[String], config: &SearchConfig) -> f64 {
    terms
        .iter()
        .map(|term| {
            let mut score = partial_ratio(term, blob);
            if blob.contains(term.as_str()) {
                score += config.substring_bonus;
            }
            score
        })
        .sum()
}

/// Run a free-text search, keeping records above the score threshold.
///
/// Results are sorted by score descending (ties keep dataset order) and
/// capped at the configured limit. An empty query matches nothing.
#[must_use]
pub fn search(catalog: &GlycanCatalog, query: &str, config: &SearchConfig) -> Vec<ScoredRecord> {
    let terms: Vec<String> = query
        .split_whitespace()
        .map(str::to_lowercase)
        .collect();
    if terms.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<ScoredRecord> = catalog
        .records()
        .filter_map(|(id, _)| {
            let blob = catalog.blob(id)?;
            let score = score_blob(blob, &terms, config);
            (score > config.text_score_threshold).then(|| ScoredRecord {
                id: id.clone(),
                score,
            })
        })
        .collect();

    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    scored.truncate(config.text_result_limit);
    scored
}
