//! WURCS structural similarity ranking.
//!
//! The query and every catalog archetype WURCS are broken down into counts,
//! residue lists and linkage lists; pairs are scored by count agreement plus
//! fuzzy similarity of the three list renditions. Scoring the whole catalog
//! is embarrassingly parallel over the immutable snapshot.

use super::similarity::partial_ratio;
use crate::config::SearchConfig;
use crate::error::Result;
use crate::grammar::{self, WurcsBreakdown};
use crate::model::GlycanCatalog;
use rayon::prelude::*;

/// Score one candidate breakdown against the query breakdown.
///
/// Count agreement dominates: an exact residue-count and linkage-count match
/// is worth 100 over a near miss before the fuzzy terms weigh in.
#[must_use]
pub fn score_pair(query: &WurcsBreakdown, candidate: &WurcsBreakdown, config: &SearchConfig) -> f64 {
    let mut score = 0.0;

    score += count_term(
        query.residue_count,
        candidate.residue_count,
        config.count_match_bonus,
        config.count_mismatch_penalty,
    );
    score += count_term(
        query.linkage_count,
        candidate.linkage_count,
        config.count_match_bonus,
        config.count_mismatch_penalty,
    );
    score -= config.unique_residue_penalty
        * abs_diff(query.unique_residue_count, candidate.unique_residue_count);

    score += partial_ratio(&query.residues_joined(), &candidate.residues_joined());
    score += partial_ratio(&query.sequence_joined(), &candidate.sequence_joined());
    score += partial_ratio(&query.linkages_joined(), &candidate.linkages_joined());

    score
}

fn count_term(a: usize, b: usize, match_bonus: f64, mismatch_penalty: f64) -> f64 {
    if a == b {
        match_bonus
    } else {
        -mismatch_penalty * abs_diff(a, b)
    }
}

fn abs_diff(a: usize, b: usize) -> f64 {
    a.abs_diff(b) as f64
}

/// A scored catalog entry, before hit shaping.
#[derive(Debug, Clone)]
pub struct ScoredRecord {
    /// Internal ID of the record
    pub id: String,
    /// Total similarity score
    pub score: f64,
}

/// Rank every catalog archetype against a query WURCS.
///
/// The query must parse; catalog entries without a parsable archetype WURCS
/// are silently skipped. Results come back sorted by score descending,
/// equal scores keeping dataset order, capped at the configured limit.
pub fn rank(
    catalog: &GlycanCatalog,
    query_wurcs: &str,
    config: &SearchConfig,
) -> Result<Vec<ScoredRecord>> {
    let query = grammar::wurcs_split(query_wurcs)?;

    let candidates: Vec<(&String, &str)> = catalog
        .records()
        .filter_map(|(id, record)| {
            record
                .archetype
                .wurcs
                .as_deref()
                .map(|wurcs| (id, wurcs))
        })
        .collect();

    let mut scored: Vec<(usize, ScoredRecord)> = candidates
        .par_iter()
        .enumerate()
        .filter_map(|(order, (id, wurcs))| {
            let breakdown = grammar::wurcs_split(wurcs).ok()?;
            Some((
                order,
                ScoredRecord {
                    id: (*id).clone(),
                    score: score_pair(&query, &breakdown, config),
                },
            ))
        })
        .collect();

    // Parallel collection loses dataset order; restore it before the stable
    // score sort so ties stay deterministic.
    scored.sort_by_key(|(order, _)| *order);
    scored.sort_by(|(_, a), (_, b)| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    Ok(scored
        .into_iter()
        .take(config.structural_result_limit)
        .map(|(_, record)| record)
        .collect())
}
