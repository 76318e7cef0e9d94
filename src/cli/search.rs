//! Search command handler.

use crate::search::{GlycanClass, SearchEngine};
use anyhow::{bail, Result};

/// Which search strategy to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// WURCS structural similarity ranking
    Structural,
    /// Free-text fuzzy search
    Text,
    /// Glycan-class filter
    Category,
    /// End-residue suffix search
    End,
}

/// Run a search and print the hit list.
///
/// Exit code 0 when anything matched, 1 for an empty result.
pub fn run_search(engine: &SearchEngine<'_>, mode: SearchMode, query: &str) -> Result<i32> {
    let hits = match mode {
        SearchMode::Structural => engine.structural(query)?,
        SearchMode::Text => engine.text(query),
        SearchMode::Category => {
            let Some(class) = GlycanClass::from_name(query) else {
                bail!(
                    "unknown glycan class {query:?}; expected one of: {}",
                    GlycanClass::all()
                        .iter()
                        .map(|c| c.name())
                        .collect::<Vec<_>>()
                        .join(", ")
                );
            };
            engine.category(class)
        }
        SearchMode::End => engine.end_residue(query),
    };

    println!("{}", serde_json::to_string_pretty(&serde_json::json!({
        "query": query,
        "results": hits,
    }))?);
    Ok(i32::from(hits.is_empty()))
}
