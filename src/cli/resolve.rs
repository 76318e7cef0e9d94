//! Identifier resolution command handlers.

use crate::resolve::{ResolutionService, StructureFileStore};
use anyhow::Result;

/// Run the existence check and print the structured outcome.
///
/// Exit code 0 when found, 1 when not.
pub fn run_exists(service: &ResolutionService<'_>, identifier: &str) -> Result<i32> {
    let outcome = service.exists(identifier);
    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(i32::from(!outcome.found))
}

/// Fetch and print the full record for an identifier.
pub fn run_get(service: &ResolutionService<'_>, identifier: &str) -> Result<i32> {
    match service.record(identifier) {
        Some(record) => {
            println!("{}", serde_json::to_string_pretty(record)?);
            Ok(0)
        }
        None => {
            println!("{}", serde_json::json!({ "error": "Glycan not found" }));
            Ok(1)
        }
    }
}

/// Resolve an identifier to its structure file on disk.
pub fn run_files(
    service: &ResolutionService<'_>,
    store: &dyn StructureFileStore,
    identifier: &str,
) -> Result<i32> {
    let Some(entry) = service.entry_for_files(identifier) else {
        println!("{}", serde_json::json!({ "error": "Glycan not found" }));
        return Ok(1);
    };

    match store.locate(&entry) {
        Some(path) => {
            println!("{}", serde_json::to_string_pretty(&serde_json::json!({
                "id": entry.id,
                "matched": entry.matched.label(),
                "path": path,
            }))?);
            Ok(0)
        }
        None => {
            println!("{}", serde_json::json!({ "error": "Structure file not found" }));
            Ok(1)
        }
    }
}
