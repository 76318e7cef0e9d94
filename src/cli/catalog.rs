//! Catalog listing command handlers.

use crate::model::GlycanCatalog;
use anyhow::Result;

/// Print every GlyTouCan accession the catalog serves.
pub fn run_available(catalog: &GlycanCatalog) -> Result<i32> {
    let accessions = catalog.available_accessions();
    println!("{}", serde_json::to_string_pretty(&accessions)?);
    Ok(0)
}

/// Print a one-line summary of the loaded catalog.
pub fn run_stats(catalog: &GlycanCatalog) -> Result<i32> {
    println!("{}", serde_json::to_string_pretty(&serde_json::json!({
        "records": catalog.len(),
        "accessions": catalog.available_accessions().len(),
    }))?);
    Ok(0)
}
