//! Immutable catalog snapshot with precomputed lookup tables.
//!
//! The catalog dataset is a single JSON document mapping internal IDs to
//! [`GlycanRecord`]s. It is read once at process start and held read-only for
//! the process lifetime; every resolution and search operation works against
//! this snapshot by reference, so the read path needs no locking.
//!
//! Building the lookup tables up front avoids re-scanning every record per
//! request. Insertion order of the dataset is preserved (an `IndexMap`), which
//! is what makes equal-score search results deterministically ordered.

use super::record::{Anomer, GlycanRecord};
use crate::error::{CatalogErrorKind, GlycanToolsError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Reference to one variant of one catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryRef {
    /// Internal ID of the owning record
    pub id: String,
    /// Which anomeric variant matched
    pub anomer: Anomer,
}

/// Read-only snapshot of the glycan catalog.
#[derive(Debug, Clone, Default)]
pub struct GlycanCatalog {
    records: IndexMap<String, GlycanRecord>,
    /// GlyTouCan accession → entry, case-sensitive
    by_glytoucan: HashMap<String, EntryRef>,
    /// Lowercased IUPAC → entry
    by_iupac: HashMap<String, EntryRef>,
    /// Lowercased WURCS → entry
    by_wurcs: HashMap<String, EntryRef>,
    /// Lowercased archetype GLYCAM name → internal ID
    by_glycam: HashMap<String, String>,
    /// Internal ID → lowercased free-text search blob
    blobs: HashMap<String, String>,
}

impl GlycanCatalog {
    /// Load the catalog from a JSON dataset file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| GlycanToolsError::io(path, e))?;
        let records: IndexMap<String, GlycanRecord> = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| {
                GlycanToolsError::catalog(
                    format!("loading {}", path.display()),
                    CatalogErrorKind::InvalidJson(e.to_string()),
                )
            })?;
        let catalog = Self::from_records(records)?;
        tracing::info!(entries = catalog.len(), "glycan catalog loaded");
        Ok(catalog)
    }

    /// Load the catalog from an in-memory JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: IndexMap<String, GlycanRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// Build the snapshot and its lookup tables from deserialized records.
    ///
    /// Duplicate identifier values keep the first occurrence in dataset
    /// order, matching the first-match-wins scan they replace.
    pub fn from_records(records: IndexMap<String, GlycanRecord>) -> Result<Self> {
        if records.is_empty() {
            return Err(GlycanToolsError::catalog(
                "building catalog index",
                CatalogErrorKind::EmptyDataset,
            ));
        }

        let mut by_glytoucan = HashMap::new();
        let mut by_iupac = HashMap::new();
        let mut by_wurcs = HashMap::new();
        let mut by_glycam = HashMap::new();
        let mut blobs = HashMap::new();

        for (id, record) in &records {
            let mut blob_parts: Vec<&str> = Vec::new();

            for (anomer, variant) in record.variants() {
                let entry = EntryRef {
                    id: id.clone(),
                    anomer,
                };
                if let Some(glytoucan) = variant.glytoucan.as_deref() {
                    by_glytoucan
                        .entry(glytoucan.to_string())
                        .or_insert_with(|| entry.clone());
                    blob_parts.push(glytoucan);
                }
                if let Some(iupac) = variant.iupac.as_deref() {
                    by_iupac
                        .entry(iupac.to_lowercase())
                        .or_insert_with(|| entry.clone());
                    blob_parts.push(iupac);
                }
                if let Some(wurcs) = variant.wurcs.as_deref() {
                    by_wurcs
                        .entry(wurcs.to_lowercase())
                        .or_insert_with(|| entry.clone());
                }
                blob_parts.push(variant.id.as_deref().unwrap_or(id));
            }

            if let Some(glycam) = record.archetype.glycam.as_deref() {
                by_glycam
                    .entry(glycam.to_lowercase())
                    .or_insert_with(|| id.clone());
            }

            blobs.insert(id.clone(), blob_parts.join(" ").to_lowercase());
        }

        Ok(Self {
            records,
            by_glytoucan,
            by_iupac,
            by_wurcs,
            by_glycam,
            blobs,
        })
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if the catalog holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Fetch a record by internal ID.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&GlycanRecord> {
        self.records.get(id)
    }

    /// Iterate records in dataset order.
    pub fn records(&self) -> impl Iterator<Item = (&String, &GlycanRecord)> {
        self.records.iter()
    }

    /// Case-sensitive GlyTouCan accession lookup across all variants.
    #[must_use]
    pub fn lookup_glytoucan(&self, accession: &str) -> Option<&EntryRef> {
        self.by_glytoucan.get(accession)
    }

    /// Case-insensitive IUPAC lookup across all variants.
    #[must_use]
    pub fn lookup_iupac(&self, iupac: &str) -> Option<&EntryRef> {
        self.by_iupac.get(&iupac.to_lowercase())
    }

    /// Case-insensitive WURCS lookup across all variants.
    #[must_use]
    pub fn lookup_wurcs(&self, wurcs: &str) -> Option<&EntryRef> {
        self.by_wurcs.get(&wurcs.to_lowercase())
    }

    /// Case-insensitive WURCS lookup restricted to one anomer's field.
    #[must_use]
    pub fn lookup_wurcs_for_anomer(&self, wurcs: &str, anomer: Anomer) -> Option<&EntryRef> {
        self.by_wurcs
            .get(&wurcs.to_lowercase())
            .filter(|entry| entry.anomer == anomer)
    }

    /// Case-insensitive GLYCAM-name lookup, archetype only.
    #[must_use]
    pub fn lookup_glycam(&self, glycam: &str) -> Option<&str> {
        self.by_glycam.get(&glycam.to_lowercase()).map(String::as_str)
    }

    /// Lowercased free-text search blob for a record.
    #[must_use]
    pub fn blob(&self, id: &str) -> Option<&str> {
        self.blobs.get(id).map(String::as_str)
    }

    /// All GlyTouCan accessions present in the catalog, dataset order,
    /// archetype → alpha → beta within each record.
    #[must_use]
    pub fn available_accessions(&self) -> Vec<&str> {
        self.records
            .values()
            .flat_map(|record| {
                record
                    .variants()
                    .filter_map(|(_, variant)| variant.glytoucan.as_deref())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> GlycanCatalog {
        GlycanCatalog::from_json_str(
            r#"{
                "GS00001": {
                    "archetype": {
                        "ID": "GS00001",
                        "glytoucan": "G00028MO",
                        "iupac": "GlcNAc",
                        "wurcs": "WURCS=2.0/1,1,0/[a2122h-1x_1-5_2*NCC/3=O]/1/",
                        "glycam": "DGlcpNAcb1-OH",
                        "mass": 221.2
                    },
                    "alpha": {
                        "ID": "GS00001",
                        "glytoucan": "G86246UV",
                        "iupac": "GlcNAc(a1-",
                        "wurcs": "WURCS=2.0/1,1,0/[a2122h-1a_1-5_2*NCC/3=O]/1/"
                    },
                    "beta": {
                        "ID": "GS00001",
                        "glytoucan": "G80562AQ",
                        "iupac": "GlcNAc(b1-",
                        "wurcs": "WURCS=2.0/1,1,0/[a2122h-1b_1-5_2*NCC/3=O]/1/"
                    }
                },
                "GS00002": {
                    "archetype": {
                        "ID": "GS00002",
                        "glytoucan": "G42666HT",
                        "iupac": "Man",
                        "wurcs": "WURCS=2.0/1,1,0/[a1122h-1x_1-5]/1/",
                        "glycam": "DManpa1-OH",
                        "mass": 180.16
                    }
                }
            }"#,
        )
        .expect("sample catalog parses")
    }

    #[test]
    fn test_len_and_order() {
        let catalog = sample_catalog();
        assert_eq!(catalog.len(), 2);
        let ids: Vec<&String> = catalog.records().map(|(id, _)| id).collect();
        assert_eq!(ids, ["GS00001", "GS00002"]);
    }

    #[test]
    fn test_glytoucan_lookup_is_case_sensitive() {
        let catalog = sample_catalog();
        let entry = catalog.lookup_glytoucan("G80562AQ").expect("beta accession");
        assert_eq!(entry.id, "GS00001");
        assert_eq!(entry.anomer, Anomer::Beta);
        assert!(catalog.lookup_glytoucan("g80562aq").is_none());
    }

    #[test]
    fn test_iupac_lookup_is_case_insensitive() {
        let catalog = sample_catalog();
        let entry = catalog.lookup_iupac("glcnac").expect("archetype iupac");
        assert_eq!(entry.id, "GS00001");
        assert_eq!(entry.anomer, Anomer::Archetype);
    }

    #[test]
    fn test_wurcs_lookup_per_anomer() {
        let catalog = sample_catalog();
        let alpha_wurcs = "WURCS=2.0/1,1,0/[a2122h-1a_1-5_2*NCC/3=O]/1/";
        assert!(catalog
            .lookup_wurcs_for_anomer(alpha_wurcs, Anomer::Alpha)
            .is_some());
        assert!(catalog
            .lookup_wurcs_for_anomer(alpha_wurcs, Anomer::Beta)
            .is_none());
    }

    #[test]
    fn test_glycam_lookup_archetype_only() {
        let catalog = sample_catalog();
        assert_eq!(catalog.lookup_glycam("dglcpnacb1-oh"), Some("GS00001"));
        assert!(catalog.lookup_glycam("unknown").is_none());
    }

    #[test]
    fn test_blob_contains_all_variant_identifiers() {
        let catalog = sample_catalog();
        let blob = catalog.blob("GS00001").expect("blob built");
        assert!(blob.contains("g00028mo"));
        assert!(blob.contains("g86246uv"));
        assert!(blob.contains("glcnac"));
        assert!(blob.contains("gs00001"));
    }

    #[test]
    fn test_available_accessions() {
        let catalog = sample_catalog();
        let accessions = catalog.available_accessions();
        assert_eq!(
            accessions,
            ["G00028MO", "G86246UV", "G80562AQ", "G42666HT"]
        );
    }

    #[test]
    fn test_empty_dataset_rejected() {
        assert!(GlycanCatalog::from_json_str("{}").is_err());
    }
}
