//! Per-entry structure file location.
//!
//! Structure files live under the database directory, one folder per entry,
//! anomer-labeled: `{id}/PDB_format_ATOM/cluster0_{anomer}.PDB.pdb`. The
//! resolution service decides which entry and anomer to ask for; this store
//! only maps that decision to a path on disk, substituting the fallback
//! anomer when the preferred file is absent.

use super::service::ResolvedEntry;
use crate::model::Anomer;
use std::path::{Path, PathBuf};

/// Locates structure files for resolved catalog entries.
pub trait StructureFileStore: Send + Sync {
    /// Path of the best available structure file for the entry, preferred
    /// anomer first, fallback second. `None` when neither exists.
    fn locate(&self, entry: &ResolvedEntry) -> Option<PathBuf>;
}

/// File store over the on-disk database layout.
#[derive(Debug, Clone)]
pub struct DirFileStore {
    root: PathBuf,
}

impl DirFileStore {
    /// Create a store rooted at the database directory.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path of the representative PDB file for one anomer of one entry.
    #[must_use]
    pub fn structure_path(&self, id: &str, anomer: Anomer) -> PathBuf {
        self.root
            .join(id)
            .join("PDB_format_ATOM")
            .join(format!("cluster0_{}.PDB.pdb", anomer.label()))
    }

    /// The database root this store serves from.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl StructureFileStore for DirFileStore {
    fn locate(&self, entry: &ResolvedEntry) -> Option<PathBuf> {
        let preferred = self.structure_path(&entry.id, entry.preferred);
        if preferred.is_file() {
            return Some(preferred);
        }
        let fallback = self.structure_path(&entry.id, entry.fallback);
        if fallback.is_file() {
            tracing::debug!(
                id = %entry.id,
                preferred = entry.preferred.label(),
                fallback = entry.fallback.label(),
                "preferred anomer file absent, serving fallback"
            );
            return Some(fallback);
        }
        None
    }
}
