//! Filesystem presence probes for submitted glycan data.
//!
//! An identifier that already has a raw-data or upload folder on disk is
//! considered to exist before the catalog is ever consulted. The similar-name
//! probe is the duplicate-submission guard: two folders of identical length
//! differing only in the trailing reducing-end window are taken to be the
//! same glycan.

use crate::config::ProbeConfig;
use std::path::PathBuf;

/// Answers folder-presence questions for identifiers.
pub trait PresenceProbe: Send + Sync {
    /// True if a folder named exactly `name` exists under any probe root.
    fn folder_exists(&self, name: &str) -> bool;

    /// Look for a sibling folder of identical length sharing the prefix of
    /// `name` up to the trailing suffix window, but not byte-identical.
    /// Returns the sibling's name when found.
    fn similar_folder(&self, name: &str) -> Option<String>;
}

/// Probe over one or more data roots on the local filesystem.
#[derive(Debug, Clone)]
pub struct DirPresenceProbe {
    roots: Vec<PathBuf>,
    suffix_window: usize,
}

impl DirPresenceProbe {
    /// Create a probe over the given roots with default settings.
    #[must_use]
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self::with_config(roots, &ProbeConfig::default())
    }

    /// Create a probe with explicit settings.
    #[must_use]
    pub fn with_config(roots: Vec<PathBuf>, config: &ProbeConfig) -> Self {
        Self {
            roots,
            suffix_window: config.similar_suffix_window,
        }
    }
}

impl PresenceProbe for DirPresenceProbe {
    fn folder_exists(&self, name: &str) -> bool {
        self.roots.iter().any(|root| root.join(name).is_dir())
    }

    fn similar_folder(&self, name: &str) -> Option<String> {
        if name.len() <= self.suffix_window
            || !name.is_char_boundary(name.len() - self.suffix_window)
        {
            return None;
        }
        let prefix = &name[..name.len() - self.suffix_window];

        for root in &self.roots {
            let Ok(entries) = std::fs::read_dir(root) else {
                continue;
            };
            for entry in entries.flatten() {
                let Ok(sibling) = entry.file_name().into_string() else {
                    continue;
                };
                if sibling.len() == name.len()
                    && sibling != name
                    && sibling.starts_with(prefix)
                    && entry.path().is_dir()
                {
                    return Some(sibling);
                }
            }
        }
        None
    }
}

/// Null-object probe: nothing is ever present on disk.
///
/// Used for catalog-only resolution and in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPresenceProbe;

impl NoPresenceProbe {
    /// Create a new no-op probe.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl PresenceProbe for NoPresenceProbe {
    fn folder_exists(&self, _name: &str) -> bool {
        false
    }

    fn similar_folder(&self, _name: &str) -> Option<String> {
        None
    }
}
