//! Identifier resolution against the catalog and the filesystem.
//!
//! Every operation runs the same ladder: on-disk presence first, then the
//! identifier channels in a fixed precedence order, first match wins. A
//! positive answer always says which channel and which variant matched so
//! operators can tell a GlyTouCan hit from a derived-WURCS hit.

use super::normalizer::{self, NormalizedIdentifier};
use super::probe::PresenceProbe;
use crate::config::defaults::DEFAULT_MIN_SIMILAR_NAME_LEN;
use crate::convert::IupacConverter;
use crate::grammar::{self, NotationKind};
use crate::model::{Anomer, EntryRef, GlycanCatalog, GlycanRecord};
use serde::Serialize;
use std::fmt;

/// Which resolution channel produced a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "channel", content = "detail")]
pub enum MatchChannel {
    /// A raw-data or upload folder for the identifier already exists
    RawDataFolder,
    /// A sibling folder differing only in the reducing-end window exists
    SimilarFolder { existing: String },
    /// GlyTouCan accession equality (case-sensitive)
    GlyTouCan(Anomer),
    /// IUPAC equality (case-insensitive)
    Iupac(Anomer),
    /// GLYCAM-name equality against the archetype (case-insensitive)
    Glycam,
    /// WURCS equality for the input or its derived candidate
    Wurcs(Anomer),
    /// Derived alpha/beta WURCS variant matched the anomer-specific field
    WurcsVariant(Anomer),
}

impl fmt::Display for MatchChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RawDataFolder => write!(f, "Raw Data Folder"),
            Self::SimilarFolder { existing } => {
                write!(f, "Similar Name Folder ({existing})")
            }
            Self::GlyTouCan(anomer) => write!(f, "GlyTouCan Match ({})", anomer.display_name()),
            Self::Iupac(anomer) => write!(f, "IUPAC Match ({})", anomer.display_name()),
            Self::Glycam => write!(f, "GLYCAM Match (Archetype)"),
            Self::Wurcs(anomer) => write!(f, "WURCS Match ({})", anomer.display_name()),
            Self::WurcsVariant(anomer) => {
                write!(f, "WURCS Variant Match ({})", anomer.display_name())
            }
        }
    }
}

/// Structured answer to "does this identifier exist".
#[derive(Debug, Clone, Serialize)]
pub struct Existence {
    /// Whether any channel matched
    pub found: bool,
    /// Human-readable reason
    pub reason: String,
    /// The matching channel, when found
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<MatchChannel>,
    /// The matched catalog entry, when the match came from the catalog
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<EntryRef>,
}

impl Existence {
    fn not_found() -> Self {
        Self {
            found: false,
            reason: "no channel matched".to_string(),
            channel: None,
            entry: None,
        }
    }

    fn filesystem(channel: MatchChannel) -> Self {
        Self {
            found: true,
            reason: channel.to_string(),
            channel: Some(channel),
            entry: None,
        }
    }

    fn catalog(channel: MatchChannel, entry: EntryRef) -> Self {
        Self {
            found: true,
            reason: channel.to_string(),
            channel: Some(channel),
            entry: Some(entry),
        }
    }
}

/// A catalog entry resolved for file serving.
///
/// Structure files on disk are anomer-labeled; the preferred form follows the
/// matched variant, the other form is the best-effort substitute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedEntry {
    /// Internal ID of the catalog entry
    pub id: String,
    /// The variant the identifier matched
    pub matched: Anomer,
    /// Anomer whose files should be served first
    pub preferred: Anomer,
    /// Anomer to fall back to when the preferred files are absent
    pub fallback: Anomer,
}

impl ResolvedEntry {
    fn for_match(id: String, matched: Anomer) -> Self {
        // Alpha matches serve alpha files; beta and archetype serve beta,
        // each falling back to the other form.
        let (preferred, fallback) = match matched {
            Anomer::Alpha => (Anomer::Alpha, Anomer::Beta),
            Anomer::Beta | Anomer::Archetype => (Anomer::Beta, Anomer::Alpha),
        };
        Self {
            id,
            matched,
            preferred,
            fallback,
        }
    }
}

/// Resolution service over an immutable catalog snapshot.
///
/// Stateless per request; safe to share across threads.
pub struct ResolutionService<'a> {
    catalog: &'a GlycanCatalog,
    converter: &'a dyn IupacConverter,
    probe: &'a dyn PresenceProbe,
}

impl<'a> ResolutionService<'a> {
    /// Create a service over the given collaborators.
    #[must_use]
    pub fn new(
        catalog: &'a GlycanCatalog,
        converter: &'a dyn IupacConverter,
        probe: &'a dyn PresenceProbe,
    ) -> Self {
        Self {
            catalog,
            converter,
            probe,
        }
    }

    /// Check whether an identifier exists, through every applicable channel
    /// in precedence order. Short-circuits on the first match.
    #[must_use]
    pub fn exists(&self, identifier: &str) -> Existence {
        let identifier = identifier.trim();
        if identifier.is_empty() {
            return Existence::not_found();
        }
        let kind = grammar::classify(identifier);

        // 1. On-disk data wins regardless of catalog presence. Submitted
        //    GLYCAM names carry a reducing-end suffix the folder may lack.
        let tidied = grammar::tidy(identifier);
        if self.probe.folder_exists(identifier) || self.probe.folder_exists(tidied) {
            return Existence::filesystem(MatchChannel::RawDataFolder);
        }

        // 2. Duplicate-submission guard: same length, same prefix up to the
        //    reducing-end window.
        if identifier.len() > DEFAULT_MIN_SIMILAR_NAME_LEN
            && !grammar::is_glytoucan_shaped(identifier)
        {
            if let Some(existing) = self.probe.similar_folder(identifier) {
                return Existence::filesystem(MatchChannel::SimilarFolder { existing });
            }
        }

        // 3. GlyTouCan accession, case-sensitive, all variants.
        if let Some(entry) = self.catalog.lookup_glytoucan(identifier) {
            return Existence::catalog(MatchChannel::GlyTouCan(entry.anomer), entry.clone());
        }

        // 4. IUPAC, case-insensitive, all variants.
        if let Some(entry) = self.catalog.lookup_iupac(identifier) {
            return Existence::catalog(MatchChannel::Iupac(entry.anomer), entry.clone());
        }

        // 5. GLYCAM name, case-insensitive, archetype only.
        for candidate in [identifier, tidied] {
            if let Some(id) = self.catalog.lookup_glycam(candidate) {
                let entry = EntryRef {
                    id: id.to_string(),
                    anomer: Anomer::Archetype,
                };
                return Existence::catalog(MatchChannel::Glycam, entry);
            }
        }

        // 6. WURCS: the raw input, then the derived candidate, then the
        //    derived anomer variants against their specific fields.
        let normalized = normalizer::normalize(identifier, self.converter);
        if let Some(outcome) = self.match_wurcs(&normalized, kind) {
            return outcome;
        }

        Existence::not_found()
    }

    fn match_wurcs(
        &self,
        normalized: &NormalizedIdentifier,
        kind: NotationKind,
    ) -> Option<Existence> {
        if kind == NotationKind::Wurcs {
            if let Some(entry) = self.catalog.lookup_wurcs(&normalized.raw) {
                return Some(Existence::catalog(
                    MatchChannel::Wurcs(entry.anomer),
                    entry.clone(),
                ));
            }
        }

        let candidate = normalized.wurcs.as_ref()?;
        if let Some(entry) = self.catalog.lookup_wurcs(&candidate.canonical) {
            return Some(Existence::catalog(
                MatchChannel::Wurcs(entry.anomer),
                entry.clone(),
            ));
        }
        if let Some(entry) = self
            .catalog
            .lookup_wurcs_for_anomer(&candidate.alpha, Anomer::Alpha)
        {
            return Some(Existence::catalog(
                MatchChannel::WurcsVariant(Anomer::Alpha),
                entry.clone(),
            ));
        }
        if let Some(entry) = self
            .catalog
            .lookup_wurcs_for_anomer(&candidate.beta, Anomer::Beta)
        {
            return Some(Existence::catalog(
                MatchChannel::WurcsVariant(Anomer::Beta),
                entry.clone(),
            ));
        }
        None
    }

    /// Fetch the full record for an identifier: internal ID first, then
    /// GlyTouCan accession, then exact IUPAC when the identifier looks like
    /// one. First full record wins; partial matches are never merged.
    #[must_use]
    pub fn record(&self, identifier: &str) -> Option<&'a GlycanRecord> {
        let identifier = identifier.trim();

        if let Some(record) = self.catalog.get(identifier) {
            return Some(record);
        }
        if let Some(entry) = self.catalog.lookup_glytoucan(identifier) {
            return self.catalog.get(&entry.id);
        }
        if identifier.contains('(') {
            if let Some(entry) = self.catalog.lookup_iupac(identifier) {
                return self.catalog.get(&entry.id);
            }
        }
        None
    }

    /// Resolve an identifier to a catalog entry and anomer preference for
    /// file serving.
    #[must_use]
    pub fn entry_for_files(&self, identifier: &str) -> Option<ResolvedEntry> {
        let identifier = identifier.trim();

        if self.catalog.get(identifier).is_some() {
            return Some(ResolvedEntry::for_match(
                identifier.to_string(),
                Anomer::Archetype,
            ));
        }
        if let Some(entry) = self.catalog.lookup_glytoucan(identifier) {
            return Some(ResolvedEntry::for_match(entry.id.clone(), entry.anomer));
        }
        if identifier.contains('(') {
            if let Some(entry) = self.catalog.lookup_iupac(identifier) {
                return Some(ResolvedEntry::for_match(entry.id.clone(), entry.anomer));
            }
        }
        None
    }
}
