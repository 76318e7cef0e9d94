//! Identifier normalization and resolution.
//!
//! [`normalizer`] turns any supported identifier into a canonical WURCS
//! candidate where possible; [`service`] runs the precedence ladder over the
//! catalog and the filesystem probes; [`files`] maps resolved entries to
//! structure files on disk.

mod files;
mod normalizer;
mod probe;
mod service;

pub use files::{DirFileStore, StructureFileStore};
pub use normalizer::{normalize, NormalizedIdentifier, WurcsCandidate};
pub use probe::{DirPresenceProbe, NoPresenceProbe, PresenceProbe};
pub use service::{Existence, MatchChannel, ResolutionService, ResolvedEntry};
