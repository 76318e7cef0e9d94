//! External format-conversion collaborators.
//!
//! Name-based conversion (IUPAC → WURCS + accession) goes through the
//! GlyCosmos web service; structural fallback (SMILES → WURCS) goes through
//! the MolWURCS tool. Both sit behind traits so the resolution pipeline can
//! be run offline with [`NoOpConverter`].

#[cfg(feature = "conversion")]
mod glycosmos;
mod molwurcs;
mod traits;

#[cfg(feature = "conversion")]
pub use glycosmos::{GlycosmosClient, GlycosmosClientConfig};
pub use molwurcs::MolWurcsConverter;
pub use traits::{IupacConversion, IupacConverter, NoOpConverter, SmilesConverter};
