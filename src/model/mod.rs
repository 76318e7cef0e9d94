//! Data model: catalog records and the immutable catalog snapshot.

mod catalog;
mod record;

pub use catalog::{EntryRef, GlycanCatalog};
pub use record::{Anomer, GlycanRecord, Variant};
