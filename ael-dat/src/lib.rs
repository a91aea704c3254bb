//! Reference catalog (DAT) index: name and checksum lookup plus the
//! parent/clone adjacency used to audit a ROM collection.

pub mod catalog;
pub mod checksum;
pub mod error;

pub use catalog::{CatalogEntry, DatCatalogIndex};
pub use checksum::{ChecksumKind, normalize_checksum};
pub use error::CatalogError;
