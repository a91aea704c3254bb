//! ROM audit pipeline: groups scanned files into releases, audits them
//! against an optional reference catalog, and builds the parent/clone graph
//! used by flat, parent/clone and 1G1R listings.

pub mod classify;
pub mod error;
pub mod options;
pub mod pclone;
pub mod provider;
pub mod scan;
pub mod settings;
pub mod summary;
pub mod view;

pub use classify::{CatalogMatch, MatchMethod, classify, match_catalog};
pub use error::SettingsError;
pub use options::AuditOptions;
pub use pclone::{PCloneGraph, UNKNOWN_ROMS_PARENT_ID, build_graph, resolve_parents};
pub use provider::{ChecksumProvider, KeepTitle, NoChecksums, TitleFormatter};
pub use scan::{ScanOutcome, prepare_catalog, scan_and_classify};
pub use settings::{AuditSettings, Settings};
pub use summary::AuditSummary;
pub use view::{DisplayMode, DisplayModeParseError, visible_releases};

// Re-export the crates the pipeline's inputs and outputs come from
pub use ael_core;
pub use ael_dat;
