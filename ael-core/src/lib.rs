//! Core data model for ROM audits: filename tokenizing, multi-disc grouping,
//! and the release records the audit and parent/clone stages fill in.

pub mod disc;
pub mod token;
pub mod types;

pub use disc::{
    DiscMarker, DiscMarkerStyle, DiscSet, DiscSetCandidate, DiscSetIssue, detect,
    group_disc_sets, parse_disc_marker,
};
pub use token::{BracketKind, Token, join_tokens, tokenize};
pub use types::{AuditStatus, FileChecksums, PCloneStatus, Release, RomFileRef, ScanWarning};
