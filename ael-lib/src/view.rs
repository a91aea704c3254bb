//! Listing modes built on top of the parent/clone graph.

use std::collections::HashMap;
use std::str::FromStr;

use ael_core::{AuditStatus, Release};

use crate::pclone::UNKNOWN_ROMS_PARENT_ID;
use crate::scan::ScanOutcome;

/// How a release list is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Every release.
    #[default]
    Flat,
    /// Parents and ungrouped releases; clones are reached through their parent.
    PClone,
    /// One game, one ROM: a single release per parent/clone group.
    OneGameOneRom,
}

impl DisplayMode {
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::Flat => "flat",
            Self::PClone => "pclone",
            Self::OneGameOneRom => "1g1r",
        }
    }
}

/// Error returned when a string is not a known display mode.
#[derive(Debug, Clone)]
pub struct DisplayModeParseError(pub String);

impl std::fmt::Display for DisplayModeParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown display mode: '{}' (expected flat, pclone or 1g1r)", self.0)
    }
}

impl std::error::Error for DisplayModeParseError {}

impl FromStr for DisplayMode {
    type Err = DisplayModeParseError;

    /// Parse a mode name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "flat" => Ok(Self::Flat),
            "pclone" | "parent-clone" => Ok(Self::PClone),
            "1g1r" | "one-game-one-rom" => Ok(Self::OneGameOneRom),
            _ => Err(DisplayModeParseError(s.to_string())),
        }
    }
}

/// Releases to show for a display mode, in the outcome's release order.
///
/// In 1G1R mode a group is represented by its parent when the parent is on
/// disk, otherwise by its first clone on disk (clone-list order), otherwise by
/// the missing parent. Members of the unknown-ROMs bucket are listed one by
/// one in every mode.
pub fn visible_releases(outcome: &ScanOutcome, mode: DisplayMode) -> Vec<&Release> {
    let graph = &outcome.graph;
    let is_grouped_clone = |r: &Release| {
        graph
            .parent_of(&r.id)
            .is_some_and(|p| p != UNKNOWN_ROMS_PARENT_ID)
    };

    match mode {
        DisplayMode::Flat => outcome.releases.iter().collect(),
        DisplayMode::PClone => outcome
            .releases
            .iter()
            .filter(|&r| !is_grouped_clone(r))
            .collect(),
        DisplayMode::OneGameOneRom => {
            let by_id: HashMap<&str, &Release> = outcome
                .releases
                .iter()
                .map(|r| (r.id.as_str(), r))
                .collect();
            outcome
                .releases
                .iter()
                .filter(|&r| !is_grouped_clone(r))
                .map(|r| {
                    if r.audit_status == AuditStatus::Have || !graph.is_parent(&r.id) {
                        return r;
                    }
                    graph
                        .clones_of(&r.id)
                        .iter()
                        .filter_map(|id| by_id.get(id.as_str()).copied())
                        .find(|c| c.audit_status == AuditStatus::Have)
                        .unwrap_or(r)
                })
                .collect()
        }
    }
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;
