use serde::{Deserialize, Serialize};

use ael_core::{AuditStatus, PCloneStatus, Release};

/// Audit counters for a list of releases.
///
/// Computed on demand from scan output; nothing accumulates them during
/// classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditSummary {
    pub total: usize,
    pub have: usize,
    pub miss: usize,
    pub unknown: usize,
    pub extra: usize,
    /// Releases audited without a catalog
    pub none: usize,
    pub parents: usize,
    pub clones: usize,
}

impl AuditSummary {
    pub fn from_releases(releases: &[Release]) -> Self {
        releases.iter().fold(Self::default(), |mut s, r| {
            s.total += 1;
            match r.audit_status {
                AuditStatus::Have => s.have += 1,
                AuditStatus::Miss => s.miss += 1,
                AuditStatus::Unknown => s.unknown += 1,
                AuditStatus::Extra => s.extra += 1,
                AuditStatus::None => s.none += 1,
            }
            match r.pclone_status {
                PCloneStatus::Parent => s.parents += 1,
                PCloneStatus::Clone => s.clones += 1,
                PCloneStatus::None => {}
            }
            s
        })
    }

    /// Releases present on disk.
    pub fn on_disk(&self) -> usize {
        self.total - self.miss
    }
}
