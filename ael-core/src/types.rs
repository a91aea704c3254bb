//! Records passed between the grouping, audit, and graph stages.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// One physical file found by a directory scan.
///
/// The path is split once at construction; the parts are read-only afterwards.
/// Serialized as the plain path string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct RomFileRef {
    path: String,
    base_name: String,
    /// Extension including the leading dot (e.g. `.iso`), empty when absent.
    extension: String,
    directory: String,
}

impl RomFileRef {
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let p = Path::new(&path);
        let base_name = p
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string();
        let extension = p
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{e}"))
            .unwrap_or_default();
        let directory = p
            .parent()
            .and_then(|d| d.to_str())
            .unwrap_or_default()
            .to_string();
        Self {
            path,
            base_name,
            extension,
            directory,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// File name without its extension.
    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    /// Extension with its leading dot, or `""`.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn directory(&self) -> &str {
        &self.directory
    }

    /// Base name with the extension re-attached.
    pub fn file_name(&self) -> String {
        format!("{}{}", self.base_name, self.extension)
    }
}

impl From<String> for RomFileRef {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}

impl From<&str> for RomFileRef {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<RomFileRef> for String {
    fn from(file: RomFileRef) -> Self {
        file.path
    }
}

/// Checksums for one file, as supplied by an external checksum provider.
///
/// Values are hex strings in whatever case the provider produced; the
/// catalog normalizes them before lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileChecksums {
    pub crc: Option<String>,
    pub md5: Option<String>,
    pub sha1: Option<String>,
    pub size: Option<u64>,
}

impl FileChecksums {
    pub fn with_crc(mut self, crc: impl Into<String>) -> Self {
        self.crc = Some(crc.into());
        self
    }

    pub fn with_md5(mut self, md5: impl Into<String>) -> Self {
        self.md5 = Some(md5.into());
        self
    }

    pub fn with_sha1(mut self, sha1: impl Into<String>) -> Self {
        self.sha1 = Some(sha1.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.crc.is_none() && self.md5.is_none() && self.sha1.is_none()
    }
}

/// Outcome of auditing a release against a reference catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuditStatus {
    /// Found on disk and recognized by the catalog.
    Have,
    /// Listed in the catalog but not found on disk.
    Miss,
    /// Found on disk, not in the catalog.
    Unknown,
    /// Found on disk, not in a catalog that claims to be exhaustive.
    Extra,
    /// No catalog was available for this run.
    None,
}

impl AuditStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Have => "Have",
            Self::Miss => "Miss",
            Self::Unknown => "Unknown",
            Self::Extra => "Extra",
            Self::None => "None",
        }
    }
}

impl fmt::Display for AuditStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Position of a release in the catalog's parent/clone graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PCloneStatus {
    Parent,
    Clone,
    None,
}

impl PCloneStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Parent => "Parent",
            Self::Clone => "Clone",
            Self::None => "None",
        }
    }
}

impl fmt::Display for PCloneStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A logical game entry: one file, or every disc of a multi-disc set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    /// Stable identifier; does not depend on which disc was seen first.
    pub id: String,
    pub display_name: String,
    /// Grouping key: the file name for single files, the disc-less name
    /// plus extension for multi-disc sets, the catalog name for missing entries.
    pub set_name: String,
    pub platform: String,
    /// Disc files in ascending disc order. Empty only for `Miss` entries.
    pub discs: Vec<RomFileRef>,
    pub audit_status: AuditStatus,
    pub pclone_status: PCloneStatus,
    /// Set when `pclone_status` is `Clone`.
    pub parent_release_id: Option<String>,
    /// Canonical catalog name this release matched.
    pub catalog_name: Option<String>,
    /// Catalog parent name, pending resolution to a release id.
    pub catalog_parent: Option<String>,
}

impl Release {
    pub fn is_multi_disc(&self) -> bool {
        self.discs.len() > 1
    }
}

/// A non-fatal data-quality problem found during a scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanWarning {
    /// Release the warning concerns; empty for run-wide warnings.
    pub release_id: String,
    pub message: String,
}

impl ScanWarning {
    pub fn new(release_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            release_id: release_id.into(),
            message: message.into(),
        }
    }

    /// A warning not tied to a single release.
    pub fn run_wide(message: impl Into<String>) -> Self {
        Self::new(String::new(), message)
    }
}

impl fmt::Display for ScanWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.release_id.is_empty() {
            f.write_str(&self.message)
        } else {
            write!(f, "[{}] {}", self.release_id, self.message)
        }
    }
}
