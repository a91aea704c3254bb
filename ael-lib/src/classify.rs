//! Audit classification of a single disc set against a catalog.

use ael_core::{AuditStatus, DiscSet, PCloneStatus, Release};
use ael_dat::{CatalogEntry, DatCatalogIndex};

use crate::options::AuditOptions;
use crate::provider::{ChecksumProvider, TitleFormatter};

/// How a catalog match was determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMethod {
    /// One of the set's discs matched by CRC32, MD5 or SHA1
    Checksum,
    /// The set's name matched a canonical name or alias
    Name,
}

/// A catalog entry matched by a disc set.
#[derive(Debug, Clone, Copy)]
pub struct CatalogMatch<'a> {
    pub entry: &'a CatalogEntry,
    pub method: MatchMethod,
}

/// Stable id for a release discovered on disk.
pub fn release_id(platform: &str, set_name: &str) -> String {
    hashed_id("rom", platform, set_name)
}

/// Stable id for a catalog entry with no file on disk.
pub fn missing_release_id(platform: &str, catalog_name: &str) -> String {
    hashed_id("dat", platform, catalog_name)
}

/// Fallback id when two disc sets share a set name.
pub fn path_release_id(platform: &str, path: &str) -> String {
    hashed_id("path", platform, path)
}

fn hashed_id(kind: &str, platform: &str, key: &str) -> String {
    format!("{:x}", md5::compute(format!("{kind}:{platform}/{key}")))
}

/// Find the catalog entry a disc set corresponds to.
///
/// Checksums are tried disc by disc in disc order, then the set's names:
/// its base name, then its full set name (file name or set name with
/// extension).
pub fn match_catalog<'a>(
    set: &DiscSet,
    catalog: &'a DatCatalogIndex,
    options: &AuditOptions,
    checksums: &dyn ChecksumProvider,
) -> Option<CatalogMatch<'a>> {
    if options.use_checksums {
        for file in set.files() {
            let Some(sums) = checksums.checksums(file) else {
                continue;
            };
            let found = catalog.lookup_by_checksum(
                sums.crc.as_deref(),
                sums.md5.as_deref(),
                sums.sha1.as_deref(),
            );
            if let Some(entry) = found {
                return Some(CatalogMatch {
                    entry,
                    method: MatchMethod::Checksum,
                });
            }
        }
    }

    [set.base_name(), set.set_name.as_str()]
        .into_iter()
        .find_map(|name| catalog.lookup_by_name(name))
        .map(|entry| CatalogMatch {
            entry,
            method: MatchMethod::Name,
        })
}

/// Turn a disc set into a release with its audit and parent/clone status.
///
/// Without a catalog both statuses are `None`. A clone's parent is recorded
/// by catalog name only, as the top of its parent chain; `resolve_parents`
/// turns it into a release id once every release of the run exists.
pub fn classify(
    set: &DiscSet,
    catalog: Option<&DatCatalogIndex>,
    options: &AuditOptions,
    checksums: &dyn ChecksumProvider,
    titles: &dyn TitleFormatter,
) -> Release {
    let mut release = Release {
        id: release_id(&options.platform, &set.set_name),
        display_name: titles.format_title(set.base_name()),
        set_name: set.set_name.clone(),
        platform: options.platform.clone(),
        discs: set.files().cloned().collect(),
        audit_status: AuditStatus::None,
        pclone_status: PCloneStatus::None,
        parent_release_id: None,
        catalog_name: None,
        catalog_parent: None,
    };

    let Some(catalog) = catalog else {
        return release;
    };

    match match_catalog(set, catalog, options, checksums) {
        Some(CatalogMatch { entry, method }) => {
            log::debug!("{} matched '{}' by {:?}", set.set_name, entry.name, method);
            release.audit_status = AuditStatus::Have;
            release.catalog_name = Some(entry.name.clone());
            if catalog.is_parent(&entry.name) {
                release.pclone_status = PCloneStatus::Parent;
            } else {
                release.pclone_status = PCloneStatus::Clone;
                release.catalog_parent = top_parent(catalog, entry);
            }
        }
        None => {
            release.audit_status = if options.exhaustive_catalog {
                AuditStatus::Extra
            } else {
                AuditStatus::Unknown
            };
        }
    }

    release
}

/// Pseudo-release for a catalog entry that no scanned file matched.
pub fn missing_release(
    entry: &CatalogEntry,
    catalog: &DatCatalogIndex,
    options: &AuditOptions,
    titles: &dyn TitleFormatter,
) -> Release {
    Release {
        id: missing_release_id(&options.platform, &entry.name),
        display_name: titles.format_title(&entry.name),
        set_name: entry.name.clone(),
        platform: options.platform.clone(),
        discs: Vec::new(),
        audit_status: AuditStatus::Miss,
        pclone_status: if entry.is_parent() {
            PCloneStatus::Parent
        } else {
            PCloneStatus::Clone
        },
        parent_release_id: None,
        catalog_name: Some(entry.name.clone()),
        catalog_parent: top_parent(catalog, entry),
    }
}

/// Canonical name of the top-level parent of a clone entry.
fn top_parent(catalog: &DatCatalogIndex, entry: &CatalogEntry) -> Option<String> {
    match catalog.root_of(&entry.name) {
        Some(root) if root.name != entry.name => Some(root.name.clone()),
        _ => entry.parent.clone(),
    }
}

#[cfg(test)]
#[path = "tests/classify_tests.rs"]
mod tests;
