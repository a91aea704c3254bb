//! Parent/clone graph construction.
//!
//! Clone releases point at their parent by catalog name after classification.
//! `resolve_parents` turns those names into release ids, and `build_graph`
//! folds the classified list into parent → clones and clone → parent maps.
//! Uncataloged releases are collected under a reserved parent id so grouped
//! listings have a single place to show them.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use ael_core::{AuditStatus, PCloneStatus, Release, ScanWarning};

/// Reserved parent id for releases the catalog does not know.
///
/// Release ids are 32 hex digits, so this can never collide with one.
pub const UNKNOWN_ROMS_PARENT_ID: &str = "UNKNOWN_ROMS_PARENT";

/// Parent/clone index for one scan.
///
/// Clone lists are ordered by display name, then release id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PCloneGraph {
    pub parent_to_clones: BTreeMap<String, Vec<String>>,
    pub clone_to_parent: BTreeMap<String, String>,
}

impl PCloneGraph {
    /// Clone ids of a parent; empty for unknown ids and parents without clones.
    pub fn clones_of(&self, parent_id: &str) -> &[String] {
        self.parent_to_clones
            .get(parent_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn parent_of(&self, clone_id: &str) -> Option<&str> {
        self.clone_to_parent.get(clone_id).map(String::as_str)
    }

    pub fn is_parent(&self, id: &str) -> bool {
        self.parent_to_clones.contains_key(id)
    }

    pub fn has_unknown_bucket(&self) -> bool {
        self.parent_to_clones.contains_key(UNKNOWN_ROMS_PARENT_ID)
    }

    /// Members of the unknown-ROMs bucket.
    pub fn unknown_releases(&self) -> &[String] {
        self.clones_of(UNKNOWN_ROMS_PARENT_ID)
    }

    /// Release ids grouped under a real catalog parent (excludes the unknown bucket).
    pub fn real_parents(&self) -> impl Iterator<Item = &str> {
        self.parent_to_clones
            .keys()
            .map(String::as_str)
            .filter(|id| *id != UNKNOWN_ROMS_PARENT_ID)
    }

    fn link(&mut self, clone_id: &str, parent_id: &str) {
        self.parent_to_clones
            .entry(parent_id.to_string())
            .or_default()
            .push(clone_id.to_string());
        self.clone_to_parent
            .insert(clone_id.to_string(), parent_id.to_string());
    }
}

/// Resolve every clone's catalog parent name to the id of the release
/// carrying that catalog name.
///
/// When several releases match the same catalog entry, the one with the
/// lowest id represents it and the others get a warning. A clone whose
/// parent has no release is demoted to `PCloneStatus::None` with a warning.
pub fn resolve_parents(releases: &mut [Release]) -> Vec<ScanWarning> {
    let mut warnings = Vec::new();

    let by_catalog_name = catalog_owners(releases);
    for release in releases.iter() {
        let Some(name) = release.catalog_name.as_deref() else {
            continue;
        };
        let owner = by_catalog_name[name];
        if owner != release.id {
            let message = format!(
                "{} also matches catalog entry '{}' (see release {})",
                release.set_name, name, owner
            );
            warnings.push(ScanWarning::new(&release.id, message));
        }
    }

    let parent_ids: HashMap<String, String> = by_catalog_name
        .into_iter()
        .map(|(name, id)| (name.to_string(), id.to_string()))
        .collect();

    for release in releases.iter_mut() {
        if release.pclone_status != PCloneStatus::Clone {
            continue;
        }
        let resolved = release
            .catalog_parent
            .as_ref()
            .and_then(|name| parent_ids.get(name));
        match resolved {
            Some(parent_id) => release.parent_release_id = Some(parent_id.clone()),
            None => {
                let parent = release.catalog_parent.as_deref().unwrap_or("?");
                log::warn!("{}: parent '{}' has no release, ungrouping", release.set_name, parent);
                warnings.push(ScanWarning::new(
                    &release.id,
                    format!("parent '{parent}' of {} has no release", release.set_name),
                ));
                release.pclone_status = PCloneStatus::None;
                release.parent_release_id = None;
            }
        }
    }

    warnings
}

/// Catalog name → id of the release representing it (the lowest id).
fn catalog_owners(releases: &[Release]) -> HashMap<&str, &str> {
    let mut owners: HashMap<&str, &str> = HashMap::new();
    for release in releases {
        let Some(name) = release.catalog_name.as_deref() else {
            continue;
        };
        let slot = owners.entry(name).or_insert(release.id.as_str());
        if release.id.as_str() < *slot {
            *slot = release.id.as_str();
        }
    }
    owners
}

/// Build the parent/clone maps from classified releases.
///
/// Every parent gets a (possibly empty) clone list. A clone whose parent id
/// was not set by [`resolve_parents`] is resolved here through its catalog
/// parent name; one that still has no parent is treated as uncataloged. When a catalog took part
/// in the run (some release has an audit status other than `None`), releases
/// outside the catalog's groups go under [`UNKNOWN_ROMS_PARENT_ID`]; without a
/// catalog that bucket never appears. The output depends only on the set of
/// releases, not their order.
pub fn build_graph(releases: &[Release]) -> PCloneGraph {
    let catalog_used = releases
        .iter()
        .any(|r| r.audit_status != AuditStatus::None);

    let owners = catalog_owners(releases);

    let mut graph = PCloneGraph::default();
    for release in releases {
        match release.pclone_status {
            PCloneStatus::Parent => {
                graph.parent_to_clones.entry(release.id.clone()).or_default();
            }
            PCloneStatus::Clone => {
                let parent_id = release.parent_release_id.as_deref().or_else(|| {
                    let name = release.catalog_parent.as_deref()?;
                    owners.get(name).copied()
                });
                match parent_id {
                    Some(parent_id) => graph.link(&release.id, parent_id),
                    None => {
                        log::debug!("{} is a clone with no parent release", release.id);
                        if catalog_used {
                            graph.link(&release.id, UNKNOWN_ROMS_PARENT_ID);
                        }
                    }
                }
            }
            PCloneStatus::None if catalog_used => {
                graph.link(&release.id, UNKNOWN_ROMS_PARENT_ID);
            }
            PCloneStatus::None => {}
        }
    }

    let names: HashMap<&str, &str> = releases
        .iter()
        .map(|r| (r.id.as_str(), r.display_name.as_str()))
        .collect();
    for clones in graph.parent_to_clones.values_mut() {
        clones.sort_by(|a, b| {
            let name_a = names.get(a.as_str()).copied().unwrap_or_default();
            let name_b = names.get(b.as_str()).copied().unwrap_or_default();
            name_a.cmp(name_b).then_with(|| a.cmp(b))
        });
        clones.dedup();
    }

    graph
}

#[cfg(test)]
#[path = "tests/pclone_tests.rs"]
mod tests;
