use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::checksum::{ChecksumKind, normalize_checksum};
use crate::error::CatalogError;

/// One record of a reference catalog, already parsed from its native DAT form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Canonical game name (e.g., "Super Mario World (USA)").
    pub name: String,
    /// Other names the game is known by, typically ROM filenames.
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub crc: Option<String>,
    #[serde(default)]
    pub md5: Option<String>,
    #[serde(default)]
    pub sha1: Option<String>,
    /// Canonical name of the parent release; `None` when this entry is a parent.
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub platform: String,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
            crc: None,
            md5: None,
            sha1: None,
            parent: None,
            platform: String::new(),
        }
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

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

    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = platform.into();
        self
    }

    pub fn is_parent(&self) -> bool {
        self.parent.is_none()
    }
}

/// An indexed, read-only view of a catalog for one platform.
///
/// Built once per audit run; safe to share across threads afterwards.
#[derive(Debug, Clone)]
pub struct DatCatalogIndex {
    /// Backing store, in catalog order
    entries: Vec<CatalogEntry>,
    /// Canonical names and aliases → entry index
    by_name: HashMap<String, usize>,
    /// Normalized checksum → entry index, one map per algorithm
    by_crc: HashMap<String, usize>,
    by_md5: HashMap<String, usize>,
    by_sha1: HashMap<String, usize>,
    /// Parent canonical name → clone canonical names, in catalog order
    clones: HashMap<String, Vec<String>>,
    /// Entry index → index of its top-level parent
    roots: Vec<usize>,
}

impl DatCatalogIndex {
    /// Build an index, rejecting catalogs whose parent links do not resolve.
    ///
    /// A repeated canonical name keeps its first entry. Clones of clones are
    /// accepted; [`root_of`](Self::root_of) follows such chains to the top.
    pub fn build(entries: Vec<CatalogEntry>) -> Result<Self, CatalogError> {
        let mut by_name = HashMap::with_capacity(entries.len());
        let mut kept = Vec::with_capacity(entries.len());
        for entry in entries {
            if by_name.contains_key(&entry.name) {
                log::debug!("Ignoring repeated catalog entry '{}'", entry.name);
                continue;
            }
            by_name.insert(entry.name.clone(), kept.len());
            kept.push(entry);
        }
        let entries = kept;

        let mut parent_of = Vec::with_capacity(entries.len());
        let mut clones: HashMap<String, Vec<String>> = HashMap::new();
        for entry in &entries {
            let Some(parent) = &entry.parent else {
                parent_of.push(None);
                continue;
            };
            // A self-reference does not count as a resolvable parent.
            let pi = match by_name.get(parent) {
                Some(&pi) if parent != &entry.name => pi,
                _ => return Err(CatalogError::integrity(&entry.name, parent)),
            };
            parent_of.push(Some(pi));
            clones
                .entry(parent.clone())
                .or_default()
                .push(entry.name.clone());
        }
        let roots = resolve_roots(&entries, &parent_of)?;

        // Aliases never shadow a canonical name or an earlier alias.
        for (i, entry) in entries.iter().enumerate() {
            for alias in &entry.aliases {
                if by_name.contains_key(alias) {
                    log::debug!("Ignoring duplicate catalog alias '{}' on '{}'", alias, entry.name);
                    continue;
                }
                by_name.insert(alias.clone(), i);
            }
        }

        let mut by_crc = HashMap::new();
        let mut by_md5 = HashMap::new();
        let mut by_sha1 = HashMap::new();
        for (i, entry) in entries.iter().enumerate() {
            let name = &entry.name;
            index_checksum(&mut by_crc, entry.crc.as_deref(), ChecksumKind::Crc32, i, name);
            index_checksum(&mut by_md5, entry.md5.as_deref(), ChecksumKind::Md5, i, name);
            index_checksum(&mut by_sha1, entry.sha1.as_deref(), ChecksumKind::Sha1, i, name);
        }

        Ok(Self {
            entries,
            by_name,
            by_crc,
            by_md5,
            by_sha1,
            clones,
            roots,
        })
    }

    /// Build an index from the entries belonging to `platform`.
    ///
    /// Entries with an empty platform are kept for every platform.
    pub fn build_for_platform(
        entries: Vec<CatalogEntry>,
        platform: &str,
    ) -> Result<Self, CatalogError> {
        let entries = entries
            .into_iter()
            .filter(|e| e.platform.is_empty() || e.platform == platform)
            .collect();
        Self::build(entries)
    }

    /// Exact, case-sensitive lookup by canonical name or alias.
    pub fn lookup_by_name(&self, name: &str) -> Option<&CatalogEntry> {
        self.by_name.get(name).map(|&i| &self.entries[i])
    }

    /// Look up by checksum, trying CRC32, then MD5, then SHA1.
    ///
    /// Missing or malformed values are skipped.
    pub fn lookup_by_checksum(
        &self,
        crc: Option<&str>,
        md5: Option<&str>,
        sha1: Option<&str>,
    ) -> Option<&CatalogEntry> {
        let lookups = [
            (crc, ChecksumKind::Crc32, &self.by_crc),
            (md5, ChecksumKind::Md5, &self.by_md5),
            (sha1, ChecksumKind::Sha1, &self.by_sha1),
        ];
        lookups.into_iter().find_map(|(value, kind, map)| {
            let key = normalize_checksum(value?, kind)?;
            map.get(&key).map(|&i| &self.entries[i])
        })
    }

    /// Whether `name` resolves to an entry with no parent.
    pub fn is_parent(&self, name: &str) -> bool {
        self.lookup_by_name(name).is_some_and(CatalogEntry::is_parent)
    }

    /// The top-level parent of `name`, following clone-of-clone links.
    ///
    /// A parent entry is its own root.
    pub fn root_of(&self, name: &str) -> Option<&CatalogEntry> {
        self.by_name.get(name).map(|&i| &self.entries[self.roots[i]])
    }

    /// Canonical names of the clones that declare `parent_name` as their
    /// parent, in catalog order.
    pub fn clones_of(&self, parent_name: &str) -> Vec<String> {
        self.clones.get(parent_name).cloned().unwrap_or_default()
    }

    /// All entries, in catalog order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct parents with at least one clone.
    pub fn clone_group_count(&self) -> usize {
        self.clones.len()
    }
}

/// Top-level parent index for every entry; a parent cycle has no top.
fn resolve_roots(
    entries: &[CatalogEntry],
    parent_of: &[Option<usize>],
) -> Result<Vec<usize>, CatalogError> {
    let mut roots = Vec::with_capacity(entries.len());
    for (i, entry) in entries.iter().enumerate() {
        let mut current = i;
        let mut steps = 0;
        while let Some(next) = parent_of[current] {
            steps += 1;
            if steps > entries.len() {
                let parent = entry.parent.as_deref().unwrap_or_default();
                return Err(CatalogError::integrity(&entry.name, parent));
            }
            current = next;
        }
        roots.push(current);
    }
    Ok(roots)
}

fn index_checksum(
    map: &mut HashMap<String, usize>,
    value: Option<&str>,
    kind: ChecksumKind,
    index: usize,
    name: &str,
) {
    let Some(value) = value else {
        return;
    };
    match normalize_checksum(value, kind) {
        Some(key) => {
            map.entry(key).or_insert(index);
        }
        None => log::debug!("Ignoring malformed {} '{}' on '{}'", kind.name(), value, name),
    }
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
