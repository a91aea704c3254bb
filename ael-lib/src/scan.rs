//! End-to-end audit of one launcher's files.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use ael_core::{Release, RomFileRef, ScanWarning, group_disc_sets};
use ael_dat::{CatalogEntry, DatCatalogIndex};

use crate::classify::{classify, missing_release, path_release_id};
use crate::options::AuditOptions;
use crate::pclone::{PCloneGraph, build_graph, resolve_parents};
use crate::provider::{ChecksumProvider, TitleFormatter};

/// Everything one scan produces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanOutcome {
    /// Discovered releases plus `Miss` entries, by display name then id.
    pub releases: Vec<Release>,
    pub graph: PCloneGraph,
    pub warnings: Vec<ScanWarning>,
}

impl ScanOutcome {
    pub fn release(&self, id: &str) -> Option<&Release> {
        self.releases.iter().find(|r| r.id == id)
    }
}

/// Build the catalog index for a run, or explain why there is none.
///
/// A catalog that fails its integrity checks is dropped with a warning; the
/// run then audits without a catalog instead of failing.
pub fn prepare_catalog(
    entries: Vec<CatalogEntry>,
    platform: &str,
) -> (Option<DatCatalogIndex>, Option<ScanWarning>) {
    match DatCatalogIndex::build_for_platform(entries, platform) {
        Ok(index) => (Some(index), None),
        Err(e) => {
            log::warn!("Catalog for '{}' rejected, auditing without it: {}", platform, e);
            let warning = ScanWarning::run_wide(format!("catalog rejected: {e}"));
            (None, Some(warning))
        }
    }
}

/// Group, classify and index a list of scanned files.
///
/// Pure function of its inputs: no I/O, no shared state. Duplicate paths in
/// `files` are ignored after the first. With a catalog, every catalog entry
/// that no file matched is added as a `Miss` release.
pub fn scan_and_classify(
    files: &[RomFileRef],
    catalog: Option<&DatCatalogIndex>,
    options: &AuditOptions,
    checksums: &dyn ChecksumProvider,
    titles: &dyn TitleFormatter,
) -> ScanOutcome {
    let mut warnings = Vec::new();

    let mut seen_paths = HashSet::new();
    let files: Vec<RomFileRef> = files
        .iter()
        .filter(|f| {
            let first = seen_paths.insert(f.path());
            if !first {
                log::debug!("Skipping duplicate path {}", f.path());
            }
            first
        })
        .cloned()
        .collect();

    let mut releases: Vec<Release> = Vec::new();
    let mut ids = HashSet::new();
    for set in group_disc_sets(&files) {
        let mut release = classify(&set, catalog, options, checksums, titles);
        if !ids.insert(release.id.clone()) {
            release.id = path_release_id(&options.platform, release.discs[0].path());
            ids.insert(release.id.clone());
            warnings.push(ScanWarning::new(
                &release.id,
                format!("set name '{}' is shared with another release", set.set_name),
            ));
        }
        for issue in &set.issues {
            log::warn!("{}: {}", set.set_name, issue);
            warnings.push(ScanWarning::new(&release.id, format!("{}: {}", set.set_name, issue)));
        }
        releases.push(release);
    }

    if let Some(catalog) = catalog {
        let matched: HashSet<&str> = releases
            .iter()
            .filter_map(|r| r.catalog_name.as_deref())
            .collect();
        let missing: Vec<Release> = catalog
            .entries()
            .iter()
            .filter(|e| !matched.contains(e.name.as_str()))
            .map(|e| missing_release(e, catalog, options, titles))
            .collect();
        log::debug!(
            "{} of {} catalog entries found on disk",
            catalog.len() - missing.len(),
            catalog.len()
        );
        releases.extend(missing);
    }

    warnings.extend(resolve_parents(&mut releases));

    releases.sort_by(|a, b| {
        a.display_name
            .cmp(&b.display_name)
            .then_with(|| a.id.cmp(&b.id))
    });
    let graph = build_graph(&releases);

    ScanOutcome {
        releases,
        graph,
        warnings,
    }
}
