use std::collections::HashMap;

use super::*;
use ael_core::{FileChecksums, RomFileRef, group_disc_sets};
use ael_dat::CatalogEntry;

use crate::provider::{KeepTitle, NoChecksums};

fn single_set(paths: &[&str]) -> DiscSet {
    let files: Vec<RomFileRef> = paths.iter().map(|p| RomFileRef::new(*p)).collect();
    let mut sets = group_disc_sets(&files);
    assert_eq!(sets.len(), 1, "expected one set from {paths:?}");
    sets.remove(0)
}

fn make_catalog() -> DatCatalogIndex {
    DatCatalogIndex::build(vec![
        CatalogEntry::new("Final Fantasy VII (USA)"),
        CatalogEntry::new("Final Fantasy VII (Europe)")
            .with_parent("Final Fantasy VII (USA)"),
        CatalogEntry::new("Tomb Raider (Europe)")
            .with_alias("Tomb Raider (EU).iso")
            .with_crc("1a2b3c4d"),
        CatalogEntry::new("Tomb Raider (USA)")
            .with_parent("Tomb Raider (Europe)")
            .with_sha1("0123456789abcdef0123456789abcdef01234567"),
    ])
    .unwrap()
}

fn options() -> AuditOptions {
    AuditOptions::new("psx")
}

#[test]
fn no_catalog_means_no_status() {
    for paths in [
        vec!["Final Fantasy VII (USA) (Disc 1).bin", "Final Fantasy VII (USA) (Disc 2).bin"],
        vec!["Tomb Raider (EU).iso"],
        vec!["Anything at all"],
    ] {
        let set = single_set(&paths);
        let release = classify(&set, None, &options(), &NoChecksums, &KeepTitle);
        assert_eq!(release.audit_status, AuditStatus::None);
        assert_eq!(release.pclone_status, PCloneStatus::None);
        assert!(release.parent_release_id.is_none());
        assert!(release.catalog_name.is_none());
    }
}

#[test]
fn copies_identity_fields() {
    let set = single_set(&[
        "/psx/Final Fantasy VII (USA) (Disc 2).bin",
        "/psx/Final Fantasy VII (USA) (Disc 1).bin",
    ]);
    let release = classify(&set, None, &options(), &NoChecksums, &KeepTitle);
    assert_eq!(release.id, release_id("psx", "Final Fantasy VII (USA).bin"));
    assert_eq!(release.display_name, "Final Fantasy VII (USA)");
    assert_eq!(release.set_name, "Final Fantasy VII (USA).bin");
    assert_eq!(release.platform, "psx");
    let paths: Vec<&str> = release.discs.iter().map(|d| d.path()).collect();
    assert_eq!(
        paths,
        vec![
            "/psx/Final Fantasy VII (USA) (Disc 1).bin",
            "/psx/Final Fantasy VII (USA) (Disc 2).bin",
        ]
    );
}

#[test]
fn release_id_is_independent_of_disc_order() {
    let a = single_set(&["Game (USA) (Disc 1).bin", "Game (USA) (Disc 2).bin"]);
    let b = single_set(&["Game (USA) (Disc 2).bin"]);
    let ra = classify(&a, None, &options(), &NoChecksums, &KeepTitle);
    let rb = classify(&b, None, &options(), &NoChecksums, &KeepTitle);
    assert_eq!(ra.id, rb.id);
    assert_eq!(ra.id.len(), 32);
}

#[test]
fn name_match_parent() {
    let catalog = make_catalog();
    let set = single_set(&[
        "Final Fantasy VII (USA) (Disc 1).bin",
        "Final Fantasy VII (USA) (Disc 2).bin",
    ]);
    let release = classify(&set, Some(&catalog), &options(), &NoChecksums, &KeepTitle);
    assert_eq!(release.audit_status, AuditStatus::Have);
    assert_eq!(release.pclone_status, PCloneStatus::Parent);
    assert_eq!(release.catalog_name.as_deref(), Some("Final Fantasy VII (USA)"));
    assert!(release.catalog_parent.is_none());
}

#[test]
fn name_match_clone_records_parent_name() {
    let catalog = make_catalog();
    let set = single_set(&["Final Fantasy VII (Europe).chd"]);
    let release = classify(&set, Some(&catalog), &options(), &NoChecksums, &KeepTitle);
    assert_eq!(release.audit_status, AuditStatus::Have);
    assert_eq!(release.pclone_status, PCloneStatus::Clone);
    assert_eq!(release.catalog_parent.as_deref(), Some("Final Fantasy VII (USA)"));
    assert!(release.parent_release_id.is_none());
}

#[test]
fn alias_match_on_full_file_name() {
    let catalog = make_catalog();
    let set = single_set(&["Tomb Raider (EU).iso"]);
    let m = match_catalog(&set, &catalog, &options(), &NoChecksums).unwrap();
    assert_eq!(m.entry.name, "Tomb Raider (Europe)");
    assert_eq!(m.method, MatchMethod::Name);
}

#[test]
fn checksum_match_beats_name() {
    let catalog = make_catalog();
    let set = single_set(&["/roms/Final Fantasy VII (USA).iso"]);
    let mut sums = HashMap::new();
    sums.insert(
        "/roms/Final Fantasy VII (USA).iso".to_string(),
        FileChecksums::default().with_crc("1A2B3C4D"),
    );
    let provider = |f: &RomFileRef| sums.get(f.path()).cloned();
    let m = match_catalog(&set, &catalog, &options(), &provider).unwrap();
    assert_eq!(m.entry.name, "Tomb Raider (Europe)");
    assert_eq!(m.method, MatchMethod::Checksum);
}

#[test]
fn checksums_are_skipped_when_disabled() {
    let catalog = make_catalog();
    let set = single_set(&["Final Fantasy VII (USA).iso"]);
    let provider = |_: &RomFileRef| -> Option<FileChecksums> {
        panic!("checksum provider must not be called")
    };
    let opts = options().use_checksums(false);
    let m = match_catalog(&set, &catalog, &opts, &provider).unwrap();
    assert_eq!(m.method, MatchMethod::Name);
}

#[test]
fn checksum_on_second_disc() {
    let catalog = make_catalog();
    let set = single_set(&["Mystery (Disc 1).bin", "Mystery (Disc 2).bin"]);
    let provider = |f: &RomFileRef| {
        (f.base_name() == "Mystery (Disc 2)").then(|| {
            FileChecksums::default().with_sha1("0123456789ABCDEF0123456789ABCDEF01234567")
        })
    };
    let release = classify(&set, Some(&catalog), &options(), &provider, &KeepTitle);
    assert_eq!(release.catalog_name.as_deref(), Some("Tomb Raider (USA)"));
    assert_eq!(release.pclone_status, PCloneStatus::Clone);
}

#[test]
fn garbled_checksum_falls_back_to_name() {
    let catalog = make_catalog();
    let set = single_set(&["Final Fantasy VII (USA).iso"]);
    let provider = |_: &RomFileRef| Some(FileChecksums::default().with_crc("zz-not-hex"));
    let release = classify(&set, Some(&catalog), &options(), &provider, &KeepTitle);
    assert_eq!(release.audit_status, AuditStatus::Have);
    assert_eq!(release.catalog_name.as_deref(), Some("Final Fantasy VII (USA)"));
}

#[test]
fn unmatched_is_unknown() {
    let catalog = make_catalog();
    let set = single_set(&["Homebrew Demo.iso"]);
    let release = classify(&set, Some(&catalog), &options(), &NoChecksums, &KeepTitle);
    assert_eq!(release.audit_status, AuditStatus::Unknown);
    assert_eq!(release.pclone_status, PCloneStatus::None);
}

#[test]
fn unmatched_in_exhaustive_catalog_is_extra() {
    let catalog = make_catalog();
    let set = single_set(&["Homebrew Demo.iso"]);
    let opts = options().exhaustive_catalog(true);
    let release = classify(&set, Some(&catalog), &opts, &NoChecksums, &KeepTitle);
    assert_eq!(release.audit_status, AuditStatus::Extra);
}

#[test]
fn formatter_changes_display_name_only() {
    let catalog = make_catalog();
    let set = single_set(&["Final Fantasy VII (USA).iso"]);
    let upper = |name: &str| name.to_uppercase();
    let release = classify(&set, Some(&catalog), &options(), &NoChecksums, &upper);
    assert_eq!(release.display_name, "FINAL FANTASY VII (USA)");
    assert_eq!(release.audit_status, AuditStatus::Have);
}

fn nested_catalog() -> DatCatalogIndex {
    DatCatalogIndex::build(vec![
        CatalogEntry::new("Game (USA)"),
        CatalogEntry::new("Game (Europe)").with_parent("Game (USA)"),
        CatalogEntry::new("Game (France)").with_parent("Game (Europe)"),
    ])
    .unwrap()
}

#[test]
fn clone_of_clone_records_top_parent() {
    let catalog = nested_catalog();
    let set = single_set(&["Game (France).sfc"]);
    let release = classify(&set, Some(&catalog), &options(), &NoChecksums, &KeepTitle);
    assert_eq!(release.audit_status, AuditStatus::Have);
    assert_eq!(release.pclone_status, PCloneStatus::Clone);
    assert_eq!(release.catalog_parent.as_deref(), Some("Game (USA)"));

    let france = catalog.lookup_by_name("Game (France)").unwrap();
    let missing = missing_release(france, &catalog, &options(), &KeepTitle);
    assert_eq!(missing.catalog_parent.as_deref(), Some("Game (USA)"));
}

#[test]
fn missing_release_mirrors_catalog_entry() {
    let catalog = nested_catalog();
    let clone = catalog.lookup_by_name("Game (Europe)").unwrap();
    let release = missing_release(clone, &catalog, &options(), &KeepTitle);
    assert_eq!(release.audit_status, AuditStatus::Miss);
    assert_eq!(release.pclone_status, PCloneStatus::Clone);
    assert_eq!(release.catalog_parent.as_deref(), Some("Game (USA)"));
    assert!(release.discs.is_empty());
    assert_eq!(release.id, missing_release_id("psx", "Game (Europe)"));
    assert_ne!(release.id, release_id("psx", "Game (Europe)"));
}
