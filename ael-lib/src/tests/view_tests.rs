use super::*;
use ael_core::RomFileRef;
use ael_dat::{CatalogEntry, DatCatalogIndex};

use crate::options::AuditOptions;
use crate::provider::{KeepTitle, NoChecksums};
use crate::scan::scan_and_classify;

fn outcome() -> ScanOutcome {
    let catalog = DatCatalogIndex::build(vec![
        CatalogEntry::new("Game (USA)"),
        CatalogEntry::new("Game (Europe)").with_parent("Game (USA)"),
        CatalogEntry::new("Game (Japan)").with_parent("Game (USA)"),
        CatalogEntry::new("Solo (World)"),
    ])
    .unwrap();
    let paths = [
        "Game (Japan).sfc",
        "Game (Europe).sfc",
        "Homebrew.sfc",
        "Solo (World).sfc",
    ];
    let files: Vec<RomFileRef> = paths.into_iter().map(RomFileRef::from).collect();
    let options = AuditOptions::new("snes");
    scan_and_classify(&files, Some(&catalog), &options, &NoChecksums, &KeepTitle)
}

fn names(releases: &[&Release]) -> Vec<String> {
    releases.iter().map(|r| r.display_name.clone()).collect()
}

#[test]
fn flat_lists_everything() {
    let outcome = outcome();
    let shown = visible_releases(&outcome, DisplayMode::Flat);
    assert_eq!(
        names(&shown),
        vec!["Game (Europe)", "Game (Japan)", "Game (USA)", "Homebrew", "Solo (World)"]
    );
}

#[test]
fn pclone_hides_grouped_clones() {
    let outcome = outcome();
    let shown = visible_releases(&outcome, DisplayMode::PClone);
    assert_eq!(names(&shown), vec!["Game (USA)", "Homebrew", "Solo (World)"]);
}

#[test]
fn one_game_one_rom_prefers_a_release_on_disk() {
    let outcome = outcome();
    let shown = visible_releases(&outcome, DisplayMode::OneGameOneRom);
    assert_eq!(names(&shown), vec!["Game (Europe)", "Homebrew", "Solo (World)"]);
}

#[test]
fn one_game_one_rom_without_catalog_is_flat() {
    let files = vec![RomFileRef::new("A.sfc"), RomFileRef::new("B.sfc")];
    let options = AuditOptions::new("snes");
    let outcome = scan_and_classify(&files, None, &options, &NoChecksums, &KeepTitle);
    let shown = visible_releases(&outcome, DisplayMode::OneGameOneRom);
    assert_eq!(names(&shown), vec!["A", "B"]);
}

#[test]
fn parse_display_modes() {
    assert_eq!("flat".parse::<DisplayMode>().unwrap(), DisplayMode::Flat);
    assert_eq!("PClone".parse::<DisplayMode>().unwrap(), DisplayMode::PClone);
    assert_eq!("1G1R".parse::<DisplayMode>().unwrap(), DisplayMode::OneGameOneRom);
    assert!("grid".parse::<DisplayMode>().is_err());
    assert_eq!(DisplayMode::OneGameOneRom.short_name(), "1g1r");
}
