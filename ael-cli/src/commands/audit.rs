use std::collections::HashMap;
use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use serde::Serialize;

use ael_core::{AuditStatus, PCloneStatus, Release, RomFileRef, ScanWarning};
use ael_dat::CatalogEntry;
use ael_lib::settings::load_settings;
use ael_lib::{
    AuditSummary, DisplayMode, KeepTitle, NoChecksums, PCloneGraph, ScanOutcome, Settings,
    TitleFormatter, prepare_catalog, scan_and_classify, visible_releases,
};

use crate::cli_types::AuditArgs;
use crate::error::CliError;
use crate::title::CleanTitle;

/// JSON shape of `ael audit --json`.
#[derive(Serialize)]
struct AuditReport<'a> {
    platform: &'a str,
    mode: &'static str,
    summary: AuditSummary,
    releases: Vec<&'a Release>,
    graph: &'a PCloneGraph,
    warnings: &'a [ScanWarning],
}

/// Run the audit command.
pub(crate) fn run_audit(args: AuditArgs) -> Result<(), CliError> {
    if !args.dir.is_dir() {
        return Err(CliError::usage(format!(
            "{} is not a directory",
            args.dir.display()
        )));
    }

    let settings = load_settings().unwrap_or_else(|e| {
        log::warn!("Ignoring settings file: {}", e);
        Settings::default()
    });
    let platform = match &args.platform {
        Some(p) => p.clone(),
        None => default_platform(&args.dir)?,
    };
    let options = settings
        .audit_options(&platform)
        .exhaustive_catalog(args.exhaustive || settings.audit.exhaustive_catalog)
        .use_checksums(settings.audit.use_checksums && !args.no_checksums);
    let titles: &dyn TitleFormatter = if args.clean_titles || settings.audit.clean_titles {
        &CleanTitle
    } else {
        &KeepTitle
    };

    let files = collect_files(&args.dir, args.ext.as_deref())?;
    log::debug!("{} file(s) in {}", files.len(), args.dir.display());

    let mut catalog_warning = None;
    let catalog = match &args.catalog {
        Some(path) => {
            let entries = load_catalog(path)?;
            let (index, warning) = prepare_catalog(entries, &platform);
            catalog_warning = warning;
            index
        }
        None => None,
    };
    if let Some(index) = &catalog {
        log::debug!(
            "Catalog: {} entries, {} parent/clone groups",
            index.len(),
            index.clone_group_count()
        );
    }

    let mut outcome = scan_and_classify(&files, catalog.as_ref(), &options, &NoChecksums, titles);
    if let Some(warning) = catalog_warning {
        outcome.warnings.insert(0, warning);
    }

    let summary = AuditSummary::from_releases(&outcome.releases);
    let visible = visible_releases(&outcome, args.mode);

    if args.json {
        let report = AuditReport {
            platform: &platform,
            mode: args.mode.short_name(),
            summary,
            releases: visible,
            graph: &outcome.graph,
            warnings: &outcome.warnings,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_listing(&outcome, &visible, args.mode);
    print_warnings(&outcome.warnings);
    print_summary(&platform, &summary, catalog.is_some());
    Ok(())
}

/// Platform id from the directory's own name.
fn default_platform(dir: &Path) -> Result<String, CliError> {
    let resolved = dir.canonicalize()?;
    resolved
        .file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.to_lowercase())
        .ok_or_else(|| {
            CliError::usage(format!(
                "Cannot derive a platform from {}; pass --platform",
                dir.display()
            ))
        })
}

/// Regular files directly inside `dir`, sorted by path.
///
/// `exts` filters by extension, case-insensitively, with or without the dot.
fn collect_files(dir: &Path, exts: Option<&[String]>) -> Result<Vec<RomFileRef>, CliError> {
    let wanted: Option<Vec<String>> = exts.map(|list| {
        list.iter()
            .map(|e| e.trim_start_matches('.').to_lowercase())
            .collect()
    });

    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        if let Some(wanted) = &wanted {
            let ext = path
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| e.to_lowercase())
                .unwrap_or_default();
            if !wanted.contains(&ext) {
                continue;
            }
        }
        let Some(path_str) = path.to_str() else {
            log::warn!("Skipping non-UTF-8 path {}", path.display());
            continue;
        };
        paths.push(path_str.to_string());
    }
    paths.sort();

    Ok(paths.into_iter().map(RomFileRef::new).collect())
}

/// Load a catalog stored as a JSON array of entries.
fn load_catalog(path: &Path) -> Result<Vec<CatalogEntry>, CliError> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| CliError::catalog(format!("{}: {}", path.display(), e)))?;
    serde_json::from_str(&contents)
        .map_err(|e| CliError::catalog(format!("{}: {}", path.display(), e)))
}

fn status_badge(status: AuditStatus) -> String {
    let label = format!("[{:<7}]", status.as_str());
    match status {
        AuditStatus::Have => label.if_supports_color(Stdout, |t| t.green()).to_string(),
        AuditStatus::Miss => label.if_supports_color(Stdout, |t| t.red()).to_string(),
        AuditStatus::Unknown => label.if_supports_color(Stdout, |t| t.yellow()).to_string(),
        AuditStatus::Extra => label.if_supports_color(Stdout, |t| t.magenta()).to_string(),
        AuditStatus::None => label.if_supports_color(Stdout, |t| t.dimmed()).to_string(),
    }
}

fn print_listing(outcome: &ScanOutcome, visible: &[&Release], mode: DisplayMode) {
    let names: HashMap<&str, &str> = outcome
        .releases
        .iter()
        .map(|r| (r.id.as_str(), r.display_name.as_str()))
        .collect();

    for release in visible {
        let mut line = format!(
            "{} {}",
            status_badge(release.audit_status),
            release.display_name.if_supports_color(Stdout, |t| t.bold()),
        );
        if release.is_multi_disc() {
            line.push_str(&format!(" [{} discs]", release.discs.len()));
        }

        match (mode, release.pclone_status) {
            (DisplayMode::Flat, PCloneStatus::Clone) => {
                if let Some(parent) = release
                    .parent_release_id
                    .as_deref()
                    .and_then(|id| names.get(id))
                {
                    let note = format!(" (clone of {parent})");
                    line.push_str(&note.if_supports_color(Stdout, |t| t.dimmed()).to_string());
                }
            }
            (DisplayMode::PClone, PCloneStatus::Parent) => {
                let clones = outcome.graph.clones_of(&release.id).len();
                if clones > 0 {
                    let note = format!(" (+{clones} clone(s))");
                    line.push_str(&note.if_supports_color(Stdout, |t| t.cyan()).to_string());
                }
            }
            (DisplayMode::OneGameOneRom, PCloneStatus::Clone) => {
                let note = " (best available)";
                line.push_str(&note.if_supports_color(Stdout, |t| t.dimmed()).to_string());
            }
            _ => {}
        }
        log::info!("{}", line);
    }
}

fn print_warnings(warnings: &[ScanWarning]) {
    if warnings.is_empty() {
        return;
    }
    log::info!("");
    for warning in warnings {
        log::warn!("{}", warning);
    }
}

fn print_summary(platform: &str, summary: &AuditSummary, catalog_used: bool) {
    log::info!("");
    log::info!(
        "{} {}: {} release(s), {} on disk",
        "Summary".if_supports_color(Stdout, |t| t.bold()),
        platform.if_supports_color(Stdout, |t| t.cyan()),
        summary.total,
        summary.on_disk(),
    );
    if !catalog_used {
        log::info!("  No catalog; releases were grouped but not audited");
        return;
    }
    log::info!(
        "  {} have, {} miss, {} unknown, {} extra",
        summary.have.if_supports_color(Stdout, |t| t.green()),
        summary.miss.if_supports_color(Stdout, |t| t.red()),
        summary.unknown.if_supports_color(Stdout, |t| t.yellow()),
        summary.extra.if_supports_color(Stdout, |t| t.magenta()),
    );
    log::info!("  {} parent(s), {} clone(s)", summary.parents, summary.clones);
}
