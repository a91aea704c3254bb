//! Multi-disc detection and grouping.
//!
//! Recognizes the two common disc markers in a tokenized filename and folds
//! the files of one game into a single ordered disc set:
//! - Redump: `Final Fantasy VII (USA) (Disc 1).bin`
//! - TOSEC / Trurip: `Final Fantasy I (USA) (Disc 1 of 2).iso`

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::token::{join_tokens, tokenize};
use crate::types::RomFileRef;

/// Which naming convention a disc marker followed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiscMarkerStyle {
    /// `(Disc N)`
    Redump,
    /// `(Disc N of M)`
    Tosec,
}

/// A parsed disc marker token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscMarker {
    pub order: u32,
    /// Declared disc count, TOSEC style only.
    pub total: Option<u32>,
    pub style: DiscMarkerStyle,
}

/// Parse a token text such as `(Disc 2)` or `(Disk 1 of 3)`.
///
/// The whole token must match; the Redump form is tried first.
pub fn parse_disc_marker(text: &str) -> Option<DiscMarker> {
    let body = text.strip_prefix("(Dis")?.strip_suffix(')')?;
    let body = body
        .strip_prefix('c')
        .or_else(|| body.strip_prefix('k'))?
        .strip_prefix(' ')?;

    if let Some(order) = parse_digits(body) {
        return Some(DiscMarker {
            order,
            total: None,
            style: DiscMarkerStyle::Redump,
        });
    }

    let (order, total) = body.split_once(" of ")?;
    Some(DiscMarker {
        order: parse_digits(order)?,
        total: Some(parse_digits(total)?),
        style: DiscMarkerStyle::Tosec,
    })
}

fn parse_digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Multi-disc detection result for a single file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscSetCandidate {
    pub is_multi_disc: bool,
    /// Grouping key. For multi-disc files: the non-marker tokens joined with
    /// spaces plus the extension. Otherwise the file's own name.
    pub set_name: String,
    /// The file's base name as found on disk.
    pub disc_label: String,
    /// 1-based disc number, 0 when the file is not part of a set.
    pub disc_order: u32,
    pub marker_style: Option<DiscMarkerStyle>,
    pub file: RomFileRef,
}

/// Detect whether a file is one disc of a multi-disc set.
///
/// Never fails: a name without a disc marker is its own one-file set.
pub fn detect(file: &RomFileRef) -> DiscSetCandidate {
    let tokens = tokenize(file.base_name());
    let hit = tokens
        .iter()
        .enumerate()
        .find_map(|(i, t)| parse_disc_marker(&t.text).map(|m| (i, m)));

    match hit {
        Some((index, marker)) => {
            let rest = tokens
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != index)
                .map(|(_, t)| t);
            let mut set_name = join_tokens(rest);
            set_name.push_str(file.extension());
            DiscSetCandidate {
                is_multi_disc: true,
                set_name,
                disc_label: file.base_name().to_string(),
                disc_order: marker.order,
                marker_style: Some(marker.style),
                file: file.clone(),
            }
        }
        None => DiscSetCandidate {
            is_multi_disc: false,
            set_name: file.file_name(),
            disc_label: file.base_name().to_string(),
            disc_order: 0,
            marker_style: None,
            file: file.clone(),
        },
    }
}

/// A data-quality problem within one disc set. Reported, never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiscSetIssue {
    /// Several files claim the same disc number. All are kept.
    DuplicateDiscOrder { order: u32, files: Vec<String> },
    /// Disc numbers below the highest one found that have no file.
    MissingDiscs(Vec<u32>),
    /// A marker named disc 0.
    ZeroDiscOrder,
}

impl fmt::Display for DiscSetIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateDiscOrder { order, files } => {
                write!(f, "disc {order} claimed by {} files: {}", files.len(), files.join(", "))
            }
            Self::MissingDiscs(missing) => {
                let list: Vec<String> = missing.iter().map(|n| n.to_string()).collect();
                write!(f, "missing disc(s) {}", list.join(", "))
            }
            Self::ZeroDiscOrder => f.write_str("disc marker numbered 0"),
        }
    }
}

/// Files grouped into one logical game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscSet {
    pub set_name: String,
    pub is_multi_disc: bool,
    /// Members sorted by disc order, then path. Never empty.
    pub discs: Vec<DiscSetCandidate>,
    pub issues: Vec<DiscSetIssue>,
}

impl DiscSet {
    /// Name used for display and catalog matching, before any title cleaning:
    /// the set name without its extension for multi-disc sets, the file's
    /// base name otherwise.
    pub fn base_name(&self) -> &str {
        if self.is_multi_disc {
            let ext = self.discs[0].file.extension();
            self.set_name.strip_suffix(ext).unwrap_or(&self.set_name)
        } else {
            self.discs[0].file.base_name()
        }
    }

    pub fn files(&self) -> impl Iterator<Item = &RomFileRef> {
        self.discs.iter().map(|d| &d.file)
    }
}

/// Group files into disc sets.
///
/// Multi-disc files are grouped by exact `set_name`; every other file is a
/// set of its own. Sets are returned sorted by set name, then first path.
pub fn group_disc_sets(files: &[RomFileRef]) -> Vec<DiscSet> {
    let mut multi: BTreeMap<String, Vec<DiscSetCandidate>> = BTreeMap::new();
    let mut sets = Vec::new();

    for file in files {
        let candidate = detect(file);
        if candidate.is_multi_disc {
            multi
                .entry(candidate.set_name.clone())
                .or_default()
                .push(candidate);
        } else {
            sets.push(DiscSet {
                set_name: candidate.set_name.clone(),
                is_multi_disc: false,
                discs: vec![candidate],
                issues: Vec::new(),
            });
        }
    }

    for (set_name, mut discs) in multi {
        discs.sort_by(|a, b| {
            a.disc_order
                .cmp(&b.disc_order)
                .then_with(|| a.file.path().cmp(b.file.path()))
        });
        let issues = disc_order_issues(&discs);
        sets.push(DiscSet {
            set_name,
            is_multi_disc: true,
            discs,
            issues,
        });
    }

    sets.sort_by(|a, b| {
        a.set_name
            .cmp(&b.set_name)
            .then_with(|| a.discs[0].file.path().cmp(b.discs[0].file.path()))
    });
    sets
}

const MAX_GAP_CHECKED_DISC: u32 = 100;

/// Check a sorted disc list for duplicates, gaps and zero numbering.
fn disc_order_issues(discs: &[DiscSetCandidate]) -> Vec<DiscSetIssue> {
    let mut issues = Vec::new();

    if discs.iter().any(|d| d.disc_order == 0) {
        issues.push(DiscSetIssue::ZeroDiscOrder);
    }

    for run in discs.chunk_by(|a, b| a.disc_order == b.disc_order) {
        if run.len() > 1 {
            issues.push(DiscSetIssue::DuplicateDiscOrder {
                order: run[0].disc_order,
                files: run.iter().map(|d| d.file.file_name()).collect(),
            });
        }
    }

    // Gaps are only reported up to MAX_GAP_CHECKED_DISC.
    let highest = discs.last().map_or(0, |d| d.disc_order).min(MAX_GAP_CHECKED_DISC);
    let missing: Vec<u32> = (1..highest)
        .filter(|n| !discs.iter().any(|d| d.disc_order == *n))
        .collect();
    if !missing.is_empty() {
        issues.push(DiscSetIssue::MissingDiscs(missing));
    }

    issues
}

#[cfg(test)]
#[path = "tests/disc_tests.rs"]
mod tests;
