//! Seams for the collaborators the pipeline calls but does not implement.

use ael_core::{FileChecksums, RomFileRef};

/// Supplies precomputed checksums for a scanned file.
///
/// Returning `None` is normal; the audit falls back to name matching.
pub trait ChecksumProvider {
    fn checksums(&self, file: &RomFileRef) -> Option<FileChecksums>;
}

/// A provider with nothing to offer.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoChecksums;

impl ChecksumProvider for NoChecksums {
    fn checksums(&self, _file: &RomFileRef) -> Option<FileChecksums> {
        None
    }
}

impl<F> ChecksumProvider for F
where
    F: Fn(&RomFileRef) -> Option<FileChecksums>,
{
    fn checksums(&self, file: &RomFileRef) -> Option<FileChecksums> {
        self(file)
    }
}

/// Turns a raw release name into the title shown to the user.
pub trait TitleFormatter {
    fn format_title(&self, name: &str) -> String;
}

/// Shows names exactly as found.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeepTitle;

impl TitleFormatter for KeepTitle {
    fn format_title(&self, name: &str) -> String {
        name.to_string()
    }
}

impl<F> TitleFormatter for F
where
    F: Fn(&str) -> String,
{
    fn format_title(&self, name: &str) -> String {
        self(name)
    }
}
