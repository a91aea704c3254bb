//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use ael_lib::DisplayMode;

#[derive(Parser)]
#[command(name = "ael")]
#[command(about = "Audit ROM collections against reference catalogs", long_about = None)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments of `ael audit`.
#[derive(Args, Clone)]
pub(crate) struct AuditArgs {
    /// Directory holding one platform's ROM files
    pub dir: PathBuf,

    /// Reference catalog as a JSON array of entries
    #[arg(short, long)]
    pub catalog: Option<PathBuf>,

    /// Platform id (defaults to the directory name)
    #[arg(short, long)]
    pub platform: Option<String>,

    /// Only consider files with these extensions (e.g., iso,cue,chd)
    #[arg(long, value_delimiter = ',')]
    pub ext: Option<Vec<String>>,

    /// Treat the catalog as complete: unmatched files are Extra, not Unknown
    #[arg(long)]
    pub exhaustive: bool,

    /// Match by name only, ignoring checksums
    #[arg(long)]
    pub no_checksums: bool,

    /// Strip bracketed tags from displayed titles
    #[arg(long)]
    pub clean_titles: bool,

    /// Listing mode: flat, pclone or 1g1r
    #[arg(short, long, default_value = "flat")]
    pub mode: DisplayMode,

    /// Print the result as JSON instead of a listing
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Group and audit the ROM files of one directory
    Audit(AuditArgs),

    /// Manage the settings file
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum SettingsAction {
    /// Print the settings file path
    Path,

    /// Show the effective settings
    Show,

    /// Write a settings file with default values
    Init {
        /// Overwrite an existing settings file
        #[arg(long)]
        force: bool,
    },
}
