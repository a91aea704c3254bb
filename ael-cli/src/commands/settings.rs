use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use ael_lib::Settings;
use ael_lib::settings::{load_settings, save_settings, settings_path};

use crate::error::CliError;

/// Print the settings file path.
pub(crate) fn run_settings_path() {
    log::info!("{}", settings_path().display());
}

/// Show the effective settings and where they come from.
pub(crate) fn run_settings_show() -> Result<(), CliError> {
    let path = settings_path();
    let settings = load_settings()?;

    log::info!("{}", "ael Settings".if_supports_color(Stdout, |t| t.bold()));
    log::info!("");
    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found, using defaults)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    log::info!("");

    let fields = [
        ("exhaustive_catalog", settings.audit.exhaustive_catalog),
        ("use_checksums", settings.audit.use_checksums),
        ("clean_titles", settings.audit.clean_titles),
    ];
    log::info!("  [audit]");
    for (name, value) in fields {
        log::info!(
            "    {:<20} {}",
            name,
            value.if_supports_color(Stdout, |t| t.bold()),
        );
    }
    Ok(())
}

/// Write a settings file holding the defaults.
pub(crate) fn run_settings_init(force: bool) -> Result<(), CliError> {
    let path = settings_path();
    if path.exists() && !force {
        log::warn!(
            "{} already exists; pass --force to overwrite it",
            path.display()
        );
        return Ok(());
    }
    save_settings(&Settings::default())?;
    log::info!(
        "{} {}",
        "Wrote".if_supports_color(Stdout, |t| t.green()),
        path.display(),
    );
    Ok(())
}
