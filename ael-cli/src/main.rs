//! ael CLI
//!
//! Command-line interface for grouping and auditing ROM collections.

mod cli_types;
mod commands;
mod error;
mod title;

use std::io::Write;

use clap::Parser;

use cli_types::{Cli, Commands, SettingsAction};
use commands::audit::run_audit;
use commands::settings::{run_settings_init, run_settings_path, run_settings_show};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    let result = match cli.command {
        Commands::Audit(args) => run_audit(args),
        Commands::Settings { action } => match action {
            SettingsAction::Path => {
                run_settings_path();
                Ok(())
            }
            SettingsAction::Show => run_settings_show(),
            SettingsAction::Init { force } => run_settings_init(force),
        },
    };

    if let Err(e) = result {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

/// Normal output goes through `log::info!`, so the default format is the bare
/// message. `--verbose` switches to env_logger's timestamped format. `RUST_LOG`
/// overrides the level chosen by the flags.
fn init_logging(quiet: bool, verbose: bool) {
    let level = if quiet {
        log::LevelFilter::Warn
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    builder.parse_default_env();
    builder.target(env_logger::Target::Stdout);
    if !verbose {
        builder.format(|buf, record| match record.level() {
            log::Level::Info => writeln!(buf, "{}", record.args()),
            level => writeln!(buf, "{}: {}", level.as_str().to_lowercase(), record.args()),
        });
    }
    builder.init();
}
