//! manpost - post-processor for generated HTML manuals.
//!
//! `manpost inject` styles the pages in place, `manpost extract` turns them
//! into PHP fragments for the project website.

mod cli;
mod config;
mod embed;
mod logger;
mod pipeline;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::Cli;
use config::ManualConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.command.run_args().verbose);

    let config = ManualConfig::load(&cli)?;
    match &config.config_path {
        Some(path) => debug!("config"; "loaded {}, pages in {}", path.display(), config.dir().display()),
        None => debug!("config"; "defaults, pages in {}", config.dir().display()),
    }

    cli::run::run(&cli.command, &config).map(|_| ())
}
