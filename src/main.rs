//! sitekit - cache busting and permalinks for a static site starter kit.

mod asset;
mod cli;
mod config;
mod core;
mod logger;
mod page;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;
use crate::core::BuildMode;

fn main() {
    if let Err(err) = run() {
        logger::status_error("failed", &format!("{err:#}"));
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = SiteConfig::load(&cli)?;

    // Mode is read from the environment exactly once, here
    let mode = cli
        .mode
        .unwrap_or_else(|| BuildMode::from_env(&config.build.env));
    let source = match cli.mode {
        Some(_) => "--mode",
        None => config.build.env.as_str(),
    };
    debug!("mode"; "{} (from {})", mode, source);

    let mut stdout = std::io::stdout().lock();
    match &cli.command {
        Commands::Build { .. } => {
            let report = cli::build::build_site(&config, mode)?;
            logger::status_success(&format!(
                "built: {} asset token(s), {} route(s), {} data file(s), {} copied file(s)",
                report.table.len(),
                report.routes.len(),
                report.data_files.len(),
                report.copied
            ));
            Ok(())
        }
        Commands::Resolve { json } => cli::inspect::run_resolve(&config, mode, *json, &mut stdout),
        Commands::Permalink { stems } => cli::inspect::run_permalink(&config, stems, &mut stdout),
        Commands::Routes => cli::inspect::run_routes(&config, &mut stdout),
    }
}
