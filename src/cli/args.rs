//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::core::BuildMode;

/// sitekit: cache busting and permalinks for the starter kit
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: site.toml, searched upward from cwd)
    #[arg(short = 'C', long, global = true, default_value = "site.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Output directory path (relative to project root)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Build mode, overriding the `[build] env` environment variable
    #[arg(short, long, global = true, value_enum)]
    pub mode: Option<BuildMode>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Resolve cache-busting tokens, write data files and copy passthrough files
    #[command(visible_alias = "b")]
    Build {
        /// Clean output directory completely before building
        #[arg(short, long)]
        clean: bool,
    },

    /// Print the cache-busting table
    #[command(visible_alias = "r")]
    Resolve {
        /// Print JSON instead of `key token` lines
        #[arg(short, long)]
        json: bool,
    },

    /// Derive permalinks for the given path stems
    #[command(visible_alias = "p")]
    Permalink {
        /// Path stems relative to the templating root (e.g. /pages-root/foo/index)
        #[arg(required = true, value_name = "STEM")]
        stems: Vec<String>,
    },

    /// List page templates with their permalinks
    Routes,
}

impl Cli {
    /// Whether the command needs a `site.toml`.
    pub const fn requires_config(&self) -> bool {
        !matches!(self.command, Commands::Permalink { .. })
    }

    pub const fn is_clean(&self) -> bool {
        matches!(self.command, Commands::Build { clean: true })
    }
}
