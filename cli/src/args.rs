//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "wallstack")]
#[command(about = "Fetch a wallpaper and split it across stacked monitors", long_about = None)]
pub struct Cli {
    /// Path to the JSON configuration file.
    #[arg(long, default_value = "config.json")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub cmd: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch from the configured provider, split, and apply (default).
    Run,

    /// Split a local image file instead of fetching one.
    FromFile {
        /// Absolute or relative path to an image file.
        image: PathBuf,
    },
}
