//! Command-line argument definition.

use std::path::PathBuf;

use clap::Parser;

/// depatrol - interactive terminal patrol for package.json dependency versions
#[derive(Parser, Debug, Default)]
#[command(name = "depatrol")]
#[command(version)]
#[command(
    about = "Check and update package.json dependency versions from an interactive terminal UI",
    long_about = None
)]
pub struct Cli {
    /// Path to the package manifest (default: ./package.json)
    #[arg(long, value_name = "PATH")]
    pub manifest: Option<PathBuf>,

    /// Registry base URL override (default: https://registry.npmjs.org)
    #[arg(long, value_name = "URL")]
    pub registry: Option<String>,
}
