use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "assetpack",
    version,
    about = "Embed an asset directory into a generated C/C++ header"
)]
pub struct Cli {
    /// Only log warnings and errors (overridden by RUST_LOG)
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate the payload header from the asset root
    Generate(GenerateArgs),
    /// Delete embeddable files from the asset root, keeping sources and directories
    Cleanup(CleanupArgs),
    Version,
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// YAML config file (keys: root, output, skip_suffixes, prefix, row_width)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Asset root directory
    #[arg(long, env = "ASSETPACK_ROOT")]
    pub root: Option<PathBuf>,

    /// Skip files ending in SUFFIX (repeatable; replaces the default .cpp/.h set)
    #[arg(long = "skip-suffix", value_name = "SUFFIX")]
    pub skip_suffixes: Vec<String>,
}

impl SourceArgs {
    pub fn skip_suffix_override(&self) -> Option<Vec<String>> {
        if self.skip_suffixes.is_empty() {
            None
        } else {
            Some(self.skip_suffixes.clone())
        }
    }
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Header file to write
    #[arg(long, short, env = "ASSETPACK_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Namespace prefix for generated symbols
    #[arg(long)]
    pub prefix: Option<String>,

    /// Bytes per row in array initializers
    #[arg(long)]
    pub row_width: Option<usize>,

    /// Verify the existing header is up to date instead of writing it
    #[arg(long)]
    pub check: bool,
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct CleanupArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// List the files that would be removed without removing them
    #[arg(long)]
    pub dry_run: bool,
}
