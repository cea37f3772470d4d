use super::args::*;

pub mod cleanup;
pub mod generate;

use crate::exit_codes::SUCCESS;
use anyhow::Context;
use assetpack_core::FileConfig;
use std::path::Path;

pub fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd {
        Command::Generate(args) => generate::run(args),
        Command::Cleanup(args) => cleanup::run(args),
        Command::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(SUCCESS)
        }
    }
}

pub(crate) fn load_file_config(path: Option<&Path>) -> anyhow::Result<Option<FileConfig>> {
    let Some(path) = path else {
        return Ok(None);
    };
    let cfg = FileConfig::load(path)
        .with_context(|| format!("failed to load config {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded config file");
    Ok(Some(cfg))
}
