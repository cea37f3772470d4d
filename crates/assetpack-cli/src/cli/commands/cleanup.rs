use super::load_file_config;
use crate::cli::args::CleanupArgs;
use crate::exit_codes::SUCCESS;
use assetpack_core::{cleanup, resolve_cleanup_config, ConfigOverrides};

pub fn run(args: CleanupArgs) -> anyhow::Result<i32> {
    let file = load_file_config(args.source.config.as_deref())?;
    let overrides = ConfigOverrides {
        root: args.source.root.clone(),
        skip_suffixes: args.source.skip_suffix_override(),
        ..Default::default()
    };
    let config = resolve_cleanup_config(file, overrides)?;
    let root = &config.root;

    let report = cleanup(root, &config.skip_filter(), args.dry_run)?;
    if report.dry_run {
        for path in &report.removed_paths {
            println!("would remove: {path}");
        }
        println!(
            "Would remove {} file(s) from {}.",
            report.removed,
            root.display()
        );
    } else {
        println!("Removed {} file(s) from {}.", report.removed, root.display());
    }
    Ok(SUCCESS)
}
