use super::load_file_config;
use crate::cli::args::GenerateArgs;
use crate::exit_codes::{FAILURE, SUCCESS};
use assetpack_core::{check, generate, resolve_config, CheckOutcome, ConfigOverrides};

pub fn run(args: GenerateArgs) -> anyhow::Result<i32> {
    let file = load_file_config(args.source.config.as_deref())?;
    let overrides = ConfigOverrides {
        root: args.source.root.clone(),
        output: args.output.clone(),
        skip_suffixes: args.source.skip_suffix_override(),
        prefix: args.prefix.clone(),
        row_width: args.row_width,
    };
    let config = resolve_config(file, overrides)?;

    if args.check {
        return match check(&config)? {
            CheckOutcome::UpToDate { files } => {
                eprintln!(
                    "{} is up to date ({} file(s)).",
                    config.output.display(),
                    files
                );
                Ok(SUCCESS)
            }
            CheckOutcome::Stale { output } => {
                eprintln!(
                    "stale: {} does not match {}; run `assetpack generate`",
                    output.display(),
                    config.root.display()
                );
                Ok(FAILURE)
            }
        };
    }

    let report = generate(&config)?;
    if report.files == 0 {
        println!("No files to package.");
    } else {
        println!("Packaged {} file(s).", report.files);
    }
    Ok(SUCCESS)
}
