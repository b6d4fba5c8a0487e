//! file_picker - copy the first file whose name contains a pattern

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use flowstep::{
    cli::FilePickerArgs,
    files::MatchPattern,
    logging, pick_file, Config, PickOutcome, PickRequest,
};

fn main() -> Result<()> {
    let args = FilePickerArgs::parse();
    let verbosity = args.common.verbosity();
    logging::init(verbosity);

    let config = Config::load(args.common.config.as_deref()).context("Failed to load configuration")?;

    let request = PickRequest::new(
        &args.input_folder,
        MatchPattern::new(args.pattern),
        &args.output_folder,
        &config.picker,
    );

    let outcome = pick_file(&request).with_context(|| {
        format!(
            "Failed to pick a file from {}",
            args.input_folder.display()
        )
    })?;

    match outcome {
        PickOutcome::Copied {
            source,
            destination,
        } => {
            if verbosity.show_progress() {
                println!(
                    "{} {} -> {}",
                    "Copied".green().bold(),
                    source.display(),
                    destination.display()
                );
            }
        }
        PickOutcome::NoMatch {
            pattern,
            candidates,
        } => {
            // Informational only: the step still succeeds
            println!("{} {}", "No results found for pattern:".yellow(), pattern);
            println!("Files in input folder: {:?}", candidates);
        }
    }

    Ok(())
}
