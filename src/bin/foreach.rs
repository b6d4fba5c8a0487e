//! foreach - run a remote method on every file in a folder

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use flowstep::{
    cli::ForeachArgs,
    logging,
    remote::{build_client, parse_parameters, HttpExecutor, HttpSaver},
    Config, ForeachEvent, ForeachJob,
};
use indicatif::{ProgressBar, ProgressStyle};

#[tokio::main]
async fn main() -> Result<()> {
    let args = ForeachArgs::parse();
    let verbosity = args.common.verbosity();
    logging::init(verbosity);

    let config = Config::load(args.common.config.as_deref()).context("Failed to load configuration")?;

    let parameters = args
        .method_parameters
        .as_deref()
        .map(parse_parameters)
        .transpose()?;

    let job = ForeachJob {
        input_folder: args.input_folder,
        method_url: args.method_url,
        parameters,
        collection_name: args.collection_name,
        output_folder: args.output_folder,
        settings: config.foreach.clone(),
    };

    let client = build_client(&config.http)?;
    let executor = HttpExecutor::new(client.clone());
    let saver = HttpSaver::new(client);

    let pb = if verbosity.show_progress() {
        ProgressBar::new(0)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let report = job
        .run_with_progress(&executor, &saver, |event| match event {
            ForeachEvent::Started { total } => pb.set_length(*total as u64),
            ForeachEvent::InputSkipped { file } => {
                pb.set_message(format!("skipped {}", file));
                pb.inc(1);
            }
            ForeachEvent::FileProcessed { file, saved } => {
                pb.set_message(format!("{} ({} saved)", file, saved));
                pb.inc(1);
            }
        })
        .await;

    pb.finish_and_clear();

    let report = report.with_context(|| format!("Failed to run method {}", job.method_url))?;

    if verbosity.show_progress() {
        println!(
            "{} {} file(s), saved {} result(s) into {}",
            "Processed".green().bold(),
            report.processed.len(),
            report.saved_count(),
            job.output_folder.display()
        );
    }

    Ok(())
}
