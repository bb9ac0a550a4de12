use clap::Parser;
use std::time::Duration;

use anyhow::Result;

use levelconv::cli::{handle_error, Args, CliConfig, CliUtils};
use levelconv::conversion::{BatchConverter, BatchSummary};
use levelconv::error::ConversionResult;
use levelconv::parser::LevelSource;

fn main() -> Result<()> {
    let args = Args::parse();
    CliUtils::configure_colors();

    // Fatal errors exit nonzero; per-level failures never do
    let (cli, summary) = match CliConfig::from_args(args).and_then(|cli| {
        let summary = run(&cli)?;
        Ok((cli, summary))
    }) {
        Ok(done) => done,
        Err(e) => {
            handle_error(&e);
            std::process::exit(1);
        }
    };

    if !cli.is_quiet() {
        print_summary(&summary);
    }

    if cli.want_stats() {
        println!("{}", summary.to_json()?);
    }

    Ok(())
}

fn run(cli: &CliConfig) -> ConversionResult<BatchSummary> {
    let config = &cli.conversion_config;

    let source = LevelSource::File(config.input_path.clone());
    if cli.is_verbose() {
        eprintln!("Reading levels from {}", source.description());
    }

    let document = source.load()?;
    if document.is_empty() {
        CliUtils::show_warning(
            &format!("No levels found in {}", config.input_path.display()),
            cli.is_quiet(),
        );
    }

    if !cli.is_quiet() {
        println!("{}", config.describe());
    }

    let progress = CliUtils::create_progress_bar(document.len() as u64, cli.is_quiet());
    let converter = BatchConverter::new(config.clone())
        .with_progress(progress)
        .with_quiet(cli.is_quiet())
        .with_verbose(cli.is_verbose());

    Ok(converter.run(&document))
}

fn print_summary(summary: &BatchSummary) {
    println!();
    for line in summary.report_lines() {
        println!("{}", line);
    }
    println!(
        "  Finished in {}",
        CliUtils::format_duration(Duration::from_millis(summary.processing_time_ms))
    );
}
