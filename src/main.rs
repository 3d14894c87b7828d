//! CLI entry point for `schema2md`.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use schema2md::classifier::unknown_category::UnknownCategoryPolicy;
use schema2md::generator::document::GeneratorOptions;
use schema2md::output::pipeline::{self, RunConfig, RunOutcome, DEFAULT_INPUT, DEFAULT_OUTPUT};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "schema2md",
    about = "Render a database schema export into a Markdown reference document"
)]
struct Cli {
    /// Schema export (JSON array of introspection rows)
    #[arg(long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Markdown document to write
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// How to handle rows whose category is not Functions, Table Columns or Triggers
    #[arg(long, default_value = "columns")]
    unknown_categories: UnknownCategoryPolicy,

    /// Exit with status 1 if the document is missing or out of date, without writing it
    #[arg(long)]
    check: bool,

    /// Print verbose diagnostics
    #[arg(long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_directive = if verbose {
        "schema2md=debug"
    } else {
        "schema2md=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(filter)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = RunConfig {
        input: cli.input,
        output: cli.output,
        options: GeneratorOptions {
            unknown_categories: cli.unknown_categories,
        },
        check: cli.check,
    };

    match pipeline::run(&config) {
        Ok(RunOutcome::Written(summary)) => {
            println!(
                "Schema documentation written to {} ({summary})",
                config.output.display()
            );
        }
        Ok(RunOutcome::UpToDate(_)) => {
            println!("{} is up to date", config.output.display());
        }
        Ok(RunOutcome::Stale(_)) => {
            eprintln!(
                "{} is out of date; rerun schema2md without --check to regenerate it",
                config.output.display()
            );
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(2);
        }
    }
}
