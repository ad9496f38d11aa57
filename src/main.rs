//! CLI entry point for submission-check.

use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;

use submission_check::checker;
use submission_check::config::CheckConfig;
use submission_check::output::{Output, OutputMode};

/// Exit status for usage and settings errors, matching clap's own
const SETUP_ERROR: u8 = 2;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\ncommit: ",
    env!("GIT_SHA"),
    "\nbuilt: ",
    env!("BUILD_DATE")
);

#[derive(Parser)]
#[command(name = "submission-check")]
#[command(version, long_version = LONG_VERSION)]
#[command(about = "Check that a project directory is ready for submission", long_about = None)]
#[command(
    after_help = "CHECKS (in order, stopping at the first failure):\n    README.md and secret_flags exist and use Unix line endings\n    make succeeds in the project directory\n    the build produced a client program\n    secret_flags contains at least one 64-byte flag"
)]
struct Cli {
    /// Path to the directory containing your project, i.e. the directory
    /// containing README.md, secret_flags, and your Makefile
    project_directory: PathBuf,

    /// Read checklist settings from a YAML (or Markdown frontmatter) file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print each step as it runs
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only print the failing check
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => CheckConfig::load_from(path),
        None => Ok(CheckConfig::default()),
    };
    let config = match config {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{} {:#}", "Error:".red(), err);
            return ExitCode::from(SETUP_ERROR);
        }
    };

    let output = Output::new(OutputMode::from_flags(cli.verbose, cli.quiet));
    ExitCode::from(checker::execute(&cli.project_directory, &config, &output))
}
