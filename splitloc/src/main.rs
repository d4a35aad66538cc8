//! # splitloc
//!
//! A CLI that counts the lines of a project tree, split into client, server
//! and other code.
//!
//! ## Overview
//!
//! splitloc is built on top of splitloclib. It reads the root's `.gitignore`,
//! skips ignored paths along with the usual housekeeping directories, counts
//! every recognized text file and prints one table per category followed by
//! an overall summary.
//!
//! ## Usage
//!
//! ```bash
//! # Count the current directory
//! splitloc
//!
//! # Count another tree, with an extra exclusion
//! splitloc ../webapp --exclude "*.min.js"
//!
//! # Use a different ignore file
//! splitloc --ignore-file .locignore
//!
//! # Machine-readable output
//! splitloc --output json
//!
//! # Show which files and directories were skipped, and why
//! splitloc --verbose
//! ```

mod render;

use std::process::ExitCode;

use clap::{Arg, ArgAction, ArgMatches, Command};
use console::style;
use splitloclib::{count_tree, CountOptions, Report, DEFAULT_IGNORE_FILE};

use render::{render, OutputMode};

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("splitloc")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Count lines of code split into client, server and other files")
        .arg(
            Arg::new("path")
                .help("Path to analyze (defaults to current directory)")
                .default_value("."),
        )
        .arg(
            Arg::new("ignore-file")
                .long("ignore-file")
                .default_value(DEFAULT_IGNORE_FILE)
                .help("Ignore file to read, relative to the analyzed path"),
        )
        .arg(
            Arg::new("exclude")
                .short('e')
                .long("exclude")
                .action(ArgAction::Append)
                .help("Also ignore paths matching this pattern (can be specified multiple times)"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["text", "json"])
                .default_value("text")
                .help("Output format"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Log skipped files and directories to stderr"),
        )
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

/// Build count options from matches
fn build_options(matches: &ArgMatches) -> CountOptions {
    let mut options = CountOptions::new();

    if let Some(path) = matches.get_one::<String>("path") {
        options = options.root(path);
    }
    if let Some(ignore_file) = matches.get_one::<String>("ignore-file") {
        options = options.ignore_file(ignore_file);
    }
    if let Some(excludes) = matches.get_many::<String>("exclude") {
        for pattern in excludes {
            options = options.exclude(pattern);
        }
    }

    options
}

fn run(matches: &ArgMatches) -> anyhow::Result<String> {
    let mode = matches
        .get_one::<String>("output")
        .and_then(|s| OutputMode::parse(s))
        .unwrap_or(OutputMode::Text);

    let options = build_options(matches);
    let result = count_tree(&options)?;
    log::debug!(
        "counted {} files, {} lines",
        result.file_count(),
        result.total_lines()
    );
    let report = Report::from(&result);

    Ok(render(&report, mode)?)
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    init_logging(matches.get_flag("verbose"));

    match run(&matches) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {e}", style("Error:").red().bold());
            ExitCode::FAILURE
        }
    }
}
