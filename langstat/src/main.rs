//! # langstat
//!
//! A CLI tool that reports which languages a source tree is written in.
//!
//! ## Overview
//!
//! langstat wraps langstatlib: it walks one or more directories, counts
//! files with known code extensions, and shows files, lines, size and
//! share of lines per language.
//!
//! ## Usage
//!
//! ```bash
//! # Analyze the current directory
//! langstat
//!
//! # Analyze several roots together, with per-language details
//! langstat analyze ./frontend ./backend --details
//!
//! # One-line summary of the top languages
//! langstat summary . --top 3
//!
//! # Raw statistics as JSON
//! langstat . --output json
//! ```

mod render;

use std::process::ExitCode;

use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use langstatlib::{
    Analyzer, LangstatError, LanguageTable, ScanOptions, Summary, DEFAULT_TOP_LANGUAGES,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Arguments shared by the root command and the subcommands
fn scan_args() -> Vec<Arg> {
    vec![
        Arg::new("roots")
            .help("Directories to analyze (defaults to current directory)")
            .num_args(0..)
            .default_value("."),
        Arg::new("follow-links")
            .long("follow-links")
            .action(ArgAction::SetTrue)
            .help("Follow symbolic links while walking"),
    ]
}

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("langstat")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Per-language file, line and byte statistics for source trees")
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .global(true)
                .value_parser(["table", "json"])
                .default_value("table")
                .help("Output format"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::Count)
                .help("Log skipped entries and progress to stderr (repeat for more)"),
        )
        .args(scan_args())
        .arg(details_arg())
        .subcommand(
            Command::new("analyze")
                .about("Show per-language statistics (default command)")
                .args(scan_args())
                .arg(details_arg()),
        )
        .subcommand(
            Command::new("summary")
                .about("Show total lines and the top languages on one line")
                .args(scan_args())
                .arg(
                    Arg::new("top")
                        .short('n')
                        .long("top")
                        .value_parser(value_parser!(usize))
                        .help("Number of languages to list (default 5)"),
                ),
        )
}

fn details_arg() -> Arg {
    Arg::new("details")
        .short('d')
        .long("details")
        .action(ArgAction::SetTrue)
        .help("Show files, lines, size and percentage under each language")
}

fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "error",
        1 => "warn",
        2 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Extract roots from matches
fn extract_roots(matches: &ArgMatches) -> Vec<String> {
    matches
        .get_many::<String>("roots")
        .map(|v| v.cloned().collect())
        .unwrap_or_default()
}

fn build_analyzer(matches: &ArgMatches) -> Analyzer {
    let options = ScanOptions::new().follow_links(matches.get_flag("follow-links"));
    Analyzer::with_options(options)
}

fn is_json(matches: &ArgMatches) -> bool {
    matches.get_one::<String>("output").map(String::as_str) == Some("json")
}

/// Handler for the analyze command
fn analyze_handler(matches: &ArgMatches) -> anyhow::Result<String> {
    let roots = extract_roots(matches);
    let mut analyzer = build_analyzer(matches);
    let stats = analyzer.analyze(&roots)?;

    if is_json(matches) {
        return to_json(stats);
    }

    let mut table = LanguageTable::from_stats(stats);
    if matches.get_flag("details") {
        table = table.with_details(stats);
    }
    Ok(render::render_table(&table))
}

/// Handler for the summary command
fn summary_handler(matches: &ArgMatches) -> anyhow::Result<String> {
    let roots = extract_roots(matches);
    let top = matches
        .get_one::<usize>("top")
        .copied()
        .unwrap_or(DEFAULT_TOP_LANGUAGES);
    let mut analyzer = build_analyzer(matches);
    analyzer.analyze(&roots)?;
    let summary = Summary::from_stats_top(analyzer.stats(), top)?;

    if is_json(matches) {
        return to_json(&summary);
    }
    Ok(render::render_summary(&summary))
}

fn to_json<T: serde::Serialize>(value: &T) -> anyhow::Result<String> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    Ok(format!("{json}\n"))
}

fn run(matches: &ArgMatches) -> anyhow::Result<String> {
    match matches.subcommand() {
        Some(("summary", sub)) => summary_handler(sub),
        Some(("analyze", sub)) => analyze_handler(sub),
        _ => analyze_handler(matches),
    }
}

/// Verbosity may be given before or after the subcommand
fn verbosity(matches: &ArgMatches) -> u8 {
    let sub = matches
        .subcommand()
        .map_or(0, |(_, sub)| sub.get_count("verbose"));
    matches.get_count("verbose").max(sub)
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    init_tracing(verbosity(&matches));
    debug!(args = ?std::env::args().collect::<Vec<_>>(), "starting");

    match run(&matches) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => match e.downcast_ref::<LangstatError>() {
            // Notices leave the exit status alone
            Some(notice @ LangstatError::NoRoots) => {
                eprintln!("warning: {notice}");
                ExitCode::SUCCESS
            }
            Some(notice @ LangstatError::NoStatistics) => {
                eprintln!("info: {notice}");
                ExitCode::SUCCESS
            }
            _ => {
                eprintln!("Error: {e:#}");
                ExitCode::FAILURE
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_is_well_formed() {
        build_command().debug_assert();
    }

    #[test]
    fn test_roots_default_to_current_dir() {
        let matches = build_command().get_matches_from(["langstat"]);

        assert_eq!(extract_roots(&matches), vec!["."]);
        assert!(!is_json(&matches));
    }

    #[test]
    fn test_verbosity_after_subcommand() {
        let matches = build_command().get_matches_from(["langstat", "summary", "-vv"]);

        assert_eq!(verbosity(&matches), 2);
    }

    #[test]
    fn test_summary_args() {
        let matches =
            build_command().get_matches_from(["langstat", "summary", "a", "b", "--top", "3", "-o", "json"]);
        let (name, sub) = matches.subcommand().unwrap();

        assert_eq!(name, "summary");
        assert_eq!(extract_roots(sub), vec!["a", "b"]);
        assert_eq!(sub.get_one::<usize>("top"), Some(&3));
        assert!(is_json(sub));
    }
}
