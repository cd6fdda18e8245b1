//! # langsize
//!
//! A CLI tool that shows which languages make up a source tree, by bytes.
//!
//! ## Overview
//!
//! langsize is built on top of langsizelib. It scans either the working
//! directory or a git tree, ignores vendored, generated, minified and binary
//! files, and reports each language's share of the remaining bytes.
//!
//! ## Usage
//!
//! ```bash
//! # Current directory; git mode inside a repository, filesystem otherwise
//! langsize
//!
//! # Force a mode
//! langsize --fs path/to/project
//! langsize --git --git-tree v1.2.0
//!
//! # Show every language instead of the top 10
//! langsize --limit 0
//!
//! # Machine-readable output
//! langsize --json
//! langsize --json-with-colors
//! ```

mod render;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use langsizelib::{
    is_inside_repository, scan_mode, IgnorePolicy, Linguist, ModeRequest, ScanOptions, SourceMode,
    DEFAULT_TREEISH,
};
use tracing_subscriber::EnvFilter;

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("langsize")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Show which languages make up a source tree, by bytes")
        .arg(
            Arg::new("path")
                .help("Path to analyze (defaults to current directory)")
                .value_parser(value_parser!(PathBuf))
                .default_value("."),
        )
        .arg(
            Arg::new("git")
                .long("git")
                .action(ArgAction::SetTrue)
                .help("Read files from a git tree (default inside a repository)"),
        )
        .arg(
            Arg::new("fs")
                .long("fs")
                .action(ArgAction::SetTrue)
                .help("Read files from the filesystem (default outside a repository)"),
        )
        .arg(
            Arg::new("git-tree")
                .long("git-tree")
                .value_name("TREEISH")
                .default_value(DEFAULT_TREEISH)
                .help("Tree-ish to scan; a non-default value selects git mode, even with --fs"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print results as JSON"),
        )
        .arg(
            Arg::new("json-with-colors")
                .long("json-with-colors")
                .action(ArgAction::SetTrue)
                .help("Print results as a JSON array including language colors"),
        )
        .arg(
            Arg::new("limit")
                .long("limit")
                .value_name("N")
                .value_parser(value_parser!(i64))
                .allow_negative_numbers(true)
                .default_value("10")
                .help("Show at most N languages and fold the rest into Other (<= 0 for all)"),
        )
        .arg(
            Arg::new("unignore-filenames")
                .long("unignore-filenames")
                .action(ArgAction::SetTrue)
                .help("Do not ignore files and directories by name"),
        )
        .arg(
            Arg::new("unignore-contents")
                .long("unignore-contents")
                .action(ArgAction::SetTrue)
                .help("Do not ignore binary, generated or minified files"),
        )
        .arg(
            Arg::new("no-gitignore")
                .long("no-gitignore")
                .action(ArgAction::SetTrue)
                .help("Do not honor .gitignore files in filesystem mode"),
        )
        .arg(
            Arg::new("exclude")
                .short('e')
                .long("exclude")
                .action(ArgAction::Append)
                .help("Ignore files matching glob pattern (can be specified multiple times)"),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .action(ArgAction::SetTrue)
                .help("Log debug output to stderr"),
        )
}

fn setup_logging(debug: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if debug { "debug" } else { "warn" }));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn build_policy(matches: &ArgMatches) -> anyhow::Result<IgnorePolicy> {
    let mut policy = IgnorePolicy::new()
        .unignore_filenames(matches.get_flag("unignore-filenames"))
        .unignore_contents(matches.get_flag("unignore-contents"))
        .gitignore(!matches.get_flag("no-gitignore"));

    if let Some(patterns) = matches.get_many::<String>("exclude") {
        for pattern in patterns {
            policy = policy.exclude(pattern)?;
        }
    }

    Ok(policy)
}

fn mode_request(matches: &ArgMatches) -> ModeRequest {
    ModeRequest {
        git: matches.get_flag("git"),
        fs: matches.get_flag("fs"),
        treeish: matches.get_one::<String>("git-tree").cloned(),
    }
}

fn run(matches: &ArgMatches) -> anyhow::Result<String> {
    let path = matches
        .get_one::<PathBuf>("path")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("."));

    let mode = SourceMode::resolve(&mode_request(matches), is_inside_repository(&path))?;
    let options = ScanOptions::new().policy(build_policy(matches)?);
    let classifier = Linguist::new();

    let result = scan_mode(&path, &mode, &options, &classifier)?;

    let limit = matches
        .get_one::<i64>("limit")
        .copied()
        .unwrap_or(10)
        .max(0) as usize;
    let ranked = result.rank(limit);

    if matches.get_flag("json-with-colors") {
        render::render_json_with_colors(&ranked, &classifier)
            .map(|s| s + "\n")
            .context("failed to serialize results")
    } else if matches.get_flag("json") {
        render::render_json(&ranked)
            .map(|s| s + "\n")
            .context("failed to serialize results")
    } else {
        Ok(render::render_text(&ranked, &result.stats))
    }
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    let debug = matches.get_flag("debug");
    setup_logging(debug);

    match run(&matches) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            if debug {
                eprintln!("Error: {e:?}");
            } else {
                eprintln!("Error: {e}");
            }
            ExitCode::FAILURE
        }
    }
}
