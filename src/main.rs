//! URL matcher command line.
//!
//! ```text
//! url-matcher match <TARGET> <PATTERN>...   match one path or URI against patterns
//! url-matcher run [--suite FILE]            run a test suite (built-in by default)
//! ```

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;
use url::Url;

use url_matcher::config::{default_suite, load_suite};
use url_matcher::harness::{paint, run_suite, write_report};
use url_matcher::observability::{init_logging, DEFAULT_FILTER};
use url_matcher::{MatchOutcome, MatchResult, Matcher, ParameterMap};

#[derive(Parser)]
#[command(name = "url-matcher")]
#[command(about = "Match URL paths against {name} route patterns", long_about = None)]
struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Match a path or URI against one or more patterns
    Match {
        /// Path (`/users/42?x=1`) or absolute URI (`http://host/users/42`)
        target: String,

        /// Patterns such as `/users/{id}`
        #[arg(required = true)]
        patterns: Vec<String>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run a test suite and exit non-zero if any case fails
    Run {
        /// Suite file (TOML); the built-in suite is used when omitted
        #[arg(short, long)]
        suite: Option<PathBuf>,

        /// Only print results, not per-case details
        #[arg(short, long)]
        quiet: bool,
    },
}

#[derive(Serialize)]
struct PatternReport<'a> {
    pattern: &'a str,
    matched: bool,
    params: &'a ParameterMap,
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    init_logging(DEFAULT_FILTER);

    let cli = Cli::parse();
    match cli.command {
        Commands::Match {
            target,
            patterns,
            json,
        } => {
            let matcher = parse_target(&target)?;
            let outcomes = match_all(&matcher, &patterns)?;

            let mut stdout = io::stdout().lock();
            write_matches(&mut stdout, &outcomes, json, !cli.no_color)?;
            stdout.flush()?;

            Ok(exit_code(outcomes.iter().any(|(_, outcome)| outcome.matched)))
        }
        Commands::Run { suite, quiet } => {
            let mut config = match suite {
                Some(path) => load_suite(&path)?,
                None => default_suite()?,
            };
            if quiet {
                config.settings.verbose = false;
            }
            if cli.no_color {
                config.settings.color = false;
            }

            tracing::info!(cases = config.cases.len(), "Running suite");
            let report = run_suite(&config);

            let mut stdout = io::stdout().lock();
            write_report(&mut stdout, &report, &config.settings)?;
            stdout.flush()?;

            Ok(exit_code(report.all_passed()))
        }
    }
}

/// A target containing `://` is an absolute URI, anything else a path.
fn parse_target(target: &str) -> Result<Matcher, Box<dyn std::error::Error>> {
    if target.contains("://") {
        Ok(Matcher::from_uri(&Url::parse(target)?)?)
    } else {
        Ok(Matcher::new(target)?)
    }
}

fn match_all<'a>(
    matcher: &Matcher,
    patterns: &'a [String],
) -> MatchResult<Vec<(&'a str, MatchOutcome)>> {
    patterns
        .iter()
        .map(|pattern| Ok((pattern.as_str(), matcher.match_pattern(pattern)?)))
        .collect()
}

fn write_matches<W: Write>(
    out: &mut W,
    outcomes: &[(&str, MatchOutcome)],
    json: bool,
    color: bool,
) -> io::Result<()> {
    if json {
        let reports: Vec<PatternReport<'_>> = outcomes
            .iter()
            .map(|(pattern, outcome)| PatternReport {
                pattern,
                matched: outcome.matched,
                params: &outcome.params,
            })
            .collect();
        serde_json::to_writer_pretty(&mut *out, &reports)?;
        return writeln!(out);
    }

    for (pattern, outcome) in outcomes {
        let label = if outcome.matched { "MATCH   " } else { "NO MATCH" };
        let params: Vec<String> = outcome
            .params
            .iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect();
        writeln!(
            out,
            "{} {} {}",
            paint(label, outcome.matched, color),
            pattern,
            params.join(" ")
        )?;
    }
    Ok(())
}

fn exit_code(success: bool) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
