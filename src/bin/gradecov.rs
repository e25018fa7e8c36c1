// src/bin/gradecov.rs
use std::process;

use anyhow::{bail, Result};
use clap::Parser;
use colored::Colorize;

use gradecov_core::aggregate::{self, GlobalStats};
use gradecov_core::assessment;
use gradecov_core::cli::Cli;
use gradecov_core::config::Config;
use gradecov_core::discovery;
use gradecov_core::filter;
use gradecov_core::history;
use gradecov_core::reporting::{self, ReportView};
use gradecov_core::tree;

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e}", "error:".red().bold());
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let data_dir = discovery::find_data_dir(&cli.root)?;
    let config = Config::load(&data_dir)?;
    let records = history::read_history(&data_dir)?;

    let records = filter::latest_records(records);
    let tools = requested_tools(&cli, &config);
    let records = if tools.is_empty() {
        records
    } else {
        filter::filter_tools(&tools, &records)
    };
    let records = filter::filter_ignored(&config.ignore, records);

    let threshold = cli
        .threshold_grade
        .clone()
        .or_else(|| config.threshold.clone())
        .unwrap_or_else(|| "C".to_string());

    if cli.assess_grade {
        let outcome = assessment::assess_grades(&records, &threshold);
        assessment::print_outcome("grade", &outcome);
        if !outcome.passed {
            bail!("grade threshold not met");
        }
    }

    if cli.assess_coverage {
        let outcome = assessment::assess_coverage(&records, &threshold, cli.threshold_percent);
        assessment::print_outcome("coverage", &outcome);
        if !outcome.passed {
            bail!("coverage threshold not met");
        }
    }

    if cli.create_report {
        let mut roots = tree::build_forest(tree::group_by_path(records));
        let mut stats = GlobalStats::new();
        aggregate::aggregate_forest(&mut roots, &threshold, &mut stats);

        let view = ReportView {
            roots,
            summary: stats.finalize(),
            threshold,
        };
        reporting::print_summary(&view);

        let output = cli
            .output
            .clone()
            .unwrap_or_else(|| reporting::default_output(cli.format));
        reporting::write_report(&view, cli.format, &output)?;
        eprintln!("{} {}", "report written:".green().bold(), output.display());
    }

    eprintln!("{}", "All checks passed!".green());
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

/// Tools from the command line, falling back to the config toggles.
fn requested_tools(cli: &Cli, config: &Config) -> Vec<String> {
    let explicit: Vec<String> = cli
        .tools
        .iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();
    if explicit.is_empty() {
        config.enabled_tools()
    } else {
        explicit
    }
}
