// src/cli.rs
use crate::reporting::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "gradecov",
    version,
    about = "Grade-history coverage reports and threshold gates"
)]
pub struct Cli {
    /// Grade every file is measured against (falls back to the config
    /// threshold, then "C")
    #[arg(long, value_name = "GRADE")]
    pub threshold_grade: Option<String>,

    /// Minimum acceptable average coverage percentage
    #[arg(long, value_name = "PERCENT", default_value_t = 0)]
    pub threshold_percent: u32,

    /// Tools to include, comma-separated (e.g. SOLID,OWASP-Top-10).
    /// Empty means the tools enabled in config.json, or everything.
    #[arg(long, value_delimiter = ',', value_name = "TOOLS")]
    pub tools: Vec<String>,

    /// Fail when any file grades below the threshold grade
    #[arg(long)]
    pub assess_grade: bool,

    /// Fail when average coverage falls below the threshold percentage
    #[arg(long)]
    pub assess_coverage: bool,

    /// Write the coverage report
    #[arg(long)]
    pub create_report: bool,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
    pub format: OutputFormat,

    /// Report output path (defaults to gradecov-report.<format>)
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Repository root to search for the .gradecov directory
    #[arg(long, default_value = ".", value_name = "DIR")]
    pub root: PathBuf,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}
