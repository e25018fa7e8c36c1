//! Report rendering over the finished tree and summary.
//!
//! The aggregation core hands a [`ReportView`] to a writer; writers must
//! treat undefined coverage as a renderable "N/A" state, never zero.

mod console;
mod html;

pub use console::print_summary;

use crate::aggregate::ReportSummary;
use crate::error::{GradecovError, Result};
use crate::tree::ReportNode;
use clap::ValueEnum;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Everything a report writer needs.
#[derive(Debug, Serialize)]
pub struct ReportView {
    pub roots: Vec<ReportNode>,
    pub summary: ReportSummary,
    pub threshold: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Html,
    Json,
}

/// Default output path for a format.
#[must_use]
pub fn default_output(format: OutputFormat) -> PathBuf {
    match format {
        OutputFormat::Html => PathBuf::from("gradecov-report.html"),
        OutputFormat::Json => PathBuf::from("gradecov-report.json"),
    }
}

/// Renders the view in the requested format and writes it to `path`,
/// creating parent directories as needed.
///
/// # Errors
/// Returns an error when rendering or the final write fails.
pub fn write_report(view: &ReportView, format: OutputFormat, path: &Path) -> Result<()> {
    let rendered = match format {
        OutputFormat::Html => html::render(view),
        OutputFormat::Json => serde_json::to_string_pretty(view).map_err(GradecovError::Render)?,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| GradecovError::io(e, parent))?;
        }
    }
    fs::write(path, rendered).map_err(|e| GradecovError::io(e, path))
}
