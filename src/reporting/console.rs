use crate::reporting::ReportView;
use colored::Colorize;

/// Prints the report-wide summary to stdout.
pub fn print_summary(view: &ReportView) {
    println!(
        "{} (threshold grade {})",
        "Coverage summary".bold(),
        view.threshold.cyan()
    );

    for tool in &view.summary.tools {
        match view.summary.tool_averages.get(tool) {
            Some(average) => println!("  {tool}: {}", format_average(*average)),
            None => println!("  {tool}: {}", "N/A".dimmed()),
        }
    }

    match view.summary.total_average {
        Some(total) => println!("  {}: {}", "total".bold(), format_average(total)),
        None => println!("  {}: {}", "total".bold(), "N/A".dimmed()),
    }
}

fn format_average(value: f64) -> String {
    let text = format!("{value:.2}%");
    if value >= 100.0 {
        text.green().to_string()
    } else if value >= 70.0 {
        text.yellow().to_string()
    } else {
        text.red().to_string()
    }
}
