use crate::reporting::ReportView;
use crate::tree::{NodeKind, ReportNode};
use std::fmt::Write;

const STYLE: &str = "\
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Helvetica, Arial, sans-serif;
       line-height: 1.5; padding: 20px; background-color: #1e1e1e; color: #e0e0e0; font-size: 14px; }
h1, h2 { border-bottom: 1px solid #444; padding-bottom: 0.3em; color: #ccc; }
.summary { background-color: #2a2a2a; border-radius: 6px; padding: 12px 16px; margin-bottom: 20px; }
table { border-collapse: collapse; margin: 8px 0; }
td, th { border: 1px solid #444; padding: 4px 10px; text-align: left; }
ul.tree { list-style: none; padding-left: 18px; }
ul.tree > li { margin: 2px 0; }
details > summary { cursor: pointer; }
.dir { font-weight: 600; }
.badge { display: inline-block; min-width: 56px; padding: 0 6px; margin-left: 6px;
         border-radius: 4px; color: #1e1e1e; text-align: center; font-size: 12px; }
.green { background-color: #76C474; }
.green-med { background-color: #a0d080; }
.orange { background-color: #F0AB86; }
.orange-low { background-color: #f5be9f; }
.red { background-color: #e04242; color: #fff; }
.na { background-color: #555; color: #ccc; }
.tool { color: #999; font-size: 12px; margin-left: 8px; }
";

/// Renders the view as a self-contained HTML document.
#[must_use]
pub fn render(view: &ReportView) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        "<!DOCTYPE html>\n<html>\n<head>\n<title>Coverage Report</title>\n\
         <meta charset=\"UTF-8\">\n<style>\n{STYLE}</style>\n</head>\n<body>\n"
    );

    let _ = writeln!(out, "<h1>Coverage Report</h1>");
    render_summary(&mut out, view);

    let _ = writeln!(out, "<h2>Repository</h2>");
    if view.roots.is_empty() {
        let _ = writeln!(out, "<p>No assessed files.</p>");
    } else {
        let _ = writeln!(out, "<ul class=\"tree\">");
        for node in &view.roots {
            render_node(&mut out, node);
        }
        let _ = writeln!(out, "</ul>");
    }

    out.push_str("</body>\n</html>\n");
    out
}

fn render_summary(out: &mut String, view: &ReportView) {
    let _ = writeln!(out, "<div class=\"summary\">");
    let _ = writeln!(
        out,
        "<div>Threshold grade: <strong>{}</strong></div>",
        escape(&view.threshold)
    );
    let _ = writeln!(
        out,
        "<div>Total average: {}</div>",
        coverage_badge(view.summary.total_average)
    );

    if !view.summary.tools.is_empty() {
        let _ = writeln!(out, "<table><tr><th>Tool</th><th>Average</th></tr>");
        for tool in &view.summary.tools {
            let average = view.summary.tool_averages.get(tool).copied();
            let _ = writeln!(
                out,
                "<tr><td>{}</td><td>{}</td></tr>",
                escape(tool),
                coverage_badge(average)
            );
        }
        let _ = writeln!(out, "</table>");
    }
    let _ = writeln!(out, "</div>");
}

fn render_node(out: &mut String, node: &ReportNode) {
    match &node.kind {
        NodeKind::Directory { children } => {
            let _ = writeln!(
                out,
                "<li><details open><summary><span class=\"dir\">{}</span>{}</summary>",
                escape(&node.name),
                coverage_badge(node.coverage)
            );
            let _ = writeln!(out, "<ul class=\"tree\">");
            for child in children {
                render_node(out, child);
            }
            let _ = writeln!(out, "</ul></details></li>");
        }
        NodeKind::File { .. } => {
            let _ = write!(
                out,
                "<li>{}{}",
                escape(&node.name),
                coverage_badge(node.coverage)
            );
            for (tool, value) in &node.tool_coverage {
                let _ = write!(
                    out,
                    "<span class=\"tool\">{}{}</span>",
                    escape(tool),
                    coverage_badge(Some(*value))
                );
            }
            let _ = writeln!(out, "</li>");
        }
    }
}

/// Undefined coverage renders as a distinct N/A badge, never as zero.
fn coverage_badge(coverage: Option<f64>) -> String {
    match coverage {
        Some(value) => format!(
            "<span class=\"badge {}\">{value:.2}</span>",
            coverage_class(value)
        ),
        None => "<span class=\"badge na\">N/A</span>".to_string(),
    }
}

fn coverage_class(coverage: f64) -> &'static str {
    if coverage >= 100.0 {
        "green"
    } else if coverage >= 70.0 {
        "green-med"
    } else if coverage >= 50.0 {
        "orange"
    } else if coverage >= 30.0 {
        "orange-low"
    } else {
        "red"
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::ReportSummary;
    use std::collections::BTreeMap;

    fn empty_view() -> ReportView {
        ReportView {
            roots: Vec::new(),
            summary: ReportSummary {
                tools: Vec::new(),
                tool_averages: BTreeMap::new(),
                total_average: None,
            },
            threshold: "B".into(),
        }
    }

    #[test]
    fn undefined_coverage_renders_as_na() {
        let html = render(&empty_view());
        assert!(html.contains("N/A"));
        assert!(!html.contains("NaN"));
    }

    #[test]
    fn escapes_markup_in_names() {
        assert_eq!(escape("a<b>&\"c\""), "a&lt;b&gt;&amp;&quot;c&quot;");
    }

    #[test]
    fn badge_classes_follow_the_breakpoints() {
        assert_eq!(coverage_class(120.0), "green");
        assert_eq!(coverage_class(90.0), "green-med");
        assert_eq!(coverage_class(50.0), "orange");
        assert_eq!(coverage_class(30.0), "orange-low");
        assert_eq!(coverage_class(10.0), "red");
    }
}
