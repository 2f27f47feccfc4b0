use crate::report::StatsReport;

pub fn render_report_text(report: &StatsReport) -> String {
    let mut out = String::new();

    out.push_str("=== Score Statistics ===\n");
    out.push_str(&format!("Count of scores: {}\n", report.count));
    out.push_str(&format!("Sum: {:.2}\n", report.sum));
    out.push_str(&format!("Average: {:.2}\n", report.average));
    out.push_str(&format!("Min: {:.2}\n", report.min));
    out.push_str(&format!("Max: {:.2}\n", report.max));
    out.push_str(&format!("Median: {:.2}\n", report.median));

    out
}
