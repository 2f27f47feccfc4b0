use serde::Serialize;

use crate::report::StatsReport;
use crate::source::SourceKind;

/// Machine-readable rendering of the same report, with provenance metadata
/// so downstream consumers know where the scores came from. Values carry
/// full precision; rounding is a display concern of the text report only.
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    tool: &'static str,
    version: &'static str,
    source: String,
    stats: &'a StatsReport,
}

pub fn render_report_json(
    report: &StatsReport,
    source: SourceKind,
) -> Result<String, serde_json::Error> {
    let doc = JsonReport {
        tool: "scorestat",
        version: env!("CARGO_PKG_VERSION"),
        source: source.to_string(),
        stats: report,
    };
    let mut out = serde_json::to_string_pretty(&doc)?;
    out.push('\n');
    Ok(out)
}
