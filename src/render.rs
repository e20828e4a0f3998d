use std::io::Write;

use serde::Serialize;

use crate::errors::Result;
use crate::report::ValidityReport;

/// How reports are written to the output stream.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// The four-line human readable block.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Writes `report` as
///
/// ```text
/// Path: <path>
/// Geometry types <name1>, <name2>, ...
/// - Valid geometry count:   <N>
/// - Invalid geometry count: <N>
/// ```
///
/// With `show_invalid`, each invalid feature is listed below the counts.
pub fn write_text<W: Write>(
    out: &mut W,
    report: &ValidityReport,
    show_invalid: bool,
) -> Result<()> {
    let names: Vec<&str> = report.geometry_types.iter().map(String::as_str).collect();
    writeln!(out, "Path: {}", report.path.display())?;
    writeln!(out, "Geometry types {}", names.join(", "))?;
    writeln!(out, "- Valid geometry count:   {}", report.valid_count)?;
    writeln!(out, "- Invalid geometry count: {}", report.invalid_count)?;
    if show_invalid {
        for fid in &report.invalid_fids {
            writeln!(out, "  - invalid feature {fid}")?;
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    report: &'a ValidityReport,
    feature_count: u64,
}

/// Writes `report` as a single line of JSON.
pub fn write_json_line<W: Write>(out: &mut W, report: &ValidityReport) -> Result<()> {
    let line = JsonReport {
        report,
        feature_count: report.feature_count(),
    };
    serde_json::to_writer(&mut *out, &line)?;
    writeln!(out)?;
    Ok(())
}

pub fn write_report<W: Write>(
    out: &mut W,
    report: &ValidityReport,
    format: OutputFormat,
    show_invalid: bool,
) -> Result<()> {
    match format {
        OutputFormat::Text => write_text(out, report, show_invalid),
        OutputFormat::Json => write_json_line(out, report),
    }
}
