//! Report rendering.

use ciphersniff_core::{Classification, DetectionReport, IndicatorReport, Registry};
use colored::{ColoredString, Colorize};
use std::io::{self, Write};

/// Visual weight of a report line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Severity {
    /// Complete, consecutive match
    Debug,
    /// Headers
    Info,
    /// Fragmented or partial match
    Warning,
    /// No match
    Error,
}

impl Severity {
    pub(crate) fn of(classification: Classification) -> Self {
        match classification {
            Classification::FullConsecutive => Severity::Debug,
            Classification::FullFragmented | Classification::Partial => Severity::Warning,
            Classification::None => Severity::Error,
        }
    }

    fn paint(self, text: &str) -> ColoredString {
        match self {
            Severity::Debug => text.green(),
            Severity::Info => text.cyan(),
            Severity::Warning => text.yellow(),
            Severity::Error => text.red(),
        }
    }
}

/// One report line without colour, e.g. `  S-box <LE>: 12/64 (fragmented)`
pub(crate) fn indicator_line(report: &IndicatorReport) -> String {
    if report.classification == Classification::None {
        return format!("  {}: {}/{}", report.indicator, report.count, report.sequence_len);
    }

    let mut line = format!(
        "  {} <{}>: {}/{}",
        report.indicator, report.byte_order, report.count, report.sequence_len
    );
    if !report.consecutive {
        line.push_str(" (fragmented)");
    }
    line
}

/// Writes the report grouped by algorithm, one coloured line per indicator
pub(crate) fn write_text(report: &DetectionReport, out: &mut impl Write) -> io::Result<()> {
    for algorithm in &report.algorithms {
        writeln!(out, "{}", Severity::Info.paint(&format!("[{}]", algorithm.name)))?;
        for indicator in &algorithm.indicators {
            let severity = Severity::of(indicator.classification);
            writeln!(out, "{}", severity.paint(&indicator_line(indicator)))?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Writes the report as pretty-printed JSON
pub(crate) fn write_json(report: &DetectionReport, out: &mut impl Write) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)
}

/// Writes the individual algorithm names the registry covers
pub(crate) fn write_supported(registry: &Registry, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", Severity::Info.paint("Supported algorithms:"))?;
    for name in registry.supported_names() {
        writeln!(out, "{}", Severity::Debug.paint(&format!("  {}", name)))?;
    }
    Ok(())
}

/// Writes the supported algorithm names as a JSON array
pub(crate) fn write_supported_json(registry: &Registry, out: &mut impl Write) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, &registry.supported_names())?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ciphersniff_core::{AlgorithmReport, ByteOrder, MatchResult};

    fn report(offsets: Vec<usize>, order: ByteOrder, len: usize) -> IndicatorReport {
        let result = MatchResult::from_offsets(order, offsets, 256);
        IndicatorReport::new("AES", "S-box", len, result)
    }

    #[test]
    fn test_indicator_lines() {
        assert_eq!(
            indicator_line(&report(vec![0, 4], ByteOrder::Little, 2)),
            "  S-box <LE>: 2/2"
        );
        assert_eq!(
            indicator_line(&report(vec![0, 4000], ByteOrder::Big, 2)),
            "  S-box <BE>: 2/2 (fragmented)"
        );
        assert_eq!(
            indicator_line(&report(vec![0, 4000], ByteOrder::Big, 64)),
            "  S-box <BE>: 2/64 (fragmented)"
        );
        assert_eq!(
            indicator_line(&report(vec![], ByteOrder::Big, 64)),
            "  S-box: 0/64"
        );
    }

    #[test]
    fn test_severity_mapping() {
        assert_eq!(Severity::of(Classification::FullConsecutive), Severity::Debug);
        assert_eq!(Severity::of(Classification::FullFragmented), Severity::Warning);
        assert_eq!(Severity::of(Classification::Partial), Severity::Warning);
        assert_eq!(Severity::of(Classification::None), Severity::Error);
    }

    #[test]
    fn test_write_text_and_json() {
        let detection = DetectionReport {
            buffer_len: 16,
            algorithms: vec![AlgorithmReport {
                name: "AES".into(),
                indicators: vec![report(vec![0], ByteOrder::Little, 1)],
            }],
        };

        let mut text = Vec::new();
        write_text(&detection, &mut text).unwrap();
        let text = String::from_utf8(text).unwrap();
        assert!(text.contains("[AES]"));
        assert!(text.contains("S-box <LE>: 1/1"));

        let mut json = Vec::new();
        write_json(&detection, &mut json).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&json).unwrap();
        assert_eq!(value["algorithms"][0]["indicators"][0]["count"], 1);
    }

    #[test]
    fn test_write_supported() {
        let registry = Registry::builtin();
        let mut out = Vec::new();
        write_supported(&registry, &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Supported algorithms:"));
        assert!(out.contains("  Whirlpool"));
        assert!(out.contains("  SHA-512"));

        let mut json = Vec::new();
        write_supported_json(&registry, &mut json).unwrap();
        let names: Vec<String> = serde_json::from_slice(&json).unwrap();
        assert_eq!(names.len(), registry.supported_names().len());
    }
}
