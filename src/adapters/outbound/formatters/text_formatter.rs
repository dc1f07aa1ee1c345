use crate::ports::outbound::{ReportFormatter, ReportRow};
use crate::shared::Result;
use crate::trust_analysis::domain::{Analysis, Trust};
use owo_colors::OwoColorize;
use std::fmt::Write;

/// TextReportFormatter adapter for human-readable terminal output.
///
/// Renders an indented dependency listing with a colored trust marker
/// per row, followed by a detail block for every node with resolved
/// repository data.
pub struct TextReportFormatter {
    colored: bool,
}

impl TextReportFormatter {
    pub fn new() -> Self {
        Self { colored: true }
    }

    /// Disables ANSI colors (for file output and tests).
    pub fn plain() -> Self {
        Self { colored: false }
    }

    fn trust_marker(&self, row: &ReportRow) -> String {
        let label = match &row.analysis {
            None => "pending",
            Some(Analysis::Unavailable) => "unknown",
            Some(Analysis::Classified { trust, .. }) => match trust {
                Trust::High => "high",
                Trust::Low => "low",
                Trust::Indeterminate => "indeterminate",
            },
        };
        if !self.colored {
            return label.to_string();
        }
        match &row.analysis {
            Some(Analysis::Classified { trust: Trust::High, .. }) => label.green().to_string(),
            Some(Analysis::Classified { trust: Trust::Low, .. }) => label.red().to_string(),
            Some(Analysis::Classified { .. }) => label.yellow().to_string(),
            _ => label.dimmed().to_string(),
        }
    }
}

impl Default for TextReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for TextReportFormatter {
    fn format(&self, rows: &[ReportRow]) -> Result<String> {
        let mut out = String::new();

        writeln!(out, "Dependency trust report")?;
        writeln!(out)?;

        for row in rows {
            let indent = "  ".repeat(row.depth);
            let version = row.version.as_deref().unwrap_or("-");
            writeln!(
                out,
                "{}{} {} [{}]",
                indent,
                row.name,
                version,
                self.trust_marker(row)
            )?;
        }

        let classified: Vec<_> = rows
            .iter()
            .filter_map(|row| row.analysis.as_ref()?.data().map(|data| (row, data)))
            .collect();

        if !classified.is_empty() {
            writeln!(out)?;
            for (row, data) in classified {
                writeln!(out, "Analysis of {}:", data.url)?;
                writeln!(out)?;
                writeln!(out, "Package: {}", row.name)?;
                writeln!(out, "Owner: {}", data.owner)?;
                writeln!(out, "Repo: {}", data.repo)?;
                writeln!(out, "Forks: {}", data.forks)?;
                writeln!(out, "Stars: {}", data.stars)?;
                writeln!(out)?;
            }
        }

        Ok(out)
    }
}
