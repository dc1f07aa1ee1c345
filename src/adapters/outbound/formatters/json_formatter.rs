use crate::ports::outbound::{ReportFormatter, ReportRow};
use crate::shared::Result;
use crate::trust_analysis::domain::{Analysis, RepoData};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct JsonRow<'a> {
    path: &'a str,
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<&'a str>,
    depth: usize,
    status: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    repository: Option<&'a RepoData>,
}

/// JsonReportFormatter adapter for machine-readable output.
///
/// One JSON array, one object per report row, pretty-printed.
pub struct JsonReportFormatter;

impl JsonReportFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonReportFormatter {
    fn format(&self, rows: &[ReportRow]) -> Result<String> {
        let json_rows: Vec<JsonRow> = rows
            .iter()
            .map(|row| {
                let status = match &row.analysis {
                    None => "pending",
                    Some(Analysis::Unavailable) => "unavailable",
                    Some(Analysis::Classified { trust, .. }) => match trust {
                        crate::trust_analysis::domain::Trust::High => "high",
                        crate::trust_analysis::domain::Trust::Low => "low",
                        crate::trust_analysis::domain::Trust::Indeterminate => "indeterminate",
                    },
                };
                JsonRow {
                    path: row.id.as_str(),
                    name: &row.name,
                    version: row.version.as_deref(),
                    depth: row.depth,
                    status,
                    repository: row.analysis.as_ref().and_then(|a| a.data()),
                }
            })
            .collect();

        let mut output = serde_json::to_string_pretty(&json_rows)?;
        output.push('\n');
        Ok(output)
    }
}
