use crate::ports::outbound::report_formatter::ReportRow;

/// Result of a tree analysis run: the walked nodes in report order,
/// each with its analysis state.
#[derive(Debug, Clone)]
pub struct AnalyzeResponse {
    pub rows: Vec<ReportRow>,
}

impl AnalyzeResponse {
    pub fn new(rows: Vec<ReportRow>) -> Self {
        Self { rows }
    }

    /// Number of nodes that produced a repository classification.
    pub fn classified_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| {
                row.analysis
                    .as_ref()
                    .is_some_and(|a| a.trust().is_some())
            })
            .count()
    }
}
