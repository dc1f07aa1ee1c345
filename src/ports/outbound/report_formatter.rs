use crate::shared::Result;
use crate::trust_analysis::domain::{Analysis, NodeId};

/// One row of the final report: a node and its analysis state.
///
/// `analysis` is `None` when the node was never analyzed (it was
/// outside the walked depth or analysis was skipped); `Unavailable`
/// when analysis ran but resolved nothing.
#[derive(Debug, Clone)]
pub struct ReportRow {
    pub id: NodeId,
    pub name: String,
    pub version: Option<String>,
    pub depth: usize,
    pub analysis: Option<Analysis>,
}

/// ReportFormatter port for rendering the analysis report
///
/// Implementations produce the complete output document (text for the
/// terminal, JSON for machines) from the ordered report rows.
pub trait ReportFormatter {
    fn format(&self, rows: &[ReportRow]) -> Result<String>;
}
