use std::path::PathBuf;

/// Request parameters for a tree analysis run
#[derive(Debug, Clone)]
pub struct AnalyzeRequest {
    /// Path to the project directory containing package-lock.json
    pub project_path: PathBuf,
    /// Maximum depth of production dependencies to walk; `None` walks
    /// the whole tree. Depth 1 is the project's direct dependencies.
    pub max_depth: Option<usize>,
}

impl AnalyzeRequest {
    pub fn new(project_path: PathBuf, max_depth: Option<usize>) -> Self {
        Self {
            project_path,
            max_depth,
        }
    }
}
