use crate::shared::Result;
use crate::trust_analysis::domain::DependencyTree;
use std::path::Path;

/// TreeLoader port for producing the dependency tree of a project
///
/// The tree is consumed read-only by the analyzer; how it is obtained
/// (lockfile parse, installed node_modules walk) is an adapter concern.
///
/// # Errors
/// Returns an error if the project has no readable dependency data or
/// the data cannot be parsed.
pub trait TreeLoader {
    fn load(&self, project_path: &Path) -> Result<DependencyTree>;
}
