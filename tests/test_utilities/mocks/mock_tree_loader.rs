use npm_trust::prelude::*;
use std::path::Path;

/// Mock TreeLoader returning a pre-built tree regardless of path
pub struct MockTreeLoader {
    tree: DependencyTree,
}

impl MockTreeLoader {
    pub fn new(tree: DependencyTree) -> Self {
        Self { tree }
    }
}

impl TreeLoader for MockTreeLoader {
    fn load(&self, _project_path: &Path) -> Result<DependencyTree> {
        Ok(self.tree.clone())
    }
}
