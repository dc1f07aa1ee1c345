pub mod analysis;
pub mod edge;
pub mod node;
pub mod repo_data;

pub use analysis::{Analysis, Trust};
pub use edge::{DependencyEdge, EdgeError, EdgeKind};
pub use node::{DependencyNode, DependencyTree, NodeId, PackageMetadata};
pub use repo_data::RepoData;
