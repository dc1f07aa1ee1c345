use crate::ports::outbound::TreeLoader;
use crate::shared::error::TrustError;
use crate::shared::Result;
use crate::trust_analysis::domain::{
    DependencyEdge, DependencyNode, DependencyTree, EdgeKind, NodeId, PackageMetadata,
};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

const LOCKFILE_NAME: &str = "package-lock.json";

#[derive(Debug, Deserialize)]
struct Lockfile {
    #[serde(default)]
    name: Option<String>,
    #[serde(rename = "lockfileVersion", default)]
    lockfile_version: u32,
    /// Path-keyed package map, present since lockfileVersion 2. Keys
    /// are installation paths ("" for the root project,
    /// `node_modules/foo`, `node_modules/foo/node_modules/bar`, ...).
    #[serde(default)]
    packages: Option<BTreeMap<String, LockfilePackage>>,
}

#[derive(Debug, Deserialize, Default)]
struct LockfilePackage {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    dependencies: BTreeMap<String, String>,
    #[serde(rename = "devDependencies", default)]
    dev_dependencies: BTreeMap<String, String>,
    #[serde(rename = "peerDependencies", default)]
    peer_dependencies: BTreeMap<String, String>,
    #[serde(rename = "optionalDependencies", default)]
    optional_dependencies: BTreeMap<String, String>,
}

/// Subset of an installed package.json used to enrich node metadata.
#[derive(Debug, Deserialize, Default)]
struct Manifest {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    repository: Option<serde_json::Value>,
}

impl Manifest {
    /// The repository URL, accepted only in the object form
    /// `{ "url": "..." }`. String shorthands carry no URL field and
    /// are ignored.
    fn repository_url(&self) -> Option<String> {
        self.repository
            .as_ref()?
            .get("url")?
            .as_str()
            .map(String::from)
    }
}

/// PackageLockReader adapter - builds the dependency tree from a
/// project's package-lock.json.
///
/// This adapter implements the TreeLoader port. The lockfile's
/// path-keyed `packages` map (lockfileVersion 2/3) gives each package
/// instance a stable path identity; the installed packages'
/// package.json files, when present, contribute the description and
/// repository URL the lockfile itself does not carry.
pub struct PackageLockReader;

impl PackageLockReader {
    pub fn new() -> Self {
        Self
    }

    fn parse(&self, project_path: &Path) -> Result<Lockfile> {
        let lockfile_path = project_path.join(LOCKFILE_NAME);

        let content =
            std::fs::read_to_string(&lockfile_path).map_err(|_| TrustError::LockfileNotFound {
                path: lockfile_path.clone(),
                suggestion: "Run `npm install` in the project to generate package-lock.json"
                    .to_string(),
            })?;

        let lockfile: Lockfile =
            serde_json::from_str(&content).map_err(|e| TrustError::LockfileParseError {
                path: lockfile_path.clone(),
                details: e.to_string(),
            })?;

        if lockfile.packages.is_none() {
            return Err(TrustError::LockfileParseError {
                path: lockfile_path,
                details: format!(
                    "lockfileVersion {} has no packages map",
                    lockfile.lockfile_version
                ),
            }
            .into());
        }

        Ok(lockfile)
    }

    /// Reads the installed package.json for a node path, best-effort.
    fn read_manifest(project_path: &Path, node_path: &str) -> Manifest {
        let manifest_path = if node_path.is_empty() {
            project_path.join("package.json")
        } else {
            project_path.join(node_path).join("package.json")
        };
        let Ok(content) = std::fs::read_to_string(&manifest_path) else {
            return Manifest::default();
        };
        serde_json::from_str(&content).unwrap_or_default()
    }
}

impl Default for PackageLockReader {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeLoader for PackageLockReader {
    fn load(&self, project_path: &Path) -> Result<DependencyTree> {
        let lockfile = self.parse(project_path)?;
        let packages = lockfile.packages.unwrap_or_default();

        let mut tree = DependencyTree::new(NodeId::root());
        let mut edges: Vec<(NodeId, NodeId)> = Vec::new();

        for (path, entry) in &packages {
            let id = NodeId::from_path(path.clone());
            let manifest = Self::read_manifest(project_path, path);

            let name = entry
                .name
                .clone()
                .or_else(|| manifest.name.clone())
                .or_else(|| package_name_from_path(path))
                .or_else(|| lockfile.name.clone())
                .unwrap_or_else(|| "(unnamed)".to_string());

            let metadata = PackageMetadata {
                name: Some(name.clone()),
                version: entry.version.clone().or_else(|| manifest.version.clone()),
                description: manifest.description.clone(),
                repository_url: manifest.repository_url(),
            };

            let mut node = DependencyNode::new(id.clone(), name).with_package(metadata);
            if let Some(parent) = parent_path(path) {
                node.parent = Some(NodeId::from_path(parent));
            }

            for (deps, kind) in [
                (&entry.dependencies, EdgeKind::Prod),
                (&entry.dev_dependencies, EdgeKind::Dev),
                (&entry.peer_dependencies, EdgeKind::Peer),
                (&entry.optional_dependencies, EdgeKind::Optional),
            ] {
                for (dep_name, spec) in deps {
                    let target = resolve(path, dep_name, &packages).map(NodeId::from_path);
                    if let Some(to) = &target {
                        edges.push((id.clone(), to.clone()));
                    }
                    node.edges_out
                        .push(DependencyEdge::new(id.clone(), target, kind, spec.clone()));
                }
            }

            tree.insert(node);
        }

        for (from, to) in edges {
            tree.link_incoming(&from, &to);
        }

        Ok(tree)
    }
}

/// Package name implied by an installation path, e.g.
/// `node_modules/express/node_modules/@types/debug` -> `@types/debug`.
fn package_name_from_path(path: &str) -> Option<String> {
    if path.is_empty() {
        return None;
    }
    path.rsplit_once("node_modules/")
        .map(|(_, name)| name.to_string())
}

/// Installation path of the node's parent, or `None` for the root.
/// `node_modules/a` -> `""`; `node_modules/a/node_modules/b` ->
/// `node_modules/a`.
fn parent_path(path: &str) -> Option<String> {
    let idx = path.rfind("node_modules/")?;
    if idx == 0 {
        Some(String::new())
    } else {
        // Drop the joining '/'
        Some(path[..idx - 1].to_string())
    }
}

/// Resolves a dependency name from a node's path the way npm does:
/// check the node's own node_modules, then each ancestor scope up to
/// the project root.
fn resolve(
    from_path: &str,
    dep_name: &str,
    packages: &BTreeMap<String, LockfilePackage>,
) -> Option<String> {
    let mut scope = Some(from_path.to_string());
    while let Some(s) = scope {
        let candidate = if s.is_empty() {
            format!("node_modules/{}", dep_name)
        } else {
            format!("{}/node_modules/{}", s, dep_name)
        };
        if packages.contains_key(&candidate) {
            return Some(candidate);
        }
        scope = if s.is_empty() { None } else { parent_path(&s) };
    }
    None
}
