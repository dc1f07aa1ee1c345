use crate::application::dto::{AnalyzeRequest, AnalyzeResponse};
use crate::ports::outbound::report_formatter::ReportRow;
use crate::ports::outbound::{CacheStore, ProgressReporter, RepositoryClient, TreeLoader};
use crate::shared::Result;
use crate::trust_analysis::domain::NodeId;
use crate::trust_analysis::services::{RepoDataFetcher, TreeAnalyzer};
use std::collections::HashSet;
use std::sync::Arc;

/// AnalyzeTreeUseCase - core use case for dependency trust analysis
///
/// Orchestrates the workflow: load the dependency tree, walk its
/// production edges, analyze every reachable node, and return the
/// ordered report rows. Infrastructure is injected generically.
///
/// The use case is one-shot: `execute` consumes it, since the tree
/// analyzer it builds owns the injected client and cache store.
///
/// # Type Parameters
/// * `TL` - TreeLoader implementation
/// * `C` - RepositoryClient implementation
/// * `S` - CacheStore implementation
/// * `P` - ProgressReporter implementation
pub struct AnalyzeTreeUseCase<TL, C, S, P> {
    tree_loader: TL,
    repository_client: C,
    cache_store: S,
    progress_reporter: P,
}

impl<TL, C, S, P> AnalyzeTreeUseCase<TL, C, S, P>
where
    TL: TreeLoader,
    C: RepositoryClient,
    S: CacheStore,
    P: ProgressReporter,
{
    /// Creates a new AnalyzeTreeUseCase with injected dependencies
    pub fn new(tree_loader: TL, repository_client: C, cache_store: S, progress_reporter: P) -> Self {
        Self {
            tree_loader,
            repository_client,
            cache_store,
            progress_reporter,
        }
    }

    /// Executes the analysis use case
    pub async fn execute(self, request: AnalyzeRequest) -> Result<AnalyzeResponse> {
        self.progress_reporter.report(&format!(
            "📖 Loading package-lock.json from: {}",
            request.project_path.display()
        ));

        let tree = Arc::new(self.tree_loader.load(&request.project_path)?);

        self.progress_reporter
            .report(&format!("✅ Detected {} package(s)", tree.node_count()));

        let fetcher = RepoDataFetcher::new(self.repository_client, self.cache_store);
        let mut analyzer = TreeAnalyzer::new(
            Arc::clone(&tree),
            fetcher,
            self.progress_reporter,
        );

        let walked = walk_production_tree(&analyzer, request.max_depth);
        let batch: Vec<NodeId> = walked.iter().map(|(id, _)| id.clone()).collect();

        // Per-row refresh is a UI concern; the CLI renders once at the
        // end, so the per-node callback has nothing to do here.
        analyzer.analyze(&batch, |_| {}).await;

        analyzer
            .progress()
            .report_completion(&format!("✅ Analyzed {} node(s)", batch.len()));

        let rows = walked
            .into_iter()
            .map(|(id, depth)| {
                let node = tree.get(&id);
                ReportRow {
                    name: node
                        .map(|n| n.name.clone())
                        .unwrap_or_else(|| id.to_string()),
                    version: node.and_then(|n| n.version().map(String::from)),
                    depth,
                    analysis: analyzer.get(&id).cloned(),
                    id,
                }
            })
            .collect();

        Ok(AnalyzeResponse::new(rows))
    }
}

/// Walks the tree from the root along production edges, depth-first in
/// edge order, visiting each node identity once. Returns `(id, depth)`
/// pairs in report order; the root is depth 0.
fn walk_production_tree<C, S, P>(
    analyzer: &TreeAnalyzer<C, S, P>,
    max_depth: Option<usize>,
) -> Vec<(NodeId, usize)>
where
    C: RepositoryClient,
    S: CacheStore,
    P: ProgressReporter,
{
    let mut rows = Vec::new();
    let mut visited = HashSet::new();
    let mut stack = vec![(analyzer.tree().root().clone(), 0usize)];

    while let Some((id, depth)) = stack.pop() {
        if !visited.insert(id.clone()) {
            continue;
        }
        rows.push((id.clone(), depth));

        if max_depth.is_some_and(|max| depth >= max) {
            continue;
        }
        // Reverse so the stack pops children in edge order
        for child in analyzer.children(&id).into_iter().rev() {
            if !visited.contains(&child) {
                stack.push((child, depth + 1));
            }
        }
    }

    rows
}
