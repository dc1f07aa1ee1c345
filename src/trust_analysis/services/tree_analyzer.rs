use crate::ports::outbound::{CacheStore, ProgressReporter, RepositoryClient};
use crate::trust_analysis::domain::{Analysis, DependencyTree, EdgeKind, NodeId};
use crate::trust_analysis::services::classifier::classify;
use crate::trust_analysis::services::repo_fetcher::RepoDataFetcher;
use std::collections::HashMap;
use std::sync::Arc;

/// TreeAnalyzer performs incremental, memoized trust analysis of a
/// dependency tree.
///
/// Analysis is driven on demand: callers pass batches of node
/// identities to [`analyze`](TreeAnalyzer::analyze) and read results
/// back through [`get`](TreeAnalyzer::get). Each node is analyzed at
/// most once per analyzer instance; the memo is keyed by node
/// identity, never by package name, so diamond dependencies are
/// analyzed per position.
///
/// Nodes are processed strictly one at a time, in input order.
// TODO: run analysis in parallel with a configurable concurrency level;
// this changes the per-node callback ordering guarantee and needs the
// cache store to tolerate concurrent writers.
pub struct TreeAnalyzer<C, S, P> {
    tree: Arc<DependencyTree>,
    fetcher: RepoDataFetcher<C, S>,
    progress: P,
    analysis: HashMap<NodeId, Analysis>,
}

impl<C, S, P> TreeAnalyzer<C, S, P>
where
    C: RepositoryClient,
    S: CacheStore,
    P: ProgressReporter,
{
    pub fn new(tree: Arc<DependencyTree>, fetcher: RepoDataFetcher<C, S>, progress: P) -> Self {
        Self {
            tree,
            fetcher,
            progress,
            analysis: HashMap::new(),
        }
    }

    pub fn tree(&self) -> &DependencyTree {
        &self.tree
    }

    pub fn progress(&self) -> &P {
        &self.progress
    }

    /// Returns the memoized analysis for the given node, or `None` if
    /// the node has not been analyzed yet. Callers distinguish
    /// "pending" (`None`) from "analyzed with nothing to show"
    /// (`Some(Analysis::Unavailable)`).
    pub fn get(&self, node: &NodeId) -> Option<&Analysis> {
        self.analysis.get(node)
    }

    /// Returns the node's production dependencies, in edge declaration
    /// order. Dev, peer, and optional edges are excluded, as are edges
    /// whose target is not present in the tree.
    pub fn children(&self, node: &NodeId) -> Vec<NodeId> {
        let Some(node) = self.tree.get(node) else {
            return Vec::new();
        };
        node.edges_out
            .iter()
            .filter(|edge| edge.kind == EdgeKind::Prod)
            .filter_map(|edge| edge.to.clone())
            .collect()
    }

    /// Analyzes the given nodes in order, storing results in the memo.
    ///
    /// Progress is reported as `(0, N)` before the first node and
    /// `(k, N)` after each node. `on_analyzed` fires once for each node
    /// that was newly analyzed, immediately after its result is stored,
    /// so the result is visible through [`get`](TreeAnalyzer::get)
    /// before the next node starts. Already-memoized nodes are skipped
    /// but still counted in progress.
    ///
    /// A failed metadata lookup degrades that node to
    /// [`Analysis::Unavailable`] and never aborts the batch.
    pub async fn analyze<F>(&mut self, nodes: &[NodeId], mut on_analyzed: F)
    where
        F: FnMut(&NodeId),
    {
        let total = nodes.len();
        let mut processed = 0;

        self.progress.report_progress(0, total);
        for id in nodes {
            if !self.analysis.contains_key(id) {
                let analysis = self.analyze_node(id).await;
                self.analysis.insert(id.clone(), analysis);
                on_analyzed(id);
            }
            processed += 1;
            self.progress.report_progress(processed, total);
        }
    }

    /// Runs the fetch + classify pipeline for one node. All failure
    /// modes collapse to `Unavailable`: unknown node, no usable
    /// repository URL, or a failed remote lookup.
    async fn analyze_node(&self, id: &NodeId) -> Analysis {
        let Some(node) = self.tree.get(id) else {
            return Analysis::Unavailable;
        };

        match self.fetcher.fetch(node).await {
            Ok(Some(data)) => {
                let trust = classify(&data, node.version());
                Analysis::Classified { trust, data }
            }
            Ok(None) => Analysis::Unavailable,
            // One node's lookup failure must not abort the batch; the
            // node stays unavailable rather than surfacing an error.
            Err(_) => Analysis::Unavailable,
        }
    }
}
