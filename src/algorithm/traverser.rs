use super::ShortestPath;
use crate::{
    error::TraversalError,
    graph::*,
    pool::{JobResult, WorkerPool},
};

/// Shortest paths from the root to every vertex of the deepest layer, searched in parallel.
///
/// The traverser only borrows the graph, so the graph is frozen for as long as the traverser lives.
pub struct GraphTraverser<'a> {
    graph: &'a Graph,
    workers: usize,
}

/// Paths found by a traversal, plus the jobs that found none.
///
/// Neither list is in any particular order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraversalReport {
    pub paths: Vec<GraphPath>,
    pub failures: Vec<TraversalError>,
}

impl TraversalReport {
    /// Paths ordered by target.
    pub fn sorted_paths(&self) -> Vec<&GraphPath> {
        let mut res: Vec<_> = self.paths.iter().collect();
        res.sort_by_key(|p| (p.target(), p.source()));
        res
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

impl<'a> GraphTraverser<'a> {
    /// A traverser using as many workers as the hardware offers.
    pub fn new(graph: &'a Graph) -> Self {
        Self {
            graph,
            workers: WorkerPool::hardware_workers(),
        }
    }

    /// Caps the number of worker threads; zero is taken as one.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// See [ShortestPath::shortest_path].
    pub fn find_shortest_path(&self, source: VertexId, target: VertexId) -> Option<GraphPath> {
        self.graph.shortest_path(source, target)
    }

    /// Finds a shortest path from the root to each vertex in the deepest layer.
    ///
    /// An empty graph yields an empty report.
    pub fn find_all_paths(&self) -> TraversalReport {
        let targets = self.graph.vertex_ids_at_depth(self.graph.max_depth());
        self.find_paths_from(VertexId::ROOT, targets)
    }

    /// Finds a shortest path from `source` to each of `targets`, one job per target.
    pub fn find_paths_from(&self, source: VertexId, targets: &[VertexId]) -> TraversalReport {
        let pool = WorkerPool::new(self.workers);
        let outcomes = pool.run(targets.to_vec(), |target| {
            self.graph.shortest_path(source, *target)
        });
        let mut report = TraversalReport::default();
        for (target, outcome) in outcomes {
            match collect(source, target, outcome) {
                Ok(path) => report.paths.push(path),
                Err(err) => {
                    tracing::warn!(%err, "traversal job failed");
                    report.failures.push(err)
                }
            }
        }
        report
    }
}

fn collect(
    source: VertexId,
    target: VertexId,
    outcome: JobResult<Option<GraphPath>>,
) -> Result<GraphPath, TraversalError> {
    match outcome {
        Ok(Some(path)) => Ok(path),
        Ok(None) => Err(TraversalError::Unreachable {
            from: source,
            to: target,
        }),
        Err(message) => Err(TraversalError::JobPanicked {
            to: target,
            message,
        }),
    }
}
