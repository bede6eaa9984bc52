use crate::graph::*;
use ahash::RandomState;
use std::collections::{HashMap, VecDeque};

/// Unweighted shortest paths by breadth-first search, treating the graph as undirected.
///
/// Neighbors are expanded in incidence order,
/// so the path found is deterministic for a given graph.
pub trait ShortestPath
where
    Self: QueryableGraph + Sized,
{
    /// Finds a path with the fewest hops from `source` to `target`.
    ///
    /// Returns `None` if `target` is unreachable.
    ///
    /// # Panics
    ///
    /// If either vertex is not in the graph.
    fn shortest_path(&self, source: VertexId, target: VertexId) -> Option<GraphPath> {
        assert!(
            self.contains_vertex(&source),
            "graph doesn't have source vertex {:?}",
            source
        );
        assert!(
            self.contains_vertex(&target),
            "graph doesn't have target vertex {:?}",
            target
        );
        let mut search = Bfs::new(self, source);
        search.run_until(target);
        search.path_to(target)
    }
}

impl<G: QueryableGraph> ShortestPath for G {}

struct Bfs<'a, G>
where
    G: QueryableGraph,
{
    graph: &'a G,
    source: VertexId,
    frontier: VecDeque<VertexId>,
    distances: HashMap<VertexId, Distance, RandomState>,
    predecessors: HashMap<VertexId, (VertexId, EdgeId), RandomState>,
}

impl<'a, G> Bfs<'a, G>
where
    G: QueryableGraph,
{
    fn new(graph: &'a G, source: VertexId) -> Self {
        let mut res = Self {
            graph,
            source,
            frontier: VecDeque::new(),
            distances: HashMap::with_hasher(RandomState::new()),
            predecessors: HashMap::with_hasher(RandomState::new()),
        };
        res.distances.insert(source, 0);
        res.frontier.push_back(source);
        res
    }

    /// Expands the frontier until `target` is dequeued or nothing is left.
    fn run_until(&mut self, target: VertexId) {
        let graph = self.graph;
        while let Some(active) = self.frontier.pop_front() {
            if active == target {
                return;
            }
            let distance = self.distances[&active] + 1;
            for (eid, neighbor) in graph.connected_vertices(&active) {
                if self.distances.contains_key(&neighbor) {
                    continue;
                }
                // unit weights: the first reach is the shortest
                self.distances.insert(neighbor, distance);
                self.predecessors.insert(neighbor, (active, eid));
                self.frontier.push_back(neighbor);
            }
        }
    }

    fn path_to(&self, target: VertexId) -> Option<GraphPath> {
        let distance = *self.distances.get(&target)?;
        let mut vertex_ids = Vec::with_capacity(distance + 1);
        let mut edge_ids = Vec::with_capacity(distance);
        let mut current = target;
        vertex_ids.push(current);
        while current != self.source {
            let (prev, eid) = self.predecessors[&current];
            edge_ids.push(eid);
            vertex_ids.push(prev);
            current = prev;
        }
        vertex_ids.reverse();
        edge_ids.reverse();
        Some(GraphPath::new(vertex_ids, edge_ids))
    }
}
