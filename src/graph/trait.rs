use crate::graph::*;

/// Read-only view of a graph, queried as undirected.
pub trait QueryableGraph {
    fn vertex_size(&self) -> usize;
    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_>;
    fn contains_vertex(&self, v: &VertexId) -> bool;

    fn edge_size(&self) -> usize;
    fn iter_edges(&self) -> Box<dyn Iterator<Item = &Edge> + '_>;
    fn contains_edge(&self, e: &EdgeId) -> bool;
    fn find_edge(&self, e: &EdgeId) -> Option<&Edge>;

    /// Each incident edge of `v` paired with its other endpoint, in insertion order.
    ///
    /// A self-loop is yielded twice, once per incidence.
    fn connected_vertices(&self, v: &VertexId)
        -> Box<dyn Iterator<Item = (EdgeId, VertexId)> + '_>;
}
