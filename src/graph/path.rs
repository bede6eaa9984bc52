use super::{EdgeId, VertexId};

/// Hop distance along a path.
pub type Distance = usize;

/// A walk from a source to a target: the vertices visited and the edges taken between them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GraphPath {
    vertex_ids: Vec<VertexId>,
    edge_ids: Vec<EdgeId>,
}

impl GraphPath {
    pub fn new(vertex_ids: Vec<VertexId>, edge_ids: Vec<EdgeId>) -> Self {
        assert!(!vertex_ids.is_empty(), "a path visits at least one vertex");
        assert_eq!(
            vertex_ids.len(),
            edge_ids.len() + 1,
            "a path takes one edge per hop"
        );
        Self {
            vertex_ids,
            edge_ids,
        }
    }

    /// Number of hops, regardless of edge colors.
    pub fn distance(&self) -> Distance {
        self.vertex_ids.len() - 1
    }

    pub fn vertex_ids(&self) -> &[VertexId] {
        &self.vertex_ids
    }

    pub fn edge_ids(&self) -> &[EdgeId] {
        &self.edge_ids
    }

    pub fn source(&self) -> VertexId {
        self.vertex_ids[0]
    }

    pub fn target(&self) -> VertexId {
        self.vertex_ids[self.vertex_ids.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trivial_path() {
        let p = GraphPath::new(vec![VertexId(0)], vec![]);
        assert_eq!(p.distance(), 0);
        assert_eq!(p.source(), p.target());
    }

    #[test]
    fn distance_counts_hops() {
        let p = GraphPath::new(
            vec![VertexId(0), VertexId(2), VertexId(5)],
            vec![EdgeId(1), EdgeId(4)],
        );
        assert_eq!(p.distance(), 2);
        assert_eq!(p.source(), VertexId(0));
        assert_eq!(p.target(), VertexId(5));
    }

    #[test]
    #[should_panic]
    fn edges_must_match_hops() {
        let _ = GraphPath::new(vec![VertexId(0), VertexId(1)], vec![]);
    }
}
