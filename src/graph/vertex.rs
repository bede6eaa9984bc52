use super::EdgeId;
use serde::Serialize;

/// Depth of a vertex, i.e., its distance from the root along the tree built during generation.
pub type Depth = usize;

#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct VertexId(pub usize);

#[derive(Clone)]
pub struct VertexIdFactory(usize);

impl Default for VertexIdFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl VertexIdFactory {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn one_more(&mut self) -> VertexId {
        let cur = self.0;
        self.0 += 1;
        VertexId(cur)
    }
}

impl VertexId {
    /// The first vertex of every graph.
    pub const ROOT: VertexId = VertexId(0);

    pub fn new(x: usize) -> Self {
        Self(x)
    }

    pub fn to_raw(&self) -> usize {
        self.0
    }
}

/// A vertex in a layered graph.
///
/// Its depth is fixed by the first edge reaching it (its *defining* edge)
/// and is never revised afterwards, even if a later edge offers a shorter way from the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    id: VertexId,
    depth: Option<Depth>,
    defining_edge: Option<EdgeId>,
    edge_ids: Vec<EdgeId>,
}

impl Vertex {
    pub(crate) fn new(id: VertexId, depth: Option<Depth>) -> Self {
        Self {
            id,
            depth,
            defining_edge: None,
            edge_ids: vec![],
        }
    }

    pub fn id(&self) -> VertexId {
        self.id
    }

    /// `None` until the vertex gets connected.
    /// The root is born with depth 0.
    pub fn depth(&self) -> Option<Depth> {
        self.depth
    }

    /// The gray edge which assigned this vertex's depth.
    pub fn defining_edge(&self) -> Option<EdgeId> {
        self.defining_edge
    }

    /// Incident edges in insertion order.
    /// A self-loop shows up twice.
    pub fn edge_ids(&self) -> &[EdgeId] {
        &self.edge_ids
    }

    pub(crate) fn settle(&mut self, depth: Depth, edge: EdgeId) {
        debug_assert!(self.depth.is_none());
        self.depth = Some(depth);
        self.defining_edge = Some(edge);
    }

    pub(crate) fn attach(&mut self, edge: EdgeId) {
        self.edge_ids.push(edge);
    }
}
