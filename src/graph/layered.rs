use crate::graph::*;
use ahash::RandomState;
use std::collections::HashMap;

/// Whether a pair of vertices may be connected more than once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateEdges {
    /// Multigraph: parallel edges are fine.
    #[default]
    Allow,
    /// Connecting an already connected pair is a caller bug.
    Forbid,
}

/// A depth-layered multigraph grown from a root.
///
/// Vertices and edges are never removed, so their IDs double as indices.
/// Besides adjacency, the graph indexes vertices by depth and edges by color.
///
/// Operations taking IDs expect valid ones and panic otherwise.
#[derive(Clone)]
pub struct Graph {
    vid_factory: VertexIdFactory,
    eid_factory: EdgeIdFactory,
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    layers: Vec<Vec<VertexId>>,
    colors: HashMap<EdgeColor, Vec<EdgeId>, RandomState>,
    max_depth: Depth,
    duplicate_edges: DuplicateEdges,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Graph {{")?;
        for (depth, layer) in self.layers.iter().enumerate() {
            writeln!(f, "  depth {}:", depth)?;
            for v in layer.iter() {
                writeln!(f, "    {:?}:", v)?;
                for (eid, other) in self.connected_vertices(v) {
                    writeln!(f, "      -- {:?} by {:?} ({})", other, eid, self.edge(eid).color)?;
                }
            }
        }
        let unsettled: Vec<_> = self
            .vertices
            .iter()
            .filter(|v| v.depth().is_none())
            .map(|v| v.id())
            .collect();
        if !unsettled.is_empty() {
            writeln!(f, "  unsettled: {:?}", unsettled)?;
        }
        writeln!(f, "}}")?;
        Ok(())
    }
}

impl Graph {
    pub fn new() -> Self {
        Self::with_duplicate_edges(DuplicateEdges::default())
    }

    pub fn with_duplicate_edges(duplicate_edges: DuplicateEdges) -> Self {
        Self {
            vid_factory: VertexIdFactory::new(),
            eid_factory: EdgeIdFactory::new(),
            vertices: vec![],
            edges: vec![],
            layers: vec![],
            colors: HashMap::with_hasher(RandomState::new()),
            max_depth: 0,
            duplicate_edges,
        }
    }

    pub fn duplicate_edges(&self) -> DuplicateEdges {
        self.duplicate_edges
    }

    /// Appends a vertex with the next ID.
    ///
    /// The very first vertex is the root and sits at depth 0.
    /// Any other vertex has no depth until it gets connected.
    pub fn add_vertex(&mut self) -> VertexId {
        let vid = self.vid_factory.one_more();
        if vid == VertexId::ROOT {
            self.vertices.push(Vertex::new(vid, Some(0)));
            self.place_in_layer(vid, 0);
        } else {
            self.vertices.push(Vertex::new(vid, None));
        }
        vid
    }

    pub fn has_vertex(&self, v: VertexId) -> bool {
        v.to_raw() < self.vertices.len()
    }

    pub fn has_edge(&self, e: EdgeId) -> bool {
        e.to_raw() < self.edges.len()
    }

    /// # Panics
    ///
    /// If `v` is not in the graph.
    pub fn vertex(&self, v: VertexId) -> &Vertex {
        assert!(self.has_vertex(v), "unknown vertex {:?}", v);
        &self.vertices[v.to_raw()]
    }

    /// # Panics
    ///
    /// If `e` is not in the graph.
    pub fn edge(&self, e: EdgeId) -> &Edge {
        assert!(self.has_edge(e), "unknown edge {:?}", e);
        &self.edges[e.to_raw()]
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Depth of the deepest layer.
    pub fn max_depth(&self) -> Depth {
        self.max_depth
    }

    /// Vertices at `depth`, in the order they got their depths.
    pub fn vertex_ids_at_depth(&self, depth: Depth) -> &[VertexId] {
        self.layers.get(depth).map(|l| l.as_slice()).unwrap_or(&[])
    }

    /// Edges of `color` in creation order.
    pub fn edges_by_color(&self, color: EdgeColor) -> &[EdgeId] {
        self.colors.get(&color).map(|l| l.as_slice()).unwrap_or(&[])
    }

    /// Number of edges per color, in the order of [EdgeColor::ALL].
    pub fn color_counts(&self) -> [(EdgeColor, usize); 5] {
        EdgeColor::ALL.map(|c| (c, self.edges_by_color(c).len()))
    }

    /// The first edge, in `v1`'s incidence order, between `v1` and `v2`.
    pub fn edge_between(&self, v1: VertexId, v2: VertexId) -> Option<EdgeId> {
        assert!(self.has_vertex(v2), "unknown vertex {:?}", v2);
        self.vertex(v1)
            .edge_ids()
            .iter()
            .copied()
            .find(|e| self.edges[e.to_raw()].other_end(v1) == v2)
    }

    pub fn are_connected(&self, v1: VertexId, v2: VertexId) -> bool {
        self.edge_between(v1, v2).is_some()
    }

    /// Adds an edge from `source` to `sink` and colors it.
    ///
    /// If `sink` has no depth yet, the new edge defines it as one deeper than `source`.
    ///
    /// # Panics
    ///
    /// *   If either endpoint is unknown.
    /// *   If `source` has no depth yet.
    /// *   If the pair is already connected while duplicate edges are forbidden.
    pub fn connect_vertices(&mut self, source: VertexId, sink: VertexId) -> EdgeId {
        assert!(self.has_vertex(sink), "unknown vertex {:?}", sink);
        let source_depth = match self.vertex(source).depth() {
            Some(d) => d,
            None => panic!("vertex {:?} is not connected to the graph yet", source),
        };
        if self.duplicate_edges == DuplicateEdges::Forbid {
            assert!(
                !self.are_connected(source, sink),
                "{:?} and {:?} are already connected",
                source,
                sink
            );
        }

        let eid = self.eid_factory.one_more();
        let defines_sink_depth = self.vertices[sink.to_raw()].depth().is_none();
        if defines_sink_depth {
            let depth = source_depth + 1;
            self.vertices[sink.to_raw()].settle(depth, eid);
            self.place_in_layer(sink, depth);
        }
        let sink_depth = self.vertices[sink.to_raw()]
            .depth()
            .unwrap_or(source_depth + 1);
        let color =
            EdgeColor::classify(source_depth, sink_depth, source == sink, defines_sink_depth);

        self.edges.push(Edge {
            id: eid,
            source,
            sink,
            color,
        });
        self.vertices[source.to_raw()].attach(eid);
        self.vertices[sink.to_raw()].attach(eid);
        self.colors.entry(color).or_default().push(eid);
        eid
    }

    /// Re-derives the color of an edge of this graph from the current depths of its endpoints.
    pub fn expected_color(&self, edge: &Edge) -> EdgeColor {
        let source = self.vertex(edge.source);
        let sink = self.vertex(edge.sink);
        match (source.depth(), sink.depth()) {
            (Some(sd), Some(kd)) => EdgeColor::classify(
                sd,
                kd,
                edge.is_self_loop(),
                sink.defining_edge() == Some(edge.id),
            ),
            _ => unreachable!("both endpoints of {:?} have depths", edge.id),
        }
    }

    fn place_in_layer(&mut self, v: VertexId, depth: Depth) {
        if self.layers.len() <= depth {
            self.layers.resize_with(depth + 1, Vec::new);
        }
        self.layers[depth].push(v);
        self.max_depth = self.max_depth.max(depth);
    }
}

impl QueryableGraph for Graph {
    fn vertex_size(&self) -> usize {
        self.vertices.len()
    }

    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new(self.vertices.iter().map(|v| v.id()))
    }

    fn contains_vertex(&self, v: &VertexId) -> bool {
        self.has_vertex(*v)
    }

    fn edge_size(&self) -> usize {
        self.edges.len()
    }

    fn iter_edges(&self) -> Box<dyn Iterator<Item = &Edge> + '_> {
        Box::new(self.edges.iter())
    }

    fn contains_edge(&self, e: &EdgeId) -> bool {
        self.has_edge(*e)
    }

    fn find_edge(&self, e: &EdgeId) -> Option<&Edge> {
        self.edges.get(e.to_raw())
    }

    fn connected_vertices(&self, v: &VertexId) -> Box<dyn Iterator<Item = (EdgeId, VertexId)> + '_> {
        let v = *v;
        let it = self
            .vertex(v)
            .edge_ids()
            .iter()
            .map(move |e| (*e, self.edges[e.to_raw()].other_end(v)));
        Box::new(it)
    }
}
