use super::{Depth, VertexId};
use serde::Serialize;

/// ID for edges, which are essentially `usize`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct EdgeId(pub usize);

/// A factory to generate `EdgeId` uniquely.
#[derive(Clone)]
pub struct EdgeIdFactory(usize);

/// Colors classifying edges by how they relate the depths of their endpoints.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeColor {
    /// Tree edges defining the depth of their sinks, and anything else unclassified.
    Gray,
    /// Self-loops.
    Green,
    /// Both endpoints in the same layer.
    Blue,
    /// The sink is one layer deeper than the source.
    Yellow,
    /// The sink is two layers deeper than the source.
    Red,
}

/// Information about an edge.
///
/// Edges are directed for coloring but the graph is queried as undirected.
#[derive(Debug, Clone, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct Edge {
    pub id: EdgeId,
    pub source: VertexId,
    pub sink: VertexId,
    pub color: EdgeColor,
}

impl Default for EdgeIdFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl EdgeIdFactory {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn one_more(&mut self) -> EdgeId {
        let cur = self.0;
        self.0 += 1;
        EdgeId(cur)
    }
}

impl EdgeId {
    pub fn new(x: usize) -> Self {
        Self(x)
    }

    pub fn to_raw(&self) -> usize {
        self.0
    }
}

impl EdgeColor {
    pub const ALL: [EdgeColor; 5] = [
        EdgeColor::Gray,
        EdgeColor::Green,
        EdgeColor::Blue,
        EdgeColor::Yellow,
        EdgeColor::Red,
    ];

    /// Colors an edge from the depths of its endpoints.
    ///
    /// `sink_depth` is the depth of the sink once the edge is in place,
    /// so for a defining edge it is `source_depth + 1`.
    pub fn classify(
        source_depth: Depth,
        sink_depth: Depth,
        is_self_loop: bool,
        defines_sink_depth: bool,
    ) -> EdgeColor {
        if is_self_loop {
            return EdgeColor::Green;
        }
        if defines_sink_depth {
            return EdgeColor::Gray;
        }
        match sink_depth.checked_sub(source_depth) {
            Some(0) => EdgeColor::Blue,
            Some(1) => EdgeColor::Yellow,
            Some(2) => EdgeColor::Red,
            _ => EdgeColor::Gray,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            EdgeColor::Gray => "gray",
            EdgeColor::Green => "green",
            EdgeColor::Blue => "blue",
            EdgeColor::Yellow => "yellow",
            EdgeColor::Red => "red",
        }
    }
}

impl std::fmt::Display for EdgeColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Edge {
    /// The endpoint opposite to `v`.
    /// For a self-loop, this is `v` itself.
    pub fn other_end(&self, v: VertexId) -> VertexId {
        if self.source == v {
            self.sink
        } else {
            self.source
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.sink
    }
}
