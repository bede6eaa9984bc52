//! Randomized growth of layered graphs.
//!
//! Generation runs in two phases.
//! First a tree of gray edges grows layer by layer from the root,
//! becoming less likely to branch the deeper it gets.
//! Then every vertex may receive auxiliary edges:
//!
//! | color  | probability             | other end                                   |
//! |--------|-------------------------|---------------------------------------------|
//! | green  | 0.1                     | itself                                      |
//! | blue   | 0.25                    | the next vertex in its layer                |
//! | yellow | `depth / max_depth`     | a random unconnected vertex one layer down  |
//! | red    | 0.33                    | a random vertex two layers down             |
//!
//! Auxiliary edges only join vertices whose depths are already fixed,
//! so they never change a depth.

use crate::graph::*;
use rand::{seq::SliceRandom, Rng};
use serde::{Deserialize, Serialize};

pub const GREEN_PROBABILITY: f64 = 0.1;
pub const BLUE_PROBABILITY: f64 = 0.25;
pub const RED_PROBABILITY: f64 = 0.33;

/// Shape of the graphs to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationParams {
    /// Depth the tree may grow to. Zero means a lonely root.
    pub max_depth: Depth,
    /// Attempts to attach a new child, per vertex.
    pub new_vertices_per_step: usize,
    #[serde(default)]
    pub duplicate_edges: DuplicateEdges,
}

impl GenerationParams {
    pub fn new(max_depth: Depth, new_vertices_per_step: usize) -> Self {
        Self {
            max_depth,
            new_vertices_per_step,
            duplicate_edges: DuplicateEdges::default(),
        }
    }

    pub fn duplicate_edges(mut self, policy: DuplicateEdges) -> Self {
        self.duplicate_edges = policy;
        self
    }
}

pub struct GraphGenerator {
    params: GenerationParams,
}

impl GraphGenerator {
    pub fn new(params: GenerationParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &GenerationParams {
        &self.params
    }

    /// Grows a fresh graph, drawing all randomness from `rng`.
    ///
    /// The same seed gives the same graph.
    pub fn generate<R>(&self, rng: &mut R) -> Graph
    where
        R: Rng + ?Sized,
    {
        let mut graph = Graph::with_duplicate_edges(self.params.duplicate_edges);
        let _root = graph.add_vertex();
        if self.params.max_depth == 0 {
            return graph;
        }
        self.grow_tree(&mut graph, rng);
        tracing::debug!(
            vertices = graph.vertex_size(),
            depth = graph.max_depth(),
            "tree grown"
        );
        self.add_auxiliary_edges(&mut graph, rng);
        tracing::debug!(edges = graph.edge_size(), "auxiliary edges added");
        graph
    }

    fn grow_tree<R>(&self, graph: &mut Graph, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        let max_depth = self.params.max_depth;
        for depth in 0..max_depth {
            // the deeper, the less likely to branch
            let progress = depth as f64 / max_depth as f64;
            let layer = graph.vertex_ids_at_depth(depth).to_vec();
            if layer.is_empty() {
                break;
            }
            for parent in layer {
                for _ in 0..self.params.new_vertices_per_step {
                    if rng.gen::<f64>() > progress {
                        let child = graph.add_vertex();
                        let _ = graph.connect_vertices(parent, child);
                    }
                }
            }
        }
    }

    fn add_auxiliary_edges<R>(&self, graph: &mut Graph, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        let max_depth = graph.max_depth();
        for depth in 0..=max_depth {
            let layer = graph.vertex_ids_at_depth(depth).to_vec();
            for (i, &v) in layer.iter().enumerate() {
                if rng.gen_bool(GREEN_PROBABILITY) && may_connect(graph, v, v) {
                    let _ = graph.connect_vertices(v, v);
                }
                if rng.gen_bool(BLUE_PROBABILITY) {
                    if let Some(&sibling) = layer.get(i + 1) {
                        if may_connect(graph, v, sibling) {
                            let _ = graph.connect_vertices(v, sibling);
                        }
                    }
                }
                if rng.gen_bool(self.yellow_probability(depth)) {
                    let candidates: Vec<_> = graph
                        .vertex_ids_at_depth(depth + 1)
                        .iter()
                        .copied()
                        .filter(|w| !graph.are_connected(v, *w))
                        .collect();
                    if let Some(&w) = candidates.choose(rng) {
                        let _ = graph.connect_vertices(v, w);
                    }
                }
                if rng.gen_bool(RED_PROBABILITY) {
                    let candidates: Vec<_> = graph
                        .vertex_ids_at_depth(depth + 2)
                        .iter()
                        .copied()
                        .filter(|w| may_connect(graph, v, *w))
                        .collect();
                    if let Some(&w) = candidates.choose(rng) {
                        let _ = graph.connect_vertices(v, w);
                    }
                }
            }
        }
    }

    fn yellow_probability(&self, depth: Depth) -> f64 {
        (depth as f64 / self.params.max_depth as f64).min(1.0)
    }
}

fn may_connect(graph: &Graph, v1: VertexId, v2: VertexId) -> bool {
    match graph.duplicate_edges() {
        DuplicateEdges::Allow => true,
        DuplicateEdges::Forbid => !graph.are_connected(v1, v2),
    }
}
