//! Randomized depth-layered graphs and parallel shortest-path traversal over them.
//!
//! A [GraphGenerator](generator::GraphGenerator) grows a [Graph](graph::Graph) from its root,
//! coloring each edge by how it relates the depths of its endpoints.
//! Once generation is over, a [GraphTraverser](algorithm::GraphTraverser) borrows the frozen graph
//! and searches, on a pool of worker threads, a shortest path from the root
//! to every vertex in the deepest layer.
//!
//! ```rust
//! use layergraph::{algorithm::GraphTraverser, generator::*};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(1);
//! let graph = GraphGenerator::new(GenerationParams::new(4, 3)).generate(&mut rng);
//! let report = GraphTraverser::new(&graph).with_workers(2).find_all_paths();
//! assert!(report.is_complete());
//! for path in report.paths.iter() {
//!     // red edges skip a layer, so paths may be shorter than the depth
//!     assert!(path.distance() <= graph.max_depth());
//! }
//! ```

pub mod algorithm;
pub mod config;
pub mod controller;
pub mod error;
pub mod export;
pub mod generator;
pub mod graph;
pub mod observer;
mod pool;

pub use crate::error::{Error, Result};
