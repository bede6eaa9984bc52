//! The depth-layered graph model.
//!
//! Vertices and edges are lightweight ID's, essentially `usize`,
//! handed out sequentially and never reused.
//! Feel free to copy and store them.
//!
//! A [Graph] grows from its root, vertex 0.
//! Every other vertex gets its depth from the first edge reaching it,
//! and every edge gets a color from the depths of its endpoints at the moment it is added.
//! See [EdgeColor::classify] for the rule.

mod vertex;
pub use self::vertex::*;
mod edge;
pub use self::edge::*;
mod path;
pub use self::path::*;
mod r#trait;
pub use self::r#trait::*;
mod layered;
pub use self::layered::*;

#[cfg(test)]
pub use self::tests::*;
