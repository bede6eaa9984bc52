//! Graph algorithms
mod shortest_path;
pub use self::shortest_path::*;
mod traverser;
pub use self::traverser::*;
pub mod graphviz;
