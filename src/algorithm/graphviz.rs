//! Visualize layered graphs in the graphviz format.
use crate::graph::*;

/**
 * Dumps a graph into graphviz format, undirected, with edges in their colors
 * and vertices ranked by depth.
 *
 * # Examples
 *
 * ```rust
 * use layergraph::{algorithm::graphviz::*, graph::*};
 *
 * let mut g = Graph::new();
 * let root = g.add_vertex();
 * let child = g.add_vertex();
 * let _ = g.connect_vertices(root, child);
 * let _ = g.connect_vertices(child, child);
 * let trial = {
 *     let mut buf = vec![];
 *     g.dump_in_graphviz(&mut buf, "trial").unwrap();
 *     String::from_utf8(buf).unwrap()
 * };
 * assert_eq!(
 *     trial,
 *     r#"graph trial {
 *   { rank=same; 0 ; }
 *   { rank=same; 1 ; }
 *   0 -- 1 [color=gray] ;
 *   1 -- 1 [color=green] ;
 * }
 * "#
 * );
 * ```
 */
pub trait DumpInGraphviz {
    /**
     * Dumps a graph to a `std::io::Write` object in the graphviz format.
     */
    fn dump_in_graphviz<W>(&self, out: &mut W, graph_name: &str) -> std::io::Result<()>
    where
        W: std::io::Write;
}

impl DumpInGraphviz for Graph {
    fn dump_in_graphviz<W>(&self, out: &mut W, graph_name: &str) -> std::io::Result<()>
    where
        W: std::io::Write,
    {
        writeln!(out, "graph {} {{", graph_name)?;
        for depth in 0..=self.max_depth() {
            let layer = self.vertex_ids_at_depth(depth);
            if layer.is_empty() {
                continue;
            }
            write!(out, "  {{ rank=same;")?;
            for v in layer {
                write!(out, " {} ;", v.to_raw())?;
            }
            writeln!(out, " }}")?;
        }
        for v in self.vertices().iter().filter(|v| v.depth().is_none()) {
            writeln!(out, "  {} [style=dashed] ;", v.id().to_raw())?;
        }
        for e in self.edges() {
            writeln!(
                out,
                "  {} -- {} [color={}] ;",
                e.source.to_raw(),
                e.sink.to_raw(),
                e.color
            )?;
        }
        writeln!(out, "}}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsettled_vertices_are_dashed() {
        let mut g = Graph::new();
        g.add_vertex();
        g.add_vertex();
        let mut buf = vec![];
        g.dump_in_graphviz(&mut buf, "g").unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "graph g {\n  { rank=same; 0 ; }\n  1 [style=dashed] ;\n}\n"
        );
    }

    #[test]
    fn empty_graph() {
        let g = Graph::new();
        let mut buf = vec![];
        g.dump_in_graphviz(&mut buf, "g").unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "graph g {\n}\n");
    }
}
