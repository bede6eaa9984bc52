//! JSON renderings of graphs and paths.

use crate::{error::Result, graph::*};
use serde::Serialize;
use std::{fs::File, io::BufWriter, path::Path};

#[derive(Serialize)]
struct VertexRecord<'a> {
    id: VertexId,
    edge_ids: &'a [EdgeId],
    depth: Option<Depth>,
}

#[derive(Serialize)]
struct EdgeRecord {
    id: EdgeId,
    vertex_ids: [VertexId; 2],
    color: EdgeColor,
}

#[derive(Serialize)]
struct GraphRecord<'a> {
    depth: Depth,
    vertices: Vec<VertexRecord<'a>>,
    edges: Vec<EdgeRecord>,
}

#[derive(Serialize)]
struct PathRecord<'a> {
    vertex_ids: &'a [VertexId],
    edge_ids: &'a [EdgeId],
    distance: Distance,
}

fn graph_record(graph: &Graph) -> GraphRecord<'_> {
    GraphRecord {
        depth: graph.max_depth(),
        vertices: graph
            .vertices()
            .iter()
            .map(|v| VertexRecord {
                id: v.id(),
                edge_ids: v.edge_ids(),
                depth: v.depth(),
            })
            .collect(),
        edges: graph
            .edges()
            .iter()
            .map(|e| EdgeRecord {
                id: e.id,
                vertex_ids: [e.source, e.sink],
                color: e.color,
            })
            .collect(),
    }
}

fn path_record(path: &GraphPath) -> PathRecord<'_> {
    PathRecord {
        vertex_ids: path.vertex_ids(),
        edge_ids: path.edge_ids(),
        distance: path.distance(),
    }
}

/// Renders a graph as pretty-printed JSON.
pub fn graph_to_json(graph: &Graph) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&graph_record(graph))
}

pub fn path_to_json(path: &GraphPath) -> serde_json::Result<String> {
    serde_json::to_string(&path_record(path))
}

/// Writes a graph as JSON to `out`.
pub fn write_graph<W>(out: W, graph: &Graph) -> Result<()>
where
    W: std::io::Write,
{
    serde_json::to_writer_pretty(out, &graph_record(graph))?;
    Ok(())
}

/// Creates (or truncates) the file at `path` and writes a graph into it as JSON.
pub fn save_graph<P>(path: P, graph: &Graph) -> Result<()>
where
    P: AsRef<Path>,
{
    let file = File::create(path)?;
    write_graph(BufWriter::new(file), graph)
}
