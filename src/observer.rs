//! Lifecycle hooks of a generation and traversal run.
//!
//! Hooks are handed explicitly to the controllers and may be called from worker threads.

use crate::{algorithm::TraversalReport, export, graph::*};
use std::time::Instant;

pub trait RunObserver: Sync {
    fn generation_started(&self, _index: usize) {}
    fn generation_finished(&self, _index: usize, _graph: &Graph) {}
    fn traversal_started(&self, _index: usize, _graph: &Graph) {}
    fn traversal_finished(&self, _index: usize, _graph: &Graph, _report: &TraversalReport) {}
}

/// Ignores everything.
impl RunObserver for () {}

/// Reports the run through `tracing` events.
pub struct TracingObserver {
    started: Instant,
}

impl Default for TracingObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl TracingObserver {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }
}

impl RunObserver for TracingObserver {
    fn generation_started(&self, index: usize) {
        tracing::info!(graph = index, "graph generation started");
    }

    fn generation_finished(&self, index: usize, graph: &Graph) {
        let colors = graph
            .color_counts()
            .iter()
            .map(|(c, n)| format!("{}: {}", c, n))
            .collect::<Vec<_>>()
            .join(", ");
        tracing::info!(
            graph = index,
            vertices = graph.vertex_size(),
            edges = graph.edge_size(),
            depth = graph.max_depth(),
            elapsed_ms = self.started.elapsed().as_millis() as u64,
            "graph generation finished; edge colors {{{}}}",
            colors
        );
    }

    fn traversal_started(&self, index: usize, graph: &Graph) {
        tracing::info!(
            graph = index,
            targets = graph.vertex_ids_at_depth(graph.max_depth()).len(),
            "graph traversal started"
        );
    }

    fn traversal_finished(&self, index: usize, _graph: &Graph, report: &TraversalReport) {
        let distances = report
            .sorted_paths()
            .iter()
            .map(|p| format!("{:?}: {}", p.target(), p.distance()))
            .collect::<Vec<_>>()
            .join(", ");
        tracing::info!(
            graph = index,
            paths = report.paths.len(),
            elapsed_ms = self.started.elapsed().as_millis() as u64,
            "graph traversal finished; distances [{}]",
            distances
        );
        for path in report.sorted_paths() {
            match export::path_to_json(path) {
                Ok(json) => tracing::debug!(graph = index, path = %json, "path found"),
                Err(err) => tracing::warn!(graph = index, %err, "cannot render path"),
            }
        }
        for failure in report.failures.iter() {
            tracing::warn!(graph = index, %failure, "no path");
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::algorithm::GraphTraverser;
    use parking_lot::Mutex;
    use std::sync::Arc;

    /// Remembers every hook call, in call order.
    #[derive(Default)]
    pub struct RecordingObserver {
        pub events: Mutex<Vec<String>>,
    }

    impl RunObserver for RecordingObserver {
        fn generation_started(&self, index: usize) {
            self.events.lock().push(format!("gen-start {}", index));
        }

        fn generation_finished(&self, index: usize, graph: &Graph) {
            self.events
                .lock()
                .push(format!("gen-end {} {}", index, graph.vertex_size()));
        }

        fn traversal_started(&self, index: usize, _graph: &Graph) {
            self.events.lock().push(format!("trav-start {}", index));
        }

        fn traversal_finished(&self, index: usize, _graph: &Graph, report: &TraversalReport) {
            self.events
                .lock()
                .push(format!("trav-end {} {}", index, report.paths.len()));
        }
    }

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn traversal_end_logs_every_path() {
        let mut g = Graph::new();
        let root = g.add_vertex();
        let child = g.add_vertex();
        g.connect_vertices(root, child);
        let report = GraphTraverser::new(&g).with_workers(1).find_all_paths();

        let buf = SharedBuf::default();
        let writer = buf.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            let observer = TracingObserver::new();
            observer.generation_started(0);
            observer.generation_finished(0, &g);
            observer.traversal_started(0, &g);
            observer.traversal_finished(0, &g, &report);
        });

        let logs = String::from_utf8(buf.0.lock().clone()).unwrap();
        assert!(logs.contains("graph traversal finished"), "{}", logs);
        assert!(
            logs.contains(r#"path={"vertex_ids":[0,1],"edge_ids":[0],"distance":1}"#),
            "{}",
            logs
        );
    }
}
