//! Batches: generate several graphs concurrently, then traverse each of them.

use crate::{
    algorithm::{GraphTraverser, TraversalReport},
    config::RunConfig,
    error::{Error, Result},
    generator::{GenerationParams, GraphGenerator},
    graph::Graph,
    observer::RunObserver,
    pool::WorkerPool,
};
use rand::{rngs::StdRng, SeedableRng};

/// Generates a batch of graphs, one job per graph, on a worker pool.
pub struct GenerationController {
    params: GenerationParams,
    graphs_count: usize,
    threads: usize,
    seed: Option<u64>,
}

impl GenerationController {
    pub fn new(params: GenerationParams, graphs_count: usize, threads: usize) -> Self {
        Self {
            params,
            graphs_count,
            threads,
            seed: None,
        }
    }

    pub fn from_config(config: &RunConfig) -> Self {
        Self::new(config.params, config.graphs_count, config.generation_threads)
            .seed(config.seed)
    }

    /// With a seed, graph `i` is generated from `seed + i`, so the batch is reproducible.
    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Generates every graph and returns them ordered by index.
    pub fn generate(&self, observer: &dyn RunObserver) -> Result<Vec<Graph>> {
        let generator = GraphGenerator::new(self.params);
        let pool = WorkerPool::new(self.threads);
        let mut outcomes = pool.run((0..self.graphs_count).collect(), |&index| {
            observer.generation_started(index);
            let mut rng = match self.seed {
                Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(index as u64)),
                None => StdRng::from_entropy(),
            };
            let graph = generator.generate(&mut rng);
            observer.generation_finished(index, &graph);
            graph
        });
        outcomes.sort_by_key(|(index, _)| *index);
        outcomes
            .into_iter()
            .map(|(index, outcome)| {
                outcome.map_err(|message| Error::GenerationPanicked { index, message })
            })
            .collect()
    }
}

/// Traverses graphs one after another, each with its own worker pool.
pub struct TraversalController {
    workers: Option<usize>,
}

impl TraversalController {
    /// `None` lets each traversal use the hardware parallelism.
    pub fn new(workers: Option<usize>) -> Self {
        Self { workers }
    }

    pub fn traverse(&self, graphs: &[Graph], observer: &dyn RunObserver) -> Vec<TraversalReport> {
        graphs
            .iter()
            .enumerate()
            .map(|(index, graph)| {
                observer.traversal_started(index, graph);
                let mut traverser = GraphTraverser::new(graph);
                if let Some(workers) = self.workers {
                    traverser = traverser.with_workers(workers);
                }
                let report = traverser.find_all_paths();
                observer.traversal_finished(index, graph, &report);
                report
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{graph::QueryableGraph, observer::tests::RecordingObserver};

    #[test]
    fn seeded_batches_are_reproducible() {
        let params = GenerationParams::new(4, 3);
        let controller = GenerationController::new(params, 5, 3).seed(Some(11));
        let a = controller.generate(&()).unwrap();
        let b = controller.generate(&()).unwrap();
        assert_eq!(a.len(), 5);
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x.edges(), y.edges());
        }
        // graph i is the graph of seed 11 + i
        let mut rng = StdRng::seed_from_u64(13);
        let third = GraphGenerator::new(params).generate(&mut rng);
        assert_eq!(a[2].edges(), third.edges());
    }

    #[test]
    fn hooks_fire_once_per_graph() {
        let observer = RecordingObserver::default();
        let config = RunConfig::new(GenerationParams::new(3, 2), 3, 2);
        let graphs = GenerationController::from_config(&config)
            .generate(&observer)
            .unwrap();
        let reports = TraversalController::new(Some(2)).traverse(&graphs, &observer);
        assert_eq!(reports.len(), 3);
        assert!(reports.iter().all(|r| r.is_complete()));

        let events = observer.events.lock();
        for index in 0..3 {
            assert!(events.contains(&format!("gen-start {}", index)));
            assert!(events.contains(&format!(
                "gen-end {} {}",
                index,
                graphs[index].vertex_size()
            )));
        }
        let traversal: Vec<_> = events
            .iter()
            .filter(|e| e.starts_with("trav-"))
            .cloned()
            .collect();
        let expected: Vec<_> = reports
            .iter()
            .enumerate()
            .flat_map(|(i, r)| {
                vec![
                    format!("trav-start {}", i),
                    format!("trav-end {} {}", i, r.paths.len()),
                ]
            })
            .collect();
        assert_eq!(traversal, expected);
    }

    #[test]
    fn empty_batch() {
        let graphs = GenerationController::new(GenerationParams::new(3, 2), 0, 4)
            .generate(&())
            .unwrap();
        assert!(graphs.is_empty());
        assert!(TraversalController::new(None)
            .traverse(&graphs, &())
            .is_empty());
    }
}
