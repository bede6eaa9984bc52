//! Parameters of a batch run.

use crate::{
    error::{Error, Result},
    generator::GenerationParams,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    pub params: GenerationParams,
    /// How many graphs to generate.
    pub graphs_count: usize,
    /// Threads generating graphs concurrently.
    pub generation_threads: usize,
    /// Threads per traversal; the hardware parallelism when unset.
    #[serde(default)]
    pub traversal_workers: Option<usize>,
    /// Seed of the first graph; graph `i` uses `seed + i`. Fresh entropy when unset.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl RunConfig {
    pub fn new(params: GenerationParams, graphs_count: usize, generation_threads: usize) -> Self {
        Self {
            params,
            graphs_count,
            generation_threads,
            traversal_workers: None,
            seed: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.generation_threads == 0 {
            return Err(Error::InvalidConfig(
                "generation threads must be at least 1".to_owned(),
            ));
        }
        if self.traversal_workers == Some(0) {
            return Err(Error::InvalidConfig(
                "traversal workers must be at least 1".to_owned(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_config() {
        let config = RunConfig::new(GenerationParams::new(3, 2), 4, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_threads_rejected() {
        let config = RunConfig::new(GenerationParams::new(3, 2), 4, 0);
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));

        let mut config = RunConfig::new(GenerationParams::new(3, 2), 4, 1);
        config.traversal_workers = Some(0);
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn from_json() {
        let config: RunConfig = serde_json::from_str(
            r#"{
                "params": {"max_depth": 4, "new_vertices_per_step": 3, "duplicate_edges": "forbid"},
                "graphs_count": 2,
                "generation_threads": 1,
                "seed": 9
            }"#,
        )
        .unwrap();
        assert_eq!(config.params.max_depth, 4);
        assert_eq!(
            config.params.duplicate_edges,
            crate::graph::DuplicateEdges::Forbid
        );
        assert_eq!(config.traversal_workers, None);
        assert_eq!(config.seed, Some(9));
    }
}
