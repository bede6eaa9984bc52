use anyhow::Context;
use clap::Parser;
use layergraph::{
    algorithm::graphviz::DumpInGraphviz,
    config::RunConfig,
    controller::{GenerationController, TraversalController},
    export,
    generator::GenerationParams,
    graph::{DuplicateEdges, Graph},
    observer::TracingObserver,
};
use std::{
    fs::{self, File},
    io::BufWriter,
    path::{Path, PathBuf},
};

/// Generate random layered graphs, then find shortest paths to their deepest vertices.
#[derive(Parser, Debug)]
#[command(name = "layergraph", version)]
struct Args {
    /// Depth each graph may grow to.
    #[arg(long)]
    max_depth: usize,

    /// Attempts to attach a new child, per vertex.
    #[arg(long)]
    new_vertices: usize,

    /// Number of graphs to generate.
    #[arg(long, default_value_t = 1)]
    graphs: usize,

    /// Threads generating graphs concurrently.
    #[arg(long, default_value_t = 1)]
    threads: usize,

    /// Threads per traversal; defaults to the hardware parallelism.
    #[arg(long)]
    workers: Option<usize>,

    /// Seed for reproducible graphs.
    #[arg(long)]
    seed: Option<u64>,

    /// Never connect a pair of vertices twice.
    #[arg(long)]
    forbid_duplicate_edges: bool,

    /// Where to write `Graph_<i>.json`.
    #[arg(long, default_value = "temp")]
    output_dir: PathBuf,

    /// Also write `Graph_<i>.dot`.
    #[arg(long)]
    dot: bool,
}

impl Args {
    fn to_config(&self) -> RunConfig {
        let policy = if self.forbid_duplicate_edges {
            DuplicateEdges::Forbid
        } else {
            DuplicateEdges::Allow
        };
        let params = GenerationParams::new(self.max_depth, self.new_vertices).duplicate_edges(policy);
        let mut config = RunConfig::new(params, self.graphs, self.threads);
        config.traversal_workers = self.workers;
        config.seed = self.seed;
        config
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("layergraph=info")),
        )
        .init();

    let args = Args::parse();
    let config = args.to_config();
    config.validate()?;

    fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("cannot create {}", args.output_dir.display()))?;

    let observer = TracingObserver::new();
    let graphs = GenerationController::from_config(&config).generate(&observer)?;
    for (index, graph) in graphs.iter().enumerate() {
        write_graph(&args.output_dir, index, graph, args.dot)?;
    }

    let reports = TraversalController::new(config.traversal_workers).traverse(&graphs, &observer);
    let failures: usize = reports.iter().map(|r| r.failures.len()).sum();
    if failures > 0 {
        anyhow::bail!("{} traversal jobs failed", failures);
    }
    Ok(())
}

fn write_graph(dir: &Path, index: usize, graph: &Graph, dot: bool) -> anyhow::Result<()> {
    let path = dir.join(format!("Graph_{}.json", index));
    export::save_graph(&path, graph).with_context(|| format!("cannot write {}", path.display()))?;
    if dot {
        let path = dir.join(format!("Graph_{}.dot", index));
        let mut out = BufWriter::new(
            File::create(&path).with_context(|| format!("cannot create {}", path.display()))?,
        );
        graph
            .dump_in_graphviz(&mut out, &format!("graph_{}", index))
            .with_context(|| format!("cannot write {}", path.display()))?;
    }
    tracing::debug!(path = %path.display(), "graph written");
    Ok(())
}
