use criterion::{black_box, criterion_group, criterion_main, Criterion};
use layergraph::{
    algorithm::{GraphTraverser, ShortestPath},
    generator::{GenerationParams, GraphGenerator},
    graph::*,
};
use rand::{rngs::StdRng, SeedableRng};
use static_init::dynamic;

#[dynamic]
static MAX_DEPTH: usize = std::env::var("MAX_DEPTH")
    .unwrap_or("8".to_string())
    .parse()
    .unwrap();
#[dynamic]
static NEW_VERTICES: usize = std::env::var("NEW_VERTICES")
    .unwrap_or("3".to_string())
    .parse()
    .unwrap();

criterion_group!(benches, generation, traversal);
criterion_main!(benches);

fn params() -> GenerationParams {
    let max_depth = *MAX_DEPTH;
    println!("MAX_DEPTH: {}", max_depth);
    let new_vertices = *NEW_VERTICES;
    println!("NEW_VERTICES: {}", new_vertices);
    GenerationParams::new(max_depth, new_vertices)
}

fn generation(c: &mut Criterion) {
    let generator = GraphGenerator::new(params());
    c.bench_function("generate", |b| {
        let mut rng = StdRng::seed_from_u64(0);
        b.iter(|| generator.generate(&mut rng))
    });
}

fn traversal(c: &mut Criterion) {
    let g = GraphGenerator::new(params()).generate(&mut StdRng::seed_from_u64(0));
    println!("vertices: {} edges: {}", g.vertex_size(), g.edge_size());
    let targets = g.vertex_ids_at_depth(g.max_depth()).to_vec();
    c.bench_function("shortest_path/deepest", |b| {
        b.iter(|| {
            for t in targets.iter() {
                black_box(g.shortest_path(VertexId::ROOT, *t));
            }
        })
    });
    c.bench_function("find_all_paths/1 worker", |b| {
        b.iter(|| GraphTraverser::new(&g).with_workers(1).find_all_paths())
    });
    c.bench_function("find_all_paths/hardware workers", |b| {
        b.iter(|| GraphTraverser::new(&g).find_all_paths())
    });
}
