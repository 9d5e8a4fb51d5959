use std::time::Instant;

use clap::Parser;
use rand::prelude::*;
use rand_distr::Zipf;
use rolodex::{cache::NeighborCache, events::ListenableGraph, graph::EdgeId};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Stress driver for the incremental adjacency cache
#[derive(Parser, Debug)]
#[command(name = "rolodex")]
#[command(about = "Runs mixed edit/query workloads against a cached multigraph", long_about = None)]
struct Args {
    /// Number of vertices in the graph
    #[arg(short, long, default_value_t = 10_000)]
    vertices: u64,

    /// Operation counts to run (comma-separated list, e.g. "100000,1000000")
    #[arg(short, long, value_delimiter = ',', default_value = "200000")]
    operations: Vec<usize>,

    /// Fraction of operations that are adjacency queries
    #[arg(short, long, default_value_t = 0.6)]
    query_share: f64,

    /// Zipf exponent for vertex popularity (higher = more skew)
    #[arg(short, long, default_value_t = 1.1)]
    zipf: f64,

    /// Seed for the workload generator
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
}

#[derive(Serialize)]
struct JobSummary {
    vertices: u64,
    operations: usize,
    query_share: f64,
    seed: u64,
    elapsed_secs: f64,
    ops_per_sec: f64,
    final_edges: usize,
    seeds: usize,
    hits: usize,
    edge_events: usize,
    purges: usize,
    degree_checksum: usize,
}

fn run_workload(args: &Args, operations: usize) -> JobSummary {
    println!("\n==========");
    println!(
        "Running operations={} over vertices={}",
        operations, args.vertices
    );
    println!("==========");

    let mut graph = ListenableGraph::new();
    let cache = NeighborCache::attached(&mut graph);
    for vertex in 0..args.vertices {
        graph.add_vertex(vertex);
    }

    let mut rng = StdRng::seed_from_u64(args.seed);
    let popularity =
        Zipf::new(args.vertices as f64, args.zipf).expect("zipf exponent must be positive");
    let mut live_edges: Vec<EdgeId> = Vec::new();
    let mut degree_checksum = 0usize;

    let start_time = Instant::now();

    for op in 0..operations {
        let roll = rng.random::<f64>();
        if roll < args.query_share {
            let vertex = popularity.sample(&mut rng) as u64 - 1;
            let mut cache = cache.borrow_mut();
            let degree = match op % 3 {
                0 => cache.predecessors_of(graph.model(), vertex),
                1 => cache.successors_of(graph.model(), vertex),
                _ => cache.neighbors_of(graph.model(), vertex),
            }
            .expect("workload only queries live vertices")
            .len();
            degree_checksum += degree;
        } else if live_edges.is_empty() || rng.random_bool(0.55) {
            let source = popularity.sample(&mut rng) as u64 - 1;
            let target = popularity.sample(&mut rng) as u64 - 1;
            let edge = graph
                .add_edge(source, target)
                .expect("endpoints are live vertices");
            live_edges.push(edge);
        } else if rng.random_bool(0.01) {
            // Rare vertex churn: drop a vertex together with its incident
            // edges, then re-add it bare.
            let vertex = popularity.sample(&mut rng) as u64 - 1;
            graph.remove_vertex(vertex);
            live_edges.retain(|&edge| graph.model().contains_edge(edge));
            graph.add_vertex(vertex);
        } else {
            let idx = rng.random_range(0..live_edges.len());
            let edge = live_edges.swap_remove(idx);
            graph.remove_edge(edge).expect("live edge ids are valid");
        }
    }

    let elapsed = start_time.elapsed();
    let ops_per_sec = operations as f64 / elapsed.as_secs_f64();
    let stats = *cache.borrow().stats();

    println!(
        "Cache: {} seeds, {} hits, {} edge events, {} purges",
        stats.get_seeds(),
        stats.get_hits(),
        stats.get_edge_events(),
        stats.get_purges()
    );
    println!("Checksum: {degree_checksum}");
    println!(
        "Completed {} operations in {:.2}s ({:.2} ops/s)",
        operations,
        elapsed.as_secs_f64(),
        ops_per_sec
    );

    JobSummary {
        vertices: args.vertices,
        operations,
        query_share: args.query_share,
        seed: args.seed,
        elapsed_secs: elapsed.as_secs_f64(),
        ops_per_sec,
        final_edges: graph.model().edge_count(),
        seeds: stats.get_seeds(),
        hits: stats.get_hits(),
        edge_events: stats.get_edge_events(),
        purges: stats.get_purges(),
        degree_checksum,
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    assert!(
        (0.0..=1.0).contains(&args.query_share),
        "query share must be a fraction"
    );
    assert!(args.vertices > 0);

    println!("Starting workload sweep:");
    println!("  Vertices: {}", args.vertices);
    println!("  Operation counts: {:?}", args.operations);
    println!("  Query share: {}", args.query_share);

    let mut summaries = Vec::new();
    for &operations in &args.operations {
        summaries.push(run_workload(&args, operations));
    }

    println!("\n==========");
    println!("All jobs completed!");
    println!("==========");
    println!(
        "{}",
        serde_json::to_string(&summaries).expect("summaries are serializable")
    );
}
