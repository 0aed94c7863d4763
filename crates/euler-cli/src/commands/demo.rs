use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::{Args, ValueEnum};
use euler_core::rng::RngHandle;
use euler_matrix::{
    complete_graph, cycle_graph, graph_to_json, path_graph, random_multigraph, MatrixGraph,
};
use tracing::info;

use super::analyze::build_output;
use super::load::{load_config, print_json};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Shape {
    Cycle,
    Path,
    Complete,
    Random,
}

#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Shape of the generated graph.
    #[arg(long, value_enum, default_value_t = Shape::Cycle)]
    pub shape: Shape,
    /// Number of vertices.
    #[arg(long, default_value_t = 4)]
    pub size: usize,
    /// Number of edges for `--shape random`.
    #[arg(long, default_value_t = 8)]
    pub edges: usize,
    /// Self-loop probability for `--shape random`.
    #[arg(long, default_value_t = 0.1)]
    pub loop_ratio: f64,
    /// Seed for `--shape random`.
    #[arg(long, default_value_t = 2024)]
    pub seed: u64,
    /// Optional YAML analyzer configuration.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Also write the generated graph as a JSON snapshot.
    #[arg(long)]
    pub save: Option<PathBuf>,
}

pub fn run(args: &DemoArgs) -> Result<(), Box<dyn Error>> {
    let graph = generate(args)?;
    if let Some(path) = &args.save {
        fs::write(path, graph_to_json(&graph)?)?;
        info!(path = %path.display(), "saved generated graph");
    }
    let config = load_config(args.config.as_deref())?;
    let output = build_output(&graph, &config, describe(args))?;
    print_json(&output)
}

fn generate(args: &DemoArgs) -> Result<MatrixGraph, Box<dyn Error>> {
    let graph = match args.shape {
        Shape::Cycle => cycle_graph(args.size)?,
        Shape::Path => path_graph(args.size)?,
        Shape::Complete => complete_graph(args.size)?,
        Shape::Random => {
            let mut rng = RngHandle::from_seed(args.seed);
            random_multigraph(args.size, args.edges, args.loop_ratio, &mut rng)?
        }
    };
    Ok(graph)
}

fn describe(args: &DemoArgs) -> String {
    match args.shape {
        Shape::Cycle => format!("cycle:{}", args.size),
        Shape::Path => format!("path:{}", args.size),
        Shape::Complete => format!("complete:{}", args.size),
        Shape::Random => format!(
            "random:{}x{}:loops={}:seed={}",
            args.size, args.edges, args.loop_ratio, args.seed
        ),
    }
}
