use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use euler_analyzer::euler_path;
use serde_json::Value;

use super::load::{load_config, load_graph, print_json};

#[derive(Args, Debug)]
pub struct PathArgs {
    /// JSON graph snapshot (`{config, vertices, edges}`).
    #[arg(long)]
    pub graph: PathBuf,
    /// Optional YAML analyzer configuration.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Prints the path as a JSON array of labels, or `false` when none exists.
pub fn run(args: &PathArgs) -> Result<(), Box<dyn Error>> {
    let graph = load_graph(&args.graph)?;
    let config = load_config(args.config.as_deref())?;
    let value = match euler_path(&graph, &config)? {
        Some(path) => serde_json::to_value(&path)?,
        None => Value::Bool(false),
    };
    print_json(&value)
}
