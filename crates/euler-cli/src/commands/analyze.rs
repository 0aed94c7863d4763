use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use euler_analyzer::{analyze, AnalysisReport, EulerConfig};
use euler_core::ReportProvenance;
use euler_matrix::MatrixGraph;
use serde::Serialize;

use super::load::{load_config, load_graph, print_json, provenance};

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// JSON graph snapshot (`{config, vertices, edges}`).
    #[arg(long)]
    pub graph: PathBuf,
    /// Optional YAML analyzer configuration.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
pub struct AnalysisOutput {
    pub provenance: ReportProvenance,
    pub report: AnalysisReport,
}

pub fn run(args: &AnalyzeArgs) -> Result<(), Box<dyn Error>> {
    let graph = load_graph(&args.graph)?;
    let config = load_config(args.config.as_deref())?;
    let output = build_output(&graph, &config, args.graph.display().to_string())?;
    print_json(&output)
}

pub fn build_output(
    graph: &MatrixGraph,
    config: &EulerConfig,
    source: String,
) -> Result<AnalysisOutput, Box<dyn Error>> {
    Ok(AnalysisOutput {
        provenance: provenance(graph, source)?,
        report: analyze(graph, config)?,
    })
}
