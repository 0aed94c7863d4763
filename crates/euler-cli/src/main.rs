use std::error::Error;

use clap::{Parser, Subcommand};
use commands::{
    analyze::{self, AnalyzeArgs},
    demo::{self, DemoArgs},
    path::{self, PathArgs},
    version::{self, VersionArgs},
};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;

#[derive(Parser, Debug)]
#[command(name = "euler", about = "Multigraph analysis and Euler path CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run every structural and Euler query over a graph snapshot.
    Analyze(AnalyzeArgs),
    /// Print the Fleury Euler path of a graph snapshot.
    Path(PathArgs),
    /// Generate a graph of a standard shape and analyze it.
    Demo(DemoArgs),
    /// Print version information.
    Version(VersionArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    // stdout carries JSON, so logs go to stderr.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Analyze(args) => analyze::run(&args),
        Command::Path(args) => path::run(&args),
        Command::Demo(args) => demo::run(&args),
        Command::Version(args) => version::run(&args),
    }
}
