use std::error::Error;

use clap::Args;
use euler_core::SchemaVersion;
use serde::Serialize;

use super::load::print_json;

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Emit extended metadata as JSON.
    #[arg(long)]
    pub long: bool,
}

#[derive(Debug, Serialize)]
struct VersionInfo {
    version: String,
    snapshot_schema: SchemaVersion,
    features: Vec<String>,
}

pub fn run(args: &VersionArgs) -> Result<(), Box<dyn Error>> {
    if !args.long {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    let mut features = Vec::new();
    if cfg!(debug_assertions) {
        features.push("debug".into());
    }
    if features.is_empty() {
        features.push("default".into());
    }
    print_json(&VersionInfo {
        version: env!("CARGO_PKG_VERSION").into(),
        snapshot_schema: SchemaVersion::default(),
        features,
    })
}
