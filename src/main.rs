//! Vacancy Dashboard - Job Market Analytics Report Generator
//!
//! Command-line entry point: loads the aggregated datasets and writes the
//! static dashboard page.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use vacancy_dashboard::{DashboardGenerator, DatasetLoader};

#[derive(Parser)]
#[command(name = "vacancy-dashboard", version, about)]
struct Cli {
    /// JSON file with the four aggregated datasets
    input: PathBuf,

    /// Directory the dashboard page and charts are written to
    #[arg(short, long, default_value = "dashboard")]
    out_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let bundle = DatasetLoader::load_json(&cli.input)
        .with_context(|| format!("loading datasets from {}", cli.input.display()))?;
    let generated = DashboardGenerator::generate(&bundle, &cli.out_dir)
        .with_context(|| format!("generating dashboard in {}", cli.out_dir.display()))?;

    println!("Dashboard generated: {}", generated.index_html.display());
    Ok(())
}
