//! random-search CLI: minimize a benchmark function and print the result record.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use random_search::{RunConfig, execute};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "random-search")]
#[command(about = "Population-based random search with a shrinking neighborhood")]
#[command(version)]
struct Cli {
    /// Objective function: sphere, rosenbrock, rastrigin or ackley [default: sphere]
    #[arg(long, env = "RANDOM_SEARCH_ALGORITHM")]
    algorithm: Option<String>,

    /// Number of refinement iterations [default: 100]
    #[arg(long, env = "RANDOM_SEARCH_ITER")]
    iter: Option<usize>,

    /// Population size [default: 10]
    #[arg(long, env = "RANDOM_SEARCH_AGENTS")]
    agents: Option<usize>,

    /// Problem dimensionality [default: 2]
    #[arg(long, env = "RANDOM_SEARCH_DIM")]
    dim: Option<usize>,

    /// Random seed for reproducibility [default: 42]
    #[arg(long, env = "RANDOM_SEARCH_SEED")]
    seed: Option<u64>,

    /// JSON run configuration; flags take precedence over its values
    #[arg(long, env = "RANDOM_SEARCH_CONFIG")]
    config: Option<PathBuf>,
}

impl Cli {
    fn into_run_config(self) -> anyhow::Result<RunConfig> {
        let mut config = match &self.config {
            Some(path) => RunConfig::from_json_file(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => RunConfig::default(),
        };

        if let Some(algorithm) = self.algorithm {
            config.algorithm = algorithm;
        }
        if let Some(iter) = self.iter {
            config.iter = iter;
        }
        if let Some(agents) = self.agents {
            config.agents = agents;
        }
        if let Some(dim) = self.dim {
            config.dim = dim;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        Ok(config)
    }
}

/// Install a compact stderr subscriber filtered by `RUST_LOG`.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let config = Cli::parse().into_run_config()?;
    let report = execute(&config).context("run aborted")?;

    tracing::info!(
        runtime_ms = u64::try_from(report.runtime.as_millis()).unwrap_or(u64::MAX),
        fopt = report.fopt,
        "run finished"
    );
    println!("{report}");
    Ok(())
}
