//! Estimate the minimum cut of a graph file with Karger or Karger-Stein.

use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use contraction_mincut::algorithm::{Algorithm, DEFAULT_CUSTOM_A, DEFAULT_CUSTOM_B};
use contraction_mincut::graph::{read_graph, AmplifierConfig, DefaultSelector};
use contraction_mincut::stats::{self, default_repetitions, write_csv};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Kind {
    /// Single contraction pass
    Karger,
    /// Karger-Stein with reduction factor √2 and two branches
    Recursive,
    /// Karger-Stein with tunable a and b
    Custom,
    /// Karger, recursive and custom(a=0.5, b=3) side by side
    Compare,
}

#[derive(Parser)]
#[command(name = "mincut")]
#[command(about = "Randomized minimum cut estimation", long_about = None)]
#[command(version)]
struct Cli {
    /// Graph file: `<vertex_count> <edge_count>` followed by one `u v` line per edge
    graph: PathBuf,

    /// Algorithm to execute
    #[arg(value_enum)]
    algorithm: Kind,

    /// Number of times to repeat the algorithm (defaults to n²/2)
    #[arg(short = 'r', long)]
    repetitions: Option<usize>,

    /// Fraction of vertices kept per level by the custom algorithm
    #[arg(short = 'a', default_value_t = DEFAULT_CUSTOM_A)]
    a: f64,

    /// Branches per level for the custom algorithm
    #[arg(short = 'b', default_value_t = DEFAULT_CUSTOM_B)]
    b: usize,

    /// Known minimum cut; reports how often each algorithm found it
    #[arg(long)]
    min_cut: Option<usize>,

    /// Seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Run amplifier branches on all cores
    #[arg(long)]
    parallel: bool,

    /// Write every trial's cut size to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Log each trial
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(if cli.verbose { "debug" } else { "info" })
        .with_writer(std::io::stderr)
        .init();

    let algorithms = match cli.algorithm {
        Kind::Karger => vec![Algorithm::karger()],
        Kind::Recursive => vec![Algorithm::recursive()],
        Kind::Custom => vec![Algorithm::custom(cli.a, cli.b)?],
        Kind::Compare => stats::standard_comparison(),
    };

    let graph = read_graph(&cli.graph)
        .with_context(|| format!("failed to load graph from {}", cli.graph.display()))?;
    if !graph.is_connected() {
        log::warn!("graph is disconnected; every estimate will report a cut of 0");
    }

    let repetitions = match cli.repetitions {
        Some(r) if r > 0 => r,
        _ => default_repetitions(graph.vertex_count()),
    };
    let mut selector = match cli.seed {
        Some(seed) => DefaultSelector::seeded(seed),
        None => DefaultSelector::from_entropy(),
    };

    let runs = if cli.parallel {
        stats::compare_parallel(&graph, &algorithms, repetitions, &mut selector)?
    } else {
        stats::compare(&graph, &algorithms, repetitions, &mut selector)?
    };

    if let Some(path) = &cli.csv {
        let file = File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        write_csv(file, &runs)?;
    }

    for (algorithm, trials) in algorithms.iter().zip(&runs) {
        let summary = trials.summary(cli.min_cut);
        log::info!("{}: {}", trials.label, summary);

        let suffix = match algorithm {
            Algorithm::KargerStein(config) if *config != AmplifierConfig::default() => format!(
                " with a={} and b={}",
                1.0 / config.reduction_factor,
                config.branch_count
            ),
            _ => String::new(),
        };
        println!(
            "The min cut found with the {} algorithm and {} iterations is: {}{}",
            algorithm.name(),
            repetitions,
            summary.min.unwrap_or(0),
            suffix
        );
    }
    Ok(())
}
