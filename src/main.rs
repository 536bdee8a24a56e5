//! Monte-Carlo survey of decrease-key traffic, eager vs lazy
//!
//! For every graph size `n` in `1..=N`, builds `max(M * n, min_trials)`
//! complete random graphs, runs both shortest-path variants from node 0 on
//! each, checks that they agree, and records the average and maximum
//! decrease-key counts per size. The four series are written as TikZ-style
//! `(n, value)` coordinate files for plotting.
//!
//! Trials are independent (each owns its rng, graph, and heaps), so they
//! run on the rayon thread pool. Per-trial seeds are derived from the base
//! seed, which makes a seeded survey reproducible regardless of scheduling.

use clap::Parser;
use dijkstra_heaps::graph::Graph;
use dijkstra_heaps::shortest_path::{self, SearchError};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::error::Error;
use std::fmt::Display;
use std::fs;
use std::path::PathBuf;

/// Knuth's LCG multiplier, used to spread the base seed across trials
const SEED_MIX: u64 = 6364136223846793005;

#[derive(Parser, Debug)]
#[command(name = "decrease-key-survey")]
#[command(about = "Compare decrease-key counts of eager and lazy Dijkstra on random graphs")]
struct Opt {
    /// Largest graph size to sweep
    #[arg(long, default_value_t = 100)]
    max_nodes: usize,

    /// Trial multiplier: size n runs max(trials * n, min-trials) simulations
    #[arg(long, default_value_t = 10)]
    trials: usize,

    /// Lower bound on simulations per size
    #[arg(long, default_value_t = 2000)]
    min_trials: usize,

    /// Base rng seed; drawn from entropy when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Directory for the coordinate files
    #[arg(long, default_value = "results")]
    out_dir: PathBuf,
}

fn trial_seed(base: u64, nodes: usize, trial: usize) -> u64 {
    base.wrapping_mul(SEED_MIX)
        .wrapping_add((nodes as u64) << 32)
        .wrapping_add(trial as u64)
}

/// One `(n, value)` line per entry, 1-based, the coordinate format TikZ
/// plots directly
fn coordinates<T: Display>(values: &[T]) -> String {
    let mut out = String::new();
    for (i, value) in values.iter().enumerate() {
        out.push_str(&format!("({}, {})\n", i + 1, value));
    }
    out
}

fn main() -> Result<(), Box<dyn Error>> {
    let opt = Opt::parse();
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .env()
        .init()?;

    let seed = opt.seed.unwrap_or_else(|| SmallRng::from_entropy().gen());
    log::info!(
        "surveying n = 1..={}, >= {} trials per size, seed {:#018x}",
        opt.max_nodes,
        opt.min_trials,
        seed
    );

    let mut avg_eager = Vec::with_capacity(opt.max_nodes);
    let mut avg_lazy = Vec::with_capacity(opt.max_nodes);
    let mut max_eager = Vec::with_capacity(opt.max_nodes);
    let mut max_lazy = Vec::with_capacity(opt.max_nodes);

    for n in 1..=opt.max_nodes {
        let trials = (opt.trials * n).max(opt.min_trials);

        let counts: Vec<(usize, usize)> = (0..trials)
            .into_par_iter()
            .map(|trial| -> Result<(usize, usize), SearchError> {
                let mut rng = SmallRng::seed_from_u64(trial_seed(seed, n, trial));
                let graph = Graph::complete_random(n, &mut rng);

                let eager = shortest_path::eager(&graph, 0)?;
                let lazy = shortest_path::lazy(&graph, 0)?;
                assert_eq!(
                    eager.distances, lazy.distances,
                    "shortest-path variants disagree on an n = {} graph",
                    n
                );

                Ok((eager.decrease_keys, lazy.decrease_keys))
            })
            .collect::<Result<_, _>>()?;

        let trials_f = trials as f64;
        avg_eager.push(counts.iter().map(|&(e, _)| e as f64).sum::<f64>() / trials_f);
        avg_lazy.push(counts.iter().map(|&(_, l)| l as f64).sum::<f64>() / trials_f);
        max_eager.push(counts.iter().map(|&(e, _)| e).max().unwrap_or(0));
        max_lazy.push(counts.iter().map(|&(_, l)| l).max().unwrap_or(0));

        log::debug!("n = {}: {} trials", n, trials);
    }

    fs::create_dir_all(&opt.out_dir)?;
    fs::write(opt.out_dir.join("avg_decrease_keys.txt"), coordinates(&avg_eager))?;
    fs::write(opt.out_dir.join("avg_decrease_keys_lazy.txt"), coordinates(&avg_lazy))?;
    fs::write(opt.out_dir.join("max_decrease_keys.txt"), coordinates(&max_eager))?;
    fs::write(opt.out_dir.join("max_decrease_keys_lazy.txt"), coordinates(&max_lazy))?;

    log::info!("results written to {}", opt.out_dir.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_format() {
        assert_eq!(coordinates(&[3usize, 1, 4]), "(1, 3)\n(2, 1)\n(3, 4)\n");
        assert_eq!(coordinates(&[0.5f64]), "(1, 0.5)\n");
        assert_eq!(coordinates::<usize>(&[]), "");
    }

    #[test]
    fn test_trial_seeds_distinct() {
        let a = trial_seed(42, 3, 0);
        let b = trial_seed(42, 3, 1);
        let c = trial_seed(42, 4, 0);
        assert_ne!(a, b);
        assert_ne!(a, c);
    }
}
