//! CLI argument parsing using clap

use super::cli_convert::{parse_dim, parse_runs, parse_seed, parse_step_chunk, parse_steps};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Walk generator selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SimulationMode {
    /// Generate the whole tensor in one call (default)
    Batch,
    /// Grow a walk store with append_steps / append_runs
    Incremental,
}

/// latwalk - Lattice random walk simulator
#[derive(Parser, Debug)]
#[command(name = "latwalk")]
#[command(version, about, long_about = None)]
pub struct Cli {
    // === Simulation Options ===
    /// Walk generator: batch or incremental
    #[arg(long, value_enum)]
    pub mode: Option<SimulationMode>,

    /// Number of independent walks (default: 1000)
    #[arg(short = 'r', long, value_parser = parse_runs)]
    pub runs: Option<usize>,

    /// Steps per walk (default: 5000)
    #[arg(short = 's', long, value_parser = parse_steps)]
    pub steps: Option<usize>,

    /// Lattice dimension (default: 3)
    #[arg(short = 'd', long, value_parser = parse_dim)]
    pub dim: Option<usize>,

    /// Seed for a reproducible random stream
    #[arg(long, env = "LATWALK_SEED", value_parser = parse_seed)]
    pub seed: Option<u64>,

    /// Steps appended per call in incremental mode
    #[arg(long, value_parser = parse_step_chunk)]
    pub step_chunk: Option<usize>,

    // === Analysis Options ===
    /// Target distance for first-arrival analysis (repeatable, default: 30)
    #[arg(short = 't', long = "target")]
    pub targets: Vec<f64>,

    // === Output Options ===
    /// JSON report file path
    #[arg(long)]
    pub json_output: Option<PathBuf>,

    /// Write the JSON report on a single line
    #[arg(long)]
    pub compact_json: bool,

    // === Configuration File ===
    /// TOML configuration file
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Dry run - validate configuration without executing
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug output (raises the default log level to debug)
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["latwalk"]).unwrap();

        assert_eq!(cli.mode, None);
        assert_eq!(cli.runs, None);
        assert!(cli.targets.is_empty());
        assert!(!cli.dry_run);
    }

    #[test]
    fn test_parse_full() {
        let cli = Cli::try_parse_from([
            "latwalk", "--mode", "incremental", "-r", "50", "-s", "200", "-d", "4", "--seed", "9",
            "--step-chunk", "20", "-t", "20", "-t", "30", "--json-output", "out.json",
        ])
        .unwrap();

        assert_eq!(cli.mode, Some(SimulationMode::Incremental));
        assert_eq!(cli.runs, Some(50));
        assert_eq!(cli.steps, Some(200));
        assert_eq!(cli.dim, Some(4));
        assert_eq!(cli.seed, Some(9));
        assert_eq!(cli.step_chunk, Some(20));
        assert_eq!(cli.targets, vec![20.0, 30.0]);
        assert_eq!(cli.json_output, Some(PathBuf::from("out.json")));
    }

    #[test]
    fn test_parse_rejects_bad_counts() {
        for bad in ["0", "-3", "2.5", "true", "many"] {
            assert!(Cli::try_parse_from(["latwalk", "--steps", bad]).is_err(), "accepted {}", bad);
        }
    }

    #[test]
    fn test_parse_error_names_the_argument() {
        let err = Cli::try_parse_from(["latwalk", "--dim", "0"]).unwrap_err().to_string();
        assert!(err.contains("dim must be a positive integer"), "{}", err);
    }

    #[test]
    fn test_parse_large_seed() {
        let cli = Cli::try_parse_from(["latwalk", "--seed", "18446744073709551615"]).unwrap();
        assert_eq!(cli.seed, Some(u64::MAX));
    }
}
