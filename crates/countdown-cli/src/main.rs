mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use countdown::SolverConfig;

#[derive(Parser)]
#[command(name = "countdown")]
#[command(version, about = "Countdown numbers round solver")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Solver configuration file (TOML or YAML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Suppress console log output
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List reachable targets, or the paths to one target
    Solve {
        /// The six source numbers
        #[arg(required = true, allow_negative_numbers = true)]
        numbers: Vec<i64>,

        /// Show paths and difficulty for a single target
        #[arg(short, long)]
        target: Option<u32>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Analyze every reachable target
    Analyze {
        /// The six source numbers
        #[arg(required = true, allow_negative_numbers = true)]
        numbers: Vec<i64>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Generate a round: six numbers and a fair target
    Round {
        /// Seed for reproducible rounds
        #[arg(long)]
        seed: Option<u64>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Check a player's answer
    Check {
        /// The six source numbers
        #[arg(required = true, allow_negative_numbers = true)]
        numbers: Vec<i64>,

        /// Target the answer should reach
        #[arg(short, long)]
        target: u32,

        /// The answer, e.g. "((75 + 50) × 8)"
        #[arg(short, long)]
        expr: String,
    },
}

impl Commands {
    fn is_json(&self) -> bool {
        match self {
            Commands::Solve { json, .. }
            | Commands::Analyze { json, .. }
            | Commands::Round { json, .. } => *json,
            Commands::Check { .. } => false,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if !cli.quiet && !cli.command.is_json() {
        countdown::console::init();
    }

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<bool> {
    let config = match &cli.config {
        Some(path) => SolverConfig::load(path)?,
        None => SolverConfig::default(),
    };

    match cli.command {
        Commands::Solve {
            numbers,
            target,
            json,
        } => commands::solve(&numbers, target, json, &config),
        Commands::Analyze { numbers, json } => commands::analyze(&numbers, json, &config),
        Commands::Round { seed, json } => {
            let config = match seed {
                Some(seed) => config.with_random_seed(seed),
                None => config,
            };
            commands::round(json, config)
        }
        Commands::Check {
            numbers,
            target,
            expr,
        } => commands::check(&numbers, target, &expr),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::io::Write;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_solve_with_target() {
        let cli = Cli::try_parse_from(["countdown", "solve", "75", "50", "2", "3", "8", "7", "-t", "812"])
            .unwrap();
        match cli.command {
            Commands::Solve {
                numbers,
                target,
                json,
            } => {
                assert_eq!(numbers, vec![75, 50, 2, 3, 8, 7]);
                assert_eq!(target, Some(812));
                assert!(!json);
            }
            _ => panic!("expected solve"),
        }
    }

    #[test]
    fn test_negative_numbers_reach_validation() {
        let cli = Cli::try_parse_from(["countdown", "-q", "analyze", "-1", "2", "3", "4", "5", "6"])
            .unwrap();
        let err = run(cli).unwrap_err();
        assert!(err.to_string().contains("positive"));
    }

    #[test]
    fn test_wrong_count_is_an_error() {
        let cli = Cli::try_parse_from(["countdown", "-q", "solve", "1", "2", "3"]).unwrap();
        assert!(run(cli).is_err());
    }

    #[test]
    fn test_check_exit_codes() {
        let hit = Cli::try_parse_from([
            "countdown", "-q", "check", "1", "2", "3", "4", "5", "6", "-t", "100", "-e",
            "(((5 × 4) × (3 + 2)) × 1)",
        ])
        .unwrap();
        assert!(run(hit).unwrap());

        let reuse = Cli::try_parse_from([
            "countdown", "-q", "check", "1", "2", "3", "4", "5", "6", "-t", "25", "-e", "(5 * 5)",
        ])
        .unwrap();
        assert!(!run(reuse).unwrap());

        let garbled = Cli::try_parse_from([
            "countdown", "-q", "check", "1", "2", "3", "4", "5", "6", "-t", "100", "-e", "(5 +",
        ])
        .unwrap();
        assert!(run(garbled).is_err());
    }

    #[test]
    fn test_check_rejects_runaway_nesting() {
        let answer = "(".repeat(120_000);
        let cli = Cli::try_parse_from([
            "countdown", "-q", "check", "1", "2", "3", "4", "5", "6", "-t", "100", "-e", answer.as_str(),
        ])
        .unwrap();
        let err = run(cli).unwrap_err();
        assert!(format!("{err:#}").contains("nested deeper"));
    }

    #[test]
    fn test_round_with_config_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "random_seed = 11\n\n[round]\nmax_attempts = 20").unwrap();

        let cli = Cli::try_parse_from([
            "countdown",
            "--config",
            file.path().to_str().unwrap(),
            "round",
            "--json",
        ])
        .unwrap();
        assert!(run(cli).unwrap());
    }
}
