//! Tournament CLI
//!
//! Run fleet brackets and compare their champions.

use std::env;
use std::path::Path;
use std::process::ExitCode;
use tournament::{
    better_of, parse_seed, StrategyKind, Tournament, TournamentConfig, TournamentError,
};
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Fleet Bracket Tournament Runner");
    println!();
    println!("Usage:");
    println!("  tournament run <config.toml> [--strategy S] [--seed N] [--save FILE]");
    println!("  tournament compare <a.toml> <b.toml> [--strategy S] [--seed N]");
    println!();
    println!("Strategies:");
    println!("  greedy   - Best score-per-cost first (fast, not optimal)");
    println!("  exact    - Dynamic-programming knapsack (optimal)");
    println!();
    println!("Examples:");
    println!("  tournament run data/config.toml --strategy exact --seed 42");
    println!("  tournament compare data/config.toml data/config2.toml");
}

/// Options shared by every command
#[derive(Default)]
struct Options {
    strategy: Option<StrategyKind>,
    seed: Option<u64>,
    save: Option<String>,
}

fn parse_options(args: &[String]) -> Result<(Vec<&String>, Options), TournamentError> {
    let mut positional = Vec::new();
    let mut options = Options::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--strategy" | "-s" if i + 1 < args.len() => {
                options.strategy = Some(args[i + 1].parse()?);
                i += 1;
            }
            "--seed" if i + 1 < args.len() => {
                options.seed = Some(parse_seed(&args[i + 1])?);
                i += 1;
            }
            "--save" if i + 1 < args.len() => {
                options.save = Some(args[i + 1].clone());
                i += 1;
            }
            _ => positional.push(&args[i]),
        }
        i += 1;
    }

    Ok((positional, options))
}

fn load_tournament(path: &str, options: &Options) -> Result<Tournament, TournamentError> {
    let mut config = TournamentConfig::load(Path::new(path))?;
    if let Some(strategy) = options.strategy {
        config = config.with_strategy(strategy);
    }
    if let Some(seed) = options.seed {
        config = config.with_seed(seed);
    }
    Tournament::from_config(config)
}

fn run_tournament(args: &[String]) -> Result<(), TournamentError> {
    let (positional, options) = parse_options(args)?;
    let Some(path) = positional.first() else {
        eprintln!("Error: run requires a config file");
        print_usage();
        return Ok(());
    };

    let mut tournament = load_tournament(path, &options)?;
    println!("=== {} | strategy: {} ===", tournament, tournament.strategy_name());

    let champion = tournament.run()?.to_string();
    println!("The champion of '{}' is the {}.", tournament.name(), champion);
    println!();

    let results = tournament.results()?;
    results.print_report();

    if let Some(save) = options.save {
        results.save(Path::new(&save))?;
        println!("Results saved to {}", save);
    }
    Ok(())
}

fn compare_tournaments(args: &[String]) -> Result<(), TournamentError> {
    let (positional, options) = parse_options(args)?;
    if positional.len() < 2 {
        eprintln!("Error: compare requires two config files");
        print_usage();
        return Ok(());
    }

    let mut left = load_tournament(positional[0], &options)?;
    let mut right = load_tournament(positional[1], &options)?;
    left.run()?;
    right.run()?;

    for tournament in [&left, &right] {
        println!(
            "{}: champion {} with score {}",
            tournament,
            tournament.champion()?.sponsor(),
            tournament.champion_score()?
        );
    }

    let higher = better_of(&left, &right)?;
    println!();
    println!("The champion of the {} tournament scored higher.", higher.name());
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let result = match args[1].as_str() {
        "run" => run_tournament(&args[2..]),
        "compare" => compare_tournaments(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
