//! Skirmish - Entry Point
//!
//! Runs the Hero vs Goblin duel, prints the fight trace to stdout and exits
//! with 0 if the enemy fell, 1 if the player fell.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;

use skirmish::combat::CombatLog;
use skirmish::core::config::{MatchConfig, DEFAULT_MAX_ROUNDS};
use skirmish::core::error::Result;
use skirmish::game::scenario::{self, Loadout};

/// Turn-based duel between a hero and a goblin
#[derive(Parser, Debug)]
#[command(name = "skirmish")]
#[command(about = "Run the Hero vs Goblin duel and print the fight trace")]
struct Args {
    /// Random seed for deterministic runs (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,

    /// Rounds before the match is abandoned; 0 removes the cap
    #[arg(long, default_value_t = DEFAULT_MAX_ROUNDS)]
    max_rounds: u32,

    /// Equip both sides with random weapons instead of Sword vs Axe
    #[arg(long)]
    random_weapons: bool,

    /// Print a JSON match report after the trace
    #[arg(long)]
    json: bool,
}

fn main() {
    // Diagnostics go to stderr so the trace on stdout stays clean
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("skirmish=warn")),
        )
        .init();

    let args = Args::parse();

    match run(args) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("skirmish: {}", e);
            std::process::exit(3);
        }
    }
}

/// Turn parsed flags into the match configuration and loadout
fn match_settings(args: &Args, seed: u64) -> (MatchConfig, Loadout) {
    let config = MatchConfig {
        seed,
        max_rounds: (args.max_rounds > 0).then_some(args.max_rounds),
    };
    let loadout = if args.random_weapons {
        Loadout::Random
    } else {
        Loadout::Fixed
    };
    (config, loadout)
}

fn run(args: Args) -> Result<i32> {
    let seed = args.seed.unwrap_or_else(time_seed);
    let (config, loadout) = match_settings(&args, seed);

    // Stream each trace line as it happens; history is not needed here
    let trace = CombatLog::with_sink(Box::new(io::stdout())).without_history();
    let rng = ChaCha8Rng::seed_from_u64(seed);
    let mut game = scenario::build(config, rng, loadout)?.with_log(trace);
    let outcome = game.start_game();
    game.log_mut().finish()?;

    if let Some(report) = game.report() {
        tracing::info!("{}", report.summary());
        if args.json {
            let mut out = io::stdout().lock();
            writeln!(out, "{}", report.to_json()?)?;
            out.flush()?;
        }
    }

    Ok(outcome.exit_code())
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("skirmish").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults_match_fixed_scenario() {
        let args = parse(&[]);
        let (config, loadout) = match_settings(&args, 99);
        assert_eq!(config.seed, 99);
        assert_eq!(config.max_rounds, Some(DEFAULT_MAX_ROUNDS));
        assert_eq!(loadout, Loadout::Fixed);
        assert!(!args.json);
    }

    #[test]
    fn test_zero_max_rounds_removes_cap() {
        let args = parse(&["--max-rounds", "0"]);
        let (config, _) = match_settings(&args, 1);
        assert_eq!(config.max_rounds, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_random_weapons_flag() {
        let args = parse(&["--random-weapons", "--seed", "5", "--max-rounds", "12"]);
        assert_eq!(args.seed, Some(5));
        let (config, loadout) = match_settings(&args, 5);
        assert_eq!(config.max_rounds, Some(12));
        assert_eq!(loadout, Loadout::Random);
    }

    #[test]
    fn test_negative_seed_rejected() {
        let result = Args::try_parse_from(["skirmish", "--seed", "-3"]);
        assert!(result.is_err());
    }
}
