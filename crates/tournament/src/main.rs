//! Tournament CLI
//!
//! Replay a match history into surface Elo ratings and simulate tournaments.

use anyhow::{bail, Context};
use rating_core::{sort_chronologically, MatchRecord, RatingEngine, RatingTable};
use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tournament::{
    build_draw, seed_by_rating, BracketSimulator, RatingLookup, SeasonConfig, TournamentSpec,
};

const DEFAULT_TOP: usize = 10;

fn print_usage() {
    println!("Season Tournament Simulator");
    println!();
    println!("Usage:");
    println!("  tournament ratings <history.json> [--config FILE] [--surface S] [--top N]");
    println!("  tournament simulate <history.json> [--config FILE] [--trials N] [--draw-size N] [--seed N] [--top N]");
    println!();
    println!("History is a JSON array of match records:");
    println!("  [{{\"date\": \"2024-01-01\", \"surface\": \"Hard\", \"winner\": \"A\", \"loser\": \"B\"}}]");
    println!();
    println!("Examples:");
    println!("  tournament ratings matches_2024.json --surface Clay --top 20");
    println!("  tournament simulate matches_2024.json --config season.toml --trials 4000 --seed 42");
}

/// Options shared by both commands
#[derive(Debug, Default)]
struct Options {
    config: Option<PathBuf>,
    surface: Option<String>,
    top: Option<usize>,
    trials: Option<u64>,
    draw_size: Option<usize>,
    seed: Option<u64>,
}

fn parse_value<T: FromStr>(args: &[String], i: usize, flag: &str) -> anyhow::Result<T> {
    let Some(raw) = args.get(i + 1) else {
        bail!("{} requires a value", flag);
    };
    raw.parse()
        .map_err(|_| anyhow::anyhow!("invalid value for {}: {}", flag, raw))
}

fn parse_options(args: &[String]) -> anyhow::Result<Options> {
    let mut options = Options::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => options.config = Some(parse_value(args, i, "--config")?),
            "--surface" | "-s" => options.surface = Some(parse_value(args, i, "--surface")?),
            "--top" | "-n" => options.top = Some(parse_value(args, i, "--top")?),
            "--trials" | "-t" => options.trials = Some(parse_value(args, i, "--trials")?),
            "--draw-size" | "-d" => options.draw_size = Some(parse_value(args, i, "--draw-size")?),
            "--seed" => options.seed = Some(parse_value(args, i, "--seed")?),
            other => bail!("unknown option: {}", other),
        }
        i += 2;
    }

    Ok(options)
}

fn load_config(options: &Options) -> anyhow::Result<SeasonConfig> {
    let mut config = match &options.config {
        Some(path) => SeasonConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SeasonConfig::default(),
    };

    if let Some(trials) = options.trials {
        config.simulation.trials = trials;
    }
    if let Some(draw_size) = options.draw_size {
        config.simulation.draw_size = draw_size;
    }
    if options.seed.is_some() {
        config.simulation.rng_seed = options.seed;
    }
    config.simulation.validate()?;
    Ok(config)
}

fn load_history(path: &Path) -> anyhow::Result<Vec<MatchRecord>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("reading match history {}", path.display()))?;
    let mut history: Vec<MatchRecord> = serde_json::from_str(&contents)
        .with_context(|| format!("parsing match history {}", path.display()))?;
    sort_chronologically(&mut history);
    Ok(history)
}

fn replay(path: &Path, config: &SeasonConfig) -> anyhow::Result<RatingTable> {
    let history = load_history(path)?;
    let processed = RatingEngine::new(config.elo).process(&history)?;
    tracing::info!(
        matches = processed.pre_match.len(),
        players = processed.table.players().len(),
        "ratings replayed"
    );
    Ok(processed.table)
}

fn print_leaderboard(table: &RatingTable, surface: Option<&str>, top: usize) {
    let label = surface.unwrap_or("Blended");
    println!("\n=== {} Leaderboard ===", label);
    println!("{:<30} {:>8} {:>8}", "Player", "Elo", "Matches");
    println!("{}", "-".repeat(48));
    for (name, rating) in table.leaderboard(surface).into_iter().take(top) {
        let matches: u32 = match surface {
            Some(s) => table.matches_played(&name, s),
            None => table
                .surfaces()
                .into_iter()
                .map(|s| table.matches_played(&name, s))
                .sum(),
        };
        println!("{:<30} {:>8.1} {:>8}", name, rating, matches);
    }
    println!();
}

fn run_ratings(args: &[String]) -> anyhow::Result<()> {
    let Some(history_path) = args.first() else {
        bail!("ratings requires a match history file");
    };
    let options = parse_options(&args[1..])?;
    let config = load_config(&options)?;

    let table = replay(Path::new(history_path), &config)?;
    print_leaderboard(
        &table,
        options.surface.as_deref(),
        options.top.unwrap_or(DEFAULT_TOP),
    );
    Ok(())
}

fn simulate_tournament<L: RatingLookup>(
    simulator: &BracketSimulator,
    spec: &TournamentSpec,
    field: Vec<String>,
    lookup: &L,
    top: usize,
) -> anyhow::Result<()> {
    let seeded = seed_by_rating(&field, lookup);
    // Shrink the bracket for small fields so no pairing is bye-vs-bye
    let draw_size = simulator
        .config()
        .draw_size
        .min(seeded.len().next_power_of_two());
    let draw = build_draw(&seeded, draw_size)
        .with_context(|| format!("building draw for {}", spec.name))?;

    let result = simulator
        .run(&draw, lookup)
        .with_context(|| format!("simulating {}", spec.name))?;
    println!("{}", result.generate_report(&spec.name, top));
    Ok(())
}

fn run_simulate(args: &[String]) -> anyhow::Result<()> {
    let Some(history_path) = args.first() else {
        bail!("simulate requires a match history file");
    };
    let options = parse_options(&args[1..])?;
    let config = load_config(&options)?;
    let top = options.top.unwrap_or(DEFAULT_TOP);

    let table = replay(Path::new(history_path), &config)?;
    let simulator = BracketSimulator::new(config.simulation.clone());

    let tournaments = if config.tournaments.is_empty() {
        vec![TournamentSpec {
            name: "Season".to_string(),
            surface: options.surface.clone(),
            entrants: None,
        }]
    } else {
        config.tournaments.clone()
    };

    for spec in &tournaments {
        let surface = spec.surface.as_deref();
        let field = match &spec.entrants {
            Some(entrants) => entrants.clone(),
            None => table
                .leaderboard(surface)
                .into_iter()
                .take(config.simulation.draw_size)
                .map(|(name, _)| name)
                .collect(),
        };

        match surface {
            Some(surface) => {
                simulate_tournament(&simulator, spec, field, &table.surface_view(surface), top)?
            }
            None => simulate_tournament(&simulator, spec, field, &table.blended_view(), top)?,
        }
    }

    Ok(())
}

fn to_log_level(env: String) -> Option<tracing::Level> {
    tracing::Level::from_str(&env.to_uppercase()).ok()
}

fn main() -> anyhow::Result<()> {
    let log_level = env::var("LOG_LEVEL")
        .ok()
        .and_then(to_log_level)
        .unwrap_or(tracing::Level::INFO);
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    match args[1].as_str() {
        "ratings" | "elo" | "leaderboard" => run_ratings(&args[2..]),
        "simulate" | "sim" => run_simulate(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {}", other);
            print_usage();
            Ok(())
        }
    }
}
