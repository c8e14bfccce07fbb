//! Headless match runner.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::error;
use pvp_life::{
    Algorithm, Coord, GameState, MatchConfig, Mode, Color, RandomSoup, presets,
    application::Placement,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    Single,
    Two,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AlgorithmArg {
    Serial,
    Parallel,
}

/// Run a Game of Life or PvP Life match without a display
#[derive(Parser, Debug)]
#[command(name = "pvp-life")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON match config; flags below override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Rule set
    #[arg(short, long)]
    mode: Option<ModeArg>,

    /// Stop after this many generations (-1 = no cap)
    #[arg(long, allow_hyphen_values = true)]
    cap: Option<i64>,

    /// Candidate evaluation strategy
    #[arg(short, long)]
    algorithm: Option<AlgorithmArg>,

    /// Preset to seed; a random soup is used when omitted
    #[arg(short, long)]
    pattern: Option<String>,

    /// In two-color mode, give A the left half of the soup and B the right
    #[arg(long)]
    split: bool,

    /// RNG seed for the random soup
    #[arg(short, long)]
    seed: Option<u64>,

    /// Hard limit on steps taken by this run
    #[arg(long, default_value = "1000")]
    max_steps: u64,
}

fn build_config(args: &Args) -> Result<MatchConfig, String> {
    let mut config = match &args.config {
        Some(path) => MatchConfig::from_path(path).map_err(|e| e.to_string())?,
        None => MatchConfig::default(),
    };
    if let Some(mode) = args.mode {
        config.mode = match mode {
            ModeArg::Single => Mode::SingleColor,
            ModeArg::Two => Mode::TwoColor,
        };
    }
    if let Some(cap) = args.cap {
        config.iteration_cap = cap;
    }
    if let Some(algorithm) = args.algorithm {
        config.algorithm = match algorithm {
            AlgorithmArg::Serial => Algorithm::Serial,
            AlgorithmArg::Parallel => Algorithm::Parallel,
        };
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    config.validate().map_err(|e| e.to_string())?;
    Ok(config)
}

fn run(args: &Args) -> Result<(), String> {
    let config = build_config(args)?;
    let mut game = GameState::from_config(&config);

    match &args.pattern {
        Some(name) => {
            let pattern = presets::by_name(name).ok_or_else(|| format!("unknown pattern '{name}'"))?;
            if config.mode == Mode::TwoColor {
                // Two copies facing each other, one per color
                let gap = config.board_extent / 2;
                game.place(&pattern, Coord::new(-gap, 0), Color::A).map_err(|e| e.to_string())?;
                game.place(&pattern, Coord::new(gap, 0), Color::B).map_err(|e| e.to_string())?;
            } else {
                game.seed(&pattern).map_err(|e| e.to_string())?;
            }
        }
        None => {
            let placement = if args.split { Placement::Split } else { Placement::Mixed };
            RandomSoup::from_config(&config)
                .with_placement(placement)
                .fill(&mut game, config.seed)
                .map_err(|e| e.to_string())?;
        }
    }

    let status = game.run_until_end(args.max_steps).map_err(|e| e.to_string())?;
    let (a, b) = game.scores();

    println!("mode:        {}", game.mode().name());
    println!("generations: {}", game.generation());
    println!("alive:       {}", game.alive_count());
    if game.mode() == Mode::TwoColor {
        println!("score:       A {a} - B {b}");
    }
    match game.result() {
        Ok(result) => println!("result:      {result:?}"),
        Err(_) => println!("status:      {status:?} (step limit reached)"),
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            error!("{message}");
            ExitCode::FAILURE
        }
    }
}
