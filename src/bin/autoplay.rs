use anyhow::{anyhow, Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use deck_match::{
    play_out, Command, GameConfig, GameRng, GreedyPolicy, MatchGame, Phase, Policy, RandomPolicy,
};

const LOG_TARGET: &str = "autoplay";
const DEFAULT_FILTER: &str = "autoplay=info,deck_match=warn";

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PolicyKind {
    Greedy,
    Random,
}

#[derive(Debug, Parser)]
#[command(name = "autoplay")]
#[command(about = "Play sum-matching games headlessly and report the outcomes", long_about = None)]
struct Args {
    /// Level name (easy, medium, hard) or index
    #[arg(long, default_value = "easy")]
    level: String,

    /// Seed for the first game; later games use seed + n
    #[arg(long, env = "DECK_MATCH_SEED")]
    seed: Option<u64>,

    /// Number of games to play
    #[arg(long, default_value_t = 1)]
    games: u64,

    /// Which automated player to use
    #[arg(long, value_enum, default_value_t = PolicyKind::Greedy)]
    policy: PolicyKind,

    /// Only deal full hands, as in the classic rules
    #[arg(long)]
    strict_draws: bool,

    /// Give up on a game after this many commands
    #[arg(long, default_value_t = 10_000)]
    max_steps: usize,

    /// Toggle structured (JSON) tracing output
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.json)?;

    let config = GameConfig::default().with_partial_draws(!args.strict_draws);
    config.validate().context("invalid game configuration")?;
    let level = find_level(&config, &args.level)?;
    let seed = args.seed.unwrap_or_else(rand::random);

    info!(
        target: LOG_TARGET,
        level = %config.levels[level].name,
        seed,
        games = args.games,
        policy = ?args.policy,
        "starting autoplay"
    );

    let mut policy: Box<dyn Policy> = match args.policy {
        PolicyKind::Greedy => Box::new(GreedyPolicy),
        PolicyKind::Random => Box::new(RandomPolicy),
    };

    let (mut won, mut lost, mut unfinished) = (0u64, 0u64, 0u64);
    for n in 0..args.games {
        let game_seed = seed.wrapping_add(n);
        let mut game = MatchGame::new(config.clone(), game_seed)?;
        let mut rng = GameRng::new(game_seed);

        game.apply(Command::StartLevel(level));
        let phase = play_out(&mut game, policy.as_mut(), &mut rng, args.max_steps);
        debug!(target: LOG_TARGET, game = n, seed = game_seed, ?phase, "game finished");

        match phase {
            Phase::Won => won += 1,
            Phase::Lost => lost += 1,
            Phase::NotStarted | Phase::Playing => unfinished += 1,
        }
    }

    info!(target: LOG_TARGET, won, lost, unfinished, "autoplay complete");
    println!("won {won}, lost {lost}, unfinished {unfinished} of {} games", args.games);
    Ok(())
}

fn find_level(config: &GameConfig, wanted: &str) -> Result<usize> {
    if let Ok(index) = wanted.parse::<usize>() {
        return config
            .level(index)
            .map(|_| index)
            .ok_or_else(|| anyhow!("no level at index {index}"));
    }
    config
        .levels
        .iter()
        .position(|l| l.name.eq_ignore_ascii_case(wanted))
        .ok_or_else(|| anyhow!("unknown level {wanted:?}"))
}

fn init_tracing(json: bool) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true);

    if json {
        builder
            .with_ansi(false)
            .json()
            .try_init()
            .map_err(|err| anyhow!("failed to initialize tracing subscriber: {err}"))?;
    } else {
        builder
            .try_init()
            .map_err(|err| anyhow!("failed to initialize tracing subscriber: {err}"))?;
    }
    Ok(())
}
