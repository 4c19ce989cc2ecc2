use std::error::Error;
use std::path::PathBuf;

use advance_bot_utils::{initialize_logging, load_board};
use clap::Parser;
use judge::{
    play_game, tournament_table, Config, GameResult, MatchScore, Player, PlayerConfig, Recorder,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};
use tracing_subscriber::filter::LevelFilter;

/// Plays every pair of bots against each other, once with each color.
#[derive(Parser)]
struct Args {
    /// JSON files describing the players: {"nick": ..., "cmd": ..., "args": [...]}
    #[clap(num_args(2..), value_delimiter = ' ')]
    player_configs: Vec<PathBuf>,

    /// Board file with the start position of every game
    #[arg(short, long)]
    board: PathBuf,

    /// Games that reach this many turns end in a tie
    #[arg(short, long, default_value_t = 200)]
    max_turns: usize,

    /// Seed for choosing who plays White first
    #[arg(long)]
    seed: Option<u64>,

    /// End the whole tournament at the first illegal move
    #[arg(short, long, default_value_t = false)]
    stop_on_illegal_move: bool,

    /// Write every game as a JSON file into this directory
    #[arg(short, long)]
    record_games_to_directory: Option<PathBuf>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

/// "outer error: inner error: ..."
fn error_chain(err: &(dyn Error + 'static)) -> String {
    std::iter::successors(Some(err), |&err| err.source())
        .map(|err| err.to_string())
        .collect::<Vec<_>>()
        .join(": ")
}

/// Plays two games, so that each player gets to be White once. The flag in
/// the result is set if an illegal move should end the tournament.
fn play_matchup(
    config: &mut Config,
    players: [&mut Player; 2],
    stop_on_illegal_move: bool,
) -> anyhow::Result<(MatchScore, bool)> {
    let [player_1, player_2] = players;
    let mut match_score = MatchScore::default();

    let first_white_idx = config.rng.gen_range(0..2);
    for game_idx in 0..2 {
        let white_idx = (first_white_idx + game_idx) % 2;
        let result = play_game(config, [&mut *player_1, &mut *player_2], white_idx)?;
        match_score.record(&result);
        let names = [&player_1.name, &player_2.name];
        match result {
            GameResult::WonByPlayer { player_idx, reason } => {
                debug!(winner = names[player_idx], game_idx, %reason);
            }
            GameResult::Tie => debug!(game_idx, "Tie"),
            GameResult::IllegalMoveByPlayer { player_idx, err } => {
                warn!(
                    player = names[player_idx],
                    game_idx,
                    "Illegal move: {}",
                    error_chain(&err)
                );
                if stop_on_illegal_move {
                    return Ok((match_score, true));
                }
            }
        }
    }
    Ok((match_score, false))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);

    let recorder = match args.record_games_to_directory {
        Some(dir_path) => Some(Recorder::new(dir_path)?),
        None => None,
    };
    let mut config = Config {
        rng: StdRng::seed_from_u64(seed),
        recorder,
        start: load_board(&args.board)?,
        max_turns: args.max_turns,
    };

    let player_configs = args
        .player_configs
        .iter()
        .map(|path| PlayerConfig::load(path))
        .collect::<anyhow::Result<Vec<PlayerConfig>>>()?;
    let nicks: Vec<String> = player_configs.iter().map(|c| c.nick.clone()).collect();

    let mut match_results = Vec::new();
    'tournament: for i1 in 0..player_configs.len() {
        for i2 in i1 + 1..player_configs.len() {
            let mut player_1 = Player::from_config(&player_configs[i1])?;
            let mut player_2 = Player::from_config(&player_configs[i2])?;

            let (match_score, stop) = play_matchup(
                &mut config,
                [&mut player_1, &mut player_2],
                args.stop_on_illegal_move,
            )?;
            eprintln!("{}", match_score.summary([&nicks[i1], &nicks[i2]]));
            match_results.push(((i1, i2), match_score));
            if stop {
                info!("Stopping the tournament after an illegal move");
                break 'tournament;
            }
        }
    }

    if player_configs.len() > 2 {
        println!("\n{}", tournament_table(&nicks, &match_results));
    }

    Ok(())
}
