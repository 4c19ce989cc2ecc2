use std::process::ExitCode;

use advance::{find_all_moves, Board, Color, Move, NoLegalMove};
use advance_bot_utils::{Bot, ProtocolArgs};
use clap::Parser;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use tracing::debug;

#[derive(Parser)]
struct Args {
    #[command(flatten)]
    protocol: ProtocolArgs,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);
    let rng = StdRng::seed_from_u64(seed);

    RandomBot { seed, rng }.run(args.protocol)
}

struct RandomBot {
    seed: u64,
    rng: StdRng,
}

impl Bot for RandomBot {
    fn name(&self) -> &str {
        "random_bot"
    }

    fn play_turn(&mut self, board: &mut Board, color: Color) -> Result<Move, NoLegalMove> {
        let moves = find_all_moves(board, color);
        debug!(seed = self.seed, candidates = moves.len());
        let mv = *moves.choose(&mut self.rng).ok_or(NoLegalMove { color })?;
        mv.apply(board);
        Ok(mv)
    }
}
