use std::process::ExitCode;

use advance::{maximize_advantage, Board, Color, Move, NoLegalMove};
use advance_bot_utils::{Bot, ProtocolArgs};
use clap::Parser;

#[derive(Parser)]
struct Args {
    #[command(flatten)]
    protocol: ProtocolArgs,
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    GreedyBot {}.run(args.protocol)
}

/// Looks only one ply ahead: takes a winning move if there is one, otherwise
/// the first move with the best material balance.
struct GreedyBot {}

impl Bot for GreedyBot {
    fn name(&self) -> &str {
        "greedy_bot"
    }

    fn play_turn(&mut self, board: &mut Board, color: Color) -> Result<Move, NoLegalMove> {
        let advantage = maximize_advantage(board, color);
        let mv = *advantage.moves.first().ok_or(NoLegalMove { color })?;
        mv.apply(board);
        Ok(mv)
    }
}
