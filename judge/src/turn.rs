use advance::{find_all_moves, Board, Color, Move};
use tracing::debug;

use crate::error::IllegalMove;

/// What a player answered when asked to play a turn.
#[derive(Debug)]
pub enum TurnResponse {
    /// The player exited normally.
    Moved {
        /// The move report the player printed.
        report: String,
        /// The contents of its output file.
        output: std::io::Result<String>,
    },
    /// The player reported that it has no legal move.
    NoLegalMove,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    Moved { mv: Move, board: Board },
    /// The player has no legal move and loses.
    NoLegalMove,
}

/// Checks a player's answer against the position it was given.
///
/// A written board is accepted if some legal move of `color` leads to it,
/// the first such move is taken to be the one played.
pub fn judge_turn(
    board: &Board,
    color: Color,
    response: TurnResponse,
) -> Result<TurnOutcome, IllegalMove> {
    let legal_moves = find_all_moves(board, color);
    let (report, output) = match response {
        TurnResponse::NoLegalMove if legal_moves.is_empty() => {
            return Ok(TurnOutcome::NoLegalMove)
        }
        TurnResponse::NoLegalMove => {
            return Err(IllegalMove::ClaimedNoLegalMove {
                num_legal_moves: legal_moves.len(),
            })
        }
        TurnResponse::Moved { report, output } => (report, output),
    };

    let text = output.map_err(|err| IllegalMove::MissingOutput { err })?;
    let after: Board = text
        .parse()
        .map_err(|err| IllegalMove::MalformedOutput { err })?;
    let mv = legal_moves
        .into_iter()
        .find(|&mv| board.with_move(mv) == after)
        .ok_or(IllegalMove::UnreachableBoard)?;
    if report.trim() != mv.to_string() {
        debug!(%report, %mv, "Move report does not match the move found");
    }
    Ok(TurnOutcome::Moved { mv, board: after })
}
