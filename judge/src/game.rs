use advance::Color;
use tracing::{debug, trace};

use crate::error::IllegalMove;
use crate::player::Player;
use crate::turn::{judge_turn, TurnOutcome};
use crate::Config;

#[derive(Debug)]
pub enum GameResult {
    WonByPlayer { player_idx: usize, reason: WinReason },
    Tie,
    IllegalMoveByPlayer { player_idx: usize, err: IllegalMove },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WinReason {
    GeneralCaptured,
    NoLegalMove,
}

impl std::fmt::Display for WinReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WinReason::GeneralCaptured => write!(f, "the loser's General was captured"),
            WinReason::NoLegalMove => write!(f, "the loser had no legal move"),
        }
    }
}

/// Plays one game from the configured start position. `players[white_idx]`
/// plays White and moves first.
///
/// Returns an error only on communication failure, not when an
/// illegal move is played.
pub fn play_game(
    config: &mut Config,
    mut players: [&mut Player; 2],
    white_idx: usize,
) -> anyhow::Result<GameResult> {
    let mut colors = [Color::Black; 2];
    colors[white_idx] = Color::White;
    let names = [players[0].name.clone(), players[1].name.clone()];
    let mut board = config.start.clone();

    if let Some(rec) = &mut config.recorder {
        rec.start_game(&names[white_idx], &names[1 - white_idx], &board);
    }

    let mut current_player_idx = white_idx;
    let mut game_result = GameResult::Tie;
    for turn in 0..config.max_turns {
        let color = colors[current_player_idx];
        if board.general(color).is_none() {
            game_result = GameResult::WonByPlayer {
                player_idx: 1 - current_player_idx,
                reason: WinReason::GeneralCaptured,
            };
            break;
        }

        let response = players[current_player_idx].request_turn(&board, color)?;
        match judge_turn(&board, color, response) {
            Ok(TurnOutcome::Moved { mv, board: next }) => {
                trace!(turn, player = &names[current_player_idx], %color, %mv);
                if let Some(rec) = &mut config.recorder {
                    rec.store_turn(&names[current_player_idx], color, mv, &next);
                }
                board = next;
            }
            Ok(TurnOutcome::NoLegalMove) => {
                game_result = GameResult::WonByPlayer {
                    player_idx: 1 - current_player_idx,
                    reason: WinReason::NoLegalMove,
                };
                break;
            }
            Err(err) => {
                game_result = GameResult::IllegalMoveByPlayer {
                    player_idx: current_player_idx,
                    err,
                };
                break;
            }
        }
        current_player_idx = 1 - current_player_idx;
    }

    let summary = describe_result(&game_result, &names);
    debug!("{}", summary);
    if let Some(rec) = &mut config.recorder {
        rec.write_game_recording(&summary)?;
    }
    Ok(game_result)
}

fn describe_result(result: &GameResult, names: &[String; 2]) -> String {
    match result {
        GameResult::WonByPlayer { player_idx, reason } => {
            format!("{} won because {}", names[*player_idx], reason)
        }
        GameResult::Tie => String::from("Tie"),
        GameResult::IllegalMoveByPlayer { player_idx, err } => {
            format!("{} lost by an illegal move: {}", names[*player_idx], err)
        }
    }
}
