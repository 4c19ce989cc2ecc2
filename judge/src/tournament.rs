use crate::game::{GameResult, WinReason};

/// Tally of the games between two players, split by how each game was won.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchScore {
    /// Wins because the opponent's General was captured.
    pub general_captured: [usize; 2],
    /// Wins because the opponent had no legal move.
    pub no_legal_move: [usize; 2],
    /// Wins because the opponent answered with an illegal move.
    pub illegal_move: [usize; 2],
    pub ties: usize,
}

impl MatchScore {
    pub fn record(&mut self, result: &GameResult) {
        match result {
            GameResult::WonByPlayer {
                player_idx,
                reason: WinReason::GeneralCaptured,
            } => self.general_captured[*player_idx] += 1,
            GameResult::WonByPlayer {
                player_idx,
                reason: WinReason::NoLegalMove,
            } => self.no_legal_move[*player_idx] += 1,
            GameResult::Tie => self.ties += 1,
            GameResult::IllegalMoveByPlayer { player_idx, .. } => {
                self.illegal_move[1 - player_idx] += 1
            }
        }
    }

    pub fn wins(&self, player_idx: usize) -> usize {
        self.general_captured[player_idx]
            + self.no_legal_move[player_idx]
            + self.illegal_move[player_idx]
    }

    pub fn num_games(&self) -> usize {
        self.wins(0) + self.wins(1) + self.ties
    }

    /// Multi-line result of one matchup, for the terminal.
    pub fn summary(&self, names: [&str; 2]) -> String {
        let mut result = format!("End result of {} vs {}:\n", names[0], names[1]);
        for (idx, name) in names.into_iter().enumerate() {
            result += &format!(
                "- {}: {} wins ({} by capturing the General, {} by leaving no legal move, {} through illegal moves)\n",
                name,
                self.wins(idx),
                self.general_captured[idx],
                self.no_legal_move[idx],
                self.illegal_move[idx]
            );
        }
        result += &format!("- {} ties", self.ties);
        result
    }
}

/// One row per matchup, each outcome column reads "wins of player 1 - wins
/// of player 2".
pub fn tournament_table(nicks: &[String], results: &[((usize, usize), MatchScore)]) -> String {
    let header = format!(
        " {:19} | {:19} | {:^9} | {:^9} | {:^9} | {:>5}",
        "player 1", "player 2", "captured", "no moves", "illegal", "ties"
    );
    let mut table = format!("{}\n{}\n", header, "-".repeat(header.chars().count()));
    for ((i, j), score) in results {
        table += &format!(
            " {:19} | {:19} | {:>3} - {:<3} | {:>3} - {:<3} | {:>3} - {:<3} | {:>5}\n",
            nicks[*i],
            nicks[*j],
            score.general_captured[0],
            score.general_captured[1],
            score.no_legal_move[0],
            score.no_legal_move[1],
            score.illegal_move[0],
            score.illegal_move[1],
            score.ties
        );
    }
    table
}
