use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::{is_in_danger, Board, Color, Move, NoLegalMove};

/// How many plies [`Engine`] looks ahead unless told otherwise.
pub const DEFAULT_SEARCH_DEPTH: u32 = 3;

/// All legal moves for `color`: the moves of its pieces that do not leave its
/// own General attackable.
///
/// Moves are ordered by the row-major position of the moving piece, then by
/// the piece's own generation order.
pub fn find_all_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut legal = Vec::new();
    let mut candidates = Vec::new();
    for (i, j, cell) in board.iter() {
        if cell.color != color {
            continue;
        }
        candidates.clear();
        cell.piece.find_moves_into(i, j, board, &mut candidates);
        for &mv in &candidates {
            if !is_in_danger(color, &board.with_move(mv)) {
                legal.push(mv);
            }
        }
    }
    legal
}

/// The result of [`maximize_advantage()`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Advantage {
    /// Whether `moves` is a single move after which the opponent cannot move.
    pub winning: bool,
    /// The best moves, in generation order.
    pub moves: Vec<Move>,
}

/// Looks one ply ahead.
///
/// If some legal move leaves the opponent without a legal reply, the first
/// such move is returned on its own. Otherwise all moves that reach the best
/// material balance are returned.
pub fn maximize_advantage(board: &Board, color: Color) -> Advantage {
    let mut best_score = i32::MIN;
    let mut moves = Vec::new();
    for mv in find_all_moves(board, color) {
        let after = board.with_move(mv);
        if find_all_moves(&after, color.opponent()).is_empty() {
            return Advantage {
                winning: true,
                moves: vec![mv],
            };
        }
        let score = after.evaluate(color);
        match score.cmp(&best_score) {
            Ordering::Greater => {
                best_score = score;
                moves.clear();
                moves.push(mv);
            }
            Ordering::Equal => moves.push(mv),
            Ordering::Less => {}
        }
    }
    Advantage {
        winning: false,
        moves,
    }
}

/// The result of [`Engine::predict()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Prediction {
    /// Material balance for the engine's player, or `i32::MAX`/`i32::MIN`
    /// for a won/lost position.
    pub score: i32,
    /// All moves at this node that reach `score`, in generation order.
    pub moves: Vec<Move>,
}

/// Depth-limited minimax search with alpha-beta pruning.
///
/// At every node only the moves returned by [`maximize_advantage()`] are
/// explored, not every legal move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Engine {
    /// The side the engine plays for. Scores are from its point of view.
    pub player: Color,
    /// Plies to search, at least 1.
    pub depth: u32,
}

impl Engine {
    pub fn new(player: Color) -> Self {
        Self {
            player,
            depth: DEFAULT_SEARCH_DEPTH,
        }
    }

    /// Panics if `depth` is zero.
    pub fn with_depth(self, depth: u32) -> Self {
        assert!(depth > 0, "Search depth must be at least 1");
        Self { depth, ..self }
    }

    /// Scores the position with `color` to move, searching `depth` plies.
    pub fn predict(
        &self,
        board: &Board,
        color: Color,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
    ) -> Prediction {
        if depth == 0 {
            return Prediction {
                score: board.evaluate(self.player),
                moves: Vec::new(),
            };
        }

        let maximizing = color == self.player;
        let Advantage { winning, moves } = maximize_advantage(board, color);
        trace!(%color, depth, winning, candidates = moves.len());
        if winning {
            let score = if maximizing { i32::MAX } else { i32::MIN };
            return Prediction { score, moves };
        }

        let mut best = Prediction {
            score: if maximizing { i32::MIN } else { i32::MAX },
            moves: Vec::new(),
        };
        for mv in moves {
            let child = self.predict(
                &board.with_move(mv),
                color.opponent(),
                depth - 1,
                alpha,
                beta,
            );
            match (maximizing, child.score.cmp(&best.score)) {
                (true, Ordering::Greater) | (false, Ordering::Less) => {
                    best.score = child.score;
                    best.moves.clear();
                    best.moves.push(mv);
                }
                (_, Ordering::Equal) => best.moves.push(mv),
                _ => {}
            }
            if maximizing {
                alpha = alpha.max(best.score);
            } else {
                beta = beta.min(best.score);
            }
            if beta <= alpha {
                break;
            }
        }
        best
    }

    /// Searches from the root with the player to move.
    pub fn best_moves(&self, board: &Board) -> Prediction {
        self.predict(board, self.player, self.depth, i32::MIN, i32::MAX)
    }

    /// Chooses a move with [`Self::best_moves()`] and plays it on the board.
    ///
    /// Ties are broken by generation order. If there is no legal move, the
    /// board is left untouched.
    pub fn play_one_turn(&self, board: &mut Board) -> Result<Move, NoLegalMove> {
        let Prediction { score, moves } = self.best_moves(board);
        let mv = *moves.first().ok_or(NoLegalMove { color: self.player })?;
        debug!(%mv, score, tied = moves.len(), "Chose move");
        mv.apply(board);
        Ok(mv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{board, MoveKind, PieceKind};

    #[test]
    fn moves_leaving_the_general_attacked_are_filtered() {
        let board = board!(
            "G........"
            "........."
            "........."
            "........."
            "........."
            ".....Z..."
            "........."
            "........."
            "mm......."
        );
        assert!(!PieceKind::Zombie.find_moves(5, 5, &board).is_empty());
        assert!(find_all_moves(&board, Color::White).is_empty());
    }

    #[test]
    fn blocking_moves_are_legal() {
        let board = board!(
            "G........"
            "........."
            "........."
            "........."
            "........."
            ".B......."
            "........."
            "........."
            "m........"
        );
        let legal = find_all_moves(&board, Color::White);
        assert!(legal.contains(&Move::new(MoveKind::Build, (5, 1), (4, 0))));
        assert!(legal.contains(&Move::new(MoveKind::Move, (5, 1), (6, 0))));
        assert!(!legal.contains(&Move::new(MoveKind::Build, (5, 1), (4, 2))));
        assert!(legal.contains(&Move::new(MoveKind::Move, (0, 0), (0, 1))));
    }

    #[test]
    fn winning_move_beats_material() {
        let board = board!(
            "g........"
            "........."
            "........."
            "........."
            "........."
            "........."
            "........."
            "....G...M"
            ".M...z..."
        );
        assert_eq!(
            maximize_advantage(&board, Color::White),
            Advantage {
                winning: true,
                moves: vec![Move::new(MoveKind::Move, (7, 8), (1, 8))],
            }
        );
    }

    #[test]
    fn best_material_is_chosen() {
        let board = board!(
            "b.......g"
            "........."
            "........."
            "........."
            "M.....d.."
            "........."
            "........."
            "........."
            "G........"
        );
        assert_eq!(
            maximize_advantage(&board, Color::White),
            Advantage {
                winning: false,
                moves: vec![Move::new(MoveKind::Capture, (4, 0), (4, 6))],
            }
        );

        let engine = Engine::new(Color::White).with_depth(1);
        assert_eq!(
            engine.best_moves(&board),
            Prediction {
                score: 2,
                moves: vec![Move::new(MoveKind::Capture, (4, 0), (4, 6))],
            }
        );
        let engine = engine.with_depth(2);
        assert_eq!(
            engine.best_moves(&board),
            Prediction {
                score: 2,
                moves: vec![Move::new(MoveKind::Capture, (4, 0), (4, 6))],
            }
        );
    }

    #[test]
    fn ties_are_all_kept() {
        let board = board!(
            "g........"
            "........."
            "........."
            "........."
            "....G...."
            "........."
            "........."
            "........."
            "........."
        );
        let advantage = maximize_advantage(&board, Color::White);
        assert!(!advantage.winning);
        assert_eq!(advantage.moves, find_all_moves(&board, Color::White));
        assert_eq!(advantage.moves.len(), 8);
    }

    #[test]
    fn forced_loss_scores_minimum() {
        // The General's only escape walks into a mate by the second miner
        let board = board!(
            ".m......g"
            "........."
            "........m"
            "........."
            "........."
            "........."
            "........."
            "........."
            "G........"
        );
        let escape = Move::new(MoveKind::Move, (8, 0), (7, 0));
        assert_eq!(find_all_moves(&board, Color::White), vec![escape]);

        let engine = Engine::new(Color::White).with_depth(2);
        let after = board.with_move(escape);
        assert_eq!(
            engine.predict(&after, Color::Black, 1, i32::MIN, i32::MAX).score,
            i32::MIN
        );
        assert_eq!(
            engine.best_moves(&board),
            Prediction {
                score: i32::MIN,
                moves: vec![escape],
            }
        );
    }

    #[test]
    fn cutoff_stops_collecting_ties() {
        let board = board!(
            "g........"
            "........."
            "........."
            "........."
            "....G...."
            "........."
            "........."
            "........."
            "........."
        );
        let engine = Engine::new(Color::White).with_depth(1);

        // Minimizing node: every reply scores 0
        let full = engine.predict(&board, Color::Black, 1, i32::MIN, i32::MAX);
        assert_eq!(full.score, 0);
        assert_eq!(full.moves.len(), 3);
        assert_eq!(engine.predict(&board, Color::Black, 1, -1, i32::MAX), full);
        assert_eq!(
            engine.predict(&board, Color::Black, 1, 0, i32::MAX),
            Prediction {
                score: 0,
                moves: vec![Move::new(MoveKind::Move, (0, 0), (0, 1))],
            }
        );

        // Maximizing node
        assert_eq!(
            engine.predict(&board, Color::White, 1, i32::MIN, 0),
            Prediction {
                score: 0,
                moves: vec![Move::new(MoveKind::Move, (4, 4), (3, 3))],
            }
        );
        assert_eq!(
            engine
                .predict(&board, Color::White, 1, i32::MIN, i32::MAX)
                .moves
                .len(),
            8
        );
    }

    #[test]
    fn play_one_turn_takes_the_general() {
        let mut board = board!(
            "........."
            "........."
            "........."
            "........."
            ".....g..."
            "....Z...."
            "........."
            "........."
            "G........"
        );
        let mv = Engine::new(Color::White).play_one_turn(&mut board).unwrap();
        assert_eq!(mv, Move::new(MoveKind::Capture, (5, 4), (4, 5)));
        assert_eq!(
            board.to_string(),
            "\
            .........\n\
            .........\n\
            .........\n\
            .........\n\
            .....Z...\n\
            .........\n\
            .........\n\
            .........\n\
            G........\n"
        );
    }

    #[test]
    fn no_legal_move_leaves_the_board_untouched() {
        let mut board = board!(
            "G........"
            "........."
            "........."
            "........."
            "........."
            "........."
            "........."
            "........."
            "mm......."
        );
        let before = board.clone();
        assert_eq!(
            Engine::new(Color::White).play_one_turn(&mut board),
            Err(NoLegalMove {
                color: Color::White
            })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn search_is_deterministic() {
        let board = board!(
            "..zzgzz.."
            "...bsj..."
            "..#...#.."
            "....d...."
            "........."
            "....D...."
            "..#...#.."
            "...JSB..."
            "..ZZGZZ.."
        );
        let engine = Engine::new(Color::Black).with_depth(2);
        assert_eq!(engine.best_moves(&board), engine.best_moves(&board));
    }
}
