use serde::{Deserialize, Serialize};

use crate::{Board, Cell, PieceKind};

/// The kind of a [`Move`], which determines how it changes the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveKind {
    /// Step or slide onto an empty cell.
    Move,
    /// Take an enemy piece by moving onto its cell.
    Capture,
    /// A Jester trades places with an allied piece.
    Swap,
    /// A Jester turns an adjacent enemy piece to its own side.
    Convince,
    /// A Builder puts a wall on an adjacent empty cell without moving.
    Build,
    /// A Catapult removes an enemy piece at range without moving.
    Shoot,
    /// A Miner removes a wall and moves onto its cell.
    Demolish,
}

impl MoveKind {
    pub fn name(self) -> &'static str {
        match self {
            MoveKind::Move => "Move",
            MoveKind::Capture => "Capture",
            MoveKind::Swap => "Swap",
            MoveKind::Convince => "Convince",
            MoveKind::Build => "Build",
            MoveKind::Shoot => "Shoot",
            MoveKind::Demolish => "Demolish",
        }
    }

    /// Does this move remove the piece on its end cell?
    pub fn is_attack(self) -> bool {
        matches!(self, MoveKind::Capture | MoveKind::Shoot)
    }
}

impl std::fmt::Display for MoveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A single move, from the cell of the acting piece to its target cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub kind: MoveKind,
    pub start: (i8, i8),
    pub end: (i8, i8),
}

impl Move {
    pub fn new(kind: MoveKind, start: (i8, i8), end: (i8, i8)) -> Self {
        Self { kind, start, end }
    }

    /// Changes the board according to this move.
    ///
    /// Legality is not checked, that is the job of move generation.
    pub fn apply(&self, board: &mut Board) {
        let Move { kind, start, end } = *self;
        match kind {
            MoveKind::Move | MoveKind::Capture => {
                let mover = board[start];
                board[start].piece = PieceKind::Empty;
                board[end] = mover;
            }
            MoveKind::Swap => {
                // Only the kinds are exchanged, swap partners share a color
                let piece = board[start].piece;
                board[start].piece = board[end].piece;
                board[end].piece = piece;
            }
            MoveKind::Convince => {
                board[end].color = board[start].color;
            }
            MoveKind::Build => {
                board[end].piece = PieceKind::Wall;
            }
            MoveKind::Shoot => {
                board[end].piece = PieceKind::Empty;
            }
            MoveKind::Demolish => {
                board[end] = Cell::new(PieceKind::Miner, board[start].color);
                board[start].piece = PieceKind::Empty;
            }
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}, [{}, {}] -> [{}, {}]",
            self.kind, self.start.0, self.start.1, self.end.0, self.end.1
        )
    }
}
