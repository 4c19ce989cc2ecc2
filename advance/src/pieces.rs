use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Board, Move, MoveKind, BOARD_SIZE};

/// One of the two sides.
///
/// White pieces are written in upper case and advance towards row 0,
/// black pieces are written in lower case and advance towards the last row.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opponent(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// The error type for the [`FromStr`] instance of [`Color`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorFromStrErr(pub String);

impl std::error::Error for ColorFromStrErr {}

impl std::fmt::Display for ColorFromStrErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' is neither white nor black", self.0)
    }
}

impl FromStr for Color {
    type Err = ColorFromStrErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("white") {
            Ok(Color::White)
        } else if s.eq_ignore_ascii_case("black") {
            Ok(Color::Black)
        } else {
            Err(ColorFromStrErr(String::from(s)))
        }
    }
}

/// What occupies a cell.
///
/// `Empty` and `Wall` are terrain: they never move and their owner is
/// meaningless. Everything else is a piece with its own movement rules, see
/// [`PieceKind::find_moves()`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum PieceKind {
    Empty,
    Wall,
    Zombie,
    Builder,
    Miner,
    Jester,
    Sentinel,
    Catapult,
    Dragon,
    General,
}

pub static ALL_PIECE_KINDS: [PieceKind; 10] = [
    PieceKind::Empty,
    PieceKind::Wall,
    PieceKind::Zombie,
    PieceKind::Builder,
    PieceKind::Miner,
    PieceKind::Jester,
    PieceKind::Sentinel,
    PieceKind::Catapult,
    PieceKind::Dragon,
    PieceKind::General,
];

// The eight neighbours, in row-major order.
const NEIGHBORS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const MINER_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, -1), (0, 1)];

const SENTINEL_JUMPS: [(i8, i8); 8] = [
    (-2, 1),
    (-1, 2),
    (1, 2),
    (2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

const CATAPULT_STEPS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

const CATAPULT_SHOTS: [(i8, i8); 8] = [
    (-3, 0),
    (3, 0),
    (0, 3),
    (0, -3),
    (-2, 2),
    (2, 2),
    (-2, -2),
    (2, -2),
];

// Orthogonal neighbours that a Sentinel protects.
const PROTECTED_NEIGHBORS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

impl PieceKind {
    /// The lower-case character used in the board text format.
    pub fn icon(self) -> char {
        match self {
            PieceKind::Empty => '.',
            PieceKind::Wall => '#',
            PieceKind::Zombie => 'z',
            PieceKind::Builder => 'b',
            PieceKind::Miner => 'm',
            PieceKind::Jester => 'j',
            PieceKind::Sentinel => 's',
            PieceKind::Catapult => 'c',
            PieceKind::Dragon => 'd',
            PieceKind::General => 'g',
        }
    }

    /// Recognizes an icon in either case.
    pub fn from_icon(icon: char) -> Option<Self> {
        let kind = match icon.to_ascii_lowercase() {
            '.' => PieceKind::Empty,
            '#' => PieceKind::Wall,
            'z' => PieceKind::Zombie,
            'b' => PieceKind::Builder,
            'm' => PieceKind::Miner,
            'j' => PieceKind::Jester,
            's' => PieceKind::Sentinel,
            'c' => PieceKind::Catapult,
            'd' => PieceKind::Dragon,
            'g' => PieceKind::General,
            _ => return None,
        };
        Some(kind)
    }

    /// Material value used by [`Board::evaluate()`].
    pub fn value(self) -> i32 {
        match self {
            PieceKind::Empty | PieceKind::Wall => 0,
            PieceKind::Zombie => 1,
            PieceKind::Builder => 2,
            PieceKind::Jester => 3,
            PieceKind::Miner => 4,
            PieceKind::Sentinel => 5,
            PieceKind::Catapult => 6,
            PieceKind::Dragon => 7,
            PieceKind::General => 999,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PieceKind::Empty => "None",
            PieceKind::Wall => "Wall",
            PieceKind::Zombie => "Zombie",
            PieceKind::Builder => "Builder",
            PieceKind::Miner => "Miner",
            PieceKind::Jester => "Jester",
            PieceKind::Sentinel => "Sentinel",
            PieceKind::Catapult => "Catapult",
            PieceKind::Dragon => "Dragon",
            PieceKind::General => "General",
        }
    }

    pub fn is_terrain(self) -> bool {
        matches!(self, PieceKind::Empty | PieceKind::Wall)
    }

    /// All moves the piece on `(i, j)` could make, ignoring the safety of its
    /// own General.
    ///
    /// The owner is read from the board. Panics if `(i, j)` is out of bounds.
    pub fn find_moves(self, i: i8, j: i8, board: &Board) -> Vec<Move> {
        let mut moves = Vec::new();
        self.find_moves_into(i, j, board, &mut moves);
        moves
    }

    /// Like [`Self::find_moves()`], but appends to an existing buffer.
    pub fn find_moves_into(self, i: i8, j: i8, board: &Board, moves: &mut Vec<Move>) {
        let color = board[(i, j)].color;
        match self {
            PieceKind::Empty | PieceKind::Wall => {}
            PieceKind::Zombie => zombie_moves(board, i, j, color, moves),
            PieceKind::Builder => builder_moves(board, i, j, color, moves),
            PieceKind::Miner => miner_moves(board, i, j, color, moves),
            PieceKind::Jester => jester_moves(board, i, j, color, moves),
            PieceKind::Sentinel => sentinel_moves(board, i, j, color, moves),
            PieceKind::Catapult => catapult_moves(board, i, j, color, moves),
            PieceKind::Dragon => dragon_moves(board, i, j, color, moves),
            PieceKind::General => general_moves(board, i, j, color, moves),
        }
    }

    /// Is the piece on `(i, j)` next to a Sentinel of its own color?
    ///
    /// Terrain is never protected.
    pub fn is_protected(self, i: i8, j: i8, board: &Board) -> bool {
        if self.is_terrain() {
            return false;
        }
        let color = board[(i, j)].color;
        PROTECTED_NEIGHBORS.iter().any(|&(di, dj)| {
            board
                .get(i + di, j + dj)
                .is_some_and(|cell| cell.piece == PieceKind::Sentinel && cell.color == color)
        })
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// Can a piece of `color` remove whatever stands on (i, j) by an ordinary
// capture or shot? Out-of-bounds coordinates are never capturable.
fn is_capturable(board: &Board, i: i8, j: i8, color: Color) -> bool {
    match board.get(i, j) {
        Some(target) => {
            !target.piece.is_terrain()
                && target.color != color
                && !target.piece.is_protected(i, j, board)
        }
        None => false,
    }
}

fn is_empty(board: &Board, i: i8, j: i8) -> bool {
    board
        .get(i, j)
        .is_some_and(|cell| cell.piece == PieceKind::Empty)
}

fn zombie_moves(board: &Board, i: i8, j: i8, color: Color, moves: &mut Vec<Move>) {
    let forward = match color {
        Color::White => -1,
        Color::Black => 1,
    };
    for dj in [0, -1, 1] {
        let (ni, nj) = (i + forward, j + dj);
        if board.get(ni, nj).is_none() {
            continue;
        }
        if is_empty(board, ni, nj) {
            moves.push(Move::new(MoveKind::Move, (i, j), (ni, nj)));
            // Leap attack over the empty cell
            let (li, lj) = (ni + forward, nj + dj);
            if is_capturable(board, li, lj, color) {
                moves.push(Move::new(MoveKind::Capture, (i, j), (li, lj)));
            }
        }
        if is_capturable(board, ni, nj, color) {
            moves.push(Move::new(MoveKind::Capture, (i, j), (ni, nj)));
        }
    }
}

fn builder_moves(board: &Board, i: i8, j: i8, color: Color, moves: &mut Vec<Move>) {
    for (di, dj) in NEIGHBORS {
        let (ni, nj) = (i + di, j + dj);
        if is_empty(board, ni, nj) {
            moves.push(Move::new(MoveKind::Move, (i, j), (ni, nj)));
            moves.push(Move::new(MoveKind::Build, (i, j), (ni, nj)));
        } else if is_capturable(board, ni, nj, color) {
            moves.push(Move::new(MoveKind::Capture, (i, j), (ni, nj)));
        }
    }
}

fn jester_moves(board: &Board, i: i8, j: i8, color: Color, moves: &mut Vec<Move>) {
    for (di, dj) in NEIGHBORS {
        let (ni, nj) = (i + di, j + dj);
        let Some(cell) = board.get(ni, nj) else {
            continue;
        };
        match cell.piece {
            PieceKind::Empty => moves.push(Move::new(MoveKind::Move, (i, j), (ni, nj))),
            PieceKind::Wall => {}
            // Protection does not help against being convinced
            _ if cell.color != color => {
                moves.push(Move::new(MoveKind::Convince, (i, j), (ni, nj)))
            }
            PieceKind::Jester => {}
            _ => moves.push(Move::new(MoveKind::Swap, (i, j), (ni, nj))),
        }
    }
}

fn miner_moves(board: &Board, i: i8, j: i8, color: Color, moves: &mut Vec<Move>) {
    for (di, dj) in MINER_DIRECTIONS {
        for step in 1..BOARD_SIZE {
            let (ni, nj) = (i + step * di, j + step * dj);
            let Some(cell) = board.get(ni, nj) else {
                break;
            };
            match cell.piece {
                PieceKind::Empty => moves.push(Move::new(MoveKind::Move, (i, j), (ni, nj))),
                PieceKind::Wall => {
                    moves.push(Move::new(MoveKind::Demolish, (i, j), (ni, nj)));
                    break;
                }
                _ => {
                    if is_capturable(board, ni, nj, color) {
                        moves.push(Move::new(MoveKind::Capture, (i, j), (ni, nj)));
                    }
                    break;
                }
            }
        }
    }
}

fn sentinel_moves(board: &Board, i: i8, j: i8, color: Color, moves: &mut Vec<Move>) {
    for (di, dj) in SENTINEL_JUMPS {
        let (ni, nj) = (i + di, j + dj);
        if is_empty(board, ni, nj) {
            moves.push(Move::new(MoveKind::Move, (i, j), (ni, nj)));
        }
        if is_capturable(board, ni, nj, color) {
            moves.push(Move::new(MoveKind::Capture, (i, j), (ni, nj)));
        }
    }
}

fn catapult_moves(board: &Board, i: i8, j: i8, color: Color, moves: &mut Vec<Move>) {
    for (di, dj) in CATAPULT_STEPS {
        let (ni, nj) = (i + di, j + dj);
        if is_empty(board, ni, nj) {
            moves.push(Move::new(MoveKind::Move, (i, j), (ni, nj)));
        }
    }
    // Shots fly over anything in between
    for (di, dj) in CATAPULT_SHOTS {
        let (ni, nj) = (i + di, j + dj);
        if is_capturable(board, ni, nj, color) {
            moves.push(Move::new(MoveKind::Shoot, (i, j), (ni, nj)));
        }
    }
}

fn dragon_moves(board: &Board, i: i8, j: i8, color: Color, moves: &mut Vec<Move>) {
    for (di, dj) in NEIGHBORS {
        for step in 1..BOARD_SIZE {
            let (ni, nj) = (i + step * di, j + step * dj);
            let Some(cell) = board.get(ni, nj) else {
                break;
            };
            if cell.piece == PieceKind::Empty {
                moves.push(Move::new(MoveKind::Move, (i, j), (ni, nj)));
                continue;
            }
            // A dragon cannot capture an adjacent piece
            if step != 1 && is_capturable(board, ni, nj, color) {
                moves.push(Move::new(MoveKind::Capture, (i, j), (ni, nj)));
            }
            break;
        }
    }
}

fn general_moves(board: &Board, i: i8, j: i8, color: Color, moves: &mut Vec<Move>) {
    for (di, dj) in NEIGHBORS {
        let (ni, nj) = (i + di, j + dj);
        if is_empty(board, ni, nj) {
            moves.push(Move::new(MoveKind::Move, (i, j), (ni, nj)));
        } else if is_capturable(board, ni, nj, color) {
            moves.push(Move::new(MoveKind::Capture, (i, j), (ni, nj)));
        }
    }
}
