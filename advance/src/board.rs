use std::hash::{Hash, Hasher};
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use crate::{BoardParseError, Color, Move, PieceKind};

pub const BOARD_SIZE: i8 = 9;

const NUM_CELLS: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// The contents of one square: what stands there and who owns it.
///
/// The owner of an empty cell or a wall is still stored, but has no meaning.
/// It is ignored by equality and hashing.
#[derive(Copy, Clone, Debug)]
pub struct Cell {
    pub piece: PieceKind,
    pub color: Color,
}

impl Cell {
    pub const EMPTY: Cell = Cell {
        piece: PieceKind::Empty,
        color: Color::Black,
    };

    pub fn new(piece: PieceKind, color: Color) -> Self {
        Self { piece, color }
    }

    /// The character for this cell in the board text format.
    pub fn icon(self) -> char {
        match self.color {
            Color::White => self.piece.icon().to_ascii_uppercase(),
            Color::Black => self.piece.icon(),
        }
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.piece == other.piece && (self.piece.is_terrain() || self.color == other.color)
    }
}

impl Eq for Cell {}

impl Hash for Cell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.piece.hash(state);
        if !self.piece.is_terrain() {
            self.color.hash(state);
        }
    }
}

/// A 9 x 9 board.
///
/// Cells are stored by value in row-major order, so cloning a board is a
/// plain copy that shares nothing with the original.
///
/// Coordinates are `(i, j)` = (row, column), with row 0 at the top.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; NUM_CELLS],
}

impl Board {
    /// Creates a board where every cell is empty.
    pub fn new() -> Self {
        Self {
            cells: [Cell::EMPTY; NUM_CELLS],
        }
    }

    pub fn is_in_bounds(i: i8, j: i8) -> bool {
        (0..BOARD_SIZE).contains(&i) && (0..BOARD_SIZE).contains(&j)
    }

    /// Returns the cell at the given coordinate, or `None` if it is off the board.
    pub fn get(&self, i: i8, j: i8) -> Option<Cell> {
        cell_index(i, j).map(|idx| self.cells[idx])
    }

    /// Panics if the coordinate is off the board.
    pub fn set(&mut self, i: i8, j: i8, cell: Cell) {
        self[(i, j)] = cell;
    }

    /// Iterates over all cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (i8, i8, Cell)> + '_ {
        self.cells.iter().enumerate().map(|(idx, &cell)| {
            let idx = idx as i8;
            (idx / BOARD_SIZE, idx % BOARD_SIZE, cell)
        })
    }

    /// Returns a copy of this board with the move applied.
    pub fn with_move(&self, mv: Move) -> Board {
        let mut board = self.clone();
        mv.apply(&mut board);
        board
    }

    /// Material balance from the point of view of `color`: the values of its
    /// pieces minus the values of the opponent's pieces.
    pub fn evaluate(&self, color: Color) -> i32 {
        self.cells
            .iter()
            .map(|cell| {
                if cell.color == color {
                    cell.piece.value()
                } else {
                    -cell.piece.value()
                }
            })
            .sum()
    }

    /// The location of the first General of this color, if any.
    pub fn general(&self, color: Color) -> Option<(i8, i8)> {
        self.iter()
            .find(|(_, _, cell)| cell.piece == PieceKind::General && cell.color == color)
            .map(|(i, j, _)| (i, j))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

fn cell_index(i: i8, j: i8) -> Option<usize> {
    if Board::is_in_bounds(i, j) {
        Some(i as usize * BOARD_SIZE as usize + j as usize)
    } else {
        None
    }
}

impl Index<(i8, i8)> for Board {
    type Output = Cell;

    fn index(&self, (i, j): (i8, i8)) -> &Self::Output {
        let idx = cell_index(i, j)
            .unwrap_or_else(|| panic!("Coordinate ({}, {}) is off the board", i, j));
        &self.cells[idx]
    }
}

impl IndexMut<(i8, i8)> for Board {
    fn index_mut(&mut self, (i, j): (i8, i8)) -> &mut Self::Output {
        let idx = cell_index(i, j)
            .unwrap_or_else(|| panic!("Coordinate ({}, {}) is off the board", i, j));
        &mut self.cells[idx]
    }
}

/// Reads the text grid: one line per row, one character per cell.
///
/// Upper case is white, lower case is black. Blank lines after the last row
/// are ignored.
impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::new();
        let mut lines = s.lines();
        for row in 0..BOARD_SIZE as usize {
            let line = lines
                .next()
                .ok_or(BoardParseError::MissingRows { found: row })?;
            let length = line.chars().count();
            if length != BOARD_SIZE as usize {
                return Err(BoardParseError::WrongRowLength { row, length });
            }
            for (col, icon) in line.chars().enumerate() {
                let piece = PieceKind::from_icon(icon)
                    .ok_or(BoardParseError::UnrecognizedIcon { row, col, icon })?;
                let color = if icon.is_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                board.cells[row * BOARD_SIZE as usize + col] = Cell::new(piece, color);
            }
        }
        if let Some(offset) = lines.position(|line| !line.trim().is_empty()) {
            return Err(BoardParseError::ExtraRow {
                row: BOARD_SIZE as usize + offset,
            });
        }
        Ok(board)
    }
}

/// Writes the text grid that [`FromStr`] reads, every row ending in a newline.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks(BOARD_SIZE as usize) {
            for cell in row {
                write!(f, "{}", cell.icon())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Shorthand for creating a board from its rows.
///
/// This macro is just calling the [`FromStr`] instance of [`Board`].
/// ```
/// # use advance::{board, Color, PieceKind};
/// let board = board!(
///     "....g...."
///     "........."
///     "........."
///     "........."
///     "........."
///     "........."
///     "........."
///     "........."
///     "....G...."
/// );
/// assert_eq!(board[(0, 4)].piece, PieceKind::General);
/// assert_eq!(board[(8, 4)].color, Color::White);
/// ```
#[macro_export]
macro_rules! board {
    ($($row:literal)*) => {
        <$crate::Board as std::str::FromStr>::from_str(concat!($($row, "\n"),*))
            .expect("Invalid rows given to board! macro")
    };
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;

    const START: &str = "\
        zzzzzzzzz\n\
        .bjsgscm.\n\
        ..#...#..\n\
        ....d....\n\
        .........\n\
        ....D....\n\
        ..#...#..\n\
        .MCSGSJB.\n\
        ZZZZZZZZZ\n";

    quickcheck! {
        fn text_round_trip(board: Board) -> bool {
            board.to_string().parse::<Board>() == Ok(board)
        }
    }

    #[test]
    fn load_and_save_reproduce_the_text() {
        let board: Board = START.parse().unwrap();
        assert_eq!(board.to_string(), START);
        assert_eq!(board[(0, 0)], Cell::new(PieceKind::Zombie, Color::Black));
        assert_eq!(board[(7, 4)], Cell::new(PieceKind::General, Color::White));
        assert_eq!(board[(2, 2)].piece, PieceKind::Wall);
        assert_eq!(board.general(Color::Black), Some((1, 4)));
    }

    #[test]
    fn crlf_and_trailing_blank_lines_are_accepted() {
        let text = START.replace('\n', "\r\n") + "\r\n\n";
        assert_eq!(text.parse::<Board>(), START.parse::<Board>());
    }

    #[test]
    fn malformed_boards_are_rejected() {
        let missing_row: String = START.lines().take(8).map(|l| format!("{}\n", l)).collect();
        assert_eq!(
            missing_row.parse::<Board>(),
            Err(BoardParseError::MissingRows { found: 8 })
        );

        let extra_row = format!("{}.........\n", START);
        assert_eq!(
            extra_row.parse::<Board>(),
            Err(BoardParseError::ExtraRow { row: 9 })
        );

        let short_row = START.replacen(".bjsgscm.", ".bjsgscm", 1);
        assert_eq!(
            short_row.parse::<Board>(),
            Err(BoardParseError::WrongRowLength { row: 1, length: 8 })
        );

        let bad_icon = START.replacen("....d....", "....x....", 1);
        assert_eq!(
            bad_icon.parse::<Board>(),
            Err(BoardParseError::UnrecognizedIcon {
                row: 3,
                col: 4,
                icon: 'x'
            })
        );
    }

    #[test]
    fn terrain_owner_is_ignored() {
        let mut a = Board::new();
        let mut b = Board::new();
        a.set(3, 3, Cell::new(PieceKind::Wall, Color::White));
        b.set(3, 3, Cell::new(PieceKind::Wall, Color::Black));
        a.set(0, 0, Cell::new(PieceKind::Empty, Color::White));
        assert_eq!(a, b);
        b.set(4, 4, Cell::new(PieceKind::Miner, Color::Black));
        a.set(4, 4, Cell::new(PieceKind::Miner, Color::White));
        assert_ne!(a, b);
    }

    #[test]
    fn evaluate_is_material_balance() {
        let board: Board = START.parse().unwrap();
        assert_eq!(board.evaluate(Color::White), 0);

        let board = board!(
            "....g...."
            "........."
            "........."
            "........."
            "........."
            "........."
            "........."
            "...#....."
            "..CSG...."
        );
        assert_eq!(board.evaluate(Color::White), 11);
        assert_eq!(board.evaluate(Color::Black), -11);
    }

    #[test]
    fn out_of_bounds_is_none() {
        let board = Board::new();
        assert_eq!(board.get(-1, 0), None);
        assert_eq!(board.get(0, BOARD_SIZE), None);
        assert_eq!(board.get(8, 8), Some(Cell::EMPTY));
        assert_eq!(board.iter().count(), 81);
        assert_eq!(board.iter().nth(10).map(|(i, j, _)| (i, j)), Some((1, 1)));
    }
}
