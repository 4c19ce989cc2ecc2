use crate::{Board, BOARD_SIZE};

/// Draws the board in a box with row and column numbers, for logs and
/// terminals.
pub fn visualize_board(board: &Board) -> String {
    // Column numbers
    let mut result = String::from("    ");
    for j in 0..BOARD_SIZE {
        result += &format!(" {}", j);
    }
    // Draw the top of the box
    result += "\n    ╭";
    for _ in 0..BOARD_SIZE {
        result += "──";
    }
    result += "─╮\n";

    for (i, j, cell) in board.iter() {
        if j == 0 {
            result += &format!("{:>3} │", i);
        }
        result += &format!(" {}", cell.icon());
        if j == BOARD_SIZE - 1 {
            result += " │\n";
        }
    }

    // Draw the bottom of the box
    result += "    ╰";
    for _ in 0..BOARD_SIZE {
        result += "──";
    }
    result += "─╯";
    result
}
