use crate::{Board, Color, PieceKind};

/// Could the opponent capture or shoot the General of `color` right now?
///
/// Generates the moves of every enemy piece, so this is expensive. A color
/// without a General is never in danger.
pub fn is_in_danger(color: Color, board: &Board) -> bool {
    let mut moves = Vec::new();
    for (i, j, cell) in board.iter() {
        if cell.color == color {
            continue;
        }
        moves.clear();
        cell.piece.find_moves_into(i, j, board, &mut moves);
        let general_attacked = moves.iter().any(|mv| {
            let target = board[mv.end];
            mv.kind.is_attack() && target.piece == PieceKind::General && target.color == color
        });
        if general_attacked {
            return true;
        }
    }
    false
}
