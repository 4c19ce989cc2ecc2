use quickcheck::{quickcheck, Arbitrary, Gen};

use crate::{Board, Cell, Color, MoveKind, PieceKind, ALL_PIECE_KINDS};

impl Arbitrary for Color {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&[Color::White, Color::Black]).unwrap()
    }
}

impl Arbitrary for PieceKind {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&ALL_PIECE_KINDS).unwrap()
    }
}

impl Arbitrary for Board {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut board = Board::new();
        for i in 0..9 {
            for j in 0..9 {
                // Mostly empty, so that pieces have room to move
                if u8::arbitrary(g) % 3 == 0 {
                    board.set(i, j, Cell::new(PieceKind::arbitrary(g), Color::arbitrary(g)));
                }
            }
        }
        board
    }
}

quickcheck! {
    fn moves_start_on_the_piece_and_stay_on_the_board(board: Board) -> bool {
        board.iter().all(|(i, j, cell)| {
            cell.piece.find_moves(i, j, &board).into_iter().all(|mv| {
                mv.start == (i, j) && board.get(mv.end.0, mv.end.1).is_some()
            })
        })
    }

    fn attacks_never_hit_allies_or_protected_pieces(board: Board) -> bool {
        board.iter().all(|(i, j, cell)| {
            cell.piece.find_moves(i, j, &board).into_iter().all(|mv| {
                let target = board[mv.end];
                !mv.kind.is_attack()
                    || (!target.piece.is_terrain()
                        && target.color != cell.color
                        && !target.piece.is_protected(mv.end.0, mv.end.1, &board))
            })
        })
    }

    fn dragons_never_capture_next_to_themselves(board: Board) -> bool {
        board
            .iter()
            .filter(|(_, _, cell)| cell.piece == PieceKind::Dragon)
            .all(|(i, j, _)| {
                PieceKind::Dragon.find_moves(i, j, &board).into_iter().all(|mv| {
                    let distance = (mv.end.0 - i).abs().max((mv.end.1 - j).abs());
                    mv.kind != MoveKind::Capture || distance > 1
                })
            })
    }

    fn only_moves_and_demolitions_target_terrain(board: Board) -> bool {
        board.iter().all(|(i, j, cell)| {
            cell.piece.find_moves(i, j, &board).into_iter().all(|mv| {
                match board[mv.end].piece {
                    PieceKind::Empty => matches!(mv.kind, MoveKind::Move | MoveKind::Build),
                    PieceKind::Wall => mv.kind == MoveKind::Demolish,
                    _ => !matches!(mv.kind, MoveKind::Move | MoveKind::Build | MoveKind::Demolish),
                }
            })
        })
    }
}
