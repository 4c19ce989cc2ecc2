use advance::BoardParseError;

#[derive(Debug)]
/// Error type for one turn.
pub enum IllegalMove {
    ClaimedNoLegalMove { num_legal_moves: usize },
    MissingOutput { err: std::io::Error },
    MalformedOutput { err: BoardParseError },
    UnreachableBoard,
}

impl std::error::Error for IllegalMove {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IllegalMove::MissingOutput { err } => Some(err),
            IllegalMove::MalformedOutput { err } => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMove::ClaimedNoLegalMove { num_legal_moves } => write!(
                f,
                "Claimed to have no legal move, but there are {}",
                num_legal_moves
            ),
            IllegalMove::MissingOutput { err: _ } => {
                write!(f, "Reported a move but did not write the board")
            }
            IllegalMove::MalformedOutput { err: _ } => write!(f, "Wrote a malformed board"),
            IllegalMove::UnreachableBoard => {
                write!(f, "Wrote a board that no legal move leads to")
            }
        }
    }
}
