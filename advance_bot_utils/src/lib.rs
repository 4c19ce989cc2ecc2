mod logging;
mod protocol;
pub use logging::*;
pub use protocol::*;

use std::process::ExitCode;

use advance::{visualize_board, Board, Color, Move, NoLegalMove};
use tracing::{debug, info, warn};

/// Exit code of a bot that could not find any legal move. The output file is
/// not written in that case.
pub const EXIT_NO_LEGAL_MOVE: u8 = 2;

/// A trait to simplify writing bots.
pub trait Bot {
    fn name(&self) -> &str;

    /// Chooses a move for `color`, applies it to the board and returns it.
    fn play_turn(&mut self, board: &mut Board, color: Color) -> Result<Move, NoLegalMove>;

    fn run(&mut self, args: ProtocolArgs) -> anyhow::Result<ExitCode> {
        initialize_logging(args.log_level);
        let color = match args.side {
            Side::Name => {
                write_name(&mut std::io::stdout().lock(), self.name())?;
                return Ok(ExitCode::SUCCESS);
            }
            Side::Play(color) => color,
        };
        let (Some(infile), Some(outfile)) = (args.infile, args.outfile) else {
            anyhow::bail!("Playing a turn needs an input and an output file");
        };

        let mut board = load_board(&infile)?;
        debug!("Board before the turn:\n{}", visualize_board(&board));
        match self.play_turn(&mut board, color) {
            Ok(mv) => {
                info!(bot = self.name(), %color, %mv, "Played turn");
                // Stdout is for the move report only, logs go to stderr
                println!("{}", mv);
                save_board(&outfile, &board)?;
                Ok(ExitCode::SUCCESS)
            }
            Err(err) => {
                warn!("{}", err);
                println!("Impossible to make any legal moves");
                Ok(ExitCode::from(EXIT_NO_LEGAL_MOVE))
            }
        }
    }
}
