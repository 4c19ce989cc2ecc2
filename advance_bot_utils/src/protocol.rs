use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use advance::{Board, Color, ColorFromStrErr};
use anyhow::Context;
use tracing_subscriber::filter::LevelFilter;

/// Command line arguments shared by all bots.
///
/// A bot is either asked for its name (`<bot> name`) or to play one turn
/// (`<bot> <color> <infile> <outfile>`).
#[derive(clap::Args, Debug)]
pub struct ProtocolArgs {
    /// "name", or the color to play: "white" or "black"
    pub side: Side,

    /// File to read the board from
    pub infile: Option<PathBuf>,

    /// File to write the board to after the turn
    pub outfile: Option<PathBuf>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    pub log_level: LevelFilter,
}

/// What the bot is asked to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Name,
    Play(Color),
}

impl FromStr for Side {
    type Err = ColorFromStrErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("name") {
            Ok(Side::Name)
        } else {
            s.parse().map(Side::Play)
        }
    }
}

/// Answers a `name` request: the bot name alone, without a newline.
pub fn write_name<W: Write>(out: &mut W, name: &str) -> std::io::Result<()> {
    write!(out, "{}", name)?;
    out.flush()
}

pub fn load_board(path: &Path) -> anyhow::Result<Board> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Could not read board from '{}'", path.display()))?;
    let board = text
        .parse()
        .with_context(|| format!("Malformed board in '{}'", path.display()))?;
    Ok(board)
}

pub fn save_board(path: &Path, board: &Board) -> anyhow::Result<()> {
    std::fs::write(path, board.to_string())
        .with_context(|| format!("Could not write board to '{}'", path.display()))
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct Args {
        #[command(flatten)]
        protocol: ProtocolArgs,
    }

    #[test]
    fn parses_name_request() {
        let args = Args::try_parse_from(["bot", "name"]).unwrap();
        assert_eq!(args.protocol.side, Side::Name);
        assert_eq!(args.protocol.infile, None);
        assert_eq!(args.protocol.log_level, LevelFilter::INFO);
    }

    #[test]
    fn parses_turn_request_in_any_case() {
        let args =
            Args::try_parse_from(["bot", "Black", "in.txt", "out.txt", "--log-level", "debug"])
                .unwrap();
        assert_eq!(args.protocol.side, Side::Play(Color::Black));
        assert_eq!(args.protocol.infile, Some(PathBuf::from("in.txt")));
        assert_eq!(args.protocol.outfile, Some(PathBuf::from("out.txt")));
        assert_eq!(args.protocol.log_level, LevelFilter::DEBUG);
    }

    #[test]
    fn rejects_unknown_side() {
        assert!(Args::try_parse_from(["bot", "red", "in.txt", "out.txt"]).is_err());
    }

    #[test]
    fn name_is_written_without_newline() {
        let mut out = Vec::new();
        write_name(&mut out, "search_bot").unwrap();
        assert_eq!(out, b"search_bot");
    }

    #[test]
    fn board_files_round_trip() {
        let text = "\
            zzzzzzzzz\n\
            .bjsgscm.\n\
            ..#...#..\n\
            ....d....\n\
            .........\n\
            ....D....\n\
            ..#...#..\n\
            .MCSGSJB.\n\
            ZZZZZZZZZ\n";
        let dir = std::env::temp_dir().join(format!("advance_bot_utils_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let infile = dir.join("in.txt");
        let outfile = dir.join("out.txt");
        std::fs::write(&infile, text).unwrap();

        let board = load_board(&infile).unwrap();
        save_board(&outfile, &board).unwrap();
        assert_eq!(std::fs::read_to_string(&outfile).unwrap(), text);

        std::fs::write(&infile, "zzz\n").unwrap();
        let err = load_board(&infile).unwrap_err();
        assert!(err.to_string().starts_with("Malformed board"));
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
