use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use advance::{Board, Color, Move};
use serde::{Deserialize, Serialize};

/// Writes every game to its own JSON file in a directory.
pub struct Recorder {
    num: usize,
    directory: PathBuf,
    game: Option<GameRecording>,
}

impl Recorder {
    pub fn new(directory: PathBuf) -> anyhow::Result<Self> {
        if !directory.is_dir() {
            anyhow::bail!("Directory '{}' does not exist", directory.display());
        }
        Ok(Self {
            num: 1,
            directory,
            game: None,
        })
    }

    pub fn start_game(&mut self, white: &str, black: &str, start: &Board) {
        self.game = Some(GameRecording {
            white: String::from(white),
            black: String::from(black),
            start: start.to_string(),
            turns: Vec::new(),
            result: String::new(),
        });
    }

    pub fn store_turn(&mut self, player: &str, color: Color, mv: Move, board: &Board) {
        if let Some(game) = &mut self.game {
            game.turns.push(RecordedTurn {
                player: String::from(player),
                color,
                mv,
                board: board.to_string(),
            });
        }
    }

    /// Writes the current game as `game_000001.json` etc.
    pub fn write_game_recording(&mut self, result: &str) -> anyhow::Result<()> {
        let Some(mut game) = self.game.take() else {
            return Ok(());
        };
        game.result = String::from(result);
        let filepath = self.directory.join(format!("game_{:0>6}.json", self.num));
        let mut writer = BufWriter::new(File::create(filepath)?);
        serde_json::to_writer_pretty(&mut writer, &game)?;
        writeln!(writer)?;
        writer.flush()?;
        self.num += 1;
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecording {
    pub white: String,
    pub black: String,
    /// Board text, one row per line.
    pub start: String,
    pub turns: Vec<RecordedTurn>,
    pub result: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedTurn {
    pub player: String,
    pub color: Color,
    #[serde(rename = "move")]
    pub mv: Move,
    pub board: String,
}
