use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::atomic::{AtomicUsize, Ordering};

use advance::{Board, Color};
use advance_bot_utils::EXIT_NO_LEGAL_MOVE;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::turn::TurnResponse;

/// How to start a player, as read from its JSON config file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub nick: String,
    pub cmd: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl PlayerConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read player config '{}'", path.display()))?;
        let config = serde_json::from_str(&text)
            .with_context(|| format!("Invalid player config '{}'", path.display()))?;
        Ok(config)
    }
}

// Keeps the scratch directories of players apart, even with equal nicks.
static NEXT_PLAYER_ID: AtomicUsize = AtomicUsize::new(0);

/// A bot executable. Every turn is a separate process that gets the board in
/// a file and writes the new board to another file.
pub struct Player {
    pub name: String,
    cmd: String,
    args: Vec<String>,
    // Holds the input and output board files
    dir: PathBuf,
}

impl Player {
    pub fn from_config(config: &PlayerConfig) -> anyhow::Result<Self> {
        let id = NEXT_PLAYER_ID.fetch_add(1, Ordering::Relaxed);
        let dir = std::env::temp_dir().join(format!("advance_judge_{}_{}", std::process::id(), id));
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Could not create directory '{}'", dir.display()))?;
        Ok(Self {
            name: config.nick.clone(),
            cmd: config.cmd.clone(),
            args: config.args.clone(),
            dir,
        })
    }

    /// Runs the player on the board.
    ///
    /// Returns an error only on communication failure: the process could not
    /// be started or exited with an unexpected code.
    pub fn request_turn(&mut self, board: &Board, color: Color) -> anyhow::Result<TurnResponse> {
        let infile = self.dir.join("board_in.txt");
        let outfile = self.dir.join("board_out.txt");
        std::fs::write(&infile, board.to_string())
            .with_context(|| format!("Could not write '{}'", infile.display()))?;
        // A stale output file must not count as an answer
        if outfile.exists() {
            std::fs::remove_file(&outfile)
                .with_context(|| format!("Could not remove '{}'", outfile.display()))?;
        }

        trace!(player = &self.name, %color, "Sending request");
        let output = Command::new(&self.cmd)
            .args(&self.args)
            .arg(color.to_string())
            .arg(&infile)
            .arg(&outfile)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .with_context(|| format!("Could not run player {}", self.name))?;
        let report = String::from_utf8_lossy(&output.stdout).trim_end().to_owned();
        trace!(player = &self.name, %report, status = %output.status, "Received response");

        match output.status.code() {
            Some(0) => Ok(TurnResponse::Moved {
                report,
                output: std::fs::read_to_string(&outfile),
            }),
            Some(code) if code == i32::from(EXIT_NO_LEGAL_MOVE) => Ok(TurnResponse::NoLegalMove),
            _ => anyhow::bail!("Player {} failed with {}", self.name, output.status),
        }
    }
}

impl Drop for Player {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.dir);
    }
}
