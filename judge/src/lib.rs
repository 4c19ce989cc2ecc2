mod error;
mod game;
mod player;
mod recording;
mod tournament;
mod turn;
pub use error::*;
pub use game::*;
pub use player::*;
pub use recording::*;
pub use tournament::*;
pub use turn::*;

use advance::Board;

pub struct Config {
    pub rng: rand::rngs::StdRng,
    pub recorder: Option<recording::Recorder>,
    /// The position every game starts from.
    pub start: Board,
    /// A game that lasts this many turns is a tie.
    pub max_turns: usize,
}
