pub use board::*;
pub use check::*;
pub use errors::*;
pub use moves::*;
pub use pieces::*;
pub use search::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod check;
mod errors;
mod moves;
mod pieces;
mod search;
mod visualization;
