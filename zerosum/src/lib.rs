//! A framework for two-player zero-sum games with perfect information.
//!
//! Games implement [`State`], and [`min_max()`] picks moves for them.
//! Two games are included: [`othello`] and [`tictactoe`].
pub use cell::*;
pub use errors::*;
pub use evaluation::*;
pub use moves::*;
pub use othello::OthelloState;
pub use search::*;
pub use state::*;
pub use tictactoe::TicTacToeState;
pub use visualization::*;

pub mod othello;
pub mod tictactoe;

#[cfg(test)]
mod arbitrary;
mod cell;
mod errors;
mod evaluation;
mod moves;
mod search;
mod state;
mod visualization;
