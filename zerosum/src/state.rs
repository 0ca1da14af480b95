use std::fmt::{Debug, Display};
use std::str::FromStr;

use crate::{Evaluation, Grid, Side};

/// A position of a two-player zero-sum game, as seen by the [search](crate::min_max).
///
/// Implementations are immutable snapshots: producing the successors never
/// changes `self`.
pub trait State: Sized {
    /// Evaluates the position from the point of view of [`Side::O`].
    ///
    /// Returns [`Evaluation::WON`] or [`Evaluation::LOST`] exactly when the game is
    /// decided, and a heuristic value otherwise.
    fn eval(&self) -> Evaluation;

    /// All positions reachable in one ply.
    ///
    /// An empty list means the position is terminal. The order is the move
    /// ordering of the search, so more promising moves should come first.
    fn next(&self) -> Vec<Self>;
}

/// What a driver needs in order to run a game between two players.
pub trait Playable: State + Grid + Clone + Debug {
    type Move: Copy + Eq + Debug + Display + FromStr;

    /// The side to move.
    fn turn(&self) -> Side;

    /// The move that produced this position, or the pass move.
    fn last_move(&self) -> Self::Move;

    /// The position after the side to move plays `mv`, or `None` if that is not allowed.
    fn play(&self, mv: Self::Move) -> Option<Self>;

    fn is_end(&self) -> bool;

    /// Does the side to move have to pass?
    fn must_pass(&self) -> bool {
        false
    }

    /// Was this position reached by passing?
    fn passed(&self) -> bool {
        false
    }

    /// The position after the side to move passes, for games where passing exists.
    fn pass(&self) -> Option<Self> {
        None
    }

    /// The number of cells owned by O and by X, for games that keep score that way.
    fn tally(&self) -> Option<(u8, u8)> {
        None
    }

    /// The side that is ahead, or `None` for a tie.
    fn winner(&self) -> Option<Side>;
}
