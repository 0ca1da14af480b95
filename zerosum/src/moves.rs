use std::str::FromStr;

use crate::MoveFromStrErr;

/// A position on an `N` x `N` board, given as row `i` and column `j`.
///
/// Whether a move is [valid](Self::is_valid) only depends on the board size,
/// whether it is *allowed* depends on the rules of the game and the current
/// position.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Move<const N: u8> {
    pub i: u8,
    pub j: u8,
}

impl<const N: u8> Move<N> {
    /// The out-of-bounds move, standing for "no move".
    ///
    /// It is recorded as the last move of the initial position and of a
    /// position reached by passing.
    pub const PASS: Self = Self { i: N, j: N };

    pub const fn new(i: u8, j: u8) -> Self {
        Self { i, j }
    }

    /// Is the move a position on the board?
    pub fn is_valid(self) -> bool {
        self.i < N && self.j < N
    }

    pub fn is_pass(self) -> bool {
        self == Self::PASS
    }
}

impl<const N: u8> std::fmt::Display for Move<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.is_valid() {
            return write!(f, "(pass)");
        }
        write!(f, "{}{}", char::from(b'A' + self.i), self.j + 1)
    }
}

impl<const N: u8> FromStr for Move<N> {
    type Err = MoveFromStrErr;

    /// Parses a row letter followed by a column digit, e.g. `C4` or `c4`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let row = chars.next().ok_or(MoveFromStrErr::WrongLength)?;
        let column = chars.next().ok_or(MoveFromStrErr::WrongLength)?;
        if chars.next().is_some() {
            return Err(MoveFromStrErr::WrongLength);
        }
        let i = match row.to_ascii_uppercase() {
            c @ 'A'..='Z' if (c as u8 - b'A') < N => c as u8 - b'A',
            _ => return Err(MoveFromStrErr::InvalidRow { row }),
        };
        let j = match column.to_digit(10) {
            Some(d) if d >= 1 && d <= u32::from(N) => d as u8 - 1,
            _ => return Err(MoveFromStrErr::InvalidColumn { column }),
        };
        Ok(Move::new(i, j))
    }
}
